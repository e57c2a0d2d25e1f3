//! Edge-width normalization for network rendering
//!
//! Raw linear scaling lets a handful of high-volume edges drown out the rest
//! of the plot. Square-root scaling compresses the dynamic range while
//! preserving rank order.

use super::{GraphError, GraphResult};

/// Normalize edge counts into draw widths.
///
/// Each width is `sqrt(count) / sqrt(max_count) * max_width`, floored at
/// `min_width`. The maximum-count edge therefore lands exactly on
/// `max_width`.
///
/// Fails with [`GraphError::DegenerateWidths`] when `counts` is empty or all
/// zero; callers substitute a constant width in that case.
pub fn normalize_widths(counts: &[u64], min_width: f64, max_width: f64) -> GraphResult<Vec<f64>> {
    let max_count = counts
        .iter()
        .copied()
        .max()
        .filter(|&m| m > 0)
        .ok_or(GraphError::DegenerateWidths)?;

    let scale = max_width / (max_count as f64).sqrt();
    Ok(counts
        .iter()
        .map(|&count| ((count as f64).sqrt() * scale).max(min_width))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_scaling_preserves_rank_and_pins_max() {
        let widths = normalize_widths(&[4, 16, 64], 0.5, 4.0).unwrap();

        assert!(widths[2] > widths[1]);
        assert!(widths[1] > widths[0]);
        // max count lands exactly on max_width
        assert_eq!(widths[2], 4.0);
        // sqrt(16)/sqrt(64) * 4.0 = 2.0
        assert!((widths[1] - 2.0).abs() < 1e-12);
        assert!((widths[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_width_floor() {
        let widths = normalize_widths(&[1, 10_000], 0.5, 4.0).unwrap();
        assert_eq!(widths[0], 0.5);
        assert_eq!(widths[1], 4.0);
    }

    #[test]
    fn test_degenerate_counts() {
        assert_eq!(
            normalize_widths(&[], 0.5, 4.0),
            Err(GraphError::DegenerateWidths)
        );
        assert_eq!(
            normalize_widths(&[0, 0], 0.5, 4.0),
            Err(GraphError::DegenerateWidths)
        );
    }
}
