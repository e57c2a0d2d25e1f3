//! Time-of-day and weekday distributions

use crate::record::MessageRecord;
use chrono::Weekday;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday distribution with Saturday and Sunday collapsed into one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDistribution {
    /// Monday..Friday counts, in calendar order
    pub weekdays: Vec<(Weekday, u64)>,
    /// Combined Saturday + Sunday count
    pub weekend: u64,
}

/// Messages per hour of day, 24 buckets.
pub fn hourly_counts<'a, I>(records: I) -> [u64; 24]
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut buckets = [0u64; 24];
    for record in records {
        if let Some(bucket) = buckets.get_mut(record.hour as usize) {
            *bucket += 1;
        }
    }
    buckets
}

/// Messages per weekday, Monday through Sunday in calendar order.
pub fn weekday_counts<'a, I>(records: I) -> Vec<(Weekday, u64)>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut buckets = [0u64; 7];
    for record in records {
        buckets[record.weekday.num_days_from_monday() as usize] += 1;
    }
    WEEK.iter().copied().zip(buckets).collect()
}

/// Weekday distribution with the weekend merged into a single bucket, the
/// shape of the sending-days pie chart.
pub fn weekend_collapsed<'a, I>(records: I) -> DayDistribution
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let full = weekday_counts(records);
    let weekend = full
        .iter()
        .filter(|(day, _)| matches!(day, Weekday::Sat | Weekday::Sun))
        .map(|(_, count)| count)
        .sum();
    let weekdays = full
        .into_iter()
        .filter(|(day, _)| !matches!(day, Weekday::Sat | Weekday::Sun))
        .collect();

    DayDistribution { weekdays, weekend }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg_at(weekday: Weekday, hour: u32) -> MessageRecord {
        let mut r = MessageRecord::new("a@x.com", vec!["b@x.com".to_string()]);
        r.weekday = weekday;
        r.hour = hour;
        r
    }

    #[test]
    fn test_hourly_counts() {
        let records = vec![
            msg_at(Weekday::Mon, 9),
            msg_at(Weekday::Mon, 9),
            msg_at(Weekday::Tue, 23),
        ];

        let hours = hourly_counts(&records);
        assert_eq!(hours[9], 2);
        assert_eq!(hours[23], 1);
        assert_eq!(hours.iter().sum::<u64>(), 3);
    }

    #[test]
    fn test_weekday_counts_in_calendar_order() {
        let records = vec![
            msg_at(Weekday::Sun, 1),
            msg_at(Weekday::Mon, 2),
            msg_at(Weekday::Mon, 3),
        ];

        let days = weekday_counts(&records);
        assert_eq!(days[0], (Weekday::Mon, 2));
        assert_eq!(days[6], (Weekday::Sun, 1));
        assert_eq!(days[3].1, 0);
    }

    #[test]
    fn test_weekend_collapsed() {
        let records = vec![
            msg_at(Weekday::Sat, 10),
            msg_at(Weekday::Sun, 11),
            msg_at(Weekday::Fri, 12),
        ];

        let dist = weekend_collapsed(&records);
        assert_eq!(dist.weekend, 2);
        assert_eq!(dist.weekdays.len(), 5);
        assert_eq!(dist.weekdays[4], (Weekday::Fri, 1));
    }
}
