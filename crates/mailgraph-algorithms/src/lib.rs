pub mod centrality;
pub mod common;
pub mod degree;

pub use centrality::closeness_centrality;
pub use common::{GraphView, NodeId};
pub use degree::{weighted_degrees, WeightedDegree};
