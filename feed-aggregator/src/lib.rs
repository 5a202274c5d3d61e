pub mod types;
pub mod traits;
pub mod aggregated;
pub mod ranking;
pub mod aggregators;
pub mod aggregator;

pub use types::*;
pub use traits::{Aggregate, Aggregator, AggregatorConfig};
pub use aggregated::{AggregatedActivity, Notification};
pub use aggregators::{
    ModulusAggregator, NotificationAggregator, NotificationGroup, RecentVerbAggregator,
    VerbDayGroup,
};
pub use aggregator::AggregatorKind;
