pub mod modulus;
pub mod notification;
pub mod recent_verb;

pub use modulus::ModulusAggregator;
pub use notification::{NotificationAggregator, NotificationGroup};
pub use recent_verb::{RecentVerbAggregator, VerbDayGroup};
