use crate::aggregated::AggregatedActivity;
use crate::ranking;
use crate::traits::Aggregator;
use crate::types::Activity;
use chrono::NaiveDate;
use std::fmt;

/// Group key for same-verb, same-day activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerbDayGroup {
    pub verb_id: u32,
    pub day: NaiveDate,
}

impl VerbDayGroup {
    pub fn of(activity: &Activity) -> Self {
        Self {
            verb_id: activity.verb.id,
            day: activity.day(),
        }
    }
}

impl fmt::Display for VerbDayGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.verb_id, self.day)
    }
}

/// Aggregates activities with the same verb on the same UTC day
#[derive(Debug, Clone, Default)]
pub struct RecentVerbAggregator;

impl RecentVerbAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregator for RecentVerbAggregator {
    type Group = VerbDayGroup;
    type Output = AggregatedActivity<VerbDayGroup>;

    fn aggregator_type(&self) -> String {
        "recent_verb".to_string()
    }

    fn get_group(&self, activity: &Activity) -> VerbDayGroup {
        VerbDayGroup::of(activity)
    }

    fn rank(&self, aggregates: Vec<Self::Output>) -> Vec<Self::Output> {
        ranking::by_max_object_id(aggregates)
    }
}
