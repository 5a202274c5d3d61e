use crate::types::Activity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, info};

/// A container of activities that share one group key
pub trait Aggregate {
    type Group;

    /// Create an empty aggregate for a newly seen group
    fn new(group: Self::Group) -> Self;

    fn group(&self) -> &Self::Group;

    /// Activities in the order they were appended
    fn activities(&self) -> &[Activity];

    fn append(&mut self, activity: Activity);

    /// Largest object id among the members, `None` only for an empty aggregate
    fn max_object_id(&self) -> Option<u64> {
        self.activities().iter().map(|a| a.object_id).max()
    }

    fn len(&self) -> usize {
        self.activities().len()
    }

    fn is_empty(&self) -> bool {
        self.activities().is_empty()
    }
}

/// Two-stage pipeline: group activities by key, then rank the groups.
///
/// Implementors supply the grouping key and the ranking rule; the
/// grouping pass itself is shared. Implementations hold only read-only
/// configuration, so one instance can serve concurrent calls.
pub trait Aggregator: Send + Sync {
    type Group: Eq + Hash + Clone + Debug;
    type Output: Aggregate<Group = Self::Group>;

    /// Stable name of this strategy, used in logs and configuration
    fn aggregator_type(&self) -> String;

    /// Key of the group this activity belongs to. Must be deterministic.
    fn get_group(&self, activity: &Activity) -> Self::Group;

    /// Order the aggregates for presentation
    fn rank(&self, aggregates: Vec<Self::Output>) -> Vec<Self::Output>;

    /// Partition activities by group key.
    ///
    /// Aggregates come back in the order their key was first seen, and each
    /// keeps its activities in input order.
    fn group_activities(&self, activities: Vec<Activity>) -> Vec<Self::Output> {
        let mut index: HashMap<Self::Group, usize> = HashMap::new();
        let mut aggregates: Vec<Self::Output> = Vec::new();

        for activity in activities {
            let group = self.get_group(&activity);
            let slot = match index.get(&group) {
                Some(&slot) => slot,
                None => {
                    debug!("Opening group {:?} in {}", group, self.aggregator_type());
                    aggregates.push(Self::Output::new(group.clone()));
                    index.insert(group, aggregates.len() - 1);
                    aggregates.len() - 1
                }
            };
            aggregates[slot].append(activity);
        }

        aggregates
    }

    /// Group then rank a batch of activities
    fn aggregate(&self, activities: Vec<Activity>) -> Vec<Self::Output> {
        let activity_count = activities.len();
        let grouped = self.group_activities(activities);
        let ranked = self.rank(grouped);

        info!(
            "{} aggregated {} activities into {} groups",
            self.aggregator_type(),
            activity_count,
            ranked.len()
        );

        ranked
    }
}

/// Configuration used to pick and parameterize an aggregator at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub aggregator_type: String,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl AggregatorConfig {
    pub fn new(aggregator_type: &str) -> Self {
        Self {
            aggregator_type: aggregator_type.to_string(),
            parameters: HashMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: &str, value: &str) -> Self {
        self.parameters.insert(key.to_string(), value.to_string());
        self
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::new("modulus")
    }
}
