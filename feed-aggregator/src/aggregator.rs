use crate::aggregators::{ModulusAggregator, NotificationAggregator, RecentVerbAggregator};
use crate::traits::{Aggregator, AggregatorConfig};
use crate::types::{Activity, AggregateSummary, AggregatorError, Result};
use tracing::info;

/// An aggregation strategy chosen from configuration at runtime
#[derive(Debug, Clone)]
pub enum AggregatorKind {
    Modulus(ModulusAggregator),
    RecentVerb(RecentVerbAggregator),
    Notification(NotificationAggregator),
}

impl AggregatorKind {
    /// Build the strategy named by `config.aggregator_type`.
    ///
    /// Recognized names are `modulus` (optional `modulus` parameter, default
    /// 3), `recent_verb` and `notification`. Any other name fails with
    /// `NotImplemented`.
    pub fn from_config(config: &AggregatorConfig) -> Result<Self> {
        let kind = match config.aggregator_type.as_str() {
            "modulus" => {
                let aggregator = match config.parameters.get("modulus") {
                    Some(modulus_str) => {
                        let modulus = modulus_str.trim().parse::<u64>().map_err(|e| {
                            AggregatorError::InvalidConfig(format!(
                                "modulus '{}' is not a positive integer: {}",
                                modulus_str, e
                            ))
                        })?;
                        ModulusAggregator::new(modulus)?
                    }
                    None => ModulusAggregator::default(),
                };
                Self::Modulus(aggregator)
            }
            "recent_verb" => Self::RecentVerb(RecentVerbAggregator::new()),
            "notification" => Self::Notification(NotificationAggregator::new()),
            other => {
                return Err(AggregatorError::NotImplemented {
                    aggregator_type: other.to_string(),
                })
            }
        };

        info!("Configured {} aggregator", kind.aggregator_type());
        Ok(kind)
    }

    pub fn aggregator_type(&self) -> String {
        match self {
            Self::Modulus(aggregator) => aggregator.aggregator_type(),
            Self::RecentVerb(aggregator) => aggregator.aggregator_type(),
            Self::Notification(aggregator) => aggregator.aggregator_type(),
        }
    }

    /// Aggregate with the selected strategy and return ranked summaries
    pub fn summarize(&self, activities: Vec<Activity>) -> Vec<AggregateSummary> {
        match self {
            Self::Modulus(aggregator) => aggregator
                .aggregate(activities)
                .iter()
                .filter_map(|aggregated| aggregated.summary())
                .collect(),
            Self::RecentVerb(aggregator) => aggregator
                .aggregate(activities)
                .iter()
                .filter_map(|aggregated| aggregated.summary())
                .collect(),
            Self::Notification(aggregator) => aggregator
                .aggregate(activities)
                .iter()
                .filter_map(|notification| notification.aggregated().summary())
                .collect(),
        }
    }
}

impl Default for AggregatorKind {
    fn default() -> Self {
        Self::Modulus(ModulusAggregator::default())
    }
}
