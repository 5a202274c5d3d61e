use crate::aggregated::AggregatedActivity;
use crate::ranking;
use crate::traits::Aggregator;
use crate::types::{Activity, AggregatorError, Result};

const DEFAULT_MODULUS: u64 = 3;

/// Buckets activities by `object_id % modulus`.
///
/// The buckets carry no meaning of their own; this spreads a batch over a
/// fixed number of groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulusAggregator {
    modulus: u64,
}

impl ModulusAggregator {
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(AggregatorError::InvalidConfig(
                "modulus must be greater than zero".to_string(),
            ));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Default for ModulusAggregator {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl Aggregator for ModulusAggregator {
    type Group = u64;
    type Output = AggregatedActivity<u64>;

    fn aggregator_type(&self) -> String {
        format!("modulus_{}", self.modulus)
    }

    fn get_group(&self, activity: &Activity) -> u64 {
        activity.object_id % self.modulus
    }

    fn rank(&self, aggregates: Vec<Self::Output>) -> Vec<Self::Output> {
        ranking::by_max_object_id(aggregates)
    }
}
