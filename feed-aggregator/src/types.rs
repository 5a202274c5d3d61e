use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
// Use the interfaces crate for the activity data model
pub use interfaces::defs::{Activity, ExtraContext, Verb};

/// Serializable view of one ranked aggregate, independent of the strategy's key type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub group: String,
    pub object_ids: Vec<u64>,
    pub actor_count: usize,
    pub max_object_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("No aggregator implemented for type: {aggregator_type}")]
    NotImplemented { aggregator_type: String },

    #[error("Invalid aggregator configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
