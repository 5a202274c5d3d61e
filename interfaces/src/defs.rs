use std::collections::HashMap;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Free-form context attached to an activity, e.g. `{"find": true}`.
pub type ExtraContext = HashMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    pub id: u32,
    pub infinitive: String,
    #[serde(default)]
    pub past_tense: String,
}

impl Verb {
    pub fn new(id: u32, infinitive: &str, past_tense: &str) -> Self {
        Self {
            id,
            infinitive: infinitive.to_owned(),
            past_tense: past_tense.to_owned(),
        }
    }

    pub fn like() -> Self {
        Self::new(1, "like", "liked")
    }

    pub fn comment() -> Self {
        Self::new(2, "comment", "commented")
    }

    pub fn follow() -> Self {
        Self::new(3, "follow", "followed")
    }

    pub fn add() -> Self {
        Self::new(4, "add", "added")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub actor_id: u64,
    pub verb: Verb,
    pub object_id: u64,
    #[serde(default)]
    pub target_id: Option<u64>,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub extra_context: ExtraContext,
}

impl Activity {
    pub fn new(actor_id: u64, verb: Verb, object_id: u64, time: DateTime<Utc>) -> Self {
        Self {
            actor_id,
            verb,
            object_id,
            target_id: None,
            time,
            extra_context: ExtraContext::new(),
        }
    }

    pub fn with_target(mut self, target_id: u64) -> Self {
        self.target_id = Some(target_id);
        self
    }

    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra_context.insert(key.to_owned(), value.into());
        self
    }

    /// The UTC calendar day this activity happened on.
    pub fn day(&self) -> NaiveDate {
        self.time.date_naive()
    }

    /// Reads a context entry as a flag.
    ///
    /// Missing and `null` entries are false, booleans are taken as-is,
    /// numbers are true when non-zero, and strings, arrays and objects are
    /// true when non-empty.
    pub fn context_flag(&self, key: &str) -> bool {
        self.extra_context.get(key).is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
