use crate::aggregated::Notification;
use crate::aggregators::recent_verb::VerbDayGroup;
use crate::ranking;
use crate::traits::Aggregator;
use crate::types::Activity;
use std::fmt;

const FIND_FLAG: &str = "find";

/// Verb and day key, split by whether the activity was the user's own find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationGroup {
    pub verb_day: VerbDayGroup,
    pub find: bool,
}

impl fmt::Display for NotificationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.find {
            write!(f, "{}-find-{}", self.verb_day.verb_id, self.verb_day.day)
        } else {
            fmt::Display::fmt(&self.verb_day, f)
        }
    }
}

/// Same-verb, same-day notifications.
///
/// Activities flagged with a truthy `extra_context["find"]` go to their own
/// bucket, so loves on a user's finds never merge with loves on their loves.
#[derive(Debug, Clone, Default)]
pub struct NotificationAggregator;

impl NotificationAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregator for NotificationAggregator {
    type Group = NotificationGroup;
    type Output = Notification<NotificationGroup>;

    fn aggregator_type(&self) -> String {
        "notification".to_string()
    }

    fn get_group(&self, activity: &Activity) -> NotificationGroup {
        NotificationGroup {
            verb_day: VerbDayGroup::of(activity),
            find: activity.context_flag(FIND_FLAG),
        }
    }

    fn rank(&self, aggregates: Vec<Self::Output>) -> Vec<Self::Output> {
        ranking::by_max_object_id(aggregates)
    }
}
