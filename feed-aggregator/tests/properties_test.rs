use chrono::{Duration, TimeZone, Utc};
use feed_aggregator::{
    types::*, Aggregate, Aggregator, ModulusAggregator, NotificationAggregator,
    RecentVerbAggregator,
};
use proptest::prelude::*;

fn activity_strategy() -> impl Strategy<Value = Activity> {
    (0u64..20, 1u32..4, 0u64..200, 0i64..(5 * 24 * 60), any::<Option<bool>>()).prop_map(
        |(actor_id, verb_id, object_id, minutes, find)| {
            let base = Utc.with_ymd_and_hms(2024, 2, 27, 0, 0, 0).unwrap();
            let verb = Verb::new(verb_id, "verb", "verbed");
            let activity = Activity::new(actor_id, verb, object_id, base + Duration::minutes(minutes));
            match find {
                Some(flag) => activity.with_extra("find", flag),
                None => activity,
            }
        },
    )
}

fn activities_strategy() -> impl Strategy<Value = Vec<Activity>> {
    proptest::collection::vec(activity_strategy(), 0..60)
}

/// Every input activity comes out exactly once, grouped under its own key,
/// with no empty groups and groups ordered by their largest object id.
fn check_aggregation<A: Aggregator>(
    aggregator: &A,
    activities: Vec<Activity>,
) -> std::result::Result<(), TestCaseError> {
    let aggregated = aggregator.aggregate(activities.clone());

    let mut out: Vec<Activity> = Vec::new();
    for aggregate in &aggregated {
        prop_assert!(!aggregate.is_empty());
        for activity in aggregate.activities() {
            prop_assert_eq!(&aggregator.get_group(activity), aggregate.group());
            out.push(activity.clone());
        }
    }

    prop_assert_eq!(out.len(), activities.len());
    let mut remaining = activities;
    for activity in &out {
        let position = remaining.iter().position(|a| a == activity);
        prop_assert!(position.is_some());
        if let Some(position) = position {
            remaining.swap_remove(position);
        }
    }

    let maxima: Vec<Option<u64>> = aggregated.iter().map(|a| a.max_object_id()).collect();
    prop_assert!(maxima.windows(2).all(|w| w[0] <= w[1]));

    let groups: Vec<&A::Group> = aggregated.iter().map(|a| a.group()).collect();
    for (i, group) in groups.iter().enumerate() {
        prop_assert!(!groups[i + 1..].contains(group));
    }
    Ok(())
}

proptest! {
    #[test]
    fn modulus_aggregation_is_complete(activities in activities_strategy(), modulus in 1u64..8) {
        let aggregator = ModulusAggregator::new(modulus).unwrap();
        check_aggregation(&aggregator, activities)?;
    }

    #[test]
    fn recent_verb_aggregation_is_complete(activities in activities_strategy()) {
        check_aggregation(&RecentVerbAggregator::new(), activities)?;
    }

    #[test]
    fn notification_aggregation_is_complete(activities in activities_strategy()) {
        check_aggregation(&NotificationAggregator::new(), activities)?;
    }

    #[test]
    fn aggregation_is_deterministic(activities in activities_strategy()) {
        let aggregator = RecentVerbAggregator::new();
        let first = aggregator.aggregate(activities.clone());
        let second = aggregator.aggregate(activities);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn within_group_order_follows_input(activities in activities_strategy()) {
        let aggregator = ModulusAggregator::default();
        for aggregate in aggregator.aggregate(activities.clone()) {
            let expected: Vec<&Activity> = activities
                .iter()
                .filter(|a| aggregator.get_group(a) == aggregate.group)
                .collect();
            let actual: Vec<&Activity> = aggregate.activities.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn finds_never_share_a_notification(activities in activities_strategy()) {
        for notification in NotificationAggregator::new().aggregate(activities) {
            let flags: Vec<bool> = notification
                .activities()
                .iter()
                .map(|a| a.context_flag("find"))
                .collect();
            prop_assert!(flags.iter().all(|&f| f == notification.group().find));
        }
    }
}
