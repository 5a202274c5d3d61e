use crate::traits::Aggregate;

/// Order aggregates by the largest object id they contain, ascending.
///
/// Object ids grow with creation time, so this places each group by its most
/// recent activity. The sort is stable: groups with the same maximum keep the
/// order they arrived in, which for `group_activities` output is the order
/// their key was first seen.
pub fn by_max_object_id<A: Aggregate>(mut aggregates: Vec<A>) -> Vec<A> {
    aggregates.sort_by_key(|aggregate| aggregate.max_object_id());
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregated::AggregatedActivity;
    use crate::types::{Activity, Verb};
    use chrono::{TimeZone, Utc};

    fn aggregate(group: u64, object_ids: &[u64]) -> AggregatedActivity<u64> {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut aggregated = AggregatedActivity::new(group);
        for &object_id in object_ids {
            aggregated.append(Activity::new(1, Verb::like(), object_id, time));
        }
        aggregated
    }

    #[test]
    fn sorts_ascending_by_max_object_id() {
        let ranked = by_max_object_id(vec![
            aggregate(0, &[3, 30]),
            aggregate(1, &[12]),
            aggregate(2, &[1, 2, 7]),
        ]);
        let groups: Vec<u64> = ranked.iter().map(|a| a.group).collect();
        assert_eq!(groups, vec![2, 1, 0]);
    }

    #[test]
    fn ties_keep_arrival_order() {
        let ranked = by_max_object_id(vec![
            aggregate(5, &[8]),
            aggregate(4, &[2, 8]),
            aggregate(3, &[1]),
        ]);
        let groups: Vec<u64> = ranked.iter().map(|a| a.group).collect();
        assert_eq!(groups, vec![3, 5, 4]);
    }
}
