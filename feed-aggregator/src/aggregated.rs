use crate::traits::Aggregate;
use crate::types::{Activity, AggregateSummary, Verb};
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// One feed unit: every activity that mapped to `group`
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedActivity<G> {
    pub group: G,
    pub activities: Vec<Activity>,
}

impl<G> Aggregate for AggregatedActivity<G> {
    type Group = G;

    fn new(group: G) -> Self {
        Self {
            group,
            activities: Vec::new(),
        }
    }

    fn group(&self) -> &G {
        &self.group
    }

    fn activities(&self) -> &[Activity] {
        &self.activities
    }

    fn append(&mut self, activity: Activity) {
        self.activities.push(activity);
    }
}

impl<G> AggregatedActivity<G> {
    pub fn object_ids(&self) -> Vec<u64> {
        self.activities.iter().map(|a| a.object_id).collect()
    }

    /// Distinct actors, in the order they first appear
    pub fn actor_ids(&self) -> Vec<u64> {
        let mut actor_ids: Vec<u64> = Vec::new();
        for activity in &self.activities {
            if !actor_ids.contains(&activity.actor_id) {
                actor_ids.push(activity.actor_id);
            }
        }
        actor_ids
    }

    pub fn actor_count(&self) -> usize {
        self.actor_ids().len()
    }

    /// Distinct verbs by id, in the order they first appear
    pub fn verbs(&self) -> Vec<&Verb> {
        let mut verbs: Vec<&Verb> = Vec::new();
        for activity in &self.activities {
            if !verbs.iter().any(|v| v.id == activity.verb.id) {
                verbs.push(&activity.verb);
            }
        }
        verbs
    }

    /// Time of the earliest member activity
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.activities.iter().map(|a| a.time).min()
    }

    /// Time of the latest member activity
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.activities.iter().map(|a| a.time).max()
    }

    pub fn last_activity(&self) -> Option<&Activity> {
        self.activities.last()
    }

    pub fn contains(&self, activity: &Activity) -> bool {
        self.activities.contains(activity)
    }
}

impl<G: Display> AggregatedActivity<G> {
    /// Strategy-independent view for output; `None` for an empty aggregate
    pub fn summary(&self) -> Option<AggregateSummary> {
        Some(AggregateSummary {
            group: self.group.to_string(),
            object_ids: self.object_ids(),
            actor_count: self.actor_count(),
            max_object_id: self.max_object_id()?,
            created_at: self.created_at()?,
            updated_at: self.updated_at()?,
        })
    }
}

/// An aggregate rendered as a notification, with read-state tracking
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<G> {
    aggregated: AggregatedActivity<G>,
    seen: bool,
    read: bool,
}

impl<G> Aggregate for Notification<G> {
    type Group = G;

    fn new(group: G) -> Self {
        Self {
            aggregated: AggregatedActivity::new(group),
            seen: false,
            read: false,
        }
    }

    fn group(&self) -> &G {
        &self.aggregated.group
    }

    fn activities(&self) -> &[Activity] {
        &self.aggregated.activities
    }

    fn append(&mut self, activity: Activity) {
        self.aggregated.append(activity);
    }
}

impl<G> Notification<G> {
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn mark_seen(&mut self) {
        self.seen = true;
    }

    /// Reading a notification also marks it seen
    pub fn mark_read(&mut self) {
        self.seen = true;
        self.read = true;
    }

    /// The underlying aggregate, for the shared accessors
    pub fn aggregated(&self) -> &AggregatedActivity<G> {
        &self.aggregated
    }

    pub fn into_aggregated(self) -> AggregatedActivity<G> {
        self.aggregated
    }
}
