//! The activity directory: a fixed set of activities with mutable rosters.

use std::collections::HashMap;

use activities_protocol::{
    Activity, ActivityName, ActivityStore, ActivityView, Confirmation, DirectoryError, Listing,
    ParticipantEmail,
};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// Whether `max_participants` is checked on enroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is stored and reported but never rejects a signup.
    #[default]
    Unenforced,
    /// Enroll fails with `CapacityReached` once the roster is full.
    Enforced,
}

struct Inner {
    /// Activities in seed order.
    activities: Vec<Activity>,
    /// Name -> position in `activities`.
    index: HashMap<ActivityName, usize>,
}

impl Inner {
    fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        let pos = *self.index.get(name)?;
        self.activities.get_mut(pos)
    }
}

/// Process-wide directory of activities.
///
/// All access goes through a single `RwLock`: `list` clones a snapshot
/// under the read lock, `enroll` and `withdraw` hold the write lock across
/// their whole check-then-mutate sequence.
pub struct Directory {
    inner: RwLock<Inner>,
    policy: CapacityPolicy,
}

impl Directory {
    /// Build a directory from an ordered set of activities. If two share a
    /// name, the first one wins.
    pub fn new(activities: impl IntoIterator<Item = Activity>, policy: CapacityPolicy) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();
        for activity in activities {
            if index.contains_key(&activity.name) {
                warn!("Duplicate activity {} ignored", activity.name);
                continue;
            }
            index.insert(activity.name.clone(), kept.len());
            kept.push(activity);
        }

        Self {
            inner: RwLock::new(Inner { activities: kept, index }),
            policy,
        }
    }

    /// Directory preloaded with the built-in Mergington seed set.
    pub fn seeded(policy: CapacityPolicy) -> Self {
        Self::new(crate::seed::default_activities(), policy)
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.inner.read().activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current record of one activity.
    pub fn get(&self, name: &str) -> Option<ActivityView> {
        let inner = self.inner.read();
        let pos = *inner.index.get(name)?;
        inner.activities.get(pos).map(Activity::view)
    }

    pub fn list(&self) -> Listing {
        let inner = self.inner.read();
        inner
            .activities
            .iter()
            .map(|a| (a.name.clone(), a.view()))
            .collect()
    }

    pub fn enroll(
        &self,
        activity: &ActivityName,
        email: ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError> {
        let mut inner = self.inner.write();
        let Some(entry) = inner.get_mut(activity.as_str()) else {
            return Err(DirectoryError::ActivityNotFound { activity: activity.to_string() });
        };

        if entry.has_participant(email.as_str()) {
            return Err(DirectoryError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if self.policy == CapacityPolicy::Enforced && entry.is_full() {
            return Err(DirectoryError::CapacityReached {
                activity: activity.to_string(),
                max: entry.max_participants,
            });
        }

        let confirmation = Confirmation::signed_up(&email, activity);
        entry.participants.push(email);
        debug!(
            "Enrolled into {activity} ({}/{})",
            entry.participants.len(),
            entry.max_participants
        );
        Ok(confirmation)
    }

    pub fn withdraw(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError> {
        let mut inner = self.inner.write();
        let Some(entry) = inner.get_mut(activity.as_str()) else {
            return Err(DirectoryError::ActivityNotFound { activity: activity.to_string() });
        };

        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        entry.participants.remove(pos);
        debug!(
            "Withdrew from {activity} ({}/{})",
            entry.participants.len(),
            entry.max_participants
        );
        Ok(Confirmation::unregistered(email, activity))
    }
}

impl ActivityStore for Directory {
    fn list(&self) -> Listing {
        Directory::list(self)
    }

    fn enroll(
        &self,
        activity: &ActivityName,
        email: ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError> {
        Directory::enroll(self, activity, email)
    }

    fn withdraw(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError> {
        Directory::withdraw(self, activity, email)
    }

    fn activity_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activities_protocol::ErrorKind;

    fn small(policy: CapacityPolicy) -> Directory {
        Directory::new(
            [
                Activity::new("Tiny", "two seats", "Mondays", 2).with_participants(["a@x"]),
                Activity::new("Empty", "nobody yet", "Tuesdays", 5),
            ],
            policy,
        )
    }

    fn name(s: &str) -> ActivityName {
        ActivityName::new(s)
    }

    fn email(s: &str) -> ParticipantEmail {
        ParticipantEmail::new(s)
    }

    #[test]
    fn duplicate_names_keep_first() {
        let dir = Directory::new(
            [
                Activity::new("Same", "first", "s", 1),
                Activity::new("Same", "second", "s", 1),
            ],
            CapacityPolicy::default(),
        );
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("Same").unwrap().description, "first");
    }

    #[test]
    fn unenforced_policy_accepts_past_capacity() {
        let dir = small(CapacityPolicy::Unenforced);
        dir.enroll(&name("Tiny"), email("b@x")).unwrap();
        dir.enroll(&name("Tiny"), email("c@x")).unwrap();
        assert_eq!(dir.get("Tiny").unwrap().participants.len(), 3);
    }

    #[test]
    fn enforced_policy_rejects_when_full() {
        let dir = small(CapacityPolicy::Enforced);
        dir.enroll(&name("Tiny"), email("b@x")).unwrap();
        let err = dir.enroll(&name("Tiny"), email("c@x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityReached);
        assert_eq!(dir.get("Tiny").unwrap().participants.len(), 2);
    }

    #[test]
    fn enforced_policy_still_reports_duplicates_first() {
        let dir = small(CapacityPolicy::Enforced);
        dir.enroll(&name("Tiny"), email("b@x")).unwrap();
        let err = dir.enroll(&name("Tiny"), email("a@x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyRegistered);
    }

    #[test]
    fn withdraw_frees_a_seat_under_enforcement() {
        let dir = small(CapacityPolicy::Enforced);
        dir.enroll(&name("Tiny"), email("b@x")).unwrap();
        dir.withdraw(&name("Tiny"), &email("a@x")).unwrap();
        dir.enroll(&name("Tiny"), email("c@x")).unwrap();
        let roster = dir.get("Tiny").unwrap().participants;
        assert_eq!(roster, vec![email("b@x"), email("c@x")]);
    }

    #[test]
    fn withdraw_keeps_order_of_remaining() {
        let dir = small(CapacityPolicy::Unenforced);
        for e in ["b@x", "c@x", "d@x"] {
            dir.enroll(&name("Empty"), email(e)).unwrap();
        }
        dir.withdraw(&name("Empty"), &email("c@x")).unwrap();
        assert_eq!(
            dir.get("Empty").unwrap().participants,
            vec![email("b@x"), email("d@x")]
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dir = small(CapacityPolicy::Unenforced);
        let err = dir.enroll(&name("tiny"), email("z@x")).unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound { activity: "tiny".into() });
    }
}
