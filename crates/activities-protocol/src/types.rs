//! Activity records and the shapes they take on the wire.

use std::borrow::Borrow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display name of an activity. Doubles as its key in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Participant identifier. Treated as an opaque string: no syntax check,
/// no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype_impls!(ActivityName);
string_newtype_impls!(ParticipantEmail);

/// One activity as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: ActivityName,
    pub description: String,
    pub schedule: String,
    /// Stored capacity. Whether it is enforced depends on the directory's policy.
    pub max_participants: u32,
    /// Roster in enrollment order. Never holds the same email twice.
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    pub fn new(
        name: impl Into<ActivityName>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ParticipantEmail>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }

    pub fn from_view(name: ActivityName, view: ActivityView) -> Self {
        Self {
            name,
            description: view.description,
            schedule: view.schedule,
            max_participants: view.max_participants,
            participants: view.participants,
        }
    }
}

/// Wire form of an activity record (the name is carried as the map key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<ParticipantEmail>,
}

/// Snapshot of the whole directory, serialized as a JSON object keyed by
/// activity name. Entry order is preserved in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<(ActivityName, ActivityView)>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: ActivityName, view: ActivityView) {
        self.entries.push((name, view));
    }

    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &ActivityView)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }
}

impl IntoIterator for Listing {
    type Item = (ActivityName, ActivityView);
    type IntoIter = std::vec::IntoIter<(ActivityName, ActivityView)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(ActivityName, ActivityView)> for Listing {
    fn from_iter<T: IntoIterator<Item = (ActivityName, ActivityView)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, view) in &self.entries {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Listing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListingVisitor;

        impl<'de> Visitor<'de> for ListingVisitor {
            type Value = Listing;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Listing, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, view)) = access.next_entry::<ActivityName, ActivityView>()? {
                    entries.push((name, view));
                }
                Ok(Listing { entries })
            }
        }

        deserializer.deserialize_map(ListingVisitor)
    }
}

/// Success body of enroll and withdraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn signed_up(email: &ParticipantEmail, activity: &ActivityName) -> Self {
        Self { message: format!("Signed up {email} for {activity}") }
    }

    pub fn unregistered(email: &ParticipantEmail, activity: &ActivityName) -> Self {
        Self { message: format!("Unregistered {email} from {activity}") }
    }
}
