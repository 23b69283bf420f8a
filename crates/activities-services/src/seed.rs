//! Seed data: the activities a directory starts with.

use std::collections::HashSet;
use std::path::Path;

use activities_protocol::{Activity, Listing};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid seed data for {activity}: {reason}")]
    Invalid { activity: String, reason: String },
}

/// The built-in Mergington High School activities, in display order.
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
    ]
}

/// Load an alternate seed set from a JSON file shaped like the
/// `GET /activities` response.
pub fn load_seed_file(path: &Path) -> Result<Vec<Activity>, SeedError> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: shown.clone(),
        source,
    })?;
    let listing: Listing = serde_json::from_str(&content).map_err(|source| SeedError::Parse {
        path: shown.clone(),
        source,
    })?;

    let activities = validate(listing)?;
    info!("Loaded {} activities from {shown}", activities.len());
    Ok(activities)
}

fn validate(listing: Listing) -> Result<Vec<Activity>, SeedError> {
    let mut names = HashSet::new();
    let mut activities = Vec::with_capacity(listing.len());

    for (name, view) in listing {
        let invalid = |reason: String| SeedError::Invalid {
            activity: name.to_string(),
            reason,
        };

        if !names.insert(name.clone()) {
            return Err(invalid("activity listed more than once".into()));
        }
        if view.max_participants == 0 {
            return Err(invalid("max_participants must be at least 1".into()));
        }
        {
            let mut seen = HashSet::new();
            for email in &view.participants {
                if !seen.insert(email.as_str()) {
                    return Err(invalid(format!("{email} appears more than once")));
                }
            }
        }

        activities.push(Activity::from_view(name, view));
    }

    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_no_duplicate_participants() {
        for activity in default_activities() {
            let unique: HashSet<_> = activity.participants.iter().collect();
            assert_eq!(unique.len(), activity.participants.len(), "{}", activity.name);
            assert!(activity.max_participants > 0);
        }
    }

    #[test]
    fn default_seed_starts_with_chess_club() {
        let names: Vec<String> = default_activities()
            .into_iter()
            .map(|a| a.name.to_string())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("Chess Club"));
        for expected in ["Programming Class", "Gym Class", "Art Club"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }
}
