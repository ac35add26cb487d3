use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Activity, ActivityMap};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("activity {activity} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// The Mergington High School activities available at startup.
pub fn default_activities() -> ActivityMap {
    let seed = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play singles and doubles matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                10,
                &["ava@mergington.edu", "liam@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing and sculpture in the school studio",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["mia@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform in school plays and showcases",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
                &["isabella@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Research current topics and compete in debate tournaments",
                "Tuesdays, 3:30 PM - 5:00 PM",
                16,
                &["charlotte@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Prepare for science competitions with hands-on experiments",
                "Fridays, 2:00 PM - 4:00 PM",
                20,
                &["amelia@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Loads an activity directory from a JSON file shaped like the
/// `GET /activities` response.
pub fn load_seed_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_rosters(&activities)?;
    Ok(activities)
}

fn validate_rosters(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_seed(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "activity-signup-seed-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_seed_rosters_are_unique() {
        let activities = default_activities();
        assert_eq!(activities.len(), 9);
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Programming Class"));
        validate_rosters(&activities).unwrap();
    }

    #[test]
    fn seed_file_keeps_order() {
        let path = temp_seed(
            "order",
            r#"{
                "Robotics": {"description": "Build robots", "schedule": "Mondays", "max_participants": 8, "participants": []},
                "Choir": {"description": "Sing", "schedule": "Fridays", "max_participants": 40, "participants": ["a@x.edu"]}
            }"#,
        );
        let activities = load_seed_file(&path).unwrap();
        let names: Vec<&String> = activities.keys().collect();
        assert_eq!(names, vec!["Robotics", "Choir"]);
        assert_eq!(activities["Choir"].participants, vec!["a@x.edu"]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn seed_file_rejects_duplicate_participant() {
        let path = temp_seed(
            "dup",
            r#"{"Choir": {"description": "Sing", "schedule": "Fridays", "max_participants": 40, "participants": ["a@x.edu", "a@x.edu"]}}"#,
        );
        let err = load_seed_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateParticipant { ref activity, ref email }
                if activity == "Choir" && email == "a@x.edu"
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn seed_file_missing_field_is_parse_error() {
        let path = temp_seed("bad", r#"{"Choir": {"description": "Sing"}}"#);
        assert!(matches!(load_seed_file(&path), Err(SeedError::Parse { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_seed_file_is_read_error() {
        let path = std::env::temp_dir().join("activity-signup-seed-does-not-exist.json");
        assert!(matches!(load_seed_file(&path), Err(SeedError::Read { .. })));
    }
}
