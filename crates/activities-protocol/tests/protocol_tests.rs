//! Protocol layer tests: listing wire shape, newtypes, confirmations.

#[cfg(test)]
mod tests {
    use activities_protocol::*;
    use serde_json::json;

    fn chess() -> Activity {
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn listing_serializes_as_object_keyed_by_name() {
        let activity = chess();
        let listing: Listing = [(activity.name.clone(), activity.view())].into_iter().collect();

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            value,
            json!({
                "Chess Club": {
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 12,
                    "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
                }
            })
        );
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let mut listing = Listing::new();
        for name in ["Zeta", "Alpha", "Mu"] {
            listing.push(
                ActivityName::new(name),
                Activity::new(name, "d", "s", 1).view(),
            );
        }

        let text = serde_json::to_string(&listing).unwrap();
        let zeta = text.find("Zeta").unwrap();
        let alpha = text.find("Alpha").unwrap();
        let mu = text.find("Mu").unwrap();
        assert!(zeta < alpha && alpha < mu, "order lost: {text}");

        let parsed: Listing = serde_json::from_str(&text).unwrap();
        let names: Vec<&str> = parsed.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn listing_rejects_non_object() {
        let result: Result<Listing, _> = serde_json::from_value(json!(["Chess Club"]));
        assert!(result.is_err());
    }

    #[test]
    fn listing_lookup_by_name() {
        let activity = chess();
        let listing: Listing = [(activity.name.clone(), activity.view())].into_iter().collect();
        assert!(listing.contains("Chess Club"));
        assert!(!listing.contains("chess club"));
        assert_eq!(listing.get("Chess Club").unwrap().max_participants, 12);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Activity / newtypes
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn participant_lookup_is_exact() {
        let activity = chess();
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("Michael@mergington.edu"));
        assert!(!activity.has_participant(" michael@mergington.edu"));
    }

    #[test]
    fn email_is_not_validated() {
        let email = ParticipantEmail::new("not an email at all");
        assert_eq!(email.as_str(), "not an email at all");
        assert_eq!(serde_json::to_value(&email).unwrap(), json!("not an email at all"));
    }

    #[test]
    fn is_full_compares_roster_to_capacity() {
        let activity = Activity::new("Tiny", "d", "s", 2);
        assert!(!activity.is_full());
        let activity = activity.with_participants(["a@x", "b@x"]);
        assert!(activity.is_full());
    }

    #[test]
    fn view_round_trips_through_from_view() {
        let activity = chess();
        let rebuilt = Activity::from_view(activity.name.clone(), activity.view());
        assert_eq!(rebuilt, activity);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Confirmation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn signup_confirmation_text() {
        let c = Confirmation::signed_up(
            &ParticipantEmail::new("newstudent@mergington.edu"),
            &ActivityName::new("Chess Club"),
        );
        assert_eq!(c.message, "Signed up newstudent@mergington.edu for Chess Club");
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "message": c.message }));
    }

    #[test]
    fn unregister_confirmation_text() {
        let c = Confirmation::unregistered(
            &ParticipantEmail::new("remove@mergington.edu"),
            &ActivityName::new("Programming Class"),
        );
        assert!(c.message.contains("Unregistered"));
        assert_eq!(c.message, "Unregistered remove@mergington.edu from Programming Class");
    }
}
