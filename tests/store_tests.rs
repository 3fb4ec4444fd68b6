mod common;

#[cfg(test)]
pub mod store_tests {
    use super::common::*;

    use ecell_site::common::StoreError;
    use ecell_site::fixtures::{DEFAULT_READ_TIME, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE};
    use ecell_site::models::*;
    use ecell_site::store::snippet_from;

    #[test]
    fn test_create_member_success() {
        let store = get_seed_store();
        let created = store
            .create_member(&MemberCreate {
                name: "New Member".to_string(),
                role: "Designer".to_string(),
                category: "Design Team".to_string(),
                image: None,
                linkedin: None,
            })
            .unwrap();

        assert_eq!(created.image, PLACEHOLDER_IMAGE);
        assert_eq!(created.linkedin, "#");

        // New members are appended, keeping the roster order stable.
        let members = store.members();
        assert_eq!(members.last().unwrap().id, created.id);
        assert_eq!(members.len(), 4);
    }

    #[test]
    fn test_create_member_fails_on_blank_fields() {
        let store = get_seed_store();
        let err = store
            .create_member(&MemberCreate {
                name: "  ".to_string(),
                role: "Designer".to_string(),
                category: "Design Team".to_string(),
                image: None,
                linkedin: None,
            })
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Validation("Name and Role are required".to_string())
        );
        assert_eq!(store.members().len(), 3);
    }

    #[test]
    fn test_create_member_fails_on_unknown_category() {
        let store = get_seed_store();
        let err = store
            .create_member(&MemberCreate {
                name: "New Member".to_string(),
                role: "Designer".to_string(),
                category: "Chess Club".to_string(),
                image: None,
                linkedin: None,
            })
            .unwrap_err();

        assert_eq!(err, StoreError::UnknownCategory("Chess Club".to_string()));
    }

    #[test]
    fn test_update_member_merges_partial_payload() {
        let store = get_seed_store();
        let updated = store
            .update_member(
                "m-2",
                &MemberUpdate {
                    role: Some("Head of Engineering".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.role, "Head of Engineering");
        // Absent fields keep their previous values.
        assert_eq!(updated.name, get_seed_member_2().name);
        assert_eq!(updated.image, get_seed_member_2().image);
    }

    #[test]
    fn test_update_member_unknown_id_is_untouched() {
        let store = get_seed_store();
        let result = store
            .update_member(
                "m-404",
                &MemberUpdate {
                    role: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.members(), get_seed_store().members());
    }

    #[test]
    fn test_delete_member_success() {
        let store = get_seed_store();
        assert!(store.delete_member("m-1"));
        assert!(store.members().iter().all(|m| m.id != "m-1"));
        assert!(!store.delete_member("m-1"));
    }

    #[test]
    fn test_create_event_prepends() {
        let store = get_seed_store();
        let created = store
            .create_event(&EventCreate {
                title: "Demo Day".to_string(),
                description: "Teams pitch to a live panel.".to_string(),
                image: None,
                layout: None,
            })
            .unwrap();

        assert_eq!(created.layout, EventLayout::ImageFirst);
        assert_eq!(created.image, PLACEHOLDER_IMAGE);
        assert_eq!(store.events().first().unwrap().id, created.id);
    }

    #[test]
    fn test_create_event_fails_on_blank_description() {
        let store = get_seed_store();
        let err = store
            .create_event(&EventCreate {
                title: "Demo Day".to_string(),
                description: String::new(),
                image: None,
                layout: None,
            })
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Validation("Title and Description are required".to_string())
        );
    }

    #[test]
    fn test_create_blog_defaults() {
        let store = get_seed_store();
        let body = "<p>".to_string() + &"x".repeat(150) + "</p>";
        let created = store
            .create_blog(&BlogCreate {
                title: "Untitled Wisdom".to_string(),
                body: Some(body),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(created.category, "ALL");
        assert_eq!(created.read_time, DEFAULT_READ_TIME);
        assert_eq!(created.author.name, "Admin");
        assert_eq!(created.author.role, "Contributor");
        assert_eq!(created.author.avatar, PLACEHOLDER_AVATAR);
        assert_eq!(created.image, PLACEHOLDER_IMAGE);
        assert!(created.status.is_none());

        // Snippet is the first 100 characters of the tag-stripped body.
        assert_eq!(created.snippet.chars().count(), 103);
        assert!(created.snippet.ends_with("..."));

        // Newest post shows first.
        assert_eq!(store.blogs().first().unwrap().id, created.id);
    }

    #[test]
    fn test_create_blog_fails_on_unknown_category() {
        let store = get_seed_store();
        let err = store
            .create_blog(&BlogCreate {
                title: "Untitled Wisdom".to_string(),
                category: Some("GOSSIP".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, StoreError::UnknownCategory("GOSSIP".to_string()));
    }

    #[test]
    fn test_update_blog_body_recomputes_snippet() {
        let store = get_seed_store();
        let updated = store
            .update_blog(
                "b-0",
                &BlogUpdate {
                    body: Some("<p>Short new body.</p>".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.snippet, "Short new body.");
    }

    #[test]
    fn test_update_blog_explicit_snippet_wins() {
        let store = get_seed_store();
        let updated = store
            .update_blog(
                "b-0",
                &BlogUpdate {
                    body: Some("<p>Short new body.</p>".to_string()),
                    snippet: Some("Hand-written teaser".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.snippet, "Hand-written teaser");
    }

    #[test]
    fn test_snippet_from_empty_body() {
        assert_eq!(snippet_from("<p>  </p>"), "Click to read more...");
    }

    #[test]
    fn test_snippet_from_short_body_has_no_ellipsis() {
        assert_eq!(snippet_from("<p>Short.</p>"), "Short.");
    }

    #[test]
    fn test_ids_are_unique_across_creates() {
        let store = get_seed_store();
        let a = store
            .create_event(&EventCreate {
                title: "A".to_string(),
                description: "a".to_string(),
                ..Default::default()
            })
            .unwrap();
        let b = store
            .create_event(&EventCreate {
                title: "B".to_string(),
                description: "b".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_submit_blog_goes_to_queue_only() {
        let store = get_seed_store();
        let queued = store.submit_blog(&get_seed_draft()).unwrap();

        assert_eq!(queued.status, Some(ModerationStatus::Pending));
        assert!(queued.submitted_at.is_some());
        assert_eq!(queued.author.role, "Community Writer");

        assert_eq!(store.pending_blogs().len(), 1);
        // Published posts are unaffected until approval.
        assert_eq!(store.blogs().len(), 2);
    }

    #[test]
    fn test_submit_blog_fails_on_missing_author() {
        let store = get_seed_store();
        let mut draft = get_seed_draft();
        draft.author_email = String::new();

        let err = store.submit_blog(&draft).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation("Author name and email are required".to_string())
        );
        assert!(store.pending_blogs().is_empty());
    }

    #[test]
    fn test_approve_blog_moves_post() {
        let store = get_seed_store();
        let queued = store.submit_blog(&get_seed_draft()).unwrap();

        let approved = store.approve_blog(&queued.id).unwrap();
        assert_eq!(approved.status, Some(ModerationStatus::Approved));

        assert!(store.pending_blogs().is_empty());
        let blogs = store.blogs();
        assert_eq!(blogs.len(), 3);
        assert_eq!(blogs.last().unwrap().id, queued.id);
    }

    #[test]
    fn test_approve_blog_fails_on_unknown_id() {
        let store = get_seed_store();
        store.submit_blog(&get_seed_draft()).unwrap();

        let err = store.approve_blog("p-404").unwrap_err();
        assert_eq!(err, StoreError::NotFound("p-404".to_string()));

        // Neither collection moved.
        assert_eq!(store.pending_blogs().len(), 1);
        assert_eq!(store.blogs().len(), 2);
    }

    #[test]
    fn test_reject_blog_discards_without_publishing() {
        let store = get_seed_store();
        let queued = store.submit_blog(&get_seed_draft()).unwrap();

        assert!(store.reject_blog(&queued.id));
        assert!(store.pending_blogs().is_empty());
        assert_eq!(store.blogs().len(), 2);
        assert!(!store.reject_blog(&queued.id));
    }
}
