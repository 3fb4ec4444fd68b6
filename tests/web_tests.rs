mod common;

#[cfg(test)]
pub mod web_tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};

    use super::common::*;

    use ecell_site::web::AppState;

    macro_rules! test_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($store, String::new())))
                    .configure(ecell_site::web::configure),
            )
            .await
        };
    }

    fn location(resp: &actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_landing_renders_every_section() {
        let app = test_app!(get_seed_store());
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        for id in ["home", "about", "initiatives", "blogs", "gallery", "sponsors", "join"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
    }

    #[actix_web::test]
    async fn test_blog_detail_unknown_id_is_404() {
        let app = test_app!(get_seed_store());
        let req = test::TestRequest::get().uri("/blog/b-404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_blog_archive_filters_by_category() {
        let app = test_app!(get_seed_store());
        let req = test::TestRequest::get()
            .uri("/blog?category=INVESTMENTS")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("Reading A Term Sheet"));
        assert!(!html.contains("Bootstrapping 101"));
    }

    #[actix_web::test]
    async fn test_admin_create_member_success() {
        let store = get_seed_store();
        let app = test_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/admin/members")
            .set_form([
                ("name", "Meera Nair"),
                ("role", "Design Lead"),
                ("category", "Design Team"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/admin/members");
        assert_eq!(store.members().len(), 4);
    }

    #[actix_web::test]
    async fn test_admin_create_member_fails_on_blank_role() {
        let store = get_seed_store();
        let app = test_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/admin/members")
            .set_form([("name", "Meera Nair"), ("role", " "), ("category", "Design Team")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Name and Role are required"));
        assert_eq!(store.members().len(), 3);
    }

    #[actix_web::test]
    async fn test_delete_member_requires_confirmation() {
        let store = get_seed_store();
        let app = test_app!(store.clone());

        // Without the confirmation value the form round-trips harmlessly.
        let req = test::TestRequest::post()
            .uri("/admin/members/m-1/delete")
            .set_form([("confirm", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.members().len(), 3);

        let req = test::TestRequest::post()
            .uri("/admin/members/m-1/delete")
            .set_form([("confirm", "true")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(store.members().iter().all(|m| m.id != "m-1"));
    }

    #[actix_web::test]
    async fn test_htmx_post_gets_hx_redirect() {
        let store = get_seed_store();
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/admin/events/e-0/delete")
            .insert_header(("HX-Request", "true"))
            .set_form([("confirm", "true")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("HX-Redirect").and_then(|v| v.to_str().ok()),
            Some("/admin/events")
        );
    }

    #[actix_web::test]
    async fn test_api_collection_gets_answer_empty_lists() {
        let app = test_app!(get_seed_store());

        for uri in ["/api/team", "/api/events", "/api/blogs", "/api/sponsors", "/api/speakers"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let value: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(value, serde_json::json!([]), "unexpected body for {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_api_mutations_are_not_implemented() {
        let app = test_app!(get_seed_store());

        let req = test::TestRequest::post().uri("/api/team").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

        let body = test::read_body(resp).await;
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value["error"],
            serde_json::json!("POST /api/team is not connected yet")
        );
    }

    #[actix_web::test]
    async fn test_login_without_backend_shows_notice() {
        let app = test_app!(get_seed_store());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "admin@ecell.test"), ("password", "hunter2")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("POST /api/auth/login is not connected yet"));
    }

    #[actix_web::test]
    async fn test_contact_incomplete_and_complete_notices() {
        let app = test_app!(get_seed_store());

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form([("name", "A"), ("email", ""), ("phone", ""), ("message", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/?notice=contact-missing#join");

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form([
                ("name", "A"),
                ("email", "a@example.com"),
                ("phone", "123"),
                ("message", "hi"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/?notice=contact-offline#join");
    }

    #[actix_web::test]
    async fn test_community_submission_is_invisible_until_approved() {
        let store = get_seed_store();
        let app = test_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/blog/submit")
            .set_form([
                ("title", "My First Customer"),
                ("category", "RETAIL"),
                ("author_name", "Ankit Verma"),
                ("author_email", "ankit@example.com"),
                ("body", "<p>How a college fest became a storefront.</p>"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/blog?notice=submitted");

        let pending = store.pending_blogs();
        assert_eq!(pending.len(), 1);

        // Not in the public archive yet.
        let req = test::TestRequest::get().uri("/blog").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(!std::str::from_utf8(&body).unwrap().contains("My First Customer"));

        // Approval publishes it.
        let req = test::TestRequest::post()
            .uri(&format!("/admin/moderation/{}/approve", pending[0].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let req = test::TestRequest::get().uri("/blog").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("My First Customer"));
    }

    #[actix_web::test]
    async fn test_moderation_reject_unknown_id_shows_error() {
        let app = test_app!(get_seed_store());

        let req = test::TestRequest::post()
            .uri("/admin/moderation/p-404/reject")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("No pending post with id"));
    }
}
