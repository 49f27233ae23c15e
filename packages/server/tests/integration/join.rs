use serde_json::json;

use crate::common::{CONTACT_EMAIL, TestApp, routes, valid_application};

mod delivery {
    use super::*;

    #[tokio::test]
    async fn valid_application_notifies_the_team_inbox_only() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 200, "Submission failed: {}", res.text);
        assert_eq!(res.body, json!({"ok": true}));
        assert_eq!(app.mailjet.recipients(), vec![CONTACT_EMAIL]);
    }

    #[tokio::test]
    async fn notification_carries_sender_credentials_and_application() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;
        assert_eq!(res.status, 200, "Submission failed: {}", res.text);

        let requests = app.mailjet.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.authorization.as_deref(),
            Some("Basic dGVzdC1rZXk6dGVzdC1zZWNyZXQ=")
        );

        let message = request.message();
        assert_eq!(message["From"]["Name"], "Aqualix Crew");
        assert_eq!(message["From"]["Email"], "crew@aqualix.dev");
        assert_eq!(
            message["Subject"],
            "New Aqualix Application: Ada Lovelace (embedded)"
        );

        let html = message["HTMLPart"].as_str().unwrap();
        assert!(html.contains("<strong>Email:</strong> ada@example.com"));
        assert!(html.contains("<strong>Social:</strong> https://github.com/ada"));
        assert!(html.contains("<strong>Preferred Team:</strong> Embedded Systems Team"));
        assert!(html.contains("underwater drones"));
    }

    #[tokio::test]
    async fn applicant_is_acknowledged_when_enabled() {
        let app = TestApp::spawn_with(|mail| mail.allow_applicant_email = true).await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 200, "Submission failed: {}", res.text);
        assert_eq!(
            app.mailjet.recipients(),
            vec!["ada@example.com", CONTACT_EMAIL]
        );

        let ack = app
            .mailjet
            .requests()
            .into_iter()
            .find(|c| c.recipient() == "ada@example.com")
            .unwrap();
        assert_eq!(
            ack.message()["Subject"],
            "We received your Aqualix application"
        );
    }

    #[tokio::test]
    async fn missing_social_profile_is_left_out_of_the_notification() {
        let app = TestApp::spawn().await;
        let mut payload = valid_application();
        payload["socialProfile"] = json!("");

        let res = app.post_json(routes::JOIN, &payload).await;
        assert_eq!(res.status, 200, "Submission failed: {}", res.text);

        let html = app.mailjet.requests()[0].message()["HTMLPart"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(!html.contains("Social:"));
    }

    #[tokio::test]
    async fn applicant_text_is_html_escaped() {
        let app = TestApp::spawn().await;
        let mut payload = valid_application();
        payload["name"] = json!("<script>alert(1)</script>");

        let res = app.post_json(routes::JOIN, &payload).await;
        assert_eq!(res.status, 200, "Submission failed: {}", res.text);

        let html = app.mailjet.requests()[0].message()["HTMLPart"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn unknown_team_is_accepted_and_shown_as_submitted() {
        let app = TestApp::spawn().await;
        let mut payload = valid_application();
        payload["preferredTeam"] = json!("robotics");

        let res = app.post_json(routes::JOIN, &payload).await;
        assert_eq!(res.status, 200, "Submission failed: {}", res.text);

        let html = app.mailjet.requests()[0].message()["HTMLPart"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(html.contains("<strong>Preferred Team:</strong> robotics"));
    }
}

mod validation {
    use super::*;

    async fn assert_rejected(payload: serde_json::Value, expected: &str) {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::JOIN, &payload).await;

        assert_eq!(res.status, 400, "Expected 400 for {payload}: {}", res.text);
        assert_eq!(res.body["error"], expected);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert!(app.mailjet.requests().is_empty());
    }

    fn with(field: &str, value: serde_json::Value) -> serde_json::Value {
        let mut payload = valid_application();
        payload[field] = value;
        payload
    }

    fn without(field: &str) -> serde_json::Value {
        let mut payload = valid_application();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        assert_rejected(without("name"), "Invalid name").await;
    }

    #[tokio::test]
    async fn array_body_is_not_read_by_position() {
        let payload = valid_application();
        let positional = json!([
            payload["name"],
            payload["email"],
            null,
            payload["preferredTeam"],
            payload["motivation"],
        ]);
        assert_rejected(positional, "Invalid name").await;
    }

    #[tokio::test]
    async fn one_character_name_is_rejected() {
        assert_rejected(with("name", json!("A")), "Invalid name").await;
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        assert_rejected(without("email"), "Invalid email").await;
    }

    #[tokio::test]
    async fn malformed_emails_are_rejected() {
        for email in ["ada", "ada@example", "@example.com", "ada@example."] {
            assert_rejected(with("email", json!(email)), "Invalid email").await;
        }
    }

    #[tokio::test]
    async fn empty_preferred_team_is_rejected() {
        assert_rejected(
            with("preferredTeam", json!("")),
            "Preferred team is required",
        )
        .await;
    }

    #[tokio::test]
    async fn short_motivation_is_rejected() {
        assert_rejected(
            with("motivation", json!("x".repeat(49))),
            "Motivation must be at least 50 characters",
        )
        .await;
    }

    #[tokio::test]
    async fn fifty_character_motivation_is_accepted() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::JOIN, &with("motivation", json!("x".repeat(50))))
            .await;

        assert_eq!(res.status, 200, "Submission failed: {}", res.text);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::JOIN, "{\"name\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid JSON");
        assert_eq!(res.body["code"], "INVALID_JSON");
        assert!(app.mailjet.requests().is_empty());
    }

    #[tokio::test]
    async fn non_post_methods_are_rejected() {
        let app = TestApp::spawn().await;

        for method in [
            reqwest::Method::GET,
            reqwest::Method::PUT,
            reqwest::Method::DELETE,
        ] {
            let res = app.request(method.clone(), routes::JOIN).await;

            assert_eq!(res.status, 405, "{method} should be rejected");
            assert_eq!(res.body["error"], "Method not allowed");
            assert_eq!(res.body["code"], "METHOD_NOT_ALLOWED");
        }
        assert!(app.mailjet.requests().is_empty());
    }
}

mod configuration {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_fail_before_any_send() {
        let app = TestApp::spawn_with(|mail| {
            mail.api_key = None;
            mail.contact_email = None;
        })
        .await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "NOT_CONFIGURED");
        assert_eq!(
            res.body["error"],
            "Server not configured. Missing MAILJET_API_KEY, CONTACT_EMAIL"
        );
        assert!(app.mailjet.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_secret_counts_as_missing() {
        let app = TestApp::spawn_with(|mail| mail.api_secret = Some(String::new())).await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 500);
        assert_eq!(
            res.body["error"],
            "Server not configured. Missing MAILJET_API_SECRET"
        );
        assert!(app.mailjet.requests().is_empty());
    }

    #[tokio::test]
    async fn configuration_is_checked_before_the_body() {
        let app = TestApp::spawn_with(|mail| mail.api_key = None).await;

        let res = app.post_raw(routes::JOIN, "not json").await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "NOT_CONFIGURED");
    }
}

mod provider_failure {
    use super::*;

    #[tokio::test]
    async fn provider_rejection_is_reported_as_server_error() {
        let app = TestApp::spawn().await;
        app.mailjet.respond_with(401);

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "MAIL_DELIVERY_FAILED");
        let error = res.body["error"].as_str().unwrap();
        assert!(error.starts_with("Mailjet error: 401"), "{error}");
        assert!(error.contains("Sending has been suspended"), "{error}");
    }

    #[tokio::test]
    async fn acknowledgement_failure_fails_the_request() {
        let app = TestApp::spawn_with(|mail| mail.allow_applicant_email = true).await;
        app.mailjet.respond_with(503);

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 500);
        assert!(!res.body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_provider_is_reported_as_server_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = listener.local_addr().unwrap();
        drop(listener);

        let app = TestApp::spawn_with(|mail| mail.base_url = format!("http://{dead}")).await;

        let res = app.post_json(routes::JOIN, &valid_application()).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "MAIL_DELIVERY_FAILED");
        let error = res.body["error"].as_str().unwrap();
        assert!(error.starts_with("Mailjet request failed"), "{error}");
    }
}
