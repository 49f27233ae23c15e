use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn teams_are_listed_in_display_order() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::TEAMS).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!([
            {"id": "web", "label": "Web Development Team"},
            {"id": "ai", "label": "AI Team"},
            {"id": "embedded", "label": "Embedded Systems Team"},
            {"id": "cybersecurity", "label": "Cyber Security Team"},
        ])
    );
}
