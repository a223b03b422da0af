use crate::helpers::{
    spawn_app, spawn_app_with, spawn_app_with_smtp_relay, spawn_app_with_unreachable_relay,
    subscription_body, RelayBehaviour,
};

use std::time::Duration;

use feelmitra_notifier::email_templates;

fn failure_body() -> serde_json::Value {
    serde_json::json!({ "success": false, "error": "Failed to send emails" })
}

#[tokio::test]
async fn subscribe_returns_200_and_sends_two_emails_for_valid_request() {
    let app = spawn_app().await;

    let response = app.post_subscribe(&subscription_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));

    let attempts = app.relay.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].to.as_ref(), "ursula_le_guin@gmail.com");
    assert_eq!(attempts[1].to.as_ref(), "admin@feelmitra.in");
    for email in &attempts {
        assert_eq!(email.from.as_ref(), "feel@feelmitra.in");
        assert_eq!(email.sender_name, "Feel Mitra");
    }
}

#[tokio::test]
async fn admin_notice_names_the_subscriber_and_welcome_email_does_not() {
    let app = spawn_app().await;

    app.post_subscribe(&subscription_body()).await;

    let attempts = app.relay.attempts();
    let (welcome, notice) = (&attempts[0], &attempts[1]);
    assert_eq!(welcome.subject, email_templates::WELCOME_SUBJECT);
    assert_eq!(welcome.html_body, email_templates::render_welcome_email());
    assert!(!welcome.html_body.contains("ursula_le_guin@gmail.com"));

    assert_eq!(notice.subject, email_templates::ADMIN_NOTICE_SUBJECT);
    assert!(notice
        .html_body
        .contains("<strong>Email:</strong> ursula_le_guin@gmail.com"));
    assert!(notice.html_body.contains("<strong>Date:</strong> "));
}

#[tokio::test]
async fn subscribe_returns_500_when_the_relay_rejects_authentication() {
    let app = spawn_app_with(RelayBehaviour::RejectAuthentication).await;

    let response = app.post_subscribe(&subscription_body()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
    // No retry, and the admin notice is never attempted
    assert_eq!(app.relay.attempts().len(), 1);
}

#[tokio::test]
async fn subscribe_returns_500_when_only_the_admin_notice_fails() {
    let app = spawn_app_with(RelayBehaviour::FailAttempt(1)).await;

    let response = app.post_subscribe(&subscription_body()).await;

    // The welcome email went out, the request is still reported as failed
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
    let attempts = app.relay.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].to.as_ref(), "ursula_le_guin@gmail.com");
}

#[tokio::test]
async fn subscribe_returns_500_without_sending_when_fields_are_missing_or_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({
                "adminEmail": "admin@feelmitra.in",
                "senderEmail": "feel@feelmitra.in"
            }),
            "missing email",
        ),
        (
            serde_json::json!({
                "email": "",
                "adminEmail": "admin@feelmitra.in",
                "senderEmail": "feel@feelmitra.in"
            }),
            "empty email",
        ),
        (
            serde_json::json!({
                "email": "definitely-not-an-email",
                "adminEmail": "admin@feelmitra.in",
                "senderEmail": "feel@feelmitra.in"
            }),
            "invalid email",
        ),
        (
            serde_json::json!({
                "email": "ursula_le_guin@gmail.com",
                "senderEmail": "feel@feelmitra.in"
            }),
            "missing adminEmail",
        ),
        (
            serde_json::json!({
                "email": "ursula_le_guin@gmail.com",
                "adminEmail": "admin@feelmitra.in"
            }),
            "missing senderEmail",
        ),
        (
            serde_json::json!({
                "email": 42,
                "adminEmail": "admin@feelmitra.in",
                "senderEmail": "feel@feelmitra.in"
            }),
            "email of the wrong type",
        ),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_subscribe(&invalid_body).await;

        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 when the payload had {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, failure_body(), "Unexpected body for {}", description);
    }

    assert!(app.relay.attempts().is_empty());
}

#[tokio::test]
async fn subscribe_returns_the_failure_body_for_unparseable_json() {
    let app = spawn_app().await;

    let response = app
        .post_subscribe_raw("application/json", "{ this is not json")
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
    assert!(app.relay.attempts().is_empty());
}

#[tokio::test]
async fn subscribe_returns_the_failure_body_for_a_non_json_content_type() {
    let app = spawn_app().await;

    let body = concat!(
        r#"{"email":"ursula_le_guin@gmail.com","#,
        r#""adminEmail":"admin@feelmitra.in","senderEmail":"feel@feelmitra.in"}"#,
    );
    let response = app.post_subscribe_raw("text/plain", body).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
    assert!(app.relay.attempts().is_empty());
}

#[tokio::test]
async fn subscribing_twice_sends_everything_twice() {
    let app = spawn_app().await;

    app.post_subscribe(&subscription_body()).await;
    app.post_subscribe(&subscription_body()).await;

    let recipients: Vec<String> = app
        .relay
        .attempts()
        .iter()
        .map(|email| email.to.as_ref().to_string())
        .collect();
    assert_eq!(
        recipients,
        vec![
            "ursula_le_guin@gmail.com",
            "admin@feelmitra.in",
            "ursula_le_guin@gmail.com",
            "admin@feelmitra.in",
        ]
    );
}

#[tokio::test]
async fn subscribe_returns_500_when_the_relay_is_unreachable() {
    let address = spawn_app_with_unreachable_relay().await;

    let response = reqwest::Client::new()
        .post(&format!("{}/api/subscribe", address))
        .json(&subscription_body())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
}

#[tokio::test]
async fn subscribe_returns_500_when_the_relay_accepts_but_never_answers() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    // Hold every connection open without ever sending the SMTP greeting
    let _silent_relay = tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            connections.push(socket);
        }
    });
    let address = spawn_app_with_smtp_relay(port).await;

    let request = reqwest::Client::new()
        .post(&format!("{}/api/subscribe", address))
        .json(&subscription_body())
        .send();
    let response = tokio::time::timeout(Duration::from_secs(8), request)
        .await
        .expect("The request hung on a silent relay")
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, failure_body());
}
