use crate::helpers::{spawn_app, spawn_app_with, valid_consultation};
use wiremock::matchers::{any, bearer_token, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn consultation_returns_a_200_for_a_valid_request() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(bearer_token("re_test_key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_consultation(&valid_consultation()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "message": "Email sent successfully" })
    );
}

#[tokio::test]
async fn consultation_email_goes_to_the_admin_with_client_as_reply_to() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_consultation(&valid_consultation()).await;

    let email_request = &app
        .email_server
        .received_requests()
        .await
        .expect("missing email request")[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();

    assert_eq!(body["from"], "noreply@axiwatt.com");
    assert_eq!(body["to"], serde_json::json!(["consultations@axiwatt.com"]));
    assert_eq!(body["reply_to"], "ursula_le_guin@gmail.com");
    assert_eq!(
        body["subject"],
        "New Consultation Request from Ursula Le Guin"
    );
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("Phone: +1 503 555 0100"));
    assert!(text.contains("Estate Location: Portland, Oregon"));
    assert!(text.contains("Solar pergola over the pool house"));
    assert!(text.contains("Submitted at: "));
}

#[tokio::test]
async fn consultation_returns_a_400_when_required_fields_are_missing() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            serde_json::json!({ "email": "ursula@gmail.com", "estate_location": "Oregon" }),
            "missing the full name",
        ),
        (
            serde_json::json!({ "full_name": "Ursula", "estate_location": "Oregon" }),
            "missing the email",
        ),
        (
            serde_json::json!({ "full_name": "Ursula", "email": "ursula@gmail.com", "estate_location": "" }),
            "an empty estate location",
        ),
        (serde_json::json!({}), "no fields at all"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_consultation(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Missing required fields");
    }
}

#[tokio::test]
async fn consultation_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let mut payload = valid_consultation();
    payload["email"] = "definitely-not-an-email".into();

    let response = app.post_consultation(&payload).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid field");
    assert!(body["details"].as_str().unwrap().contains("definitely-not-an-email"));
}

#[tokio::test]
async fn consultation_returns_a_400_for_a_malformed_body() {
    let app = spawn_app().await;

    let response = app.post_consultation_raw("{ this is not json").await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn consultation_returns_a_400_for_a_field_of_the_wrong_type() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let mut consultation = valid_consultation();
    consultation["phone"] = serde_json::json!(5035550100u64);

    let response = app.post_consultation(&consultation).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Invalid field", "details": "Phone must be a string" })
    );
}

#[tokio::test]
async fn consultation_returns_a_json_413_for_an_oversized_body() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let mut consultation = valid_consultation();
    consultation["objectives"] = serde_json::json!("solar ".repeat(50_000));

    let response = app.post_consultation(&consultation).await;

    assert_eq!(413, response.status().as_u16());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Request body too large");
}

#[tokio::test]
async fn consultation_returns_a_500_when_resend_rejects_the_email() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("domain not verified"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_consultation(&valid_consultation()).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(
        body["details"],
        "Resend API error: 403 - domain not verified"
    );
}

#[tokio::test]
async fn consultation_returns_a_500_when_no_api_key_is_configured() {
    let app = spawn_app_with(|c| c.email_client.authorization_token = None).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_consultation(&valid_consultation()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email service not configured");
}

#[tokio::test]
async fn validation_runs_before_the_configuration_check() {
    let app = spawn_app_with(|c| c.email_client.authorization_token = None).await;

    let response = app.post_consultation(&serde_json::json!({})).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn preflight_request_advertises_cors_policy() {
    let app = spawn_app().await;

    let response = app
        .request(reqwest::Method::OPTIONS, "/api/send-consultation-email")
        .await;

    assert_eq!(200, response.status().as_u16());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = spawn_app().await;

    for method in [reqwest::Method::GET, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let response = app
            .request(method.clone(), "/api/send-consultation-email")
            .await;

        assert_eq!(
            405,
            response.status().as_u16(),
            "{} was not rejected",
            method
        );
        assert_eq!(response.text().await.unwrap(), "Method not allowed");
    }
}
