use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with, SIGNUP_PATH};

fn provider_reply(result: &str, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "result": result, "msg": msg }))
}

#[tokio::test]
async fn subscribe_forwards_email_and_first_name_to_the_mailing_list() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(SIGNUP_PATH))
        .and(query_param("EMAIL", "a@b.com"))
        .and(query_param("FNAME", "Jane"))
        .respond_with(provider_reply("success", "Thank you for subscribing!"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_tags_the_signup_with_the_page_it_came_from() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .and(query_param("PATHNAME", "/blog-post-1"))
        .respond_with(provider_reply("success", "Thank you for subscribing!"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    app.post_subscriptions_form(&json!({
        "email": "a@b.com",
        "first_name": "Jane",
        "pathname": "/blog-post-1",
    }))
    .await;
}

#[tokio::test]
async fn subscribe_shows_the_provider_message() {
    let app = spawn_app_with(|c| c.site.trust_provider_html = true).await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("success", "<p>Thanks!</p>"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await;
    let html = response.text().await.unwrap();

    assert!(html.contains(r#"<div class="sub-result"><p>Thanks!</p></div>"#));
    assert!(html.contains(r#"<button type="submit">subscribe</button>"#));
}

#[tokio::test]
async fn subscribe_escapes_the_provider_message_unless_trusted() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("success", "<script>alert(1)</script>"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let html = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await
        .text()
        .await
        .unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn subscribe_keeps_what_the_visitor_typed() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("success", "ok"))
        .mount(&app.mailing_list_server)
        .await;

    let html = app
        .post_subscriptions("email=%20a%40b.com&first_name=Jane%20".into())
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"value=" a@b.com""#));
    assert!(html.contains(r#"value="Jane ""#));
}

#[tokio::test]
async fn subscribe_shows_the_rejection_message_from_the_provider() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("error", "a@b.com is already subscribed to list."))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("sub-error"));
    assert!(html.contains("a@b.com is already subscribed to list."));
    assert!(!html.contains("sub-result"));
}

#[tokio::test]
async fn subscribe_shows_an_error_when_the_provider_is_down() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Sorry, we could not sign you up right now."));
    assert!(!html.contains("sub-result"));
}

#[tokio::test]
async fn subscribe_shows_an_error_when_the_provider_is_too_slow() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("success", "late").set_delay(Duration::from_secs(30)))
        .mount(&app.mailing_list_server)
        .await;

    let html = app
        .post_subscriptions("email=a%40b.com&first_name=Jane".into())
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Sorry, we could not sign you up right now."));
}

#[tokio::test]
async fn subscribe_does_not_validate_the_inputs() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .and(query_param("EMAIL", "not-an-email"))
        .and(query_param("FNAME", ""))
        .respond_with(provider_reply("error", "Please enter a valid email."))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscriptions("email=not-an-email&first_name=".into())
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_returns_a_422_when_fields_are_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("first_name=Jane", "missing the email"),
        ("email=a%40b.com", "missing the first name"),
        ("", "missing both first name and email"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_subscriptions(invalid_body.into()).await;

        assert_eq!(
            422,
            response.status().as_u16(),
            "The API did not fail with 422 Unprocessable Entity when the payload was {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn the_same_visitor_can_subscribe_twice() {
    let app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .respond_with(provider_reply("success", "Thank you for subscribing!"))
        .expect(2)
        .mount(&app.mailing_list_server)
        .await;

    for _ in 0..2 {
        let response = app
            .post_subscriptions("email=a%40b.com&first_name=Jane".into())
            .await;
        assert_eq!(200, response.status().as_u16());
    }
}
