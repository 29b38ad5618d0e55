#![cfg(feature = "sync")]

use claims::{assert_err, assert_ok};
use std::time::{Duration, Instant};
use sendy_client::config::Config;
use sendy_client::error::SendyError;
use sendy_client::{CampaignContent, CampaignOptions, SendyClient, SendyReply, Subscriber};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(installation_url: &str) -> Config {
    Config::builder()
        .list_id("list-1")
        .installation_url(installation_url)
        .api_key("key-1")
        .build()
}

/// The client blocks, so it runs off the runtime driving the mock server.
async fn with_client<R, F>(installation_url: String, f: F) -> R
where
    R: Send + 'static,
    F: FnOnce(SendyClient) -> R + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = SendyClient::new(config(&installation_url)).expect("valid config");
        f(client)
    })
    .await
    .expect("client task panicked")
}

fn campaign_options() -> CampaignOptions {
    CampaignOptions::builder()
        .from_name("Newsletter")
        .from_email("news@example.com")
        .reply_to("reply@example.com")
        .subject("Hello")
        .build()
}

#[tokio::test(flavor = "multi_thread")]
async fn subscribe_posts_an_authenticated_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=jane%40example.com"))
        .and(body_string_contains("name=Jane"))
        .and(body_string_contains("list=list-1"))
        .and(body_string_contains("list_id=list-1"))
        .and(body_string_contains("api_key=key-1"))
        .and(body_string_contains("boolean=true"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&server)
        .await;

    let reply = with_client(server.uri(), |client| {
        let subscriber = Subscriber::builder()
            .email("jane@example.com")
            .name("Jane")
            .build();
        client.subscribe(subscriber)
    })
    .await;

    assert_eq!(reply, SendyReply::success("Subscribed."));
}

#[tokio::test(flavor = "multi_thread")]
async fn already_subscribed_is_a_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Already subscribed."))
        .expect(2)
        .mount(&server)
        .await;

    let (subscribed, updated) = with_client(server.uri(), |client| {
        (
            client.subscribe([("email", "jane@example.com")]),
            client.update("jane@example.com", [("name", "Jane Doe")]),
        )
    })
    .await;

    assert_eq!(subscribed, SendyReply::success("Already subscribed."));
    assert_eq!(updated, SendyReply::success("Already subscribed."));
}

#[tokio::test(flavor = "multi_thread")]
async fn paths_resolve_against_an_installation_directory() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sendy/unsubscribe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/subscribers/delete.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&server)
        .await;

    let (unsubscribed, deleted) = with_client(format!("{}/sendy/", server.uri()), |client| {
        (
            client.unsubscribe("jane@example.com"),
            client.delete("jane@example.com"),
        )
    })
    .await;

    assert_eq!(unsubscribed, SendyReply::success("Unsubscribed"));
    assert_eq!(deleted, SendyReply::success("Deleted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn status_and_count_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscribers/subscription-status.php"))
        .and(body_string_contains("email=nobody%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Email does not exist in list"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/subscribers/active-subscriber-count.php"))
        .and(body_string_contains("api_key=key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1337"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, count) = with_client(server.uri(), |client| {
        (client.status("nobody@example.com"), client.count())
    })
    .await;

    assert_eq!(status, "Email does not exist in list");
    assert_eq!(count, "1337");
}

#[tokio::test(flavor = "multi_thread")]
async fn unexpected_replies_are_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let replies = with_client(server.uri(), |client| {
        vec![
            client.subscribe([("email", "jane@example.com")]),
            client.unsubscribe("jane@example.com"),
            client.delete("jane@example.com"),
        ]
    })
    .await;

    for reply in replies {
        assert_eq!(reply, SendyReply::failure("Invalid API key"));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_becomes_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (reply, count) = with_client(server.uri(), |client| {
        (client.subscribe([("email", "jane@example.com")]), client.count())
    })
    .await;

    let expected = "HTTP request failed: Status: 500 Internal Server Error";
    assert_eq!(reply, SendyReply::failure(expected));
    assert_eq!(count, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn latin1_bodies_reach_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscribers/subscription-status.php"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"Abonn\xe9".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let status = with_client(server.uri(), |client| client.status("jane@example.com")).await;

    assert_eq!(status, "Abonn\u{FFFD}");
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_server_times_out_after_five_seconds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("1")
                .set_delay(Duration::from_secs(6)),
        )
        .mount(&server)
        .await;

    let (reply, elapsed) = with_client(server.uri(), |client| {
        let started = Instant::now();
        let reply = client.subscribe([("email", "jane@example.com")]);
        (reply, started.elapsed())
    })
    .await;

    assert!(!reply.status);
    assert!(reply.message.starts_with("HTTP error"), "{}", reply.message);
    assert!(elapsed >= Duration::from_millis(4900), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(6), "{elapsed:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_campaign_posts_options_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/campaigns/create.php"))
        .and(body_string_contains("from_name=Newsletter"))
        .and(body_string_contains("list_ids=list-1"))
        .and(body_string_contains("send_campaign=0"))
        .and(body_string_contains("html_text=%3Cp%3EHello%3C%2Fp%3E"))
        .and(body_string_contains("api_key=key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Campaign created"))
        .expect(1)
        .mount(&server)
        .await;

    let reply = with_client(server.uri(), |client| {
        let content = CampaignContent::builder().html_text("<p>Hello</p>").build();
        client.create_campaign(campaign_options(), content, false)
    })
    .await;

    assert_ok!(&reply);
    assert_eq!(reply.unwrap(), "Campaign created");
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_campaign_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Campaign created"))
        .expect(0)
        .mount(&server)
        .await;

    let reply = with_client(server.uri(), |client| {
        let content = CampaignContent::builder().html_text("<p>Hello</p>").build();
        client.create_campaign(campaign_options(), content, true)
    })
    .await;

    assert_err!(&reply);
    assert!(matches!(reply, Err(SendyError::ValidationError("brand_id"))));
}

#[tokio::test(flavor = "multi_thread")]
async fn connection_failures_are_returned_as_text() {
    let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = closed.local_addr().unwrap();
    drop(closed);

    let (reply, status, campaign) = with_client(format!("http://{address}"), |client| {
        let content = CampaignContent::builder().html_text("<p>Hello</p>").build();
        (
            client.unsubscribe("jane@example.com"),
            client.status("jane@example.com"),
            client.create_campaign(campaign_options(), content, false),
        )
    })
    .await;

    assert!(!reply.status);
    assert!(reply.message.starts_with("HTTP error"), "{}", reply.message);
    assert!(status.starts_with("HTTP error"), "{status}");
    assert!(campaign.unwrap().starts_with("HTTP error"));
}

#[test]
fn construction_requires_every_value() {
    let config = Config::builder()
        .list_id("list-1")
        .installation_url("https://newsletter.example.com")
        .build();
    let err = SendyClient::new(config).err().unwrap();
    assert!(matches!(err, SendyError::ConfigError("apiKey")));
    assert_eq!(err.to_string(), "[apiKey] is not set");
}
