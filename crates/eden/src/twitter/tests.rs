//! Endpoint marshaling tests against the recording transport.

use serde_json::json;

use super::fake::RecordingTransport;
use super::{Method, ProfileImageSize, TwitterClient, TwitterConfig};
use crate::error::EdenError;

fn client(transport: RecordingTransport) -> TwitterClient<RecordingTransport> {
    let config = TwitterConfig {
        api_url: "https://api.example.test/1".to_string(),
        ..TwitterConfig::default()
    };
    TwitterClient::with_transport(&config, transport).unwrap()
}

fn pairs(request: &super::ApiRequest) -> Vec<(&str, &str)> {
    request
        .params
        .as_pairs()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[test]
fn endpoint_joins_under_base_path() {
    let client = client(RecordingTransport::new());
    assert_eq!(
        client.endpoint("users/show.json").unwrap().as_str(),
        "https://api.example.test/1/users/show.json"
    );
}

// ==================== accounts ====================

#[tokio::test]
async fn get_limit_decodes_status() {
    let client = client(RecordingTransport::new().reply_json(json!({
        "remaining_hits": 149,
        "hourly_limit": 150,
        "reset_time_in_seconds": 1300000000u64,
        "reset_time": "Sun Mar 13 07:06:40 +0000 2011"
    })));

    let status = client.accounts().get_limit().await.unwrap();
    assert_eq!(status.remaining_hits, 149);

    let request = client.transport().last();
    assert_eq!(request.method, Method::Get);
    assert!(request.url.path().ends_with("/account/rate_limit_status.json"));
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn get_credentials_sends_only_raised_flags() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 1, "screen_name": "eden"})));

    let user = client.accounts().skip_status().get_credentials().await.unwrap();
    assert_eq!(user.screen_name, "eden");

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/account/verify_credentials.json"));
    assert_eq!(pairs(&request), vec![("skip_status", "true")]);
}

#[tokio::test]
async fn log_out_posts_without_params() {
    let client = client(RecordingTransport::new().reply_json(json!({"request": "/1/account/end_session.json"})));

    let body = client.accounts().log_out().await.unwrap();
    assert_eq!(body["request"], "/1/account/end_session.json");

    let request = client.transport().last();
    assert_eq!(request.method, Method::Post);
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn update_profile_params_in_order() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7, "location": "Manila"})));

    let user = client
        .accounts()
        .include_entities()
        .set_name("Eden")
        .set_location("Manila")
        .set_description("PHP, then Rust")
        .update_profile()
        .await
        .unwrap();
    assert_eq!(user.location.as_deref(), Some("Manila"));

    let request = client.transport().last();
    assert_eq!(request.method, Method::Post);
    assert!(request.url.path().ends_with("/account/update_profile.json"));
    assert_eq!(
        pairs(&request),
        vec![
            ("include_entities", "true"),
            ("name", "Eden"),
            ("location", "Manila"),
            ("description", "PHP, then Rust"),
        ]
    );
}

#[tokio::test]
async fn update_profile_with_only_flags_still_posts() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7})));

    client.accounts().skip_status().update_profile().await.unwrap();

    let request = client.transport().last();
    assert_eq!(request.method, Method::Post);
    assert!(request.url.path().ends_with("/account/update_profile.json"));
    assert_eq!(pairs(&request), vec![("skip_status", "true")]);
}

#[test]
fn profile_text_limits_are_inclusive() {
    let client = client(RecordingTransport::new());
    let cases = [
        ("name", 20),
        ("url", 100),
        ("location", 30),
        ("description", 160),
    ];
    for (field, max) in cases {
        let set = |text: &str| {
            let accounts = client.accounts();
            match field {
                "name" => accounts.set_name(text).validate(),
                "url" => accounts.set_url(text).validate(),
                "location" => accounts.set_location(text).validate(),
                _ => accounts.set_description(text).validate(),
            }
        };

        assert!(set(&"é".repeat(max)).is_ok(), "{field} at {max}");

        let err = set(&"x".repeat(max + 1)).unwrap_err();
        assert!(err.is_validation());
        assert!(
            err.to_string().contains(&format!("{field} is {} characters, at most {max}", max + 1)),
            "{err}"
        );
    }
}

#[tokio::test]
async fn too_long_name_is_reported_at_terminal_call() {
    let client = client(RecordingTransport::new());
    let err = client
        .accounts()
        .set_name("a name that is far too long for twitter")
        .update_profile()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at most 20"), "{err}");
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn update_background_params() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7})));

    client
        .accounts()
        .use_image()
        .set_image("iVBORw0KGgo=")
        .set_tile(true)
        .update_background()
        .await
        .unwrap();

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/account/update_profile_background_image.json"));
    assert_eq!(
        pairs(&request),
        vec![("use", "true"), ("image", "iVBORw0KGgo="), ("tile", "true")]
    );
}

#[tokio::test]
async fn update_background_without_settings_still_posts() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7})));

    client.accounts().update_background().await.unwrap();

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/account/update_profile_background_image.json"));
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn blank_image_blocks_background_update() {
    let client = client(RecordingTransport::new());
    let err = client.accounts().set_image("  ").update_background().await.unwrap_err();
    assert!(err.is_validation());
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn update_color_normalizes_and_skips_unset() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7})));

    client
        .accounts()
        .set_background_color("#c0deed")
        .set_text_color("333")
        .update_color()
        .await
        .unwrap();

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/account/update_profile_colors.json"));
    assert_eq!(
        pairs(&request),
        vec![
            ("profile_background_color", "C0DEED"),
            ("profile_text_color", "333"),
        ]
    );
}

#[tokio::test]
async fn bad_color_blocks_request() {
    let client = client(RecordingTransport::new());
    let err = client
        .accounts()
        .set_link_color("blue")
        .set_fill_color("fff")
        .update_color()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("link color"), "{err}");
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn update_color_without_colors_still_posts() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 7})));

    client.accounts().include_entities().update_color().await.unwrap();

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/account/update_profile_colors.json"));
    assert_eq!(pairs(&request), vec![("include_entities", "true")]);
}

// ==================== users ====================

#[tokio::test]
async fn lookup_friends_sends_comma_lists() {
    let client = client(RecordingTransport::new().reply_json(json!([
        {"id": 1, "screen_name": "a"},
        {"id": 2, "screen_name": "b"},
        {"id": 3, "screen_name": "c"}
    ])));

    let users = client
        .users()
        .set_ids([1, 2])
        .set_names(["@c"])
        .include_entities()
        .lookup_friends()
        .await
        .unwrap();
    assert_eq!(users.len(), 3);

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/users/lookup.json"));
    assert_eq!(
        pairs(&request),
        vec![
            ("include_entities", "true"),
            ("user_id", "1,2"),
            ("screen_name", "c"),
        ]
    );
}

#[tokio::test]
async fn lookup_friends_limits() {
    let client = client(RecordingTransport::new());
    assert!(client.users().lookup_friends().await.unwrap_err().is_validation());

    let err = client
        .users()
        .set_ids(0..101)
        .lookup_friends()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at most 100"), "{err}");
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn profile_image_returns_final_url() {
    let client = client(
        RecordingTransport::new()
            .reply_redirected("https://a0.twimg.com/profile_images/1/eden_bigger.png"),
    );

    let url = client
        .users()
        .set_name("eden")
        .set_size(ProfileImageSize::Bigger)
        .get_profile_image()
        .await
        .unwrap();
    assert_eq!(url, "https://a0.twimg.com/profile_images/1/eden_bigger.png");

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/users/profile_image.json"));
    assert_eq!(pairs(&request), vec![("screen_name", "eden"), ("size", "bigger")]);
}

#[tokio::test]
async fn profile_image_needs_exactly_one_name() {
    let client = client(RecordingTransport::new());
    assert!(client.users().get_profile_image().await.is_err());
    assert!(client.users().set_names(["a", "b"]).get_profile_image().await.is_err());
}

#[tokio::test]
async fn search_params() {
    let client = client(RecordingTransport::new().reply_json(json!([])));

    let users = client
        .users()
        .set_page(2)
        .set_per_page(20)
        .search("  rust lang ")
        .await
        .unwrap();
    assert!(users.is_empty());

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/users/search.json"));
    assert_eq!(
        pairs(&request),
        vec![("q", "rust lang"), ("page", "2"), ("per_page", "20")]
    );
}

#[tokio::test]
async fn search_validation() {
    let client = client(RecordingTransport::new());
    assert!(client.users().search("   ").await.is_err());
    assert!(client.users().set_per_page(21).search("x").await.is_err());
    assert!(client.users().set_page(0).search("x").await.is_err());
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn get_detail_params() {
    let client = client(RecordingTransport::new().reply_json(json!({"id": 42, "name": "Answer"})));

    let user = client.users().include_entities().get_detail(42).await.unwrap();
    assert_eq!(user.id, 42);

    let request = client.transport().last();
    assert!(request.url.path().ends_with("/users/show.json"));
    assert_eq!(pairs(&request), vec![("user_id", "42"), ("include_entities", "true")]);
}

#[tokio::test]
async fn contributees_and_contributors() {
    let client = client(
        RecordingTransport::new()
            .reply_json(json!([{"id": 5}]))
            .reply_json(json!([{"id": 6}, {"id": 7}])),
    );

    let users = client.users().set_id(9).skip_status();
    let contributees = users.get_contributees().await.unwrap();
    let contributors = users.get_contributors().await.unwrap();
    assert_eq!(contributees.len(), 1);
    assert_eq!(contributors.len(), 2);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.path().ends_with("/users/contributees.json"));
    assert!(requests[1].url.path().ends_with("/users/contributors.json"));
    assert_eq!(pairs(&requests[1]), vec![("user_id", "9"), ("skip_status", "true")]);
}

#[tokio::test]
async fn contributors_target_rules() {
    let client = client(RecordingTransport::new());
    assert!(client.users().get_contributors().await.is_err());
    assert!(client.users().set_ids([1, 2]).get_contributees().await.is_err());
    assert!(client.users().set_name("").get_contributees().await.is_err());
}

#[tokio::test]
async fn transport_errors_pass_through() {
    let client = client(RecordingTransport::new().reply_error(EdenError::Api {
        status: 404,
        message: "User has been suspended".to_string(),
        code: Some(63),
    }));

    let err = client.users().get_detail(1).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unexpected_body_is_a_json_error() {
    let client = client(RecordingTransport::new().reply_json(json!("not a user")));
    let err = client.users().get_detail(1).await.unwrap_err();
    assert!(matches!(err, EdenError::Json(_)));
}
