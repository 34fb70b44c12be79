//! Request shaping, pagination and error handling against a mock Webex API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use futures::TryStreamExt;
use serde_json::json;
use webex_calling_client::api::{LocationListParams, NumberListParams, PeopleListParams};
use webex_calling_client::types::{NumberState, NumberType, Person, TagOperation};
use webex_calling_client::{ClientConfig, ClientError, RetryConfig, WebexCallingApi};
use wiremock::matchers::{
    body_json, header, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> WebexCallingApi {
    let config = ClientConfig::new("test-token")
        .with_base_url(format!("{}/v1", server.uri()))
        .with_retry(RetryConfig { max_retries: 2, base_delay_ms: 1, max_delay_ms: 5 });
    WebexCallingApi::new(config).expect("client")
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}

#[tokio::test]
async fn test_dial_sends_only_destination() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/calls/dial"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header_exists("TrackingID"))
        .and(body_json(json!({"destination": "1234"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"callId": "c1", "callSessionId": "s1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let resp = api.call_controls.dial("1234", None).await.expect("dial");

    assert_eq!(resp.call_id.as_deref(), Some("c1"));
    assert_eq!(resp.call_session_id.as_deref(), Some("s1"));
}

#[tokio::test]
async fn test_tracking_id_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/calls/hangup"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.call_controls.hangup("c1").await.expect("hangup");

    let requests = server.received_requests().await.expect("recording enabled");
    let tracking_id = requests[0].headers.get("TrackingID").expect("tracking header");
    assert!(tracking_id.to_str().unwrap().starts_with("WXC_RS_"));
}

#[tokio::test]
async fn test_location_create_body_is_exact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/locations"))
        .and(query_param_is_missing("orgId"))
        .and(body_json(json!({
            "name": "HQ",
            "timeZone": "America/New_York",
            "announcementLanguage": "en_us"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "loc-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let id = api
        .locations
        .create("HQ", "America/New_York", None, Some("en_us"), None, None)
        .await
        .expect("create");

    assert_eq!(id, "loc-1");
}

#[tokio::test]
async fn test_pagination_follows_link_one_request_per_page() {
    let server = MockServer::start().await;
    let next = format!("<{}/v1/people?max=2&cursor=p2>; rel=\"next\"", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/people"))
        .and(query_param("max", "2"))
        .and(query_param_is_missing("cursor"))
        .and(query_param_is_missing("email"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next.as_str())
                .set_body_json(json!({"items": [{"id": "p1"}, {"id": "p2"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/people"))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "p3"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let params = PeopleListParams { max: Some(2), ..Default::default() };
    let people: Vec<Person> = api.people.list(&params).try_collect().await.expect("list");

    let ids: Vec<_> = people.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, ["p1", "p2", "p3"]);
}

#[tokio::test]
async fn test_pagination_is_lazy() {
    let server = MockServer::start().await;
    let next = format!("<{}/v1/locations?start=1>; rel=\"next\"", server.uri());
    Mock::given(method("GET"))
        .and(path("/v1/locations"))
        .and(query_param_is_missing("start"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next.as_str())
                .set_body_json(json!({"items": [{"id": "l1", "name": "HQ"}]})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut stream = api.locations.list(&LocationListParams::default());
    assert_eq!(request_count(&server).await, 0);

    let first = stream.try_next().await.expect("first page").expect("one item");
    assert_eq!(first.name.as_deref(), Some("HQ"));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_missing_item_key_is_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/telephony/config/numbers"))
        .and(query_param("locationId", "L1"))
        .and(query_param_is_missing("orgId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let params = NumberListParams { location_id: Some("L1".to_string()), ..Default::default() };
    let numbers: Vec<_> = api.numbers.list(&params).try_collect().await.expect("list");

    assert!(numbers.is_empty());
}

#[tokio::test]
async fn test_error_body_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/locations/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "errors": [{"description": "Location not found"}],
            "trackingId": "ROUTER_123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.locations.details("missing", None).await.expect_err("should fail");

    match err {
        ClientError::Rest { status, detail } => {
            assert_eq!(status, 404);
            assert_eq!(detail.description(), Some("Location not found"));
            assert_eq!(detail.tracking_id.as_deref(), Some("ROUTER_123"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "me", "displayName": "Me"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let me = api.people.me(None).await.expect("me");

    assert_eq!(me.display_name.as_deref(), Some("Me"));
}

#[tokio::test]
async fn test_rate_limit_gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.people.me(None).await.expect_err("should give up");

    assert!(matches!(err, ClientError::RateLimited { retry_after: Some(0) }));
}

#[tokio::test]
async fn test_server_error_retried_for_get_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/licenses/lic1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/licenses/lic1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "lic1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/calls/hold"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let license = api.licenses.details("lic1").await.expect("license");
    assert_eq!(license.id.as_deref(), Some("lic1"));

    let err = api.call_controls.hold("c1").await.expect_err("no retry on POST");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_modify_tags_uses_json_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/devices/d1"))
        .and(header("Content-Type", "application/json-patch+json"))
        .and(body_json(json!([{"op": "add", "path": "tags", "value": ["lobby"]}])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "d1", "tags": ["lobby"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let device = api
        .devices
        .modify_tags("d1", TagOperation::Add, vec!["lobby".to_string()], None)
        .await
        .expect("patch");

    assert_eq!(device.tags, Some(vec!["lobby".to_string()]));
}

#[tokio::test]
async fn test_remove_numbers_sends_delete_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/telephony/config/locations/L1/numbers"))
        .and(query_param("orgId", "O1"))
        .and(body_json(json!({"phoneNumbers": ["+14085550100"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.numbers
        .remove("L1", &["+14085550100".to_string()], Some("O1"))
        .await
        .expect("remove");
}

#[tokio::test]
async fn test_route_list_numbers_are_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/telephony/config/premisePstn/routeLists/rl1/numbers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"phoneNumbers": ["+14085550100", "+14085550101"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let numbers: Vec<String> = api
        .premise_pstn
        .list_route_list_numbers("rl1", None, None, None)
        .try_collect()
        .await
        .expect("numbers");

    assert_eq!(numbers, ["+14085550100", "+14085550101"]);
}

#[tokio::test]
async fn test_queue_create_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/config/locations/L1/queues"))
        .and(body_json(json!({"name": "Support", "extension": "4000"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "q1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let queue = webex_calling_client::types::CallQueueDetails {
        name: Some("Support".to_string()),
        extension: Some("4000".to_string()),
        ..Default::default()
    };
    let id = api.call_queue.create("L1", &queue, None).await.expect("create");

    assert_eq!(id, "q1");
}

#[tokio::test]
async fn test_generate_password_omits_unset_generate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/config/locations/L1/actions/generatePassword/invoke"))
        .and(query_param_is_missing("orgId"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exampleSipPassword": "xH8&2kq"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let password = api.location_settings.generate_password("L1", None, None).await.expect("password");

    assert_eq!(password, "xH8&2kq");
}

#[tokio::test]
async fn test_generate_password_sends_requested_rules() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/config/locations/L1/actions/generatePassword/invoke"))
        .and(body_json(json!({"generate": ["SIP"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exampleSipPassword": "p"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let password = api
        .location_settings
        .generate_password("L1", Some(&["SIP".to_string()]), None)
        .await
        .expect("password");

    assert_eq!(password, "p");
}

#[tokio::test]
async fn test_add_numbers_sends_typed_number_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/telephony/config/locations/L1/numbers"))
        .and(body_json(json!({
            "phoneNumbers": ["+14085550100"],
            "numberType": "NUMBER",
            "state": "ACTIVE"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.numbers
        .add(
            "L1",
            &["+14085550100".to_string()],
            Some(NumberType::Number),
            Some(NumberState::Active),
            None,
        )
        .await
        .expect("add");
}
