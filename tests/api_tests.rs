use oceanctl::api::ApiClient;
use oceanctl::commands::{self, list_droplets};
use oceanctl::config::Credentials;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds() -> Credentials {
    Credentials {
        client_id: "test-client-id".into(),
        api_key: "test-api-key".into(),
    }
}

#[tokio::test]
async fn get_always_sends_credentials_in_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/droplets/"))
        .and(query_param("client_id", "test-client-id"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"droplets":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri(), creds()).unwrap();
    let resp = api.get("/droplets/", &[]).await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.body, r#"{"droplets":[]}"#);
}

#[tokio::test]
async fn call_specific_params_ride_alongside_the_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/47188/records/new"))
        .and(query_param("client_id", "test-client-id"))
        .and(query_param("api_key", "test-api-key"))
        .and(query_param("record_type", "A"))
        .and(query_param("data", "192.241.245.76"))
        .and(query_param("name", "dev"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri(), creds()).unwrap();
    let resp = api
        .get(
            "/domains/47188/records/new",
            &[
                ("record_type", "A"),
                ("data", "192.241.245.76"),
                ("name", "dev"),
            ],
        )
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn non_200_status_and_body_pass_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/droplets/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Access Denied"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri(), creds()).unwrap();
    let resp = api.get("/droplets/", &[]).await.unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.status, 401);
    assert_eq!(resp.body, "Access Denied");
}

#[tokio::test]
async fn read_command_turns_non_200_into_an_api_error_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/droplets/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri(), creds()).unwrap();
    match list_droplets::run(&api).await.unwrap() {
        commands::Outcome::ApiError { response, .. } => {
            assert_eq!(response.status, 500);
            assert_eq!(response.body, "boom");
        }
        other => panic!("expected an api error outcome, got {other:?}"),
    }
}
