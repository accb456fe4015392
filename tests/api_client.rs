use std::sync::Arc;
use std::time::Duration;

use amphibians_tui::{
    Amphibian, AmphibianApi, AmphibianViewModel, AmphibiansRepository, ApiConfig, ApiError,
    ErrorKind, NetworkAmphibiansRepository, UiState,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ONE_FROG: &str =
    r#"[{"name":"Frog","type":"Toad","description":"A hoppy friend.","imgSrc":""}]"#;

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/amphibians"))
        .respond_with(template)
        .expect(1..)
        .mount(&server)
        .await;
    server
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

fn api_for(server: &MockServer) -> AmphibianApi {
    AmphibianApi::new(&ApiConfig::default().with_base_url(server.uri())).expect("valid config")
}

async fn settle(view_model: &AmphibianViewModel) -> UiState {
    let mut rx = view_model.ui_state();
    let state = rx.wait_for(|s| !s.is_loading()).await.unwrap().clone();
    state
}

#[tokio::test]
async fn decodes_single_record() {
    let server = serve(json(ONE_FROG)).await;

    let amphibians = api_for(&server).get_amphibians().await.unwrap();
    assert_eq!(
        amphibians,
        vec![Amphibian::new("Frog", "Toad", "A hoppy friend.", "")]
    );
}

#[tokio::test]
async fn keeps_server_order_and_ignores_unknown_fields() {
    let body = r#"[
        {"name":"Roraima Bush Toad","type":"Toad","description":"d1","imgSrc":"a.png","extra":1},
        {"name":"Black Warty Newt","type":"Newt","description":"d2","imgSrc":"b.png"},
        {"name":"Pacific Chorus Frog","type":"Frog","description":"d3","imgSrc":"c.png"}
    ]"#;
    let server = serve(json(body)).await;

    let names: Vec<String> = api_for(&server)
        .get_amphibians()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(
        names,
        ["Roraima Bush Toad", "Black Warty Newt", "Pacific Chorus Frog"]
    );
}

#[tokio::test]
async fn server_error_is_protocol_failure() {
    let server = serve(ResponseTemplate::new(500)).await;

    let err = api_for(&server).get_amphibians().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn missing_field_is_protocol_failure() {
    let server = serve(json(r#"[{"name":"Frog","type":"Toad"}]"#)).await;

    let err = api_for(&server).get_amphibians().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn timeout_is_network_failure() {
    let server = serve(json(ONE_FROG).set_delay(Duration::from_secs(2))).await;
    let config = ApiConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));

    let err = AmphibianApi::new(&config)
        .unwrap()
        .get_amphibians()
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn connection_refused_is_network_failure() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = ApiConfig::default().with_base_url(format!("http://127.0.0.1:{port}/"));

    let err = AmphibianApi::new(&config)
        .unwrap()
        .get_amphibians()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn repository_passes_result_through() {
    let server = serve(json("[]")).await;
    let repository = NetworkAmphibiansRepository::new(api_for(&server));

    assert!(repository.get_amphibians().await.unwrap().is_empty());
}

#[tokio::test]
async fn view_model_reaches_success() {
    let server = serve(json(ONE_FROG)).await;
    let repository = Arc::new(NetworkAmphibiansRepository::new(api_for(&server)));

    let view_model = AmphibianViewModel::new(repository);
    assert_eq!(view_model.current_state(), UiState::Loading);
    assert_eq!(
        settle(&view_model).await,
        UiState::Success(vec![Amphibian::new("Frog", "Toad", "A hoppy friend.", "")])
    );
}

#[tokio::test]
async fn view_model_reaches_error_on_http_500() {
    let server = serve(ResponseTemplate::new(500)).await;
    let repository = Arc::new(NetworkAmphibiansRepository::new(api_for(&server)));

    let view_model = AmphibianViewModel::new(repository);
    assert_eq!(settle(&view_model).await, UiState::Error);
}

#[tokio::test]
async fn view_model_reaches_error_on_timeout() {
    let server = serve(json(ONE_FROG).set_delay(Duration::from_secs(2))).await;
    let config = ApiConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let repository = Arc::new(NetworkAmphibiansRepository::new(
        AmphibianApi::new(&config).unwrap(),
    ));

    let view_model = AmphibianViewModel::new(repository);
    assert_eq!(settle(&view_model).await, UiState::Error);
}
