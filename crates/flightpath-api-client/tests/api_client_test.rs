use flightpath_api_client::ApiClient;
use flightpath_core::{FlightPathError, StaticConnectionStore};
use mockito::{Matcher, Server};
use serde_json::json;

const API_KEY: &str = "test_api_key";

fn client_for(server: &Server) -> ApiClient {
    let store =
        StaticConnectionStore::new().with_connection("fp", Some(server.url().as_str()), Some(API_KEY));
    ApiClient::from_connection("fp", &store).unwrap()
}

fn expect_post(server: &mut Server, path: &str, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("POST", path)
        .match_header("access_token", API_KEY)
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .expect(1)
}

#[tokio::test]
async fn test_register_file() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/csvpath/register_file",
        json!({
            "project_name": "test_project",
            "name": "test_file.csv",
            "file_location": "/data/test_file.csv"
        }),
    )
    .with_body(r#"{"reference": "test_ref_123"}"#)
    .create_async()
    .await;

    let client = client_for(&server);
    let response = client
        .register_file("test_project", "test_file.csv", "/data/test_file.csv", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.reference().as_deref(), Some("test_ref_123"));
}

#[tokio::test]
async fn test_register_file_with_template() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/csvpath/register_file",
        json!({
            "project_name": "test_project",
            "name": "orders",
            "file_location": "/data/orders.csv",
            "template": ":1/:2/:filename"
        }),
    )
    .with_body(r#"{"reference": "$orders.files.today"}"#)
    .create_async()
    .await;

    let client = client_for(&server);
    let response = client
        .register_file("test_project", "orders", "/data/orders.csv", Some(":1/:2/:filename"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.reference().as_deref(), Some("$orders.files.today"));
}

#[tokio::test]
async fn test_register_and_run() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/csvpath/register_and_run",
        json!({
            "project_name": "test_project",
            "file_location": "/data/new_file.jsonl",
            "file_name": "new_file.jsonl",
            "csvpaths_group_name": "my_pipeline",
            "method": "collect_paths"
        }),
    )
    .with_body(
        r#"{"message": "success", "run_reference": "run_ref_456", "register_reference": "reg_ref_789"}"#,
    )
    .create_async()
    .await;

    let client = client_for(&server);
    let response = client
        .register_and_run(
            "test_project",
            "/data/new_file.jsonl",
            "new_file.jsonl",
            "my_pipeline",
            None,
            None,
            None,
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.register_reference().as_deref(), Some("reg_ref_789"));
    assert_eq!(response.run_reference().as_deref(), Some("run_ref_456"));
    assert_eq!(response.0["message"], json!("success"));
}

#[tokio::test]
async fn test_register_and_run_with_options() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/csvpath/register_and_run",
        json!({
            "project_name": "test_project",
            "file_location": "/data/new_file.jsonl",
            "file_name": "new_file.jsonl",
            "csvpaths_group_name": "my_pipeline",
            "method": "fast_forward_paths",
            "file_template": ":filename",
            "run_template": "daily/:run_dir"
        }),
    )
    .with_body(r#"{"run_reference": "r", "register_reference": "g"}"#)
    .create_async()
    .await;

    let client = client_for(&server);
    client
        .register_and_run(
            "test_project",
            "/data/new_file.jsonl",
            "new_file.jsonl",
            "my_pipeline",
            Some("fast_forward_paths"),
            Some(":filename"),
            Some("daily/:run_dir"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_files() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/find/find_files",
        json!({"project_name": "test_project", "reference": "$orders.files.:all"}),
    )
    .with_body(r#"{"paths": ["/inputs/orders/a.csv", "/inputs/orders/b.csv"]}"#)
    .create_async()
    .await;

    let client = client_for(&server);
    let response = client
        .find_files("test_project", "$orders.files.:all")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        response.paths(),
        vec!["/inputs/orders/a.csv", "/inputs/orders/b.csv"]
    );
}

#[tokio::test]
async fn test_get_file() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "/find/get_file",
        json!({"project_name": "test_project", "reference": "file_ref_xyz"}),
    )
    .with_body(r#"{"file": "YmFzZTY0IGVuY29kZWQgY29udGVudA=="}"#)
    .create_async()
    .await;

    let client = client_for(&server);
    let response = client.get_file("test_project", "file_ref_xyz").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.file(), Some("YmFzZTY0IGVuY29kZWQgY29udGVudA=="));
}

#[tokio::test]
async fn test_find_files_null_paths_is_not_a_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/find/find_files")
        .with_status(200)
        .with_body(r#"{"paths": null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.find_files("test_project", "$ref").await.unwrap();

    assert!(response.paths().is_empty());
    assert_eq!(response.0, json!({"paths": null}));
}

#[tokio::test]
async fn test_find_files_array_body_is_passed_through() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/find/find_files")
        .with_status(200)
        .with_body(r#"["/a.csv"]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.find_files("test_project", "$ref").await.unwrap();

    assert_eq!(response.0, json!(["/a.csv"]));
    assert!(response.paths().is_empty());
}

#[tokio::test]
async fn test_register_file_numeric_reference() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/csvpath/register_file")
        .with_status(200)
        .with_body(r#"{"reference": 42}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .register_file("test_project", "test_file.csv", "/data/test_file.csv", None)
        .await
        .unwrap();

    assert_eq!(response.reference().as_deref(), Some("42"));
    assert_eq!(response.0, json!({"reference": 42}));
}

#[tokio::test]
async fn test_api_call_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/csvpath/register_file")
        .with_status(400)
        .with_body("project not found")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .register_file("test_project", "test_file.csv", "/data/test_file.csv", None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_client_error());
    assert!(matches!(err, FlightPathError::ApiCall(_)));
    let msg = err.to_string();
    assert!(msg.contains("FlightPath Server API call failed"));
    assert!(msg.contains("400"));
    assert!(msg.contains("project not found"));
}

#[tokio::test]
async fn test_api_call_json_decode_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/csvpath/register_file")
        .with_status(200)
        .with_body("Invalid JSON response")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .register_file("test_project", "test_file.csv", "/data/test_file.csv", None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_client_error());
    match &err {
        FlightPathError::InvalidResponse { body, .. } => {
            assert_eq!(body, "Invalid JSON response")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err
        .to_string()
        .contains("Failed to decode JSON response from FlightPath Server"));
}

#[tokio::test]
async fn test_unreachable_server() {
    let store = StaticConnectionStore::new().with_connection(
        "fp",
        Some("http://127.0.0.1:1"),
        Some(API_KEY),
    );
    let client = ApiClient::from_connection("fp", &store).unwrap();
    let err = client.find_files("p", "r").await.unwrap_err();
    assert!(matches!(err, FlightPathError::ApiCall(_)));
}
