use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("DOCTYPE") || body.contains("<html"), "Should contain HTML");
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(format!("{}/api/health", server.url()))
        .await
        .expect("Failed to call health")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("OK"));
}

#[tokio::test]
async fn test_config_reports_no_gate_without_passwords() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(format!("{}/api/config", server.url()))
        .await
        .expect("Failed to call config")
        .text()
        .await
        .expect("Failed to read body");
    let value: serde_json::Value = serde_json::from_str(&body).expect("config is JSON");
    assert_eq!(value["password_gate"], serde_json::Value::Bool(false));
}
