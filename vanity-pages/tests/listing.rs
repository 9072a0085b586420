use httpmock::prelude::*;
use octocrab::Octocrab;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use vanity_pages::{
    list_repositories, split_by_language, ListingError, PackageSource, Runner, RunnerConfig,
    RunnerError, SiteConfig,
};

fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

fn repository(id: u64, name: &str, language: Value) -> Value {
    json!({
        "id": id,
        "node_id": format!("R_{id}"),
        "name": name,
        "full_name": format!("octo/{name}"),
        "url": format!("https://api.github.com/repos/octo/{name}"),
        "clone_url": format!("https://github.com/octo/{name}.git"),
        "language": language
    })
}

fn repositories() -> Value {
    json!([
        repository(1, "server", json!("Go")),
        repository(2, "scripts", json!("Python")),
        repository(3, "notes", Value::Null),
        repository(4, "cli", json!("Go")),
    ])
}

async fn mock_listing(server: &MockServer, status: u16, body: Value) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octo/repos");
            then.status(status)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

fn client(server: &MockServer) -> Octocrab {
    install_crypto_provider();
    Octocrab::builder()
        .base_uri(server.base_url())
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn lists_repositories_in_service_order() {
    let server = MockServer::start_async().await;
    let mock = mock_listing(&server, 200, repositories()).await;

    let listed = list_repositories(&client(&server), "octo").await.unwrap();

    mock.assert_async().await;
    let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["server", "scripts", "notes", "cli"]);
    assert_eq!(listed[2].language, None);

    let (go, others) = split_by_language(listed);
    assert_eq!(go.len(), 2);
    assert_eq!(others.len(), 2);
}

#[tokio::test]
async fn listing_failure_is_an_error() {
    let server = MockServer::start_async().await;
    mock_listing(
        &server,
        404,
        json!({"message": "Not Found", "documentation_url": "https://docs.github.com"}),
    )
    .await;

    let result = list_repositories(&client(&server), "octo").await;

    assert!(matches!(result, Err(ListingError::GitHubError { .. })));
}

fn account_runner(server: &MockServer, temp: &TempDir) -> Runner {
    install_crypto_provider();
    let template = temp.path().join("template.html");
    fs::write(&template, "{{Domain}} {{Package}} {{Repository}} {{Account}}").unwrap();

    let config = RunnerConfig::new(temp.path().join("out"), template)
        .with_discovery(false)
        .with_api_base(server.base_url());
    let site = SiteConfig {
        domain: "go.example.com".to_string(),
        account: Some("octo".to_string()),
        source: PackageSource::Account("octo".to_string()),
    };

    Runner::new(config, site).unwrap()
}

#[tokio::test]
async fn account_run_emits_pages_for_go_repositories_only() {
    let server = MockServer::start_async().await;
    mock_listing(&server, 200, repositories()).await;
    let temp = TempDir::new().unwrap();

    let summary = account_runner(&server, &temp).run().await.unwrap();

    assert_eq!(summary.repositories_listed, 4);
    assert_eq!(summary.repositories_skipped, 2);
    assert_eq!(summary.repositories_processed, 2);
    assert_eq!(summary.pages_written, 2);

    let out = temp.path().join("out");
    assert_eq!(
        fs::read_to_string(out.join("server.html")).unwrap(),
        "go.example.com server server octo"
    );
    assert!(out.join("cli.html").is_file());
    assert!(!out.join("scripts.html").exists());
    assert!(!out.join("notes.html").exists());
}

#[tokio::test]
async fn account_run_aborts_on_listing_failure() {
    let server = MockServer::start_async().await;
    mock_listing(&server, 401, json!({"message": "Bad credentials"})).await;
    let temp = TempDir::new().unwrap();

    let result = account_runner(&server, &temp).run().await;

    assert!(matches!(result, Err(RunnerError::Listing(_))));
    let out = temp.path().join("out");
    assert_eq!(fs::read_dir(out).unwrap().count(), 0);
}
