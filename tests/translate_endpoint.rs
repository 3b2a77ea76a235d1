#![allow(clippy::unwrap_used)]
//! End-to-end tests that run the binary against a local mock endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(deprecated)]
fn gtx(config_home: &TempDir, endpoint: &str) -> Command {
    let mut cmd = Command::cargo_bin("gtx").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--endpoint", endpoint]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translates_words_from_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "en"))
        .and(query_param("tl", "es"))
        .and(query_param("q", "good morning"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[[["buenos días","good morning",,,1]],,"en"]"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["--from", "English", "--to", "Spanish", "good", "morning"])
        .assert()
        .success()
        .stdout("buenos días\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_speech_url_printed_to_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[[["Hola","Hello",,,1]],,"en"]"#),
        )
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["--to", "es", "--speech", "Hello"])
        .assert()
        .success()
        .stdout("Hola\n")
        .stderr(predicate::str::contains("/translate_tts?"))
        .stderr(predicate::str::contains("tl=es"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reads_text_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("q", "Thank you"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[[["ありがとう","Thank you",,,1]],,"en"]"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["-t", "Japanese"])
        .write_stdin("Thank you\n")
        .assert()
        .success()
        .stdout("ありがとう\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_suppresses_status_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[[["Hallo","Hello",,,1]],,"en"]"#),
        )
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["-q", "-t", "de", "Hello"])
        .assert()
        .success()
        .stdout("Hallo\n")
        .stderr(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["-t", "de", "Hello"])
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("503"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unrecognized_body_warns_without_failing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["-t", "de", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no translation"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_hides_speech_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[[["Hola","Hello",,,1]],,"en"]"#),
        )
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    gtx(&home, &server.uri())
        .args(["-q", "--speech", "-t", "es", "Hello"])
        .assert()
        .success()
        .stdout("Hola\n")
        .stderr(predicate::str::is_empty());
}
