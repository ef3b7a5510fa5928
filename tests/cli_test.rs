use httpmock::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn todo_etl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_todo-etl"))
}

#[test]
fn test_successful_run_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/todos").query_param("_limit", "20");
        then.status(200).json_body(serde_json::json!([
            {"userId": 1, "id": 1, "title": "A", "completed": true}
        ]));
    });

    let output = todo_etl()
        .current_dir(temp_dir.path())
        .args(["--endpoint", server.url("/todos").as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total tasks   : 1"));
    assert!(stdout.contains("Done"));

    let content = std::fs::read_to_string(temp_dir.path().join("todos.csv")).unwrap();
    assert_eq!(
        content,
        "todo_id,user_id,task,is_completed,status\n1,1,A,True,Done\n"
    );
}

#[test]
fn test_http_500_exits_non_zero_with_status_code() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/todos");
        then.status(500);
    });

    let output = todo_etl()
        .current_dir(temp_dir.path())
        .args(["--endpoint", server.url("/todos").as_str()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"), "stderr: {}", stderr);
    assert_eq!(stderr.matches("❌").count(), 1, "stderr: {}", stderr);
    assert!(!temp_dir.path().join("todos.csv").exists());
}

#[test]
fn test_connection_failure_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = todo_etl()
        .current_dir(temp_dir.path())
        .args(["--endpoint", "http://127.0.0.1:1/todos"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not connect"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("todos.csv").exists());
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = todo_etl()
        .current_dir(temp_dir.path())
        .args(["--limit", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_toml_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/todos").query_param("_limit", "2");
        then.status(200).json_body(serde_json::json!([
            {"userId": 1, "id": 1, "title": "A", "completed": true},
            {"userId": 1, "id": 2, "title": "B", "completed": false}
        ]));
    });

    let config_path = temp_dir.path().join("etl.toml");
    std::fs::write(
        &config_path,
        format!(
            "[source]\nendpoint = \"{}\"\nlimit = 2\n\n[load]\noutput_path = \"page.csv\"\n",
            server.url("/todos")
        ),
    )
    .unwrap();

    let output = todo_etl()
        .current_dir(temp_dir.path())
        .args(["--config", config_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    api_mock.assert();
    let content = std::fs::read_to_string(temp_dir.path().join("page.csv")).unwrap();
    assert_eq!(content.lines().count(), 3);
}
