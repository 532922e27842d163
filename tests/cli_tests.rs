//! Integration tests for the CLI. None of these reach a real backend: the
//! only requests sent go to a listener on 127.0.0.1.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const CLEARED_VARS: [&str; 10] = [
    "ANTHROPIC_API_KEY",
    "OPENAI_API_KEY",
    "GROQ_API_KEY",
    "LLM_PROVIDER",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

fn readme_gen(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("readme-gen"));
    cmd.current_dir(workdir.path());
    for var in CLEARED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn workdir_with_source() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();
    dir
}

/// Binds a non-blocking local listener and points every backend in the
/// working directory's config at it.
fn local_backend(dir: &TempDir) -> TcpListener {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    let config = format!(
        "[claude]\nbase_url = \"{0}\"\n[openai]\nbase_url = \"{0}\"\n[llama]\nbase_url = \"{0}\"\n",
        base_url
    );
    fs::write(dir.path().join("readme-gen.toml"), config).unwrap();
    listener
}

fn with_all_keys(cmd: &mut Command) -> &mut Command {
    cmd.env("ANTHROPIC_API_KEY", "sk-ant-test")
        .env("OPENAI_API_KEY", "sk-test")
        .env("GROQ_API_KEY", "gsk-test")
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    readme_gen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate README.md"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("llama"));
}

#[test]
fn test_requires_file_path() {
    let dir = TempDir::new().unwrap();
    readme_gen(&dir).assert().failure();
}

#[test]
fn test_rejects_unsupported_model_flag() {
    let dir = workdir_with_source();
    readme_gen(&dir)
        .args(["app.py", "--model", "gemini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'gemini'"));
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_rejects_unsupported_provider_env() {
    let dir = workdir_with_source();
    readme_gen(&dir)
        .env("LLM_PROVIDER", "gemini")
        .env("ANTHROPIC_API_KEY", "sk-ant-test")
        .arg("app.py")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported model: gemini"));
}

#[test]
fn test_rejects_unsupported_provider_in_config() {
    let dir = workdir_with_source();
    fs::write(dir.path().join("readme-gen.toml"), "llm_provider = \"palm\"\n").unwrap();
    readme_gen(&dir)
        .env("ANTHROPIC_API_KEY", "sk-ant-test")
        .arg("app.py")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_credential_fails() {
    let dir = workdir_with_source();
    readme_gen(&dir)
        .args(["app.py", "--model", "openai"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    readme_gen(&dir)
        .env("GROQ_API_KEY", "gsk-test")
        .args(["missing.py", "--model", "llama"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = workdir_with_source();
    readme_gen(&dir)
        .env("ANTHROPIC_API_KEY", "sk-ant-test")
        .args(["app.py", "--config", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_unsupported_provider_never_connects() {
    let dir = workdir_with_source();
    let listener = local_backend(&dir);

    let mut cmd = readme_gen(&dir);
    with_all_keys(&mut cmd)
        .env("LLM_PROVIDER", "gemini")
        .arg("app.py")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported model: gemini"));

    match listener.accept() {
        Err(err) => assert_eq!(err.kind(), io::ErrorKind::WouldBlock),
        Ok((_, peer)) => panic!("unexpected connection from {}", peer),
    }
}

#[test]
fn test_supported_provider_reaches_configured_backend() {
    let dir = workdir_with_source();
    let listener = local_backend(&dir);

    // Accept one connection and hang up without answering.
    let accepted = thread::spawn(move || {
        let deadline = Instant::now() + Duration::from_secs(30);
        while Instant::now() < deadline {
            match listener.accept() {
                Ok((stream, _)) => {
                    drop(stream);
                    return true;
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(20));
                }
                Err(_) => return false,
            }
        }
        false
    });

    let mut cmd = readme_gen(&dir);
    with_all_keys(&mut cmd)
        .env("LLM_PROVIDER", "claude")
        .arg("app.py")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("LLM error"));

    assert!(accepted.join().unwrap());
    assert!(!dir.path().join("README.md").exists());
}
