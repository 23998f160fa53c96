//! Stdio transport smoke tests: the compiled `mcb` binary, spoken to over
//! stdin/stdout exactly as Claude Code or any other stdio MCP client would.
//!
//! These exist to pin the one property that matters most for this
//! transport and is easiest to regress silently: `tracing`'s output must
//! never reach stdout, so every line read from the child's stdout is a
//! complete, parseable JSON-RPC frame.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Kills and reaps the child on drop so a failing assertion's early return
/// never leaves a zombie `mcb` process behind.
struct ChildGuard(Option<std::process::Child>);

impl ChildGuard {
    fn new(child: std::process::Child) -> Self {
        Self(Some(child))
    }

    fn inner_mut(&mut self) -> &mut std::process::Child {
        self.0.as_mut().expect("child already taken")
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.0.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn mcb_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_mcb") {
        return PathBuf::from(path);
    }
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    for profile in ["debug", "release"] {
        let path = PathBuf::from(manifest_dir).join(format!("../../target/{profile}/mcb"));
        if path.exists() {
            return path;
        }
    }
    panic!("mcb binary not found; run the workspace build first");
}

/// Spawn `mcb serve` with its working directory pinned to a fresh tempdir,
/// so no test run's `mcb.toml`/database bleeds into another's.
fn spawn_stdio_server(cwd: &std::path::Path) -> ChildGuard {
    let child = Command::new(mcb_path())
        .arg("serve")
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mcb serve");
    ChildGuard::new(child)
}

fn initialize_request(id: i64) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "smoke-test", "version": "0.0.0" }
        },
        "id": id
    })
}

fn write_line(stdin: &mut std::process::ChildStdin, value: &serde_json::Value) -> TestResult {
    let line = serde_json::to_string(value)?;
    writeln!(stdin, "{line}")?;
    stdin.flush()?;
    Ok(())
}

fn read_response(stdout: &mut BufReader<std::process::ChildStdout>) -> TestResult<serde_json::Value> {
    let mut line = String::new();
    let n = stdout.read_line(&mut line)?;
    assert!(n > 0, "EOF on stdout - server exited early, check stderr");
    Ok(serde_json::from_str(&line)?)
}

#[test]
fn initialize_response_is_clean_json_with_no_ansi() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut guard = spawn_stdio_server(dir.path());
    let child = guard.inner_mut();
    let mut stdin = child.stdin.take().ok_or("no stdin")?;
    let stdout = child.stdout.take().ok_or("no stdout")?;
    let mut stdout = BufReader::new(stdout);

    write_line(&mut stdin, &initialize_request(1))?;
    let mut raw = String::new();
    stdout.read_line(&mut raw)?;

    assert!(
        !raw.contains('\u{1b}'),
        "ANSI escape byte leaked onto stdout: {raw:?}"
    );
    let response: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(response["jsonrpc"], "2.0");
    assert!(response["error"].is_null(), "unexpected error: {:?}", response["error"]);
    assert!(response["result"]["serverInfo"]["name"].is_string());

    Ok(())
}

#[test]
fn tools_list_includes_every_memory_bank_tool() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut guard = spawn_stdio_server(dir.path());
    let child = guard.inner_mut();
    let mut stdin = child.stdin.take().ok_or("no stdin")?;
    let stdout = child.stdout.take().ok_or("no stdout")?;
    let mut stdout = BufReader::new(stdout);

    write_line(&mut stdin, &initialize_request(1))?;
    let _ = read_response(&mut stdout)?;
    write_line(
        &mut stdin,
        &serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
    )?;

    write_line(
        &mut stdin,
        &serde_json::json!({"jsonrpc": "2.0", "method": "tools/list", "id": 2}),
    )?;
    let response = read_response(&mut stdout)?;

    assert_eq!(response["jsonrpc"], "2.0");
    let tools = response["result"]["tools"]
        .as_array()
        .ok_or("tools should be an array")?;
    let names: Vec<&str> = tools
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();

    for expected in [
        "init-memory-bank",
        "component",
        "decision",
        "rule",
        "context",
        "pagerank",
        "shortest_path",
        "bulkDeleteByBranch",
    ] {
        assert!(names.contains(&expected), "missing tool {expected:?} in {names:?}");
    }

    Ok(())
}

#[test]
fn unknown_method_returns_a_json_rpc_error_not_a_crash() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut guard = spawn_stdio_server(dir.path());
    let child = guard.inner_mut();
    let mut stdin = child.stdin.take().ok_or("no stdin")?;
    let stdout = child.stdout.take().ok_or("no stdout")?;
    let mut stdout = BufReader::new(stdout);

    write_line(&mut stdin, &initialize_request(1))?;
    let _ = read_response(&mut stdout)?;

    write_line(
        &mut stdin,
        &serde_json::json!({"jsonrpc": "2.0", "method": "not/a/real/method", "id": 9}),
    )?;
    let response = read_response(&mut stdout)?;

    assert_eq!(response["id"], 9);
    assert!(response["result"].is_null());
    assert!(response["error"]["code"].is_i64());
    assert!(response["error"]["message"].is_string());

    Ok(())
}

#[test]
fn logs_land_on_stderr_never_on_stdout() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut guard = spawn_stdio_server(dir.path());
    let child = guard.inner_mut();
    let mut stdin = child.stdin.take().ok_or("no stdin")?;
    let stdout = child.stdout.take().ok_or("no stdout")?;
    let stderr = child.stderr.take().ok_or("no stderr")?;
    let mut stdout = BufReader::new(stdout);
    let stderr = BufReader::new(stderr);

    write_line(&mut stdin, &initialize_request(1))?;
    let response = read_response(&mut stdout)?;
    assert_eq!(response["jsonrpc"], "2.0");

    std::thread::sleep(std::time::Duration::from_millis(100));
    drop(stdin);
    let _ = child.kill();
    let _ = child.wait();

    for line in stderr.lines().take(20).flatten() {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&line) {
            assert!(
                value.get("jsonrpc").is_none(),
                "a JSON-RPC frame leaked onto stderr: {line}"
            );
        }
    }

    Ok(())
}
