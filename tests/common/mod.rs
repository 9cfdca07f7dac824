use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    bin: PathBuf,
    record: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        let bin = tmp.path().join("bin");
        for d in [&home, &project, &bin] {
            fs::create_dir_all(d).expect("create test dirs");
        }
        let record = tmp.path().join("compose-calls.log");
        write_stub_compose(&bin);
        fs::write(project.join("docker-compose.yml"), "services: {}\n")
            .expect("write compose file");

        Self {
            _tmp: tmp,
            home,
            project,
            bin,
            record,
        }
    }

    /// A `bosun` invocation isolated from the developer's machine: temp HOME,
    /// stub `docker` first on PATH, credential variables scrubbed.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bosun").expect("binary under test");
        let orig_path = std::env::var("PATH").unwrap_or_default();
        cmd.env("HOME", &self.home)
            .env("PATH", format!("{}:{}", self.bin.display(), orig_path))
            .env("COMPOSE_RECORD", &self.record)
            .env_remove("OPENAI_API_KEY")
            .env_remove("ANTHROPIC_API_KEY")
            .env_remove("DATABASE_URL")
            .env_remove("LANGFUSE_LOGGING")
            .arg("--project-dir")
            .arg(&self.project);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Lines the stub `docker` recorded, one per invocation.
    pub fn compose_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.record)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn write_stub_compose(bin: &Path) {
    let script = "#!/bin/sh\necho \"docker $*\" >> \"$COMPOSE_RECORD\"\nexit 0\n";
    let path = bin.join("docker");
    fs::write(&path, script).expect("write docker stub");
    let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("mark stub executable");
}

/// Minimal HTTP listener answering 200 to everything; returns its base URL.
pub fn spawn_health_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
            );
        }
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on (bind, note the port, drop the listener).
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}
