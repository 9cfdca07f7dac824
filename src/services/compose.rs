use crate::domain::models::StackConfig;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

#[derive(thiserror::Error, Debug)]
pub enum ComposeError {
    #[error("compose tool not found (tried `docker compose` and `docker-compose`)")]
    Missing,
    #[error("compose {action} exited with {status}")]
    Failed { action: &'static str, status: ExitStatus },
}

#[derive(Debug, Clone, Copy)]
pub enum ComposeFlavor {
    /// The `docker compose` v2 plugin.
    DockerPlugin,
    /// The legacy standalone `docker-compose` binary.
    Standalone,
}

impl ComposeFlavor {
    pub fn name(&self) -> &'static str {
        match self {
            ComposeFlavor::DockerPlugin => "docker compose",
            ComposeFlavor::Standalone => "docker-compose",
        }
    }
}

/// Prefer the `docker compose` plugin; fall back to the standalone binary
/// when the plugin probe fails for any reason.
pub fn detect() -> ComposeFlavor {
    let probe = Command::new("docker")
        .args(["compose", "version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match probe {
        Ok(s) if s.success() => ComposeFlavor::DockerPlugin,
        _ => ComposeFlavor::Standalone,
    }
}

fn base_command(flavor: ComposeFlavor, cfg: &StackConfig) -> Command {
    let mut cmd = match flavor {
        ComposeFlavor::DockerPlugin => {
            let mut c = Command::new("docker");
            c.arg("compose");
            c
        }
        ComposeFlavor::Standalone => Command::new("docker-compose"),
    };
    cmd.current_dir(&cfg.project_dir);
    if let Some(f) = &cfg.compose_file {
        cmd.arg("-f").arg(f);
    }
    cmd
}

/// Delegate `up -d`. The exit status is returned, not judged: the startup
/// sequence records it but continues either way.
pub fn up_detached(flavor: ComposeFlavor, cfg: &StackConfig) -> anyhow::Result<ExitStatus> {
    base_command(flavor, cfg)
        .args(["up", "-d"])
        .status()
        .map_err(spawn_error)
}

pub fn down(flavor: ComposeFlavor, cfg: &StackConfig) -> anyhow::Result<()> {
    let status = base_command(flavor, cfg)
        .arg("down")
        .status()
        .map_err(spawn_error)?;
    if !status.success() {
        return Err(ComposeError::Failed {
            action: "down",
            status,
        }
        .into());
    }
    Ok(())
}

/// Delegate log tailing. Blocks until the compose tool exits, which with
/// `--follow` means until the operator interrupts it.
pub fn logs(
    flavor: ComposeFlavor,
    cfg: &StackConfig,
    follow: bool,
    service: Option<&str>,
) -> anyhow::Result<()> {
    let mut cmd = base_command(flavor, cfg);
    cmd.arg("logs");
    if follow {
        cmd.arg("-f");
    }
    if let Some(s) = service {
        cmd.arg(s);
    }
    let status = cmd.status().map_err(spawn_error)?;
    if !status.success() {
        return Err(ComposeError::Failed {
            action: "logs",
            status,
        }
        .into());
    }
    Ok(())
}

fn spawn_error(e: std::io::Error) -> anyhow::Error {
    if e.kind() == ErrorKind::NotFound {
        ComposeError::Missing.into()
    } else {
        e.into()
    }
}
