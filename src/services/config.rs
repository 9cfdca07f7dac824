use crate::cli::Cli;
use crate::domain::constants::{
    DEFAULT_BASE_URL, DEFAULT_DOCS_PATH, DEFAULT_ENV_FILE, DEFAULT_ENV_TEMPLATE,
    DEFAULT_HEALTH_PATH, DEFAULT_WAIT_TIMEOUT_SECS,
};
use crate::domain::models::{StackConfig, StackFile};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolve the effective settings for this invocation.
///
/// Precedence: explicit CLI flag, then `bosun.toml` in the project directory,
/// then built-in default. A missing `bosun.toml` is fine; a malformed one is a
/// hard error since the operator wrote it.
pub fn resolve(cli: &Cli) -> anyhow::Result<StackConfig> {
    let file = load_stack_file(&cli.project_dir)?;
    let t = file.stack;

    let env_file = cli
        .env_file
        .clone()
        .or(t.env_file.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    let env_template = cli
        .env_template
        .clone()
        .or(t.env_template.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_TEMPLATE));

    Ok(StackConfig {
        base_url: cli
            .base_url
            .clone()
            .or(t.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        health_path: t
            .health_path
            .unwrap_or_else(|| DEFAULT_HEALTH_PATH.to_string()),
        docs_path: t.docs_path.unwrap_or_else(|| DEFAULT_DOCS_PATH.to_string()),
        env_file: cli.project_dir.join(env_file),
        env_template: cli.project_dir.join(env_template),
        wait_timeout_secs: t.wait_timeout_secs.unwrap_or(DEFAULT_WAIT_TIMEOUT_SECS),
        compose_file: t.compose_file.map(|f| cli.project_dir.join(f)),
        project_dir: cli.project_dir.clone(),
    })
}

fn load_stack_file(project_dir: &Path) -> anyhow::Result<StackFile> {
    let path = project_dir.join("bosun.toml");
    if !path.exists() {
        return Ok(StackFile::default());
    }
    let raw = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
