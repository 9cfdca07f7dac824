use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Outcome of the env-file bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvBootstrap {
    Present,
    CreatedFromTemplate,
    MissingNoTemplate,
}

/// A non-fatal finding surfaced to the operator.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub env_file: String,
    pub bootstrap: EnvBootstrap,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub healthy: bool,
    pub status: Option<u16>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct WaitReport {
    pub healthy: bool,
    pub attempts: u32,
    pub elapsed_ms: u64,
    pub last: ProbeReport,
}

#[derive(Serialize)]
pub struct ComposeInvocation {
    pub flavor: String,
    pub ok: bool,
    pub detail: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct Endpoints {
    pub docs: String,
    pub health: String,
}

#[derive(Serialize)]
pub struct UpReport {
    pub bootstrap: EnvBootstrap,
    pub warnings: Vec<Warning>,
    pub compose: ComposeInvocation,
    pub wait: Option<WaitReport>,
    pub endpoints: Endpoints,
}

/// On-disk shape of an optional per-project `bosun.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct StackFile {
    #[serde(default)]
    pub stack: StackTable,
}

#[derive(Debug, Deserialize, Default)]
pub struct StackTable {
    pub base_url: Option<String>,
    pub health_path: Option<String>,
    pub docs_path: Option<String>,
    pub env_file: Option<String>,
    pub env_template: Option<String>,
    pub wait_timeout_secs: Option<u64>,
    pub compose_file: Option<String>,
}

/// Fully-resolved settings for one invocation: CLI flag > `bosun.toml` >
/// built-in default. Relative file paths are anchored at `project_dir`.
#[derive(Debug, Clone)]
pub struct StackConfig {
    pub project_dir: PathBuf,
    pub base_url: String,
    pub health_path: String,
    pub docs_path: String,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
    pub wait_timeout_secs: u64,
    pub compose_file: Option<PathBuf>,
}

impl StackConfig {
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn health_url(&self) -> String {
        self.url(&self.health_path)
    }

    pub fn docs_url(&self) -> String {
        self.url(&self.docs_path)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            docs: self.docs_url(),
            health: self.health_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StackConfig;
    use std::path::PathBuf;

    fn config(base_url: &str, health_path: &str) -> StackConfig {
        StackConfig {
            project_dir: PathBuf::from("."),
            base_url: base_url.to_string(),
            health_path: health_path.to_string(),
            docs_path: "/docs".to_string(),
            env_file: PathBuf::from(".env"),
            env_template: PathBuf::from(".env.example"),
            wait_timeout_secs: 60,
            compose_file: None,
        }
    }

    #[test]
    fn url_join_collapses_duplicate_slashes() {
        let c = config("http://localhost:8000/", "/health");
        assert_eq!(c.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn url_join_inserts_missing_slash() {
        let c = config("http://localhost:8000", "health");
        assert_eq!(c.health_url(), "http://localhost:8000/health");
        assert_eq!(c.docs_url(), "http://localhost:8000/docs");
    }
}
