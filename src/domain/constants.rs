//! Built-in defaults and the environment variables the stack is known to read.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_DOCS_PATH: &str = "/docs";

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_ENV_TEMPLATE: &str = ".env.example";

pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 60;

/// Either of these satisfies the LLM credential check.
pub const LLM_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "ANTHROPIC_API_KEY"];

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// When this is `true`, the trace-export variables below become required.
pub const TRACING_TOGGLE_VAR: &str = "LANGFUSE_LOGGING";
pub const TRACING_VARS: [&str; 3] = [
    "LANGFUSE_PUBLIC_KEY",
    "LANGFUSE_SECRET_KEY",
    "LANGFUSE_HOST",
];
