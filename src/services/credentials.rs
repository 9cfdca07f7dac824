use crate::domain::constants::{DATABASE_URL_VAR, LLM_KEY_VARS, TRACING_TOGGLE_VAR, TRACING_VARS};
use crate::domain::models::Warning;

/// Presence-only credential checks against the process environment.
///
/// Values are never inspected beyond being non-empty; a variable set to an
/// empty or whitespace-only string counts as absent. Every finding is a
/// warning, never an error.
pub fn check() -> Vec<Warning> {
    let mut warnings = Vec::new();

    if !LLM_KEY_VARS.iter().any(|v| is_set(v)) {
        warnings.push(Warning {
            code: "no_llm_key".to_string(),
            message: format!(
                "no LLM API key found (set {} or {})",
                LLM_KEY_VARS[0], LLM_KEY_VARS[1]
            ),
        });
    }

    if !is_set(DATABASE_URL_VAR) {
        warnings.push(Warning {
            code: "no_database_url".to_string(),
            message: format!(
                "{} is not set; the stack cannot reach its database",
                DATABASE_URL_VAR
            ),
        });
    }

    if tracing_enabled() {
        let missing: Vec<&str> = TRACING_VARS
            .iter()
            .copied()
            .filter(|v| !is_set(v))
            .collect();
        if !missing.is_empty() {
            warnings.push(Warning {
                code: "tracing_incomplete".to_string(),
                message: format!(
                    "{} is enabled but {} missing",
                    TRACING_TOGGLE_VAR,
                    missing.join(", ")
                ),
            });
        }
    }

    warnings
}

fn is_set(name: &str) -> bool {
    std::env::var(name)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

fn tracing_enabled() -> bool {
    std::env::var(TRACING_TOGGLE_VAR)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
