use crate::domain::models::EnvBootstrap;
use anyhow::Context;
use std::path::Path;

/// First step of the startup sequence: make sure an env file exists.
///
/// An existing file is left untouched. A missing file is derived from the
/// template when one is present; otherwise the caller warns and proceeds.
/// Never fatal apart from a failed copy itself.
pub fn bootstrap(env_file: &Path, template: &Path) -> anyhow::Result<EnvBootstrap> {
    if env_file.exists() {
        return Ok(EnvBootstrap::Present);
    }
    if template.exists() {
        std::fs::copy(template, env_file).with_context(|| {
            format!(
                "copy {} to {}",
                template.display(),
                env_file.display()
            )
        })?;
        return Ok(EnvBootstrap::CreatedFromTemplate);
    }
    Ok(EnvBootstrap::MissingNoTemplate)
}

/// Human line for a bootstrap outcome, or `None` when there is nothing to say.
pub fn describe(outcome: EnvBootstrap, env_file: &Path, template: &Path) -> Option<String> {
    match outcome {
        EnvBootstrap::Present => None,
        EnvBootstrap::CreatedFromTemplate => Some(format!(
            "created {} from {}; fill in real keys before relying on the stack",
            env_file.display(),
            template.display()
        )),
        EnvBootstrap::MissingNoTemplate => Some(format!(
            "warning: no {} found and no {} template to copy from",
            env_file.display(),
            template.display()
        )),
    }
}

/// Load the env file into the process environment so the credential checks
/// see keys supplied either way. Variables already set in the environment win
/// over file entries.
pub fn load(env_file: &Path) {
    if env_file.exists() {
        let _ = dotenvy::from_path(env_file);
    }
}
