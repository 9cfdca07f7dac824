use crate::cli::Cli;
use crate::domain::models::{CheckReport, JsonOut, StackConfig};
use crate::services::output::{print_one, print_warnings};
use crate::services::{credentials, env_file, probe};

/// Preflight only: run the env-file bootstrap and the credential presence
/// checks, start nothing. Warnings are advisory; the command exits 0.
pub fn handle_check(cli: &Cli, stack: &StackConfig) -> anyhow::Result<()> {
    let bootstrap = env_file::bootstrap(&stack.env_file, &stack.env_template)?;
    if !cli.json {
        if let Some(line) = env_file::describe(bootstrap, &stack.env_file, &stack.env_template) {
            println!("{}", line);
        }
    }
    env_file::load(&stack.env_file);

    let warnings = credentials::check();
    print_warnings(cli.json, &warnings);

    let report = CheckReport {
        env_file: stack.env_file.display().to_string(),
        bootstrap,
        warnings,
    };
    print_one(cli.json, report, |r| {
        format!("preflight complete ({} warnings)", r.warnings.len())
    })
}

/// One probe against the health endpoint. Exits 1 when the stack does not
/// answer, so scripts can branch on it.
pub fn handle_status(cli: &Cli, stack: &StackConfig) -> anyhow::Result<()> {
    let report = probe::probe(&stack.health_url());
    let healthy = report.healthy;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: healthy,
                data: &report
            })?
        );
    } else if healthy {
        println!("healthy: {}", report.url);
    } else {
        println!(
            "unreachable: {} ({})",
            report.url,
            report.error.as_deref().unwrap_or("no detail")
        );
    }

    if !healthy {
        std::process::exit(1);
    }
    Ok(())
}
