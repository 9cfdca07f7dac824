use crate::cli::Cli;
use crate::domain::models::{ComposeInvocation, JsonOut, StackConfig, UpReport};
use crate::services::audit::audit;
use crate::services::output::{print_one, print_warnings};
use crate::services::{compose, credentials, env_file, probe};
use std::time::Duration;

/// The full startup sequence: env-file bootstrap, credential presence checks,
/// compose delegation, bounded readiness wait, operator guidance.
///
/// Every failure along the way is downgraded to a warning; the command exits
/// 0 whether or not the stack comes up. The compose delegation happens
/// exactly once per invocation, regardless of what the earlier checks found.
pub fn handle_up(
    cli: &Cli,
    stack: &StackConfig,
    timeout_secs: Option<u64>,
    no_wait: bool,
) -> anyhow::Result<()> {
    if !cli.json {
        println!("starting stack in {}", stack.project_dir.display());
    }

    let bootstrap = env_file::bootstrap(&stack.env_file, &stack.env_template)?;
    if !cli.json {
        if let Some(line) = env_file::describe(bootstrap, &stack.env_file, &stack.env_template) {
            println!("{}", line);
        }
    }
    env_file::load(&stack.env_file);

    let warnings = credentials::check();
    print_warnings(cli.json, &warnings);

    let flavor = compose::detect();
    let invocation = match compose::up_detached(flavor, stack) {
        Ok(status) if status.success() => ComposeInvocation {
            flavor: flavor.name().to_string(),
            ok: true,
            detail: None,
        },
        Ok(status) => ComposeInvocation {
            flavor: flavor.name().to_string(),
            ok: false,
            detail: Some(format!("exited with {}", status)),
        },
        Err(e) => ComposeInvocation {
            flavor: flavor.name().to_string(),
            ok: false,
            detail: Some(format!("{:#}", e)),
        },
    };
    if !cli.json {
        match &invocation.detail {
            None => println!("services requested via `{} up -d`", invocation.flavor),
            Some(detail) => println!("warning: compose up failed: {}", detail),
        }
    }

    let wait = if no_wait {
        None
    } else {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(stack.wait_timeout_secs));
        if !cli.json {
            println!(
                "waiting up to {}s for {}",
                timeout.as_secs(),
                stack.health_url()
            );
        }
        Some(probe::wait_until_healthy(&stack.health_url(), timeout))
    };

    audit(
        "up",
        serde_json::json!({
            "project_dir": stack.project_dir.display().to_string(),
            "healthy": wait.as_ref().map(|w| w.healthy),
        }),
    );

    let report = UpReport {
        bootstrap,
        warnings,
        compose: invocation,
        wait,
        endpoints: stack.endpoints(),
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
        return Ok(());
    }

    match &report.wait {
        Some(w) if w.healthy => {
            println!("stack is up");
            println!("api docs: {}", report.endpoints.docs);
            println!("health:   {}", report.endpoints.health);
        }
        Some(_) => {
            println!("stack might still be starting");
            println!("follow the logs with: bosun logs --follow");
        }
        None => {
            println!("started without waiting; check readiness with: bosun status");
        }
    }
    Ok(())
}

pub fn handle_down(cli: &Cli, stack: &StackConfig) -> anyhow::Result<()> {
    let flavor = compose::detect();
    compose::down(flavor, stack)?;
    audit(
        "down",
        serde_json::json!({
            "project_dir": stack.project_dir.display().to_string(),
        }),
    );
    print_one(cli.json, "stopped", |_| "stack stopped".to_string())
}

pub fn handle_logs(stack: &StackConfig, follow: bool, service: Option<&str>) -> anyhow::Result<()> {
    let flavor = compose::detect();
    compose::logs(flavor, stack, follow, service)
}
