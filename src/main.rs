use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::compose::ComposeError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        report_error(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stack = services::config::resolve(cli)?;
    match &cli.command {
        Commands::Up {
            timeout_secs,
            no_wait,
        } => commands::handle_up(cli, &stack, *timeout_secs, *no_wait),
        Commands::Down => commands::handle_down(cli, &stack),
        Commands::Status => commands::handle_status(cli, &stack),
        Commands::Check => commands::handle_check(cli, &stack),
        Commands::Logs { service, follow } => {
            commands::handle_logs(&stack, *follow, service.as_deref())
        }
    }
}

fn report_error(json: bool, e: &anyhow::Error) {
    if json {
        let body = serde_json::json!({
            "ok": false,
            "error": { "code": error_code(e), "message": format!("{:#}", e) }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("error: {:#}", e);
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<ComposeError>() {
        Some(ComposeError::Missing) => "COMPOSE_MISSING",
        Some(ComposeError::Failed { .. }) => "COMPOSE_FAILED",
        None if e.downcast_ref::<toml::de::Error>().is_some() => "BAD_CONFIG",
        None => "INTERNAL",
    }
}
