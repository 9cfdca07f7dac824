use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bosun",
    version,
    about = "Startup sequencer for a containerized agent-server stack"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Directory containing the compose file and env files"
    )]
    pub project_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Base URL of the stack's HTTP surface (default http://localhost:8000)"
    )]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Env file consumed by the stack (default .env)"
    )]
    pub env_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Template the env file is derived from (default .env.example)"
    )]
    pub env_template: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bring the stack up and wait until it reports healthy
    Up {
        #[arg(long, help = "Seconds to wait for the stack to report healthy")]
        timeout_secs: Option<u64>,
        #[arg(long, default_value_t = false, help = "Skip the readiness wait")]
        no_wait: bool,
    },
    /// Tear the stack down
    Down,
    /// Probe the health endpoint once
    Status,
    /// Run the local preflight checks without starting anything
    Check,
    /// Tail service logs via the compose tool
    Logs {
        service: Option<String>,
        #[arg(long, short = 'f', default_value_t = false)]
        follow: bool,
    },
}
