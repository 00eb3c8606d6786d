//! Command-line driver for the recent-list session hook
//!
//! Runs the same pipeline the login hook runs (resolve a host, pick the
//! control file, write the directive) so an administrator can adjust a
//! recent list by hand or verify a deployment without going through a login.

use anyhow::Result;
use clap::Parser;
use recent_core::{ConfigLoader, RecentHook, SessionContext, SessionModule, SessionOutcome};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recentctl")]
#[command(about = "Adjust a kernel recent list the way the login session hook does")]
struct Args {
    /// Action token: "+" to add the host, "-" to remove it
    #[arg(allow_hyphen_values = true)]
    action: String,

    /// Recent list name (default: DEFAULT)
    list: Option<String>,

    /// Remote host to resolve (hostname or address)
    #[arg(long, short = 'H', env = "PAM_RHOST")]
    host: Option<String>,

    /// Config file path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let env_filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = ConfigLoader::load_or_default(args.config)?;

    let hook = RecentHook::with_dirs(config.control_dirs());
    let context = SessionContext::new(args.host);

    // Hand the action and optional list name through unmodified, exactly as
    // a host framework would pass its module arguments.
    let mut module_args = vec![args.action];
    if let Some(list) = args.list {
        module_args.push(list);
    }

    match hook.open_session(&context, &module_args) {
        SessionOutcome::Success => Ok(()),
        SessionOutcome::SessionError => std::process::exit(1),
    }
}
