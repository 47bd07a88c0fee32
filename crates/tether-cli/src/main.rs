//! Tether CLI - keep a workspace mirrored against a remote repository.

use clap::Parser;
use tether_core::Notice;

mod commands;
mod config;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        // The orchestration core never exits the process; this is the one
        // place a failure is printed and turned into an exit code.
        let notice = err
            .downcast_ref::<tether_core::Error>()
            .map_or_else(|| Notice::error(format!("{err:#}")), Notice::from);
        output::report(&notice);
        std::process::exit(notice.exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    tether_core::progress::set_quiet(cli.quiet);

    let project = match cli.project {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Bootstrap => commands::bootstrap::run(&project),
        Commands::Reset => commands::reset::run(&project),
        Commands::SyncLocal => commands::sync_local::run(&project),
        Commands::SyncRemote => commands::sync_remote::run(&project),
        Commands::Status => commands::status::run(&project),
    }
}
