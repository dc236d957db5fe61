use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgersnap::cli::{
    handle_export_command, handle_import_command, handle_info_command, handle_list_command,
};
use ledgersnap::config::LedgerPaths;
use ledgersnap::display::format_snapshot_list;
use ledgersnap::snapshot::list_snapshots;

#[derive(Parser)]
#[command(
    name = "ledgersnap",
    version,
    about = "Snapshot backup and restore for a personal finance record store",
    long_about = "ledgersnap exports the live record store (bank accounts, credit \
                  cards, loans, transactions, budgets and friends) into timestamped \
                  snapshot directories and restores them back, collection by \
                  collection."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a snapshot of all collections
    #[command(alias = "backup")]
    Export,

    /// Restore all collections from a snapshot (destructive!)
    #[command(alias = "restore")]
    Import {
        /// Snapshot directory name under the backups root
        snapshot: Option<String>,

        /// Skip the confirmation countdown
        #[arg(short, long)]
        yes: bool,
    },

    /// List available snapshots, newest first
    List {
        /// Show manifest details per snapshot
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show details for one snapshot
    Info {
        /// Snapshot directory name under the backups root
        snapshot: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolved once; everything below takes paths explicitly
    let paths = LedgerPaths::new()?;

    match cli.command {
        Commands::Export => {
            paths.ensure_directories()?;
            handle_export_command(&paths)?;
        }
        Commands::Import { snapshot, yes } => match snapshot {
            Some(name) => {
                handle_import_command(&paths, &name, yes)?;
            }
            None => {
                print_import_usage(&paths);
                std::process::exit(1);
            }
        },
        Commands::List { verbose } => {
            handle_list_command(&paths, verbose)?;
        }
        Commands::Info { snapshot } => {
            handle_info_command(&paths, &snapshot)?;
        }
        Commands::Config => {
            println!("ledgersnap Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Live store:        {}", paths.data_dir().display());
            println!("Backups root:      {}", paths.backups_dir().display());
        }
    }

    Ok(())
}

/// Usage help for `import` without a snapshot name: list what's available
fn print_import_usage(paths: &LedgerPaths) {
    eprintln!("Usage: ledgersnap import <snapshot> [--yes]");
    eprintln!();
    match list_snapshots(&paths.backups_dir()) {
        Ok(snapshots) if !snapshots.is_empty() => {
            eprintln!("Available snapshots:");
            eprint!("{}", format_snapshot_list(&snapshots));
        }
        _ => {
            eprintln!("No snapshots available. Create one with: ledgersnap export");
        }
    }
}
