//! minecraft-mod-config command-line entry point.
//!
//! Wires the pieces together: detect the platform adapter, open the config
//! store, dispatch one subcommand, and save when the command mutated state.
//!
//! ```text
//! main()
//!  └─ platform::detect()     -- fails on unsupported OSes, no fallback
//!  └─ ConfigStore::open()    -- first-run setup / corrupt-file recovery
//!  └─ match subcommand       -- add | remove | list | path
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modgroup_cli::application::store::ConfigStore;
use modgroup_cli::infrastructure::platform;

#[derive(Parser)]
#[command(
    name = "modgroup",
    version,
    about = "Manage named mod groups for Minecraft mod loaders"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new mod group
    Add {
        /// Unique group name
        name: String,
        /// Target mod loader (forge, fabric, quilt, neoforge)
        loader: String,
    },
    /// Remove a mod group by name
    Remove {
        /// Name of the group to remove
        name: String,
    },
    /// List all mod groups in stored order
    List {
        /// Clear the terminal before printing
        #[arg(long)]
        clear: bool,
    },
    /// Print the config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    // Quiet by default; corrupt-config warnings still surface.  Override
    // with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .without_time()
        .init();

    let cli = Cli::parse();
    let platform = platform::detect()?;
    let mut store = ConfigStore::open(platform)?;

    match cli.command {
        Command::Add { name, loader } => {
            store.add_group(&name, &loader)?;
            store.save()?;
            println!("added group `{name}` ({loader})");
        }
        Command::Remove { name } => {
            let removed = store.remove_group(&name)?;
            store.save()?;
            println!("removed group `{}` ({})", removed.name, removed.mod_loader);
        }
        Command::List { clear } => {
            if clear {
                store.clear_screen()?;
            }
            if store.groups().next().is_none() {
                println!("no mod groups configured");
            }
            for group in store.groups() {
                println!("{} ({})", group.name, group.mod_loader);
            }
        }
        Command::Path => {
            println!("{}", store.config_file_path().display());
        }
    }

    Ok(())
}
