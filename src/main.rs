use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::{Path, PathBuf};

use netinv::console::Console;
use netinv::inventory::{load_inventory, Inventory};
use netinv::report::write_reports;
use netinv::session::SessionState;

/// Interactive IP address updater for network equipment inventories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the router inventory snapshot (JSON object of name -> IP)
    #[arg(long, default_value = "equip_r.txt")]
    routers: PathBuf,

    /// Path to the switch inventory snapshot (JSON object of name -> IP)
    #[arg(long, default_value = "equip_s.txt")]
    switches: PathBuf,

    /// Output path for the updated-device snapshot
    #[arg(long, default_value = "updated.txt")]
    updated: PathBuf,

    /// Output path for the invalid-address log snapshot
    #[arg(long, default_value = "invalid.txt")]
    invalid: PathBuf,
}

/// Best-effort load: a missing or malformed snapshot becomes an empty
/// inventory, with the reason kept visible in the log.
fn load_or_empty(path: &Path) -> Inventory {
    load_inventory(path).unwrap_or_else(|err| {
        warn!("Could not load inventory from {:?}: {}", path, err);
        Inventory::new()
    })
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting netinv interactive session");
    info!("Router inventory: {:?}", args.routers);
    info!("Switch inventory: {:?}", args.switches);

    let routers = load_or_empty(&args.routers);
    let switches = load_or_empty(&args.switches);

    let mut session = SessionState::new(routers, switches);
    let mut console = Console::stdio();

    session.run(&mut console)?;
    write_reports(&mut console, &session, &args.updated, &args.invalid)?;

    info!(
        "Session complete: {} device(s) updated, {} invalid address(es) recorded",
        session.devices_updated, session.invalid_ip_count
    );
    Ok(())
}
