//! # netinv - Interactive IP address updater for network equipment inventories
//!
//! This library holds the core functionality of a small console tool
//! for network operators: it keeps an in-memory inventory of routers
//! and switches, lets the operator assign replacement IPv4 addresses
//! device by device, and writes the session results to JSON snapshot
//! files.
//!
//! ## Overview
//!
//! A session is one linear pass: load both inventories (best-effort),
//! list every device, loop on "pick a device / enter an address /
//! apply", and on quit write two snapshots - the devices updated this
//! session and every invalid address string the operator entered.
//! Everything is single-threaded and synchronous; the only blocking
//! points are the console prompts.
//!
//! ## Architecture
//!
//! The library is organized into a handful of focused modules:
//!
//! - `inventory`: snapshot loading/saving and the `Inventory` map type
//! - `validate`: the strict dotted-quad predicate and the looser octet
//!   scan used by the prompt loop (deliberately divergent)
//! - `console`: the pluggable prompt/print pair over `BufRead`/`Write`
//! - `session`: `SessionState` and the interactive update loop
//! - `report`: end-of-session snapshot writing, isolated per destination
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use netinv::console::Console;
//! use netinv::inventory::load_inventory;
//! use netinv::report::write_reports;
//! use netinv::session::SessionState;
//!
//! // Missing or malformed snapshots collapse to empty inventories
//! let routers = load_inventory(Path::new("equip_r.txt")).unwrap_or_default();
//! let switches = load_inventory(Path::new("equip_s.txt")).unwrap_or_default();
//!
//! let mut session = SessionState::new(routers, switches);
//! let mut console = Console::stdio();
//! session.run(&mut console)?;
//! write_reports(
//!     &mut console,
//!     &session,
//!     Path::new("updated.txt"),
//!     Path::new("invalid.txt"),
//! )?;
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```
//!
//! ## Snapshot Format
//!
//! Inventories and the updated-device record are flat JSON objects;
//! the invalid-address log is a JSON array:
//!
//! ```json
//! { "router1": "10.10.10.10", "router2": "10.10.10.20" }
//! ```
//!
//! ```json
//! [ "999.1.1.1", "10.300.1.1" ]
//! ```
//!
//! ## Error Handling
//!
//! Leaf errors are typed with `thiserror` (`LoadError`, `SaveError`,
//! `OctetParseError`); the interactive flow and the binary boundary use
//! `color_eyre` so a fatal condition (a non-numeric octet segment, a
//! closed stdin) terminates the session with a readable report.
//! Recoverable conditions (unknown device names, out-of-range octets,
//! unreadable input snapshots, failed snapshot writes) never escape:
//! they re-prompt, collapse to defaults, or print an error line and
//! move on.

pub mod console;
pub mod inventory;
pub mod report;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use console::Console;
pub use inventory::{load_inventory, save_snapshot, Inventory, LoadError, SaveError};
pub use report::write_reports;
pub use session::{Selection, SessionState};
pub use validate::{is_valid_ip, scan_octets, OctetParseError, OctetScan};
