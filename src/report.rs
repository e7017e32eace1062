//! Session report writing.
//!
//! Persists the two session outputs: the updated-device mapping and
//! the invalid-address list, each as its own JSON snapshot. The writes
//! are independent: a failure on one destination is reported to the
//! operator and the other destination is still attempted.

use crate::console::Console;
use crate::inventory::save_snapshot;
use crate::session::SessionState;
use color_eyre::Result;
use log::{debug, error};
use std::io::{BufRead, Write};
use std::path::Path;

/// Write both snapshots, confirming success or failure per destination.
///
/// A snapshot write failure is printed and logged but never fails the
/// call; only console output errors surface to the caller.
pub fn write_reports<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &SessionState,
    updated_path: &Path,
    invalid_path: &Path,
) -> Result<()> {
    match save_snapshot(updated_path, &state.updated) {
        Ok(()) => {
            debug!(
                "Wrote {} updated device(s) to {:?}",
                state.updated.len(),
                updated_path
            );
            console.print_line(&format!(
                "Updated equipment written to file '{}'",
                updated_path.display()
            ))?;
        }
        Err(err) => {
            error!("Could not write updated-device snapshot: {}", err);
            console.print_line(&format!("Error saving updated equipment data: {}", err))?;
        }
    }

    match save_snapshot(invalid_path, &state.invalid_addresses) {
        Ok(()) => {
            debug!(
                "Wrote {} invalid address(es) to {:?}",
                state.invalid_addresses.len(),
                invalid_path
            );
            console.print_line(&format!(
                "List of invalid addresses written to file '{}'",
                invalid_path.display()
            ))?;
        }
        Err(err) => {
            error!("Could not write invalid-address snapshot: {}", err);
            console.print_line(&format!("Error saving invalid addresses data: {}", err))?;
        }
    }

    Ok(())
}
