//! Interactive update session.
//!
//! This module owns all mutable state of one session (both device
//! inventories, the update record, the invalid-address log, and the
//! attempt counters) and drives the select-device / validate-address /
//! apply-update loop over a [`Console`]. There are no ambient globals;
//! everything is threaded through [`SessionState`].

use crate::console::Console;
use crate::inventory::Inventory;
use crate::validate::{scan_octets, OctetScan};
use color_eyre::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Prompt for choosing which device to update.
const DEVICE_PROMPT: &str = "\nWhich device would you like to update (enter x to quit)? ";

/// Prompt for the replacement address.
const IP_PROMPT: &str = "What is the new IP address (111.111.111.111) ";

/// Rejection line for an address with an out-of-range octet. The
/// embedded newline leaves a blank line under the message.
const INVALID_IP_MSG: &str = "Sorry, that is not a valid IP address\n";

/// Device-prompt answer that ends the session.
const QUIT_ANSWER: &str = "x";

/// Outcome of the device prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A device present in one of the inventories, already lowercased.
    Device(String),
    /// The operator asked to quit.
    Quit,
}

/// All mutable state of one interactive session.
#[derive(Debug)]
pub struct SessionState {
    /// Router inventory, mutated in place by updates.
    pub routers: Inventory,
    /// Switch inventory, mutated in place by updates.
    pub switches: Inventory,
    /// Devices updated this session and their new addresses.
    pub updated: Inventory,
    /// Raw address strings rejected by the prompt loop, in entry order.
    pub invalid_addresses: Vec<String>,
    /// Count of successful updates. Re-updating the same device counts
    /// again even though the update record keeps a single entry for it.
    pub devices_updated: usize,
    /// Count of rejected address attempts; always equals
    /// `invalid_addresses.len()`.
    pub invalid_ip_count: usize,
}

impl SessionState {
    /// Start a session over freshly loaded inventories.
    pub fn new(routers: Inventory, switches: Inventory) -> Self {
        SessionState {
            routers,
            switches,
            updated: Inventory::new(),
            invalid_addresses: Vec::new(),
            devices_updated: 0,
            invalid_ip_count: 0,
        }
    }

    /// Print the header and the tab-formatted listing of every device
    /// across both inventories, routers first.
    pub fn print_listing<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.print_line("Network Equipment Inventory\n")?;
        console.print_line("\tequipment name\tIP address")?;
        for (router, address) in &self.routers {
            console.print_line(&format!("\t{}\t\t{}", router, address))?;
        }
        for (switch, address) in &self.switches {
            console.print_line(&format!("\t{}\t\t{}", switch, address))?;
        }
        Ok(())
    }

    /// Prompt until the answer names a known device or asks to quit.
    ///
    /// Answers are folded to lowercase before the membership check.
    /// The quit sentinel is checked first, so a device literally named
    /// "x" can never be selected. There is no retry limit: an operator
    /// (or a script) feeding unknown names is re-prompted indefinitely.
    pub fn select_device<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Selection> {
        loop {
            let device = console.prompt(DEVICE_PROMPT)?.to_lowercase();
            // The sentinel wins even over a device named "x".
            if device == QUIT_ANSWER {
                return Ok(Selection::Quit);
            }
            if self.routers.contains_key(&device) || self.switches.contains_key(&device) {
                return Ok(Selection::Device(device));
            }
            console.print_line("That device is not in the network inventory.")?;
        }
    }

    /// Prompt until an address passes the octet scan.
    ///
    /// Out-of-range attempts are logged, counted, and re-prompted
    /// without limit. A non-numeric segment is not an attempt: it
    /// propagates and terminates the session (see
    /// [`crate::validate::scan_octets`]).
    pub fn prompt_for_valid_ip<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<String> {
        loop {
            let address = console.prompt(IP_PROMPT)?;
            match scan_octets(&address)? {
                OctetScan::InRange => return Ok(address),
                OctetScan::OutOfRange => {
                    self.invalid_ip_count += 1;
                    self.invalid_addresses.push(address);
                    console.print_line(INVALID_IP_MSG)?;
                }
            }
        }
    }

    /// Route an accepted device/address pair into an inventory and the
    /// update record, then confirm to the operator.
    ///
    /// Routing is by name shape alone: any name containing 'r' is
    /// written to the routers collection, everything else to switches.
    /// This is a crude heuristic, not a naming-convention check; a
    /// switch whose name happens to contain 'r' ends up in routers.
    pub fn apply_update<R: BufRead, W: Write>(
        &mut self,
        device: &str,
        address: String,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if device.contains('r') {
            self.routers.insert(device.to_string(), address.clone());
        } else {
            self.switches.insert(device.to_string(), address.clone());
        }
        self.updated.insert(device.to_string(), address.clone());
        self.devices_updated += 1;
        console.print_line(&format!(
            "{} was updated; the new IP address is {}",
            device, address
        ))?;
        Ok(())
    }

    /// Drive the whole console session: listing, then the update loop
    /// until the operator quits, then the summary.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        self.print_listing(console)?;

        loop {
            let device = match self.select_device(console)? {
                Selection::Device(device) => device,
                Selection::Quit => break,
            };
            let address = self.prompt_for_valid_ip(console)?;
            self.apply_update(&device, address, console)?;
        }

        debug!(
            "Session loop finished: {} update(s), {} rejected address(es)",
            self.devices_updated, self.invalid_ip_count
        );
        self.print_summary(console)
    }

    /// Print the end-of-session summary.
    pub fn print_summary<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.print_line("\nSummary:\n")?;
        console.print_line(&format!(
            "Number of devices updated: {}",
            self.devices_updated
        ))?;
        Ok(())
    }
}
