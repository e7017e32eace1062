//! IPv4 address validation.
//!
//! This module provides the two dotted-quad checks the program relies
//! on: a strict general-purpose predicate and the looser octet scan
//! driving the interactive prompt loop. The two are deliberately not
//! unified; see [`scan_octets`] for the exact difference.

use std::num::IntErrorKind;

/// Verdict of scanning the dot-separated segments of an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctetScan {
    /// Every segment parsed as an integer in 0..=255.
    InRange,
    /// Some segment parsed as an integer outside 0..=255.
    OutOfRange,
}

/// A segment of an address string that does not parse as an integer at all.
///
/// The interactive loop treats this as a session-terminating condition,
/// not as one more invalid attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("octet '{octet}' in address '{address}' is not a number")]
pub struct OctetParseError {
    /// The full address string as entered.
    pub address: String,
    /// The offending segment.
    pub octet: String,
}

/// Check whether a string is a syntactically valid dotted-quad IPv4 address.
///
/// Splits on `'.'` and requires exactly four segments, each parsing as
/// an integer in 0..=255. Any parse failure or wrong segment count
/// yields `false`. Segments are trimmed of surrounding whitespace and
/// parsed as plain integers, so leading zeros and padded entries are
/// accepted ("001" is 1, "1 " is 1).
///
/// # Arguments
/// * `address` - The candidate address string
///
/// # Returns
/// * `true` if the string is a valid dotted quad, `false` otherwise
///
/// # Examples
/// ```
/// use netinv::validate::is_valid_ip;
///
/// assert!(is_valid_ip("192.168.1.1"));
/// assert!(is_valid_ip("0.0.0.0"));
/// assert!(is_valid_ip("10.0.0.1 "));
/// assert!(!is_valid_ip("192.168.1"));
/// assert!(!is_valid_ip("256.1.1.1"));
/// assert!(!is_valid_ip("10.0.x.1"));
/// ```
pub fn is_valid_ip(address: &str) -> bool {
    let octets: Vec<&str> = address.split('.').collect();
    if octets.len() != 4 {
        return false;
    }
    octets
        .iter()
        .all(|octet| matches!(octet.trim().parse::<i64>(), Ok(value) if (0..=255).contains(&value)))
}

/// Scan the dot-separated segments of an address for range violations.
///
/// This is the check the interactive prompt loop uses, and it is
/// deliberately not unified with [`is_valid_ip`]: there is no
/// four-segment count check ("1.2.3" and "1.2.3.4.5" both come back
/// [`OctetScan::InRange`]), and a segment that fails integer parsing is
/// an error rather than an invalid attempt. Segments are visited in
/// order and the first violation wins, so "999.abc.1" is out of range
/// while "abc.999.1" is a parse error.
///
/// Segments are trimmed of surrounding whitespace and parse as `i64`,
/// so a padded " 1 " is 1 and an in-bounds-looking number such as
/// "999" lands in [`OctetScan::OutOfRange`] instead of failing to
/// parse. A digit string too large for `i64` is also out of range, not
/// a parse error.
///
/// # Arguments
/// * `address` - The candidate address string
///
/// # Returns
/// * `Ok(OctetScan::InRange)` if every segment parses in 0..=255
/// * `Ok(OctetScan::OutOfRange)` on the first out-of-range segment
/// * `Err(OctetParseError)` on the first non-numeric segment
///
/// # Examples
/// ```
/// use netinv::validate::{scan_octets, OctetScan};
///
/// assert_eq!(scan_octets("10.0.0.1"), Ok(OctetScan::InRange));
/// assert_eq!(scan_octets("10.0.0.1 "), Ok(OctetScan::InRange));
/// assert_eq!(scan_octets("1.2.3"), Ok(OctetScan::InRange));
/// assert_eq!(scan_octets("999.0.0.1"), Ok(OctetScan::OutOfRange));
/// assert!(scan_octets("1.abc.3").is_err());
/// ```
pub fn scan_octets(address: &str) -> Result<OctetScan, OctetParseError> {
    for octet in address.split('.') {
        let value: i64 = match octet.trim().parse() {
            Ok(value) => value,
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                // Overflowing digit strings are numbers far outside
                // [0, 255], not malformed input.
                return Ok(OctetScan::OutOfRange);
            }
            Err(_) => {
                return Err(OctetParseError {
                    address: address.to_string(),
                    octet: octet.to_string(),
                });
            }
        };
        if !(0..=255).contains(&value) {
            return Ok(OctetScan::OutOfRange);
        }
    }
    Ok(OctetScan::InRange)
}
