//! Mock wallet addresses.

use rand::Rng;

/// Bytes in an address (40 hex characters).
pub const ADDRESS_BYTES: usize = 20;

/// Generate a random `0x`-prefixed address.
pub fn random_address() -> String {
    let mut bytes = [0u8; ADDRESS_BYTES];
    rand::rng().fill(&mut bytes[..]);
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("0x{hex}")
}
