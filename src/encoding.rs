// Conversions between the crate's external interface (hex strings, UTF-8
// text) and big integers.

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::{Error, Result};

pub fn biguint_from_hex(hex: &str) -> Result<BigUint> {
    let digits = hex.trim().trim_start_matches("0x");
    BigUint::from_str_radix(digits, 16)
        .map_err(|e| Error::Decode(format!("invalid hex integer {hex:?}: {e}")))
}

pub fn biguint_to_hex(value: &BigUint) -> String {
    value.to_str_radix(16)
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Decode a recovered integer as big-endian bytes and interpret them as
/// UTF-8 text.
pub fn biguint_to_utf8(value: &BigUint) -> Result<String> {
    String::from_utf8(value.to_bytes_be())
        .map_err(|e| Error::Decode(format!("recovered bytes are not valid UTF-8: {e}")))
}
