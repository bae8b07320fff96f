//! Cryptographic utilities
//!
//! Constant-time comparison for secret material. Standard `==` on strings
//! exits at the first mismatching byte, which leaks position information
//! through response timing; these helpers take the same time regardless of
//! where the inputs differ.

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices.
///
/// Inputs of different lengths compare unequal without leaking the length
/// through timing beyond what the length itself already reveals.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings.
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
