//! memcmp

use subtle::ConstantTimeEq;

/// Compares two slices of memory and returns whether their contents are equal.
///
/// ## Leaks
/// If the two slices have different lengths, the function returns immediately.
/// This effectively leaks whether the slices have equal length or not, which is
/// widely considered safe.
///
/// The execution time of the function grows approx. linear with the length of
/// the input. This is considered safe.
///
/// ## Examples
///
/// ```rust
/// use ikecore_constant_time::memcmp;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(memcmp(&a, &a));
/// assert!(!memcmp(&a, &b));
/// assert!(!memcmp(&a, &c));
/// ```
#[inline]
pub fn memcmp(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
