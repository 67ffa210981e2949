//! Fundamental byte-value types used by the phase-1 core

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size secret byte value, wiped from memory on drop.
///
/// Deliberately has no `PartialEq`: secrets are compared only through
/// derived values (such as cookies) and the constant-time helpers.
///
/// # Examples
///
/// ```
/// use ikecore::phase1::basic_types::Secret;
///
/// let zero = Secret::<20>::zero();
/// assert_eq!(zero.secret(), &[0u8; 20]);
///
/// let random = Secret::<20>::random();
/// assert_ne!(random.secret(), zero.secret());
/// ```
#[derive(Clone)]
pub struct Secret<const N: usize> {
    value: [u8; N],
}

impl<const N: usize> Zeroize for Secret<N> {
    fn zeroize(&mut self) {
        self.value.zeroize()
    }
}

impl<const N: usize> ZeroizeOnDrop for Secret<N> {}

impl<const N: usize> Drop for Secret<N> {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl<const N: usize> Secret<N> {
    /// Create a zero-initialized [Secret]
    pub fn zero() -> Self {
        Self { value: [0u8; N] }
    }

    /// Create a [Secret] filled from the system's secure random source
    pub fn random() -> Self {
        let mut r = Self::zero();
        r.randomize();
        r
    }

    /// Create a [Secret] from an existing byte array
    pub fn from_bytes(value: [u8; N]) -> Self {
        Self { value }
    }

    /// Refill all bytes from the system's secure random source
    pub fn randomize(&mut self) {
        OsRng.fill_bytes(&mut self.value);
    }

    /// Borrow the secret bytes
    pub fn secret(&self) -> &[u8; N] {
        &self.value
    }

    /// Mutably borrow the secret bytes
    pub fn secret_mut(&mut self) -> &mut [u8; N] {
        &mut self.value
    }
}

impl<const N: usize> fmt::Debug for Secret<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Secret<{}><redacted>", N)
    }
}
