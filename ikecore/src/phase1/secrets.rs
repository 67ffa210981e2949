//! The rotating secret behind responder cookie derivation
//!
//! The responder derives cookies from a secret that is refreshed on a
//! schedule ("secret of the day"). The schedule itself is owned by the
//! embedding daemon; this module only guarantees that every generation call
//! observes one self-consistent secret value even while rotation runs on
//! another thread.

use std::sync::RwLock;

use super::basic_types::Secret;
use super::constants::COOKIE_SECRET_LEN;
use super::timing::{Timebase, Timing, BCE};

/// A secret value plus the time it was installed
#[derive(Debug)]
struct Slot<const N: usize> {
    created_at: Timing,
    value: Secret<N>,
}

/// Shared holder for a rotating secret.
///
/// Readers take an owned snapshot under a read lock; rotation swaps in fresh
/// randomness under a write lock. Both critical sections are a single copy
/// of `N` bytes, so neither side can stall the other for long.
///
/// A fresh store starts with a random value but an ancient [BCE] creation
/// time, so [SecretStore::needs_rotation] reports it as overdue until the
/// daemon performs the first scheduled rotation.
///
/// # Examples
///
/// ```
/// use ikecore::phase1::secrets::SecretStore;
/// use ikecore::phase1::timing::{Timebase, BCE};
///
/// let timebase = Timebase::default();
/// let store = SecretStore::<20>::new();
/// assert_eq!(store.created_at(), BCE);
/// assert!(store.needs_rotation(&timebase, 120.0));
///
/// let before = store.snapshot();
/// store.rotate(&timebase);
/// assert!(!store.needs_rotation(&timebase, 120.0));
/// assert_ne!(store.snapshot().secret(), before.secret());
/// ```
#[derive(Debug)]
pub struct SecretStore<const N: usize> {
    slot: RwLock<Slot<N>>,
}

/// The store for the cookie secret proper
pub type CookieSecret = SecretStore<COOKIE_SECRET_LEN>;

impl<const N: usize> SecretStore<N> {
    /// Create a store holding a random secret marked as ancient
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(Slot {
                created_at: BCE,
                value: Secret::random(),
            }),
        }
    }

    /// Take an owned snapshot of the current secret.
    ///
    /// The snapshot stays valid for the duration of one generation or
    /// verification call regardless of concurrent rotation.
    pub fn snapshot(&self) -> Secret<N> {
        self.slot.read().expect("secret store lock poisoned").value.clone()
    }

    /// Time the current secret was installed, [BCE] if never rotated
    pub fn created_at(&self) -> Timing {
        self.slot.read().expect("secret store lock poisoned").created_at
    }

    /// Whether the current secret is older than `epoch` seconds
    pub fn needs_rotation(&self, timebase: &Timebase, epoch: Timing) -> bool {
        timebase.now() - self.created_at() >= epoch
    }

    /// Replace the secret with fresh randomness
    pub fn rotate(&self, timebase: &Timebase) {
        let mut slot = self.slot.write().expect("secret store lock poisoned");
        slot.value.randomize();
        slot.created_at = timebase.now();
        log::info!("rotated cookie secret");
    }

    /// Install a fixed secret value.
    ///
    /// Exists for deterministic tests and known-answer vectors; production
    /// rotation goes through [SecretStore::rotate].
    pub fn update(&self, timebase: &Timebase, value: &[u8; N]) {
        let mut slot = self.slot.write().expect("secret store lock poisoned");
        slot.value.secret_mut().copy_from_slice(value);
        slot.created_at = timebase.now();
    }
}

impl<const N: usize> Default for SecretStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
