//! Anti-clogging cookie generation and verification
//!
//! Every phase-1 exchange opens with an 8-byte cookie from each side. The
//! initiator's is plain randomness. The responder's is a keyed hash of the
//! peer's claimed source address and the rotating secret from
//! [super::secrets]: `SHA-1(addr || secret || addr)`, truncated to the
//! cookie length. Because the derivation is deterministic, the responder
//! keeps no per-peer state between challenge and response — when a cookie
//! comes back it simply recomputes and compares. A spoofed-source flood thus
//! costs the responder nothing but hash invocations.
//!
//! The address bytes are sandwiched around the secret rather than plainly
//! concatenated, which rules out the cheap extension tricks an attacker
//! could otherwise play against `H(secret || addr)`.

use std::net::IpAddr;

use rand::rngs::OsRng;
use rand::RngCore;
use sha1::{Digest, Sha1};

use super::constants::MAX_COOKIE_LENGTH;

/// Which side of the negotiation a cookie is generated for.
///
/// The role selects the derivation: random bytes for [Role::Initiator],
/// the keyed address hash for [Role::Responder].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// The party opening the negotiation
    Initiator,
    /// The party answering it
    Responder,
}

/// Whether `cookie` is the reserved all-zero "no cookie yet" sentinel
#[inline]
pub fn is_null(cookie: &[u8]) -> bool {
    cookie.iter().all(|b| *b == 0)
}

/// Fill `out` with a cookie for `role`.
///
/// For [Role::Initiator] the peer address and secret are ignored and `out`
/// is filled from the system's secure random source. For [Role::Responder]
/// `out` receives the first `out.len()` bytes of
/// `SHA-1(addr || secret || addr)` where `addr` is the canonical byte form
/// of `peer` (4 or 16 octets).
///
/// `out.len()` is conventionally [super::constants::COOKIE_LENGTH] and the
/// protocol expects a multiple of four; this function takes the length as
/// opaque. Responder cookies are bounded by the digest size
/// ([MAX_COOKIE_LENGTH]); asking for more is a caller bug.
///
/// # Panics
///
/// If the derived cookie equals the reserved all-zero sentinel (which a
/// zero-length `out` trivially does). The chance for a real cookie is 1 in
/// 256^len per call; hitting it indicates a broken random source or digest,
/// which no retry can fix.
///
/// # Examples
///
/// ```
/// use ikecore::phase1::constants::COOKIE_LENGTH;
/// use ikecore::phase1::cookies::{generate, Role};
///
/// let peer = "192.0.2.1".parse().unwrap();
/// let secret = [0x17u8; 20];
///
/// let mut a = [0u8; COOKIE_LENGTH];
/// let mut b = [0u8; COOKIE_LENGTH];
/// generate(Role::Responder, &mut a, peer, &secret);
/// generate(Role::Responder, &mut b, peer, &secret);
/// assert_eq!(a, b); // deterministic in (address, secret)
/// ```
pub fn generate(role: Role, out: &mut [u8], peer: IpAddr, secret: &[u8]) {
    match role {
        Role::Initiator => OsRng.fill_bytes(out),
        Role::Responder => {
            debug_assert!(out.len() <= MAX_COOKIE_LENGTH);
            let digest = responder_digest(peer, secret);
            let n = out.len().min(digest.len());
            out[..n].copy_from_slice(&digest[..n]);
        }
    }
    assert!(
        !is_null(out),
        "cookie generation produced the reserved all-zero value"
    );
}

/// Check a returned responder cookie against the claimed peer address.
///
/// Recomputes the responder derivation for `cookie.len()` bytes and compares
/// in constant time. Returns `false` for the empty cookie and for lengths
/// beyond the digest size, which no generation call could have produced.
///
/// Callers that keep the originally issued cookie around may instead compare
/// it directly; this path exists for fully stateless validation.
pub fn verify(cookie: &[u8], peer: IpAddr, secret: &[u8]) -> bool {
    if cookie.is_empty() || cookie.len() > MAX_COOKIE_LENGTH {
        return false;
    }
    let digest = responder_digest(peer, secret);
    ikecore_constant_time::memcmp(cookie, &digest[..cookie.len()])
}

/// `SHA-1(addr || secret || addr)` over the canonical address octets
fn responder_digest(peer: IpAddr, secret: &[u8]) -> [u8; MAX_COOKIE_LENGTH] {
    fn sandwich(addr: &[u8], secret: &[u8]) -> [u8; MAX_COOKIE_LENGTH] {
        let mut h = Sha1::new();
        h.update(addr);
        h.update(secret);
        h.update(addr);
        h.finalize().into()
    }
    match peer {
        IpAddr::V4(a) => sandwich(&a.octets(), secret),
        IpAddr::V6(a) => sandwich(&a.octets(), secret),
    }
}
