//! Constants used by the phase-1 core

use static_assertions::const_assert;

use super::timing::Timing;

/// Conventional length of an anti-clogging cookie in bytes.
///
/// The protocol expects cookie lengths to be a multiple of four; the
/// responder derivation additionally bounds them by [MAX_COOKIE_LENGTH].
pub const COOKIE_LENGTH: usize = 8;

/// Upper bound on responder cookie lengths: the SHA-1 digest size.
///
/// Responder cookies are a truncated digest, so no more than this many
/// bytes can ever be derived from one generation call.
pub const MAX_COOKIE_LENGTH: usize = 20;

/// Length of the rotating cookie secret in bytes
pub const COOKIE_SECRET_LEN: usize = 20;

/// Life time of one cookie secret: the "secret of the day"
///
/// Rotation on this schedule bounds the validity window of any single
/// secret. The rotation call itself is owned by the embedding daemon.
pub const COOKIE_SECRET_EPOCH: Timing = 3600.0 * 24.0;

const_assert!(COOKIE_LENGTH % 4 == 0);
const_assert!(COOKIE_LENGTH <= MAX_COOKIE_LENGTH);
