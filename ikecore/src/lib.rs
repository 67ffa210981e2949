//! Core primitives for IKE/ISAKMP phase-1 negotiation: anti-clogging cookie
//! generation and verification, and the identity model backing the ID payload
//! (RFC 2407 §4.6.2.1).
//!
//! This crate deliberately contains no I/O and no message framing; the
//! embedding daemon owns the sockets, the proposal negotiation and the
//! retransmission logic, and calls into this crate with a peer address, a
//! secret snapshot and identity strings.

pub mod msgs;
pub mod phase1;

/// Recoverable errors produced by this crate.
///
/// Invariant violations (such as the all-zero cookie postcondition) are
/// panics, not variants here; see the individual function docs.
#[derive(thiserror::Error, Debug)]
pub enum IkeCoreError {
    /// An identity specification that should have been an address literal
    /// could not be parsed as one. Carries the address parser's own error.
    #[error(transparent)]
    InvalidAddress(#[from] std::net::AddrParseError),
    /// An on-wire identification type code outside the set this core can
    /// represent.
    #[error("invalid identification type code {0}")]
    InvalidIdType(u8),
}
