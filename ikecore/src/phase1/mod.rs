//! Phase-1 negotiation primitives
//!
//! # Overview
//!
//! Two independent pieces live here. [`cookies`] derives the anti-clogging
//! cookies exchanged at the start of every negotiation: random ones for the
//! initiator, and for the responder a stateless keyed-hash function of the
//! peer's claimed address and a rotating secret held in a
//! [`secrets::SecretStore`]. [`ident`] models the ID payload: parsing textual
//! identity specifications into a closed set of kinds, rendering them for
//! logs, comparing them under per-kind rules and producing the on-wire
//! payload body.
//!
//! The negotiation driver owns everything else: transport, retransmission,
//! proposal handling and the decision when to rotate the cookie secret.
//!
//! # Example
//!
//! ```
//! use std::net::IpAddr;
//! use ikecore::phase1::constants::COOKIE_LENGTH;
//! use ikecore::phase1::cookies::{self, Role};
//! use ikecore::phase1::ident::Identity;
//! use ikecore::phase1::secrets::CookieSecret;
//! use ikecore::phase1::timing::Timebase;
//! # fn main() -> anyhow::Result<()> {
//! let timebase = Timebase::default();
//! let secret = CookieSecret::new();
//! secret.rotate(&timebase);
//!
//! // A negotiation request arrives, claiming to come from this address.
//! let peer: IpAddr = "192.0.2.1".parse()?;
//!
//! // Derive the responder cookie; no per-peer state is kept. When the
//! // peer echoes it back, recompute and compare.
//! let snapshot = secret.snapshot();
//! let mut cookie = [0u8; COOKIE_LENGTH];
//! cookies::generate(Role::Responder, &mut cookie, peer, snapshot.secret());
//! assert!(cookies::verify(&cookie, peer, snapshot.secret()));
//!
//! // Turn the configured local identity into an outbound ID payload body.
//! let id = Identity::parse("user@peer.example")?;
//! let (ty, body) = id.payload_body("203.0.113.7".parse()?);
//! assert_eq!(ty, ikecore::msgs::IdType::UserFqdn);
//! assert_eq!(body.as_ref(), b"user@peer.example");
//! # Ok(())
//! # }
//! ```

pub mod basic_types;
pub mod constants;
pub mod cookies;
pub mod ident;
pub mod secrets;
pub mod timing;
