//! The identity model behind the ISAKMP ID payload
//!
//! Peers name themselves with one of a closed set of identity kinds: an
//! address, a domain name, a user@domain name or an opaque key identifier.
//! This module parses the textual specifications used in configuration,
//! renders identities for logs, compares them under per-kind rules and
//! produces the body bytes for an outbound ID payload.
//!
//! Identities parsed from a buffer borrow from it; [Identity::into_owned]
//! detaches the minority that must outlive their source (for instance when
//! stored in long-lived connection state). The borrow checker enforces the
//! lifecycle, so there is no explicit release step to forget or to call
//! twice.

use std::borrow::Cow;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::msgs::IdType;
use crate::IkeCoreError;

/// Compatibility toggles applied while parsing identity specifications.
///
/// The defaults implement the grammar exactly; every toggle exists to
/// interoperate with a specific class of non-conforming peer and none is
/// load-bearing for standard ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Compat {
    /// Drop a single trailing `@` from a user@domain identity.
    ///
    /// Some peer implementations wrongly append a trailing `@` to the
    /// user-FQDN they transmit; with this set, `user@host.example@` parses
    /// the same as `user@host.example`.
    pub strip_trailing_at: bool,
}

/// One negotiating endpoint's identity (RFC 2407 §4.6.2.1).
///
/// The kinds form a closed enumeration; the variant fully determines which
/// payload is meaningful. Name payloads are [Cow]s: borrowed straight out of
/// the parsed buffer by default, owned after [Identity::into_owned].
///
/// | Kind        | Payload                         | Text form        |
/// |-------------|---------------------------------|------------------|
/// | `None`      | —                               | `(none)`         |
/// | `Ipv4`/`Ipv6` | an address                    | dotted/colon literal |
/// | `Fqdn`      | name without the leading `@`    | `@name`          |
/// | `UserFqdn`  | name including the embedded `@` | `user@name`      |
/// | `KeyId`     | opaque bytes                    | `=bytes`         |
#[derive(Debug, Clone, Default)]
pub enum Identity<'a> {
    /// No identity configured; an outbound payload substitutes the local
    /// address (see [Identity::payload_body]).
    #[default]
    None,
    /// A single IPv4 address
    Ipv4(Ipv4Addr),
    /// A single IPv6 address
    Ipv6(Ipv6Addr),
    /// A fully-qualified domain name, stored without the `@` prefix
    Fqdn(Cow<'a, str>),
    /// A user@domain name, stored with the `@` included since the wire
    /// format transmits it literally
    UserFqdn(Cow<'a, str>),
    /// An opaque, binary-safe key identifier
    KeyId(Cow<'a, [u8]>),
}

impl<'a> Identity<'a> {
    /// Parse an identity specification with default [Compat] settings.
    ///
    /// Grammar, in precedence order:
    ///
    /// 1. leading `=` ⇒ [Identity::KeyId], remainder taken verbatim;
    /// 2. no `@` anywhere ⇒ an address literal, IPv6 if the text contains
    ///    `:`, IPv4 otherwise — the address parser's error is propagated
    ///    as-is on failure;
    /// 3. leading `@` ⇒ [Identity::Fqdn] of the text after the `@`;
    /// 4. otherwise [Identity::UserFqdn] of the entire text.
    ///
    /// Bare hostnames without `@` are not a supported identity form: they
    /// fall through to the address parser in step 2 and fail there.
    ///
    /// The returned identity borrows from `spec`; a failed parse returns
    /// only the error, never a partially populated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ikecore::phase1::ident::Identity;
    /// # fn main() -> anyhow::Result<()> {
    /// assert!(matches!(Identity::parse("192.0.2.1")?, Identity::Ipv4(_)));
    /// assert!(matches!(Identity::parse("2001:db8::1")?, Identity::Ipv6(_)));
    ///
    /// let fqdn = Identity::parse("@host.example")?;
    /// assert_eq!(fqdn, Identity::Fqdn("host.example".into()));
    ///
    /// let ufqdn = Identity::parse("user@host.example")?;
    /// assert_eq!(ufqdn, Identity::UserFqdn("user@host.example".into()));
    ///
    /// let keyid = Identity::parse("=opaque")?;
    /// assert_eq!(keyid, Identity::KeyId(b"opaque"[..].into()));
    ///
    /// assert!(Identity::parse("not-an-identity").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(spec: &'a str) -> Result<Self, IkeCoreError> {
        Self::parse_with(spec, Compat::default())
    }

    /// Parse an identity specification, applying the given [Compat] toggles
    pub fn parse_with(spec: &'a str, compat: Compat) -> Result<Self, IkeCoreError> {
        if let Some(rest) = spec.strip_prefix('=') {
            return Ok(Identity::KeyId(Cow::Borrowed(rest.as_bytes())));
        }
        if !spec.contains('@') {
            return Ok(if spec.contains(':') {
                Identity::Ipv6(spec.parse()?)
            } else {
                Identity::Ipv4(spec.parse()?)
            });
        }
        if let Some(rest) = spec.strip_prefix('@') {
            return Ok(Identity::Fqdn(Cow::Borrowed(rest)));
        }
        let mut name = spec;
        if compat.strip_trailing_at {
            if let Some(stripped) = name.strip_suffix('@') {
                log::debug!("stripping trailing '@' from user-fqdn identity");
                name = stripped;
            }
        }
        Ok(Identity::UserFqdn(Cow::Borrowed(name)))
    }

    /// The identity naming an address, by the address's own family
    pub fn from_address(addr: IpAddr) -> Identity<'static> {
        match addr {
            IpAddr::V4(a) => Identity::Ipv4(a),
            IpAddr::V6(a) => Identity::Ipv6(a),
        }
    }

    /// Render the identity in its text form, sanitized for logging.
    ///
    /// Inverse of [Identity::parse] per the kind table, except that every
    /// non-printable or non-ASCII byte is replaced with `?` first: names and
    /// key IDs arrive from untrusted peers and must not be able to inject
    /// control sequences into logs.
    ///
    /// ```
    /// use ikecore::phase1::ident::Identity;
    /// assert_eq!(Identity::None.render(), "(none)");
    /// assert_eq!(Identity::parse("@host.example").unwrap().render(), "@host.example");
    /// assert_eq!(Identity::parse("=\x01\x02\x03").unwrap().render(), "=???");
    /// ```
    pub fn render(&self) -> String {
        match self {
            Identity::None => "(none)".to_string(),
            Identity::Ipv4(a) => a.to_string(),
            Identity::Ipv6(a) => a.to_string(),
            Identity::Fqdn(name) => {
                let mut out = String::with_capacity(name.len() + 1);
                out.push('@');
                sanitize_into(&mut out, name.as_bytes());
                out
            }
            Identity::UserFqdn(name) => {
                let mut out = String::with_capacity(name.len());
                sanitize_into(&mut out, name.as_bytes());
                out
            }
            Identity::KeyId(bytes) => {
                let mut out = String::with_capacity(bytes.len() + 1);
                out.push('=');
                sanitize_into(&mut out, bytes);
                out
            }
        }
    }

    /// Copy any borrowed payload into owned storage, detaching the identity
    /// from the buffer it was parsed out of.
    ///
    /// No-op for [Identity::None] and the address kinds, which carry no name
    /// payload. Most identities are short-lived and never need this; copying
    /// unconditionally at parse time would waste memory on the common path.
    pub fn into_owned(self) -> Identity<'static> {
        match self {
            Identity::None => Identity::None,
            Identity::Ipv4(a) => Identity::Ipv4(a),
            Identity::Ipv6(a) => Identity::Ipv6(a),
            Identity::Fqdn(name) => Identity::Fqdn(Cow::Owned(name.into_owned())),
            Identity::UserFqdn(name) => Identity::UserFqdn(Cow::Owned(name.into_owned())),
            Identity::KeyId(bytes) => Identity::KeyId(Cow::Owned(bytes.into_owned())),
        }
    }

    /// The on-wire identification type code and payload body bytes.
    ///
    /// [Identity::None] substitutes `local_addr`'s family and octets, so the
    /// peer always sees a concrete identity even when the local
    /// configuration specified none. Name kinds return a view directly into
    /// this identity's storage; the caller keeps the identity alive until
    /// the surrounding message is serialized.
    pub fn payload_body(&self, local_addr: IpAddr) -> (IdType, Cow<'_, [u8]>) {
        match self {
            Identity::None => match local_addr {
                IpAddr::V4(a) => (IdType::Ipv4Addr, Cow::Owned(a.octets().to_vec())),
                IpAddr::V6(a) => (IdType::Ipv6Addr, Cow::Owned(a.octets().to_vec())),
            },
            Identity::Ipv4(a) => (IdType::Ipv4Addr, Cow::Owned(a.octets().to_vec())),
            Identity::Ipv6(a) => (IdType::Ipv6Addr, Cow::Owned(a.octets().to_vec())),
            Identity::Fqdn(name) => (IdType::Fqdn, Cow::Borrowed(name.as_bytes())),
            Identity::UserFqdn(name) => (IdType::UserFqdn, Cow::Borrowed(name.as_bytes())),
            Identity::KeyId(bytes) => (IdType::KeyId, Cow::Borrowed(bytes.as_ref())),
        }
    }
}

/// Append `bytes` to `out`, replacing anything non-printable with `?`
fn sanitize_into(out: &mut String, bytes: &[u8]) {
    for b in bytes {
        if b.is_ascii_graphic() || *b == b' ' {
            out.push(*b as char);
        } else {
            out.push('?');
        }
    }
}

/// Per-kind equality: kinds must match; addresses compare canonically,
/// domain names ASCII-case-insensitively (DNS-style folding), key IDs as
/// exact bytes.
impl<'a, 'b> PartialEq<Identity<'b>> for Identity<'a> {
    fn eq(&self, other: &Identity<'b>) -> bool {
        match (self, other) {
            (Identity::None, Identity::None) => true,
            (Identity::Ipv4(a), Identity::Ipv4(b)) => a == b,
            (Identity::Ipv6(a), Identity::Ipv6(b)) => a == b,
            (Identity::Fqdn(a), Identity::Fqdn(b)) => a.eq_ignore_ascii_case(b),
            (Identity::UserFqdn(a), Identity::UserFqdn(b)) => a.eq_ignore_ascii_case(b),
            (Identity::KeyId(a), Identity::KeyId(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Identity<'_> {}

impl fmt::Display for Identity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
