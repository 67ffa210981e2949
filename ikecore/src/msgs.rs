//! Wire-facing constants for the ISAKMP identification payload
//!
//! Only the identification type codes live here; framing the surrounding
//! payload (and the rest of the ISAKMP message) is the embedding daemon's
//! job.

use crate::IkeCoreError;

/// Identification type codes from RFC 2407 §4.6.2.1, limited to the kinds
/// this core can produce.
///
/// The remaining codes defined by the RFC (address subnets and ranges,
/// ASN.1 distinguished/general names) have no counterpart in
/// [`Identity`](crate::phase1::ident::Identity) and are rejected by
/// [`IdType::try_from`] like any unknown code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum IdType {
    /// A single IPv4 address, four octets of body.
    Ipv4Addr = 1,
    /// A fully-qualified domain name, transmitted without any terminator.
    Fqdn = 2,
    /// A user@domain name, transmitted with the `@` included.
    UserFqdn = 3,
    /// A single IPv6 address, sixteen octets of body.
    Ipv6Addr = 5,
    /// An opaque, installation-defined byte string.
    KeyId = 11,
}

impl TryFrom<u8> for IdType {
    type Error = IkeCoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => IdType::Ipv4Addr,
            2 => IdType::Fqdn,
            3 => IdType::UserFqdn,
            5 => IdType::Ipv6Addr,
            11 => IdType::KeyId,
            _ => return Err(IkeCoreError::InvalidIdType(value)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_type_codes_round_trip() {
        for ty in [
            IdType::Ipv4Addr,
            IdType::Fqdn,
            IdType::UserFqdn,
            IdType::Ipv6Addr,
            IdType::KeyId,
        ] {
            assert_eq!(IdType::try_from(ty as u8).unwrap(), ty);
        }
    }

    #[test]
    fn unknown_id_type_codes_are_rejected() {
        // 4 and 9 are real RFC 2407 codes (v4 subnet, DER ASN.1 DN), but not
        // ones this core can represent.
        for code in [0u8, 4, 9, 12, 255] {
            assert!(matches!(
                IdType::try_from(code),
                Err(IkeCoreError::InvalidIdType(c)) if c == code
            ));
        }
    }
}
