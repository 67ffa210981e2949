//! Driver-level walk through a phase-1 exchange: cookies first, then the
//! identity comparison and the outbound ID payload.

use std::net::IpAddr;

use anyhow::Result;

use ikecore::msgs::IdType;
use ikecore::phase1::constants::COOKIE_LENGTH;
use ikecore::phase1::cookies::{self, Role};
use ikecore::phase1::ident::{Compat, Identity};
use ikecore::phase1::secrets::CookieSecret;
use ikecore::phase1::timing::Timebase;

#[test]
fn cookie_exchange_between_initiator_and_responder() -> Result<()> {
    let timebase = Timebase::default();
    let secret = CookieSecret::new();
    secret.rotate(&timebase);

    let initiator_addr: IpAddr = "192.0.2.1".parse()?;

    // Initiator opens the exchange with a random cookie.
    let mut initiator_cookie = [0u8; COOKIE_LENGTH];
    cookies::generate(
        Role::Initiator,
        &mut initiator_cookie,
        initiator_addr,
        secret.snapshot().secret(),
    );
    assert!(!cookies::is_null(&initiator_cookie));

    // Responder answers with a cookie derived from the claimed source
    // address; it keeps no record of having done so.
    let snapshot = secret.snapshot();
    let mut responder_cookie = [0u8; COOKIE_LENGTH];
    cookies::generate(
        Role::Responder,
        &mut responder_cookie,
        initiator_addr,
        snapshot.secret(),
    );

    // The initiator echoes the cookie back; the responder revalidates it
    // statelessly from the address and the secret alone.
    assert!(cookies::verify(
        &responder_cookie,
        initiator_addr,
        snapshot.secret()
    ));

    // A flood source spoofing a different address cannot replay it.
    let spoofed: IpAddr = "198.51.100.99".parse()?;
    assert!(!cookies::verify(&responder_cookie, spoofed, snapshot.secret()));

    // After the daily rotation the old cookie no longer validates.
    secret.rotate(&timebase);
    assert!(!cookies::verify(
        &responder_cookie,
        initiator_addr,
        secret.snapshot().secret()
    ));

    Ok(())
}

#[test]
fn identity_exchange_and_outbound_payload() -> Result<()> {
    let local_addr: IpAddr = "203.0.113.7".parse()?;

    // Local identity comes from configuration text and is kept in
    // long-lived state, so it is detached from the config buffer.
    let local_id = {
        let configured = String::from("gateway@host.example");
        Identity::parse(&configured)?.into_owned()
    };

    // The peer transmitted its identity; a quirky peer appended a trailing
    // '@', which the compat toggle absorbs.
    let compat = Compat {
        strip_trailing_at: true,
    };
    let peer_id = Identity::parse_with("gateway@HOST.example@", compat)?;

    // Matching is per-kind; domain names fold case.
    assert_eq!(local_id, peer_id);

    // Frame the outbound ID payload body the way the driver would.
    let (ty, body) = local_id.payload_body(local_addr);
    let mut payload = vec![ty as u8];
    payload.extend_from_slice(&body);

    assert_eq!(IdType::try_from(payload[0])?, IdType::UserFqdn);
    assert_eq!(&payload[1..], b"gateway@host.example");

    // An absent identity still puts something concrete on the wire: the
    // local address.
    let (ty, body) = Identity::None.payload_body(local_addr);
    assert_eq!(ty, IdType::Ipv4Addr);
    assert_eq!(body.as_ref(), [203, 0, 113, 7]);

    Ok(())
}
