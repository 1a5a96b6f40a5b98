use std::time::{Duration, UNIX_EPOCH};

use gpgme_shim::{
    ffi, layout_version, KeyFlags, KeyListMode, KeyOrigin, Protocol, SubkeyFlags, UserIdFlags,
    Validity,
};

use self::common::TestKey;

mod common;

const ALPHA_FPR: &str = "A0FF4590BB6122EDEF6E3C542D727CC768697734";
const ALPHA_KEYID: &str = "2D727CC768697734";
const ALPHA_SUB_KEYID: &str = "6AE6D7EE46A871F8";

fn layout_at_least(minor: u32) -> bool {
    let mut parts = layout_version().split('.').map(|p| p.parse::<u32>().unwrap());
    (parts.next().unwrap(), parts.next().unwrap()) >= (1, minor)
}

fn alpha() -> TestKey {
    TestKey::new(ffi::GPGME_KEY_CAN_SIGN | ffi::GPGME_KEY_CAN_CERTIFY)
        .with_fingerprint(ALPHA_FPR)
        .with_protocol(ffi::GPGME_PROTOCOL_OpenPGP)
        .with_keylist_mode(ffi::GPGME_KEYLIST_MODE_LOCAL | ffi::GPGME_KEYLIST_MODE_SIGS)
        .with_subkey_details(
            ffi::GPGME_SUBKEY_CAN_SIGN | ffi::GPGME_SUBKEY_CAN_CERTIFY,
            ALPHA_KEYID,
            ALPHA_FPR,
            1_000_000_000,
            0,
        )
        .with_subkey_details(
            ffi::GPGME_SUBKEY_CAN_ENCRYPT,
            ALPHA_SUB_KEYID,
            "5C2A6EFA3B5E9E8AB4DC7ABA6AE6D7EE46A871F8",
            1_000_000_000,
            1_129_636_886,
        )
        .with_user_id_details(0, "Alfa Test", "alfa@example.net", "demo key", ffi::GPGME_VALIDITY_FULL)
        .with_user_id_details(0, "Alpha Test", "Alpha@Example.net", "demo key", ffi::GPGME_VALIDITY_UNKNOWN)
        .with_user_id(ffi::GPGME_UID_REVOKED, "Alice", "alice@example.net")
}

#[test]
fn test_key_view() {
    let alpha = alpha();
    let key = alpha.view();

    assert!(!key.is_revoked());
    assert!(!key.is_expired());
    assert!(!key.is_disabled());
    assert!(!key.is_invalid());
    assert!(!key.is_bad());
    assert!(key.can_sign());
    assert!(key.can_certify());
    assert!(!key.can_encrypt());
    assert!(!key.can_authenticate());
    assert!(!key.has_secret());
    assert!(!key.is_qualified());
    assert_eq!(key.protocol(), Protocol::OpenPgp);
    assert_eq!(key.owner_trust(), Validity::Unknown);
    assert_eq!(key.issuer_serial(), Err(None));
    assert_eq!(key.issuer_name_raw(), None);
    assert_eq!(key.chain_id(), Err(None));
    assert!(!key.is_root());
    assert_eq!(key.origin(), KeyOrigin::Unknown);
    assert_eq!(key.last_update(), UNIX_EPOCH);
    assert_eq!(
        key.key_list_mode(),
        KeyListMode::LOCAL | KeyListMode::SIGS
    );

    assert_eq!(key.fingerprint(), Ok(ALPHA_FPR));
    assert_eq!(key.id(), Ok(ALPHA_KEYID));
    assert_eq!(key.short_id(), Ok("68697734"));
    assert_eq!(key.flags(), KeyFlags::CAN_SIGN | KeyFlags::CAN_CERTIFY);
}

#[test]
fn test_subkeys() {
    let alpha = alpha();
    let key = alpha.view();
    assert_eq!(key.subkeys().count(), 2);

    let primary = key.primary_key().unwrap();
    assert_eq!(primary.as_raw(), alpha.subkey_raw(0));
    assert!(primary.can_sign());
    assert!(primary.can_certify());
    assert!(!primary.can_encrypt());
    assert!(!primary.is_secret());
    assert!(!primary.is_card_key());
    assert_eq!(primary.card_serial_number(), Err(None));
    assert_eq!(primary.id(), Ok(ALPHA_KEYID));
    assert_eq!(primary.fingerprint(), Ok(ALPHA_FPR));
    assert_eq!(primary.algorithm_raw(), 303);
    assert_eq!(primary.length(), 255);
    assert_eq!(
        primary.creation_time(),
        Some(UNIX_EPOCH + Duration::from_secs(1_000_000_000))
    );
    assert!(primary.never_expires());
    assert_eq!(primary.flags(), SubkeyFlags::CAN_SIGN | SubkeyFlags::CAN_CERTIFY);

    let secondary = key.subkeys().nth(1).unwrap();
    assert!(secondary.can_encrypt());
    assert!(!secondary.can_sign());
    assert_eq!(secondary.id(), Ok(ALPHA_SUB_KEYID));
    assert_eq!(
        secondary.expiration_time(),
        Some(UNIX_EPOCH + Duration::from_secs(1_129_636_886))
    );
    assert!(!secondary.never_expires());
    assert!(key.subkeys().nth(2).is_none());
}

#[test]
fn test_user_ids() {
    let alpha = alpha();
    let key = alpha.view();
    let uids: Vec<_> = key.user_ids().collect();
    assert_eq!(uids.len(), 3);

    assert_eq!(uids[0].name(), Ok("Alfa Test"));
    assert_eq!(uids[0].email(), Ok("alfa@example.net"));
    assert_eq!(uids[0].comment(), Ok("demo key"));
    assert_eq!(uids[0].id(), Ok("Alfa Test (demo key) <alfa@example.net>"));
    assert_eq!(uids[0].validity(), Validity::Full);
    assert_eq!(uids[0].to_string(), "Alfa Test (demo key) <alfa@example.net>");
    assert!(!uids[0].is_bad());
    assert_eq!(uids[0].flags(), UserIdFlags::empty());

    assert_eq!(uids[1].email(), Ok("Alpha@Example.net"));
    assert_eq!(uids[1].address(), Ok("alpha@example.net"));

    assert!(uids[2].is_revoked());
    assert!(!uids[2].is_invalid());
    assert!(uids[2].is_bad());
    assert_eq!(uids[2].flags(), UserIdFlags::REVOKED);
    assert_eq!(uids[2].comment(), Ok(""));
    assert_eq!(uids[2].to_string(), "Alice <alice@example.net>");
}

#[test]
fn test_bad_key() {
    let bad = TestKey::new(ffi::GPGME_KEY_EXPIRED | ffi::GPGME_KEY_SECRET)
        .with_subkey(ffi::GPGME_SUBKEY_EXPIRED, "1111111111111111", "11");
    let key = bad.view();
    assert!(key.is_bad());
    assert!(key.has_secret());
    assert!(key.flags().is_bad());
    assert!(key.flags().contains(KeyFlags::SECRET));

    let subkey = key.primary_key().unwrap();
    assert!(subkey.is_bad());
    assert!(subkey.flags().is_bad());
    assert!(!SubkeyFlags::CAN_SIGN.is_bad());
}

#[test]
fn test_usable_capabilities() {
    let capable = TestKey::new(ffi::GPGME_KEY_HAS_ENCRYPT | ffi::GPGME_KEY_HAS_SIGN)
        .with_subkey(ffi::GPGME_SUBKEY_CAN_SIGN, "1111111111111111", "11")
        .with_subkey(ffi::GPGME_SUBKEY_CAN_ENCRYPT, "2222222222222222", "22");
    assert!(capable.view().has_encrypt());
    assert!(capable.view().has_sign());
    assert!(!capable.view().has_certify());
    assert!(!capable.view().has_authenticate());

    let revoked = TestKey::new(0).with_subkey(
        ffi::GPGME_SUBKEY_CAN_ENCRYPT | ffi::GPGME_SUBKEY_REVOKED,
        "3333333333333333",
        "33",
    );
    assert!(!revoked.view().has_encrypt());
}

#[test]
fn test_usable_capabilities_without_subkeys() {
    let key = TestKey::new(ffi::GPGME_KEY_HAS_ENCRYPT | ffi::GPGME_KEY_HAS_CERTIFY);
    assert_eq!(key.view().has_encrypt(), layout_at_least(23));
    assert_eq!(key.view().has_certify(), layout_at_least(23));
    assert!(!key.view().has_sign());
}

#[test]
fn test_newer_subkey_capabilities() {
    let key = TestKey::new(0)
        .with_subkey(
            ffi::GPGME_SUBKEY_CAN_RENC
                | ffi::GPGME_SUBKEY_CAN_TIMESTAMP
                | ffi::GPGME_SUBKEY_IS_GROUP_OWNED,
            "1111111111111111",
            "11",
        )
        .with_subkey(0, "2222222222222222", "22");
    let mut subkeys = key.view().subkeys();

    let flagged = subkeys.next().unwrap();
    assert_eq!(flagged.can_renc(), layout_at_least(20));
    assert_eq!(flagged.can_timestamp(), layout_at_least(20));
    assert_eq!(flagged.is_group_owned(), layout_at_least(20));

    let plain = subkeys.next().unwrap();
    assert!(!plain.can_renc());
    assert!(!plain.can_timestamp());
    assert!(!plain.is_group_owned());
}

#[test]
fn test_uidhash() {
    let hash = "3E37D4B1DFB6E4C2F1B5C07C48F8D2BC8D75B4A0";
    let key = TestKey::new(0)
        .with_user_id(0, "Alpha", "alpha@example.net")
        .with_uidhash(hash)
        .with_user_id(0, "Bravo", "bravo@example.net");
    let mut uids = key.view().user_ids();

    let hashed = uids.next().unwrap();
    if layout_at_least(14) {
        assert_eq!(hashed.uidhash(), Ok(hash));
    } else {
        assert_eq!(hashed.uidhash(), Err(None));
    }
    assert_eq!(uids.next().unwrap().uidhash(), Err(None));
}

#[test]
fn test_de_vs_needs_every_subkey() {
    let compliant = TestKey::new(0)
        .with_subkey(ffi::GPGME_SUBKEY_IS_DE_VS, "1111111111111111", "11")
        .with_subkey(ffi::GPGME_SUBKEY_IS_DE_VS, "2222222222222222", "22");
    assert!(compliant.view().is_de_vs());

    let mixed = TestKey::new(0)
        .with_subkey(ffi::GPGME_SUBKEY_IS_DE_VS, "1111111111111111", "11")
        .with_subkey(0, "2222222222222222", "22");
    assert!(!mixed.view().is_de_vs());
}

#[test]
fn test_card_key() {
    let card = TestKey::new(ffi::GPGME_KEY_SECRET)
        .with_subkey(
            ffi::GPGME_SUBKEY_SECRET | ffi::GPGME_SUBKEY_IS_CARDKEY,
            "1111111111111111",
            "11",
        )
        .with_card_number("D2760001240102000005000012340000");
    let subkey = card.view().primary_key().unwrap();
    assert!(subkey.is_card_key());
    assert!(subkey.is_secret());
    assert_eq!(
        subkey.card_serial_number(),
        Ok("D2760001240102000005000012340000")
    );
    assert!(subkey.flags().contains(SubkeyFlags::IS_CARDKEY | SubkeyFlags::SECRET));
}

#[test]
fn test_x509_root() {
    let fpr = "3CF405464F66ED4A7DF45BBDD1E4282E33BDB76E";
    let root = TestKey::new(0)
        .with_protocol(ffi::GPGME_PROTOCOL_CMS)
        .with_fingerprint(fpr)
        .with_chain_id(&fpr.to_lowercase())
        .with_issuer("00", "CN=Test CA,O=Example")
        .with_owner_trust(ffi::GPGME_VALIDITY_ULTIMATE);
    let key = root.view();
    assert_eq!(key.protocol(), Protocol::Cms);
    assert_eq!(key.protocol().to_string(), "CMS");
    assert!(key.is_root());
    assert_eq!(key.issuer_serial(), Ok("00"));
    assert_eq!(key.issuer_name(), Ok("CN=Test CA,O=Example"));
    assert_eq!(key.owner_trust(), Validity::Ultimate);
    assert_eq!(key.owner_trust().to_string(), "u");
    assert!(key.primary_key().is_none());
    assert_eq!(key.id(), Err(None));
    assert_eq!(key.subkeys().count(), 0);
}

#[test]
fn test_origin_and_last_update() {
    let wkd = TestKey::new((ffi::GPGME_KEYORG_WKD << ffi::GPGME_ORIGIN_SHIFT) | ffi::GPGME_KEY_CAN_SIGN)
        .with_last_update(1_500_000_000)
        .with_user_id(ffi::GPGME_KEYORG_OTHER << ffi::GPGME_ORIGIN_SHIFT, "Wanda", "wanda@example.net");
    let key = wkd.view();
    assert_eq!(key.origin(), KeyOrigin::Wkd);
    assert!(key.can_sign());
    assert_eq!(key.flags(), KeyFlags::CAN_SIGN);
    assert_eq!(
        key.last_update(),
        UNIX_EPOCH + Duration::from_secs(1_500_000_000)
    );

    let uid = key.user_ids().next().unwrap();
    assert_eq!(uid.origin(), KeyOrigin::OtherSource);
    assert!(!uid.is_bad());
}

#[test]
fn test_fingerprint_falls_back_to_primary() {
    let bare = TestKey::new(0).with_subkey(0, "0123456789ABCDEF", "FEDCBA98765432100123456789ABCDEF");
    assert_eq!(
        bare.view().fingerprint(),
        Ok("FEDCBA98765432100123456789ABCDEF")
    );
}

#[test]
fn test_iterators_are_fused() {
    let alpha = alpha();
    let mut subkeys = alpha.view().subkeys();
    assert!(subkeys.next().is_some());
    assert!(subkeys.next().is_some());
    assert!(subkeys.next().is_none());
    assert!(subkeys.next().is_none());
}

#[test]
fn test_debug_output() {
    let alpha = alpha();
    let key = alpha.view();
    let debug = format!("{:?}", key);
    assert!(debug.starts_with("Key {"));
    assert!(debug.contains(ALPHA_FPR));
    assert!(debug.contains("OpenPgp"));
    assert!(format!("{:?}", key.subkeys()).contains(ALPHA_SUB_KEYID));
    assert!(format!("{:?}", key.user_ids()).contains("Alfa Test"));
}
