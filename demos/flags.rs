//! Sets flags on hand-built GPGME records and reads them back through the C
//! accessors.
//!
//! ```text
//! cargo run --example flags -- --key can_sign,secret --signature chain_model
//! ```
use std::mem;

use clap::{Parser, ValueEnum};
use gpgme_shim::{capi, ffi, Key, Signature};

#[derive(Debug, Copy, Clone, ValueEnum)]
#[value(rename_all = "snake_case")]
enum KeyFlag {
    Revoked,
    Expired,
    Disabled,
    Invalid,
    CanEncrypt,
    CanSign,
    CanCertify,
    Secret,
    CanAuthenticate,
    IsQualified,
}

impl KeyFlag {
    fn mask(self) -> u32 {
        match self {
            KeyFlag::Revoked => ffi::GPGME_KEY_REVOKED,
            KeyFlag::Expired => ffi::GPGME_KEY_EXPIRED,
            KeyFlag::Disabled => ffi::GPGME_KEY_DISABLED,
            KeyFlag::Invalid => ffi::GPGME_KEY_INVALID,
            KeyFlag::CanEncrypt => ffi::GPGME_KEY_CAN_ENCRYPT,
            KeyFlag::CanSign => ffi::GPGME_KEY_CAN_SIGN,
            KeyFlag::CanCertify => ffi::GPGME_KEY_CAN_CERTIFY,
            KeyFlag::Secret => ffi::GPGME_KEY_SECRET,
            KeyFlag::CanAuthenticate => ffi::GPGME_KEY_CAN_AUTHENTICATE,
            KeyFlag::IsQualified => ffi::GPGME_KEY_IS_QUALIFIED,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
#[value(rename_all = "snake_case")]
enum SubkeyFlag {
    Revoked,
    Expired,
    Disabled,
    Invalid,
    Secret,
}

impl SubkeyFlag {
    fn mask(self) -> u32 {
        match self {
            SubkeyFlag::Revoked => ffi::GPGME_SUBKEY_REVOKED,
            SubkeyFlag::Expired => ffi::GPGME_SUBKEY_EXPIRED,
            SubkeyFlag::Disabled => ffi::GPGME_SUBKEY_DISABLED,
            SubkeyFlag::Invalid => ffi::GPGME_SUBKEY_INVALID,
            SubkeyFlag::Secret => ffi::GPGME_SUBKEY_SECRET,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
#[value(rename_all = "snake_case")]
enum UidFlag {
    Revoked,
    Invalid,
}

impl UidFlag {
    fn mask(self) -> u32 {
        match self {
            UidFlag::Revoked => ffi::GPGME_UID_REVOKED,
            UidFlag::Invalid => ffi::GPGME_UID_INVALID,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
#[value(rename_all = "snake_case")]
enum SignatureFlag {
    WrongKeyUsage,
    PkaBad,
    PkaOkay,
    ChainModel,
}

impl SignatureFlag {
    fn mask(self) -> u32 {
        match self {
            SignatureFlag::WrongKeyUsage => ffi::GPGME_SIGNATURE_WRONG_KEY_USAGE,
            SignatureFlag::PkaBad => 1 << ffi::GPGME_SIGNATURE_PKA_TRUST_SHIFT,
            SignatureFlag::PkaOkay => 2 << ffi::GPGME_SIGNATURE_PKA_TRUST_SHIFT,
            SignatureFlag::ChainModel => ffi::GPGME_SIGNATURE_CHAIN_MODEL,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Flags to set on the key
    #[arg(long, value_delimiter = ',')]
    key: Vec<KeyFlag>,
    /// Flags to set on the key's only subkey
    #[arg(long, value_delimiter = ',')]
    subkey: Vec<SubkeyFlag>,
    /// Flags to set on the key's only user id
    #[arg(long, value_delimiter = ',')]
    uid: Vec<UidFlag>,
    /// Flags to set on the signature
    #[arg(long, value_delimiter = ',')]
    signature: Vec<SignatureFlag>,
}

fn main() {
    let args = Cli::parse();

    // Every field of these records is an integer or a pointer.
    let mut subkey: ffi::_gpgme_subkey = unsafe { mem::zeroed() };
    let mut uid: ffi::_gpgme_user_id = unsafe { mem::zeroed() };
    let mut key: ffi::_gpgme_key = unsafe { mem::zeroed() };
    let mut sig: ffi::_gpgme_signature = unsafe { mem::zeroed() };

    subkey.bitfield = args.subkey.iter().fold(0, |acc, f| acc | f.mask());
    uid.bitfield = args.uid.iter().fold(0, |acc, f| acc | f.mask());
    key.bitfield = args.key.iter().fold(0, |acc, f| acc | f.mask());
    sig.bitfield = args.signature.iter().fold(0, |acc, f| acc | f.mask());
    key.subkeys = &mut subkey;
    key.uids = &mut uid;
    sig.key = &mut key;

    let sig = &mut sig as ffi::gpgme_signature_t;
    unsafe {
        let key = (*sig).key;
        let subkey = (*key).subkeys;
        let uid = (*key).uids;
        let accessors = [
            ("key_revoked", capi::key_revoked(key)),
            ("key_expired", capi::key_expired(key)),
            ("key_disabled", capi::key_disabled(key)),
            ("key_invalid", capi::key_invalid(key)),
            ("key_can_encrypt", capi::key_can_encrypt(key)),
            ("key_can_sign", capi::key_can_sign(key)),
            ("key_can_certify", capi::key_can_certify(key)),
            ("key_secret", capi::key_secret(key)),
            ("key_can_authenticate", capi::key_can_authenticate(key)),
            ("key_is_qualified", capi::key_is_qualified(key)),
            ("subkey_revoked", capi::subkey_revoked(subkey)),
            ("subkey_expired", capi::subkey_expired(subkey)),
            ("subkey_disabled", capi::subkey_disabled(subkey)),
            ("subkey_invalid", capi::subkey_invalid(subkey)),
            ("subkey_secret", capi::subkey_secret(subkey)),
            ("uid_revoked", capi::uid_revoked(uid)),
            ("uid_invalid", capi::uid_invalid(uid)),
            ("signature_wrong_key_usage", capi::signature_wrong_key_usage(sig)),
            ("signature_pka_trust", capi::signature_pka_trust(sig)),
            ("signature_chain_model", capi::signature_chain_model(sig)),
        ];
        for (name, value) in accessors.iter() {
            println!("{:<28}{}", name, value);
        }

        let view = Signature::from_raw(sig);
        println!();
        println!("signature: {:?}", view.flags());
        if let Some(key) = view.key() {
            print_key(key);
        }
    }
}

fn print_key(key: Key<'_>) {
    println!("key:       {:?}", key.flags());
    for subkey in key.subkeys() {
        println!("subkey:    {:?}", subkey.flags());
    }
    for uid in key.user_ids() {
        println!("uid:       {:?}", uid.flags());
    }
}
