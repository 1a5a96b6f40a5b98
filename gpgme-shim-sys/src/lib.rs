//! Raw layouts of the GPGME records whose flags are stored as C bitfields.
//!
//! GPGME packs the boolean properties of keys, subkeys, user ids and
//! signatures into `unsigned int x : 1` members sharing one 32-bit storage
//! unit. Each record is mirrored here with that unit exposed as a single
//! `bitfield: u32` and one mask constant per flag.
//!
//! The System V ABIs allocate bitfields in declaration order starting from
//! the least significant bit on little-endian targets and from the most
//! significant bit on big-endian ones. The masks follow the target, so
//! `GPGME_KEY_REVOKED` is `1 << 0` on x86_64 and `1 << 31` on s390x.
//!
//! Only the fields needed to read the records are declared. The records are
//! always allocated by GPGME; nothing in this crate creates or frees them.
#![allow(non_upper_case_globals, non_camel_case_types)]
use libc::{c_char, c_long, c_uint, c_ulong};

#[cfg(not(ctest))]
include!(concat!(env!("OUT_DIR"), "/version.rs"));

pub type gpgme_error_t = c_uint;

pub type gpgme_pubkey_algo_t = c_uint;
pub type gpgme_hash_algo_t = c_uint;

pub type gpgme_validity_t = c_uint;
pub const GPGME_VALIDITY_UNKNOWN: gpgme_validity_t = 0;
pub const GPGME_VALIDITY_UNDEFINED: gpgme_validity_t = 1;
pub const GPGME_VALIDITY_NEVER: gpgme_validity_t = 2;
pub const GPGME_VALIDITY_MARGINAL: gpgme_validity_t = 3;
pub const GPGME_VALIDITY_FULL: gpgme_validity_t = 4;
pub const GPGME_VALIDITY_ULTIMATE: gpgme_validity_t = 5;

pub type gpgme_keyorg_t = c_uint;
pub const GPGME_KEYORG_UNKNOWN: gpgme_keyorg_t = 0;
pub const GPGME_KEYORG_KS: gpgme_keyorg_t = 1;
pub const GPGME_KEYORG_DANE: gpgme_keyorg_t = 3;
pub const GPGME_KEYORG_WKD: gpgme_keyorg_t = 4;
pub const GPGME_KEYORG_URL: gpgme_keyorg_t = 5;
pub const GPGME_KEYORG_FILE: gpgme_keyorg_t = 6;
pub const GPGME_KEYORG_SELF: gpgme_keyorg_t = 7;
pub const GPGME_KEYORG_OTHER: gpgme_keyorg_t = 31;

pub type gpgme_protocol_t = c_uint;
pub const GPGME_PROTOCOL_OpenPGP: gpgme_protocol_t = 0;
pub const GPGME_PROTOCOL_CMS: gpgme_protocol_t = 1;
pub const GPGME_PROTOCOL_GPGCONF: gpgme_protocol_t = 2;
pub const GPGME_PROTOCOL_ASSUAN: gpgme_protocol_t = 3;
pub const GPGME_PROTOCOL_G13: gpgme_protocol_t = 4;
pub const GPGME_PROTOCOL_UISERVER: gpgme_protocol_t = 5;
pub const GPGME_PROTOCOL_SPAWN: gpgme_protocol_t = 6;
pub const GPGME_PROTOCOL_DEFAULT: gpgme_protocol_t = 254;
pub const GPGME_PROTOCOL_UNKNOWN: gpgme_protocol_t = 255;

pub type gpgme_keylist_mode_t = c_uint;
pub const GPGME_KEYLIST_MODE_LOCAL: gpgme_keylist_mode_t = 1;
pub const GPGME_KEYLIST_MODE_EXTERN: gpgme_keylist_mode_t = 2;
pub const GPGME_KEYLIST_MODE_SIGS: gpgme_keylist_mode_t = 4;
pub const GPGME_KEYLIST_MODE_SIG_NOTATIONS: gpgme_keylist_mode_t = 8;
pub const GPGME_KEYLIST_MODE_WITH_SECRET: gpgme_keylist_mode_t = 16;
pub const GPGME_KEYLIST_MODE_WITH_TOFU: gpgme_keylist_mode_t = 32;
// 1.14
pub const GPGME_KEYLIST_MODE_WITH_KEYGRIP: gpgme_keylist_mode_t = 64;
pub const GPGME_KEYLIST_MODE_EPHEMERAL: gpgme_keylist_mode_t = 128;
pub const GPGME_KEYLIST_MODE_VALIDATE: gpgme_keylist_mode_t = 256;
pub const GPGME_KEYLIST_MODE_LOCATE: gpgme_keylist_mode_t =
    GPGME_KEYLIST_MODE_LOCAL | GPGME_KEYLIST_MODE_EXTERN;

pub type gpgme_sigsum_t = c_uint;
pub const GPGME_SIGSUM_VALID: gpgme_sigsum_t = 0x0001;
pub const GPGME_SIGSUM_GREEN: gpgme_sigsum_t = 0x0002;
pub const GPGME_SIGSUM_RED: gpgme_sigsum_t = 0x0004;
pub const GPGME_SIGSUM_KEY_REVOKED: gpgme_sigsum_t = 0x0010;
pub const GPGME_SIGSUM_KEY_EXPIRED: gpgme_sigsum_t = 0x0020;
pub const GPGME_SIGSUM_SIG_EXPIRED: gpgme_sigsum_t = 0x0040;
pub const GPGME_SIGSUM_KEY_MISSING: gpgme_sigsum_t = 0x0080;
pub const GPGME_SIGSUM_CRL_MISSING: gpgme_sigsum_t = 0x0100;
pub const GPGME_SIGSUM_CRL_TOO_OLD: gpgme_sigsum_t = 0x0200;
pub const GPGME_SIGSUM_BAD_POLICY: gpgme_sigsum_t = 0x0400;
pub const GPGME_SIGSUM_SYS_ERROR: gpgme_sigsum_t = 0x0800;
pub const GPGME_SIGSUM_TOFU_CONFLICT: gpgme_sigsum_t = 0x1000;

// Records referenced by pointer from the ones below but never read here.
#[repr(C)]
pub struct _gpgme_key_sig {
    _priv: [u8; 0],
}
pub type gpgme_key_sig_t = *mut _gpgme_key_sig;

#[repr(C)]
pub struct _gpgme_tofu_info {
    _priv: [u8; 0],
}
pub type gpgme_tofu_info_t = *mut _gpgme_tofu_info;

#[repr(C)]
pub struct _gpgme_sig_notation {
    _priv: [u8; 0],
}
pub type gpgme_sig_notation_t = *mut _gpgme_sig_notation;

/// The mask for the `n`th single-bit member of a bitfield unit, counted in
/// declaration order.
#[cfg(target_endian = "little")]
pub const fn bit(n: u32) -> u32 {
    1 << n
}

#[cfg(target_endian = "big")]
pub const fn bit(n: u32) -> u32 {
    1 << (31 - n)
}

/// `origin : 5` is the last member of its unit.
#[cfg(target_endian = "little")]
pub const GPGME_ORIGIN_SHIFT: u32 = 27;
#[cfg(target_endian = "big")]
pub const GPGME_ORIGIN_SHIFT: u32 = 0;
pub const GPGME_ORIGIN_MASK: u32 = 0x1F << GPGME_ORIGIN_SHIFT;

pub const GPGME_SUBKEY_REVOKED: u32 = bit(0);
pub const GPGME_SUBKEY_EXPIRED: u32 = bit(1);
pub const GPGME_SUBKEY_DISABLED: u32 = bit(2);
pub const GPGME_SUBKEY_INVALID: u32 = bit(3);
pub const GPGME_SUBKEY_CAN_ENCRYPT: u32 = bit(4);
pub const GPGME_SUBKEY_CAN_SIGN: u32 = bit(5);
pub const GPGME_SUBKEY_CAN_CERTIFY: u32 = bit(6);
pub const GPGME_SUBKEY_SECRET: u32 = bit(7);
pub const GPGME_SUBKEY_CAN_AUTHENTICATE: u32 = bit(8);
pub const GPGME_SUBKEY_IS_QUALIFIED: u32 = bit(9);
pub const GPGME_SUBKEY_IS_CARDKEY: u32 = bit(10);
pub const GPGME_SUBKEY_IS_DE_VS: u32 = bit(11);
// 1.20
pub const GPGME_SUBKEY_CAN_RENC: u32 = bit(12);
pub const GPGME_SUBKEY_CAN_TIMESTAMP: u32 = bit(13);
pub const GPGME_SUBKEY_IS_GROUP_OWNED: u32 = bit(14);

#[repr(C)]
pub struct _gpgme_subkey {
    pub next: gpgme_subkey_t,
    pub bitfield: u32,
    pub pubkey_algo: gpgme_pubkey_algo_t,
    pub length: c_uint,
    pub keyid: *mut c_char,
    _keyid: [c_char; 17],
    pub fpr: *mut c_char,
    pub timestamp: c_long,
    pub expires: c_long,
    pub card_number: *mut c_char,
    pub curve: *mut c_char,
    pub keygrip: *mut c_char,
}
pub type gpgme_subkey_t = *mut _gpgme_subkey;

impl _gpgme_subkey {
    #[inline]
    pub fn revoked(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_REVOKED) != 0
    }
    #[inline]
    pub fn expired(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_EXPIRED) != 0
    }
    #[inline]
    pub fn disabled(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_DISABLED) != 0
    }
    #[inline]
    pub fn invalid(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_INVALID) != 0
    }
    #[inline]
    pub fn can_encrypt(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_ENCRYPT) != 0
    }
    #[inline]
    pub fn can_sign(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_SIGN) != 0
    }
    #[inline]
    pub fn can_certify(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_CERTIFY) != 0
    }
    #[inline]
    pub fn secret(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_SECRET) != 0
    }
    #[inline]
    pub fn can_authenticate(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_AUTHENTICATE) != 0
    }
    #[inline]
    pub fn is_qualified(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_IS_QUALIFIED) != 0
    }
    #[inline]
    pub fn is_cardkey(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_IS_CARDKEY) != 0
    }
    #[inline]
    pub fn is_de_vs(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_IS_DE_VS) != 0
    }
    #[inline]
    pub fn can_renc(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_RENC) != 0
    }
    #[inline]
    pub fn can_timestamp(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_CAN_TIMESTAMP) != 0
    }
    #[inline]
    pub fn is_group_owned(&self) -> bool {
        (self.bitfield & GPGME_SUBKEY_IS_GROUP_OWNED) != 0
    }
}

pub const GPGME_UID_REVOKED: u32 = bit(0);
pub const GPGME_UID_INVALID: u32 = bit(1);

#[repr(C)]
pub struct _gpgme_user_id {
    pub next: gpgme_user_id_t,
    pub bitfield: u32,
    pub validity: gpgme_validity_t,
    pub uid: *mut c_char,
    pub name: *mut c_char,
    pub email: *mut c_char,
    pub comment: *mut c_char,
    pub signatures: gpgme_key_sig_t,
    _last_keysig: gpgme_key_sig_t,
    pub address: *mut c_char,
    pub tofu: gpgme_tofu_info_t,
    pub last_update: c_ulong,
    // 1.14
    pub uidhash: *mut c_char,
}
pub type gpgme_user_id_t = *mut _gpgme_user_id;

impl _gpgme_user_id {
    #[inline]
    pub fn revoked(&self) -> bool {
        (self.bitfield & GPGME_UID_REVOKED) != 0
    }
    #[inline]
    pub fn invalid(&self) -> bool {
        (self.bitfield & GPGME_UID_INVALID) != 0
    }
    #[inline]
    pub fn origin(&self) -> u32 {
        (self.bitfield & GPGME_ORIGIN_MASK) >> GPGME_ORIGIN_SHIFT
    }
}

pub const GPGME_KEY_REVOKED: u32 = bit(0);
pub const GPGME_KEY_EXPIRED: u32 = bit(1);
pub const GPGME_KEY_DISABLED: u32 = bit(2);
pub const GPGME_KEY_INVALID: u32 = bit(3);
pub const GPGME_KEY_CAN_ENCRYPT: u32 = bit(4);
pub const GPGME_KEY_CAN_SIGN: u32 = bit(5);
pub const GPGME_KEY_CAN_CERTIFY: u32 = bit(6);
pub const GPGME_KEY_SECRET: u32 = bit(7);
pub const GPGME_KEY_CAN_AUTHENTICATE: u32 = bit(8);
pub const GPGME_KEY_IS_QUALIFIED: u32 = bit(9);
// 1.23
pub const GPGME_KEY_HAS_ENCRYPT: u32 = bit(10);
pub const GPGME_KEY_HAS_SIGN: u32 = bit(11);
pub const GPGME_KEY_HAS_CERTIFY: u32 = bit(12);
pub const GPGME_KEY_HAS_AUTHENTICATE: u32 = bit(13);

#[repr(C)]
pub struct _gpgme_key {
    _refs: c_uint,
    pub bitfield: u32,
    pub protocol: gpgme_protocol_t,
    pub issuer_serial: *mut c_char,
    pub issuer_name: *mut c_char,
    pub chain_id: *mut c_char,
    pub owner_trust: gpgme_validity_t,
    pub subkeys: gpgme_subkey_t,
    pub uids: gpgme_user_id_t,
    _last_subkey: gpgme_subkey_t,
    _last_uid: gpgme_user_id_t,
    pub keylist_mode: gpgme_keylist_mode_t,
    pub fpr: *mut c_char,
    pub last_update: c_ulong,
}
pub type gpgme_key_t = *mut _gpgme_key;

impl _gpgme_key {
    #[inline]
    pub fn revoked(&self) -> bool {
        (self.bitfield & GPGME_KEY_REVOKED) != 0
    }
    #[inline]
    pub fn expired(&self) -> bool {
        (self.bitfield & GPGME_KEY_EXPIRED) != 0
    }
    #[inline]
    pub fn disabled(&self) -> bool {
        (self.bitfield & GPGME_KEY_DISABLED) != 0
    }
    #[inline]
    pub fn invalid(&self) -> bool {
        (self.bitfield & GPGME_KEY_INVALID) != 0
    }
    #[inline]
    pub fn can_encrypt(&self) -> bool {
        (self.bitfield & GPGME_KEY_CAN_ENCRYPT) != 0
    }
    #[inline]
    pub fn can_sign(&self) -> bool {
        (self.bitfield & GPGME_KEY_CAN_SIGN) != 0
    }
    #[inline]
    pub fn can_certify(&self) -> bool {
        (self.bitfield & GPGME_KEY_CAN_CERTIFY) != 0
    }
    #[inline]
    pub fn secret(&self) -> bool {
        (self.bitfield & GPGME_KEY_SECRET) != 0
    }
    #[inline]
    pub fn can_authenticate(&self) -> bool {
        (self.bitfield & GPGME_KEY_CAN_AUTHENTICATE) != 0
    }
    #[inline]
    pub fn is_qualified(&self) -> bool {
        (self.bitfield & GPGME_KEY_IS_QUALIFIED) != 0
    }
    #[inline]
    pub fn has_encrypt(&self) -> bool {
        (self.bitfield & GPGME_KEY_HAS_ENCRYPT) != 0
    }
    #[inline]
    pub fn has_sign(&self) -> bool {
        (self.bitfield & GPGME_KEY_HAS_SIGN) != 0
    }
    #[inline]
    pub fn has_certify(&self) -> bool {
        (self.bitfield & GPGME_KEY_HAS_CERTIFY) != 0
    }
    #[inline]
    pub fn has_authenticate(&self) -> bool {
        (self.bitfield & GPGME_KEY_HAS_AUTHENTICATE) != 0
    }
    #[inline]
    pub fn origin(&self) -> u32 {
        (self.bitfield & GPGME_ORIGIN_MASK) >> GPGME_ORIGIN_SHIFT
    }
}

pub const GPGME_SIGNATURE_WRONG_KEY_USAGE: u32 = bit(0);
/// Two-bit field, members 1 and 2 of the unit.
pub const GPGME_SIGNATURE_PKA_TRUST: u32 = 0b11 << GPGME_SIGNATURE_PKA_TRUST_SHIFT;
#[cfg(target_endian = "little")]
pub const GPGME_SIGNATURE_PKA_TRUST_SHIFT: u32 = 1;
#[cfg(target_endian = "big")]
pub const GPGME_SIGNATURE_PKA_TRUST_SHIFT: u32 = 29;
pub const GPGME_SIGNATURE_CHAIN_MODEL: u32 = bit(3);
pub const GPGME_SIGNATURE_IS_DE_VS: u32 = bit(4);

#[repr(C)]
pub struct _gpgme_signature {
    pub next: gpgme_signature_t,
    pub summary: gpgme_sigsum_t,
    pub fpr: *mut c_char,
    pub status: gpgme_error_t,
    pub notations: gpgme_sig_notation_t,
    pub timestamp: c_ulong,
    pub exp_timestamp: c_ulong,
    pub bitfield: u32,
    pub validity: gpgme_validity_t,
    pub validity_reason: gpgme_error_t,
    pub pubkey_algo: gpgme_pubkey_algo_t,
    pub hash_algo: gpgme_hash_algo_t,
    pub pka_address: *mut c_char,
    pub key: gpgme_key_t,
}
pub type gpgme_signature_t = *mut _gpgme_signature;

impl _gpgme_signature {
    #[inline]
    pub fn wrong_key_usage(&self) -> bool {
        (self.bitfield & GPGME_SIGNATURE_WRONG_KEY_USAGE) != 0
    }

    #[inline]
    pub fn pka_trust(&self) -> c_uint {
        (self.bitfield & GPGME_SIGNATURE_PKA_TRUST) >> GPGME_SIGNATURE_PKA_TRUST_SHIFT
    }

    #[inline]
    pub fn chain_model(&self) -> bool {
        (self.bitfield & GPGME_SIGNATURE_CHAIN_MODEL) != 0
    }

    #[inline]
    pub fn is_de_vs(&self) -> bool {
        (self.bitfield & GPGME_SIGNATURE_IS_DE_VS) != 0
    }
}
