//! Full-width accessors for the bitfield flags of GPGME records.
//!
//! GPGME keeps the boolean properties of keys, subkeys, user ids and
//! signatures in C bitfields, which most foreign function interfaces cannot
//! read. This crate exposes them three ways:
//!
//! - [`capi`]: `extern "C"` functions such as `key_revoked` or
//!   `signature_chain_model` returning `unsigned int`, for C and cgo callers;
//! - borrowed views ([`Key`], [`Subkey`], [`UserId`], [`Signature`]) over
//!   records owned by GPGME;
//! - plain flag snapshots ([`KeyFlags`] and friends) copied out of a view.
//!
//! Nothing here allocates or frees a GPGME record.
//!
//! # Examples
//!
//! ```no_run
//! # fn list(raw: *mut gpgme_shim::ffi::_gpgme_key) {
//! let key = unsafe { gpgme_shim::Key::from_raw(raw) };
//! if key.can_sign() && !key.is_bad() {
//!     for uid in key.user_ids() {
//!         println!("{}", uid);
//!     }
//! }
//! # }
//! ```
use std::{fmt, ptr::NonNull};

use static_assertions::{assert_eq_size, assert_impl_all};

pub use ffi;
pub use ffi::require_gpgme_ver;

pub use crate::{
    error::{Error, ErrorCode, ErrorSource, Result},
    flags::*,
    keys::{Key, Subkey, Subkeys, UserId, UserIds},
    results::{PkaTrust, Signature, Signatures},
    select::find_key,
};

#[macro_use]
mod utils;
pub mod capi;
mod error;
mod flags;
mod keys;
mod results;
mod select;

/// The GPGME header version the record layouts were built against, as
/// `MAJOR.MINOR.0`.
#[inline]
pub fn layout_version() -> &'static str {
    ffi::MIN_VERSION.trim_end_matches('\0')
}

ffi_enum_wrapper! {
    /// Upstream documentation:
    /// [`gpgme_protocol_t`](https://www.gnupg.org/documentation/manuals/gpgme/Protocols-and-Engines.html)
    pub enum Protocol: ffi::gpgme_protocol_t {
        OpenPgp = ffi::GPGME_PROTOCOL_OpenPGP,
        Cms = ffi::GPGME_PROTOCOL_CMS,
        GpgConf = ffi::GPGME_PROTOCOL_GPGCONF,
        Assuan = ffi::GPGME_PROTOCOL_ASSUAN,
        G13 = ffi::GPGME_PROTOCOL_G13,
        UiServer = ffi::GPGME_PROTOCOL_UISERVER,
        Spawn = ffi::GPGME_PROTOCOL_SPAWN,
        Default = ffi::GPGME_PROTOCOL_DEFAULT,
        Unknown = ffi::GPGME_PROTOCOL_UNKNOWN,
    }
}

impl Protocol {
    /// The name `gpgme_get_protocol_name` reports for the protocol.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Protocol::OpenPgp => "OpenPGP",
            Protocol::Cms => "CMS",
            Protocol::GpgConf => "GPGCONF",
            Protocol::Assuan => "Assuan",
            Protocol::G13 => "G13",
            Protocol::UiServer => "UIServer",
            Protocol::Spawn => "Spawn",
            Protocol::Default => "default",
            Protocol::Unknown => "unknown",
            Protocol::Other(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("Unknown"))
    }
}

ffi_enum_wrapper! {
    /// Upstream documentation:
    /// [`gpgme_validity_t`](https://www.gnupg.org/documentation/manuals/gpgme/Information-About-Keys.html)
    pub enum Validity: ffi::gpgme_validity_t {
        Unknown = ffi::GPGME_VALIDITY_UNKNOWN,
        Undefined = ffi::GPGME_VALIDITY_UNDEFINED,
        Never = ffi::GPGME_VALIDITY_NEVER,
        Marginal = ffi::GPGME_VALIDITY_MARGINAL,
        Full = ffi::GPGME_VALIDITY_FULL,
        Ultimate = ffi::GPGME_VALIDITY_ULTIMATE,
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Validity::Undefined => write!(f, "q"),
            Validity::Never => write!(f, "n"),
            Validity::Marginal => write!(f, "m"),
            Validity::Full => write!(f, "f"),
            Validity::Ultimate => write!(f, "u"),
            _ => write!(f, "?"),
        }
    }
}

ffi_enum_wrapper! {
    /// Where GPGME learned about a key or user id.
    pub enum KeyOrigin: ffi::gpgme_keyorg_t {
        Unknown = ffi::GPGME_KEYORG_UNKNOWN,
        KeyServer = ffi::GPGME_KEYORG_KS,
        Dane = ffi::GPGME_KEYORG_DANE,
        Wkd = ffi::GPGME_KEYORG_WKD,
        Url = ffi::GPGME_KEYORG_URL,
        File = ffi::GPGME_KEYORG_FILE,
        Own = ffi::GPGME_KEYORG_SELF,
        OtherSource = ffi::GPGME_KEYORG_OTHER,
    }
}

assert_eq_size!(libc::c_uint, u32);
assert_impl_all!(Key<'static>: Send, Sync, Copy);
assert_impl_all!(Subkey<'static>: Send, Sync, Copy);
assert_impl_all!(UserId<'static>: Send, Sync, Copy);
assert_impl_all!(Signature<'static>: Send, Sync, Copy);
