//! The C ABI surface.
//!
//! Each function reads one flag out of a GPGME record and widens it to
//! `unsigned int`, so that callers whose foreign function interface cannot
//! address bitfields (cgo, most scripting-language FFIs) can still see them.
//! The symbols and signatures match `include/gpgme_shim.h`.
//!
//! # Safety
//!
//! Every function takes a pointer to a live record of the named type. No null
//! or type check is performed; anything else is undefined behaviour. The
//! functions never write through the pointer or keep it past the call.
use libc::c_uint;

macro_rules! bit_accessors {
    ($Raw:ty { $($(#[$Attr:meta])* $name:ident => $getter:ident),+ $(,)? }) => {
        $(
            $(#[$Attr])*
            ///
            /// # Safety
            ///
            /// `raw` must point to a live record of the matching type.
            #[no_mangle]
            pub unsafe extern "C" fn $name(raw: $Raw) -> c_uint {
                c_uint::from((*raw).$getter())
            }
        )+
    };
}

bit_accessors!(ffi::gpgme_key_t {
    key_revoked => revoked,
    key_expired => expired,
    key_disabled => disabled,
    key_invalid => invalid,
    key_can_encrypt => can_encrypt,
    key_can_sign => can_sign,
    key_can_certify => can_certify,
    /// Whether the secret part of the key is available.
    key_secret => secret,
    key_can_authenticate => can_authenticate,
    key_is_qualified => is_qualified,
});

bit_accessors!(ffi::gpgme_subkey_t {
    subkey_revoked => revoked,
    subkey_expired => expired,
    subkey_disabled => disabled,
    subkey_invalid => invalid,
    subkey_secret => secret,
});

bit_accessors!(ffi::gpgme_user_id_t {
    uid_revoked => revoked,
    uid_invalid => invalid,
});

bit_accessors!(ffi::gpgme_signature_t {
    signature_wrong_key_usage => wrong_key_usage,
    signature_chain_model => chain_model,
});

/// Returns the two-bit PKA trust field: 0 unknown, 1 bad, 2 okay.
///
/// # Safety
///
/// `raw` must point to a live signature record.
#[no_mangle]
pub unsafe extern "C" fn signature_pka_trust(raw: ffi::gpgme_signature_t) -> c_uint {
    (*raw).pka_trust()
}
