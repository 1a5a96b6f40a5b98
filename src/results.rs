#![allow(trivial_numeric_casts)]
use std::{
    fmt,
    marker::PhantomData,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::{error::check, Error, Key, NonNull, Result, SignatureFlags, SignatureSummary, Validity};

ffi_enum_wrapper! {
    /// The two-bit PKA trust field of a signature.
    ///
    /// Upstream documentation:
    /// [`gpgme_signature_t`](https://www.gnupg.org/documentation/manuals/gpgme/Verify.html#index-gpgme_005fsignature_005ft)
    pub enum PkaTrust: libc::c_uint {
        Unknown = 0,
        Bad = 1,
        Okay = 2,
    }
}

/// A borrowed view of one signature of a verification result.
///
/// Upstream documentation:
/// [`gpgme_signature_t`](https://www.gnupg.org/documentation/manuals/gpgme/Verify.html#index-gpgme_005fsignature_005ft)
#[derive(Copy, Clone)]
pub struct Signature<'result>(NonNull<ffi::_gpgme_signature>, PhantomData<&'result ()>);

unsafe impl Send for Signature<'_> {}
unsafe impl Sync for Signature<'_> {}

impl<'result> Signature<'result> {
    impl_wrapper!(ffi::gpgme_signature_t, PhantomData);

    #[inline]
    pub fn summary(&self) -> SignatureSummary {
        unsafe { SignatureSummary::from_bits_truncate((*self.as_raw()).summary) }
    }

    cstr_field!(fingerprint, fingerprint_raw, 'result, fpr);

    #[inline]
    pub fn status(&self) -> Result<()> {
        unsafe { check((*self.as_raw()).status) }
    }

    #[inline]
    pub fn creation_time(&self) -> Option<SystemTime> {
        let timestamp = unsafe { (*self.as_raw()).timestamp };
        if timestamp > 0 {
            Some(UNIX_EPOCH + Duration::from_secs(timestamp.into()))
        } else {
            None
        }
    }

    #[inline]
    pub fn expiration_time(&self) -> Option<SystemTime> {
        let expires = unsafe { (*self.as_raw()).exp_timestamp };
        if expires > 0 {
            Some(UNIX_EPOCH + Duration::from_secs(expires.into()))
        } else {
            None
        }
    }

    #[inline]
    pub fn never_expires(&self) -> bool {
        self.expiration_time().is_none()
    }

    #[inline]
    pub fn is_wrong_key_usage(&self) -> bool {
        unsafe { (*self.as_raw()).wrong_key_usage() }
    }

    /// Whether the signature was checked using the chain model.
    #[inline]
    pub fn verified_by_chain(&self) -> bool {
        unsafe { (*self.as_raw()).chain_model() }
    }

    #[inline]
    pub fn is_de_vs(&self) -> bool {
        unsafe { (*self.as_raw()).is_de_vs() }
    }

    #[inline]
    pub fn pka_trust(&self) -> PkaTrust {
        unsafe { PkaTrust::from_raw((*self.as_raw()).pka_trust()) }
    }

    cstr_field!(pka_address, pka_address_raw, 'result, pka_address);

    #[inline]
    pub fn validity(&self) -> Validity {
        unsafe { Validity::from_raw((*self.as_raw()).validity) }
    }

    #[inline]
    pub fn nonvalidity_reason(&self) -> Option<Error> {
        unsafe { check((*self.as_raw()).validity_reason).err() }
    }

    #[inline]
    pub fn key_algorithm_raw(&self) -> ffi::gpgme_pubkey_algo_t {
        unsafe { (*self.as_raw()).pubkey_algo }
    }

    #[inline]
    pub fn hash_algorithm_raw(&self) -> ffi::gpgme_hash_algo_t {
        unsafe { (*self.as_raw()).hash_algo }
    }

    /// The signing key, if GPGME looked it up during verification.
    #[inline]
    pub fn key(&self) -> Option<Key<'result>> {
        unsafe {
            let key = (*self.as_raw()).key;
            if key.is_null() {
                None
            } else {
                Some(Key::from_raw(key))
            }
        }
    }

    /// Copies the signature's flags out of the record.
    pub fn flags(&self) -> SignatureFlags {
        let mut flags = SignatureFlags::empty();
        flags.set(SignatureFlags::WRONG_KEY_USAGE, self.is_wrong_key_usage());
        flags.set(SignatureFlags::CHAIN_MODEL, self.verified_by_chain());
        flags.set(SignatureFlags::IS_DE_VS, self.is_de_vs());
        match self.pka_trust() {
            PkaTrust::Bad => flags.insert(SignatureFlags::PKA_TRUST_BAD),
            PkaTrust::Okay => flags.insert(SignatureFlags::PKA_TRUST_OKAY),
            _ => (),
        }
        flags
    }
}

impl fmt::Debug for Signature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("raw", &self.as_raw())
            .field("fingerprint", &self.fingerprint_raw())
            .field("creation_time", &self.creation_time())
            .field("expiration_time", &self.expiration_time())
            .field("key_algorithm", &self.key_algorithm_raw())
            .field("hash_algorithm", &self.hash_algorithm_raw())
            .field("summary", &self.summary())
            .field("status", &self.status())
            .field("validity", &self.validity())
            .field("nonvalidity_reason", &self.nonvalidity_reason())
            .field("pka_trust", &self.pka_trust())
            .field("flags", &self.flags())
            .finish()
    }
}

impl_list_iterator!(pub struct Signatures(Signature: ffi::gpgme_signature_t));
