#![allow(trivial_numeric_casts)]
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct KeyListMode: ffi::gpgme_keylist_mode_t {
        const LOCAL = ffi::GPGME_KEYLIST_MODE_LOCAL;
        const EXTERN = ffi::GPGME_KEYLIST_MODE_EXTERN;
        const SIGS = ffi::GPGME_KEYLIST_MODE_SIGS;
        const SIG_NOTATIONS = ffi::GPGME_KEYLIST_MODE_SIG_NOTATIONS;
        const WITH_SECRET = ffi::GPGME_KEYLIST_MODE_WITH_SECRET;
        const WITH_TOFU = ffi::GPGME_KEYLIST_MODE_WITH_TOFU;
        const WITH_KEYGRIP = ffi::GPGME_KEYLIST_MODE_WITH_KEYGRIP;
        const EPHEMERAL = ffi::GPGME_KEYLIST_MODE_EPHEMERAL;
        const VALIDATE = ffi::GPGME_KEYLIST_MODE_VALIDATE;
        const LOCATE = ffi::GPGME_KEYLIST_MODE_LOCATE;
    }
}

bitflags! {
    /// Upstream documentation:
    /// [`gpgme_sigsum_t`](https://www.gnupg.org/documentation/manuals/gpgme/Verify.html)
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SignatureSummary: ffi::gpgme_sigsum_t {
        const VALID = ffi::GPGME_SIGSUM_VALID;
        const GREEN = ffi::GPGME_SIGSUM_GREEN;
        const RED = ffi::GPGME_SIGSUM_RED;
        const KEY_REVOKED = ffi::GPGME_SIGSUM_KEY_REVOKED;
        const KEY_EXPIRED = ffi::GPGME_SIGSUM_KEY_EXPIRED;
        const SIG_EXPIRED = ffi::GPGME_SIGSUM_SIG_EXPIRED;
        const KEY_MISSING = ffi::GPGME_SIGSUM_KEY_MISSING;
        const CRL_MISSING = ffi::GPGME_SIGSUM_CRL_MISSING;
        const CRL_TOO_OLD = ffi::GPGME_SIGSUM_CRL_TOO_OLD;
        const BAD_POLICY = ffi::GPGME_SIGSUM_BAD_POLICY;
        const SYS_ERROR = ffi::GPGME_SIGSUM_SYS_ERROR;
        const TOFU_CONFLICT = ffi::GPGME_SIGSUM_TOFU_CONFLICT;
    }
}

// The snapshot types below use their own bit assignment. They are plain
// values and never reinterpret a GPGME bitfield word directly.

bitflags! {
    /// The flags of a [`Key`](crate::Key), copied out of the record.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct KeyFlags: u32 {
        const REVOKED = 1 << 0;
        const EXPIRED = 1 << 1;
        const DISABLED = 1 << 2;
        const INVALID = 1 << 3;
        const CAN_ENCRYPT = 1 << 4;
        const CAN_SIGN = 1 << 5;
        const CAN_CERTIFY = 1 << 6;
        const SECRET = 1 << 7;
        const CAN_AUTHENTICATE = 1 << 8;
        const IS_QUALIFIED = 1 << 9;
    }
}

bitflags! {
    /// The flags of a [`Subkey`](crate::Subkey), copied out of the record.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SubkeyFlags: u32 {
        const REVOKED = 1 << 0;
        const EXPIRED = 1 << 1;
        const DISABLED = 1 << 2;
        const INVALID = 1 << 3;
        const CAN_ENCRYPT = 1 << 4;
        const CAN_SIGN = 1 << 5;
        const CAN_CERTIFY = 1 << 6;
        const SECRET = 1 << 7;
        const CAN_AUTHENTICATE = 1 << 8;
        const IS_QUALIFIED = 1 << 9;
        const IS_CARDKEY = 1 << 10;
        const IS_DE_VS = 1 << 11;
    }
}

bitflags! {
    /// The flags of a [`UserId`](crate::UserId), copied out of the record.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct UserIdFlags: u32 {
        const REVOKED = 1 << 0;
        const INVALID = 1 << 1;
    }
}

bitflags! {
    /// The flags of a [`Signature`](crate::Signature), copied out of the
    /// record.
    ///
    /// At most one of the two PKA trust bits is set; neither means the trust
    /// is unknown.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SignatureFlags: u32 {
        const WRONG_KEY_USAGE = 1 << 0;
        const CHAIN_MODEL = 1 << 1;
        const PKA_TRUST_BAD = 1 << 2;
        const PKA_TRUST_OKAY = 1 << 3;
        const IS_DE_VS = 1 << 4;
    }
}

impl KeyFlags {
    #[inline]
    pub fn is_bad(&self) -> bool {
        self.intersects(Self::REVOKED | Self::EXPIRED | Self::DISABLED | Self::INVALID)
    }
}

impl SubkeyFlags {
    #[inline]
    pub fn is_bad(&self) -> bool {
        self.intersects(Self::REVOKED | Self::EXPIRED | Self::DISABLED | Self::INVALID)
    }
}

impl UserIdFlags {
    #[inline]
    pub fn is_bad(&self) -> bool {
        self.intersects(Self::REVOKED | Self::INVALID)
    }
}
