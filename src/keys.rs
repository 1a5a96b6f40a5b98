use std::{
    ffi::CStr,
    fmt,
    marker::PhantomData,
    str::Utf8Error,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use ffi::require_gpgme_ver;

use crate::{KeyFlags, KeyListMode, KeyOrigin, NonNull, Protocol, SubkeyFlags, UserIdFlags, Validity};

/// A borrowed view of a key record owned by GPGME.
///
/// Upstream documentation:
/// [`gpgme_key_t`](https://www.gnupg.org/documentation/manuals/gpgme/Key-objects.html#index-gpgme_005fkey_005ft)
#[derive(Copy, Clone)]
pub struct Key<'a>(NonNull<ffi::_gpgme_key>, PhantomData<&'a ()>);

unsafe impl Send for Key<'_> {}
unsafe impl Sync for Key<'_> {}

impl<'a> Key<'a> {
    impl_wrapper!(ffi::gpgme_key_t, PhantomData);

    #[inline]
    pub fn is_bad(&self) -> bool {
        self.is_revoked() || self.is_expired() || self.is_disabled() || self.is_invalid()
    }

    #[inline]
    pub fn is_revoked(&self) -> bool {
        unsafe { (*self.as_raw()).revoked() }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        unsafe { (*self.as_raw()).expired() }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        unsafe { (*self.as_raw()).disabled() }
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        unsafe { (*self.as_raw()).invalid() }
    }

    #[inline]
    pub fn can_encrypt(&self) -> bool {
        unsafe { (*self.as_raw()).can_encrypt() }
    }

    #[inline]
    pub fn can_sign(&self) -> bool {
        unsafe { (*self.as_raw()).can_sign() }
    }

    #[inline]
    pub fn can_certify(&self) -> bool {
        unsafe { (*self.as_raw()).can_certify() }
    }

    #[inline]
    pub fn can_authenticate(&self) -> bool {
        unsafe { (*self.as_raw()).can_authenticate() }
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        unsafe { (*self.as_raw()).is_qualified() }
    }

    #[inline]
    pub fn has_secret(&self) -> bool {
        unsafe { (*self.as_raw()).secret() }
    }

    /// Whether any usable subkey can encrypt.
    ///
    /// Headers older than 1.23 carry no such flag, so the subkeys are
    /// inspected instead.
    #[inline]
    pub fn has_encrypt(&self) -> bool {
        require_gpgme_ver! {
            (1, 23) => {
                unsafe { (*self.as_raw()).has_encrypt() }
            } else {
                self.subkeys().any(|k| k.can_encrypt() && !k.is_bad())
            }
        }
    }

    #[inline]
    pub fn has_sign(&self) -> bool {
        require_gpgme_ver! {
            (1, 23) => {
                unsafe { (*self.as_raw()).has_sign() }
            } else {
                self.subkeys().any(|k| k.can_sign() && !k.is_bad())
            }
        }
    }

    #[inline]
    pub fn has_certify(&self) -> bool {
        require_gpgme_ver! {
            (1, 23) => {
                unsafe { (*self.as_raw()).has_certify() }
            } else {
                self.subkeys().any(|k| k.can_certify() && !k.is_bad())
            }
        }
    }

    #[inline]
    pub fn has_authenticate(&self) -> bool {
        require_gpgme_ver! {
            (1, 23) => {
                unsafe { (*self.as_raw()).has_authenticate() }
            } else {
                self.subkeys().any(|k| k.can_authenticate() && !k.is_bad())
            }
        }
    }

    #[inline]
    pub fn is_de_vs(&self) -> bool {
        self.subkeys().all(|x| x.is_de_vs())
    }

    /// Copies the key's flags out of the record.
    pub fn flags(&self) -> KeyFlags {
        let mut flags = KeyFlags::empty();
        flags.set(KeyFlags::REVOKED, self.is_revoked());
        flags.set(KeyFlags::EXPIRED, self.is_expired());
        flags.set(KeyFlags::DISABLED, self.is_disabled());
        flags.set(KeyFlags::INVALID, self.is_invalid());
        flags.set(KeyFlags::CAN_ENCRYPT, self.can_encrypt());
        flags.set(KeyFlags::CAN_SIGN, self.can_sign());
        flags.set(KeyFlags::CAN_CERTIFY, self.can_certify());
        flags.set(KeyFlags::SECRET, self.has_secret());
        flags.set(KeyFlags::CAN_AUTHENTICATE, self.can_authenticate());
        flags.set(KeyFlags::IS_QUALIFIED, self.is_qualified());
        flags
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        if let (Some(fpr), Some(chain_id)) = (self.fingerprint_raw(), self.chain_id_raw()) {
            fpr.to_bytes().eq_ignore_ascii_case(chain_id.to_bytes())
        } else {
            false
        }
    }

    #[inline]
    pub fn owner_trust(&self) -> Validity {
        unsafe { Validity::from_raw((*self.as_raw()).owner_trust) }
    }

    #[inline]
    pub fn protocol(&self) -> Protocol {
        unsafe { Protocol::from_raw((*self.as_raw()).protocol) }
    }

    cstr_field!(issuer_serial, issuer_serial_raw, 'a, issuer_serial);
    cstr_field!(issuer_name, issuer_name_raw, 'a, issuer_name);
    cstr_field!(chain_id, chain_id_raw, 'a, chain_id);

    #[inline]
    pub fn id(&self) -> Result<&'a str, Option<Utf8Error>> {
        self.primary_key().map_or(Err(None), |k| k.id())
    }

    #[inline]
    pub fn id_raw(&self) -> Option<&'a CStr> {
        self.primary_key()?.id_raw()
    }

    #[inline]
    pub fn short_id(&self) -> Result<&'a str, Option<Utf8Error>> {
        self.short_id_raw()
            .map_or(Err(None), |s| s.to_str().map_err(Some))
    }

    /// The last eight hex digits of the key id.
    #[inline]
    pub fn short_id_raw(&self) -> Option<&'a CStr> {
        self.id_raw().map(|s| {
            let bytes = s.to_bytes_with_nul();
            if bytes.len() >= 9 {
                // One extra for the null terminator
                CStr::from_bytes_with_nul(&bytes[(bytes.len() - 9)..]).unwrap_or(s)
            } else {
                s
            }
        })
    }

    #[inline]
    pub fn fingerprint(&self) -> Result<&'a str, Option<Utf8Error>> {
        self.fingerprint_raw()
            .map_or(Err(None), |s| s.to_str().map_err(Some))
    }

    /// The key fingerprint, or the primary subkey's when the key record
    /// carries none.
    #[inline]
    pub fn fingerprint_raw(&self) -> Option<&'a CStr> {
        unsafe {
            (*self.as_raw())
                .fpr
                .as_ref()
                .map(|s| CStr::from_ptr(s))
                .or_else(|| self.primary_key()?.fingerprint_raw())
        }
    }

    #[inline]
    pub fn key_list_mode(&self) -> KeyListMode {
        unsafe { KeyListMode::from_bits_truncate((*self.as_raw()).keylist_mode) }
    }

    #[inline]
    pub fn origin(&self) -> KeyOrigin {
        unsafe { KeyOrigin::from_raw((*self.as_raw()).origin()) }
    }

    #[inline]
    pub fn last_update(&self) -> SystemTime {
        let timestamp = unsafe { (*self.as_raw()).last_update };
        UNIX_EPOCH + Duration::from_secs(timestamp.into())
    }

    #[inline]
    pub fn primary_key(&self) -> Option<Subkey<'a>> {
        self.subkeys().next()
    }

    #[inline]
    pub fn user_ids(&self) -> UserIds<'a> {
        unsafe { UserIds::from_list((*self.as_raw()).uids) }
    }

    #[inline]
    pub fn subkeys(&self) -> Subkeys<'a> {
        unsafe { Subkeys::from_list((*self.as_raw()).subkeys) }
    }
}

impl fmt::Debug for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("raw", &self.as_raw())
            .field("fingerprint", &self.fingerprint_raw())
            .field("protocol", &self.protocol())
            .field("owner_trust", &self.owner_trust())
            .field("issuer", &self.issuer_name_raw())
            .field("origin", &self.origin())
            .field("last_update", &self.last_update())
            .field("list_mode", &self.key_list_mode())
            .field("flags", &self.flags())
            .field("user_ids", &self.user_ids())
            .field("subkeys", &self.subkeys())
            .finish()
    }
}

/// A borrowed view of one subkey of a [`Key`].
///
/// Upstream documentation:
/// [`gpgme_subkey_t`](https://www.gnupg.org/documentation/manuals/gpgme/Key-objects.html#index-gpgme_005fsubkey_005ft)
#[derive(Copy, Clone)]
pub struct Subkey<'key>(NonNull<ffi::_gpgme_subkey>, PhantomData<&'key ()>);

unsafe impl Send for Subkey<'_> {}
unsafe impl Sync for Subkey<'_> {}

impl<'key> Subkey<'key> {
    impl_wrapper!(ffi::gpgme_subkey_t, PhantomData);

    cstr_field!(id, id_raw, 'key, keyid);
    cstr_field!(fingerprint, fingerprint_raw, 'key, fpr);
    cstr_field!(keygrip, keygrip_raw, 'key, keygrip);
    cstr_field!(
        /// The serial number of the smartcard holding the secret part.
        card_serial_number, card_serial_number_raw, 'key, card_number
    );
    cstr_field!(curve, curve_raw, 'key, curve);

    #[inline]
    pub fn creation_time(&self) -> Option<SystemTime> {
        let timestamp = unsafe { (*self.as_raw()).timestamp };
        if timestamp > 0 {
            Some(UNIX_EPOCH + Duration::from_secs(timestamp as u64))
        } else {
            None
        }
    }

    #[inline]
    pub fn expiration_time(&self) -> Option<SystemTime> {
        let expires = unsafe { (*self.as_raw()).expires };
        if expires > 0 {
            Some(UNIX_EPOCH + Duration::from_secs(expires as u64))
        } else {
            None
        }
    }

    #[inline]
    pub fn never_expires(&self) -> bool {
        self.expiration_time().is_none()
    }

    #[inline]
    pub fn is_bad(&self) -> bool {
        self.is_revoked() || self.is_expired() || self.is_disabled() || self.is_invalid()
    }

    #[inline]
    pub fn is_revoked(&self) -> bool {
        unsafe { (*self.as_raw()).revoked() }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        unsafe { (*self.as_raw()).expired() }
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        unsafe { (*self.as_raw()).invalid() }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        unsafe { (*self.as_raw()).disabled() }
    }

    #[inline]
    pub fn can_encrypt(&self) -> bool {
        unsafe { (*self.as_raw()).can_encrypt() }
    }

    #[inline]
    pub fn can_sign(&self) -> bool {
        unsafe { (*self.as_raw()).can_sign() }
    }

    #[inline]
    pub fn can_certify(&self) -> bool {
        unsafe { (*self.as_raw()).can_certify() }
    }

    #[inline]
    pub fn can_authenticate(&self) -> bool {
        unsafe { (*self.as_raw()).can_authenticate() }
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        unsafe { (*self.as_raw()).is_qualified() }
    }

    #[inline]
    pub fn is_card_key(&self) -> bool {
        unsafe { (*self.as_raw()).is_cardkey() }
    }

    #[inline]
    pub fn is_secret(&self) -> bool {
        unsafe { (*self.as_raw()).secret() }
    }

    #[inline]
    pub fn is_de_vs(&self) -> bool {
        unsafe { (*self.as_raw()).is_de_vs() }
    }

    #[inline]
    pub fn can_renc(&self) -> bool {
        require_gpgme_ver! {
            (1, 20) => {
                unsafe { (*self.as_raw()).can_renc() }
            } else {
                false
            }
        }
    }

    #[inline]
    pub fn can_timestamp(&self) -> bool {
        require_gpgme_ver! {
            (1, 20) => {
                unsafe { (*self.as_raw()).can_timestamp() }
            } else {
                false
            }
        }
    }

    #[inline]
    pub fn is_group_owned(&self) -> bool {
        require_gpgme_ver! {
            (1, 20) => {
                unsafe { (*self.as_raw()).is_group_owned() }
            } else {
                false
            }
        }
    }

    /// Copies the subkey's flags out of the record.
    pub fn flags(&self) -> SubkeyFlags {
        let mut flags = SubkeyFlags::empty();
        flags.set(SubkeyFlags::REVOKED, self.is_revoked());
        flags.set(SubkeyFlags::EXPIRED, self.is_expired());
        flags.set(SubkeyFlags::DISABLED, self.is_disabled());
        flags.set(SubkeyFlags::INVALID, self.is_invalid());
        flags.set(SubkeyFlags::CAN_ENCRYPT, self.can_encrypt());
        flags.set(SubkeyFlags::CAN_SIGN, self.can_sign());
        flags.set(SubkeyFlags::CAN_CERTIFY, self.can_certify());
        flags.set(SubkeyFlags::SECRET, self.is_secret());
        flags.set(SubkeyFlags::CAN_AUTHENTICATE, self.can_authenticate());
        flags.set(SubkeyFlags::IS_QUALIFIED, self.is_qualified());
        flags.set(SubkeyFlags::IS_CARDKEY, self.is_card_key());
        flags.set(SubkeyFlags::IS_DE_VS, self.is_de_vs());
        flags
    }

    /// The raw `gpgme_pubkey_algo_t` of the subkey.
    #[inline]
    pub fn algorithm_raw(&self) -> ffi::gpgme_pubkey_algo_t {
        unsafe { (*self.as_raw()).pubkey_algo }
    }

    #[inline]
    pub fn length(&self) -> usize {
        unsafe { (*self.as_raw()).length as usize }
    }
}

impl fmt::Debug for Subkey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subkey")
            .field("raw", &self.as_raw())
            .field("fingerprint", &self.fingerprint_raw())
            .field("algorithm", &self.algorithm_raw())
            .field("length", &self.length())
            .field("creation_time", &self.creation_time())
            .field("expiration_time", &self.expiration_time())
            .field("curve", &self.curve_raw())
            .field("card_serial_number", &self.card_serial_number_raw())
            .field("flags", &self.flags())
            .finish()
    }
}

impl_list_iterator!(pub struct Subkeys(Subkey: ffi::gpgme_subkey_t));

/// A borrowed view of one user id of a [`Key`].
///
/// Upstream documentation:
/// [`gpgme_user_id_t`](https://www.gnupg.org/documentation/manuals/gpgme/Key-objects.html#index-gpgme_005fuser_005fid_005ft)
#[derive(Copy, Clone)]
pub struct UserId<'key>(NonNull<ffi::_gpgme_user_id>, PhantomData<&'key ()>);

unsafe impl Send for UserId<'_> {}
unsafe impl Sync for UserId<'_> {}

impl<'key> UserId<'key> {
    impl_wrapper!(ffi::gpgme_user_id_t, PhantomData);

    cstr_field!(
        /// The complete user id string, e.g. `Name (Comment) <email>`.
        id, id_raw, 'key, uid
    );
    cstr_field!(name, name_raw, 'key, name);
    cstr_field!(email, email_raw, 'key, email);
    cstr_field!(comment, comment_raw, 'key, comment);
    cstr_field!(
        /// The normalized mail address, if GPGME could extract one.
        address, address_raw, 'key, address
    );

    #[inline]
    pub fn uidhash(&self) -> Result<&'key str, Option<Utf8Error>> {
        self.uidhash_raw()
            .map_or(Err(None), |s| s.to_str().map_err(Some))
    }

    #[inline]
    pub fn uidhash_raw(&self) -> Option<&'key CStr> {
        require_gpgme_ver! {
            (1, 14) => {
                unsafe { (*self.as_raw()).uidhash.as_ref().map(|s| CStr::from_ptr(s)) }
            } else {
                None
            }
        }
    }

    #[inline]
    pub fn validity(&self) -> Validity {
        unsafe { Validity::from_raw((*self.as_raw()).validity) }
    }

    #[inline]
    pub fn is_bad(&self) -> bool {
        self.is_revoked() || self.is_invalid()
    }

    #[inline]
    pub fn is_revoked(&self) -> bool {
        unsafe { (*self.as_raw()).revoked() }
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        unsafe { (*self.as_raw()).invalid() }
    }

    /// Copies the user id's flags out of the record.
    pub fn flags(&self) -> UserIdFlags {
        let mut flags = UserIdFlags::empty();
        flags.set(UserIdFlags::REVOKED, self.is_revoked());
        flags.set(UserIdFlags::INVALID, self.is_invalid());
        flags
    }

    #[inline]
    pub fn origin(&self) -> KeyOrigin {
        unsafe { KeyOrigin::from_raw((*self.as_raw()).origin()) }
    }

    #[inline]
    pub fn last_update(&self) -> SystemTime {
        let timestamp = unsafe { (*self.as_raw()).last_update };
        UNIX_EPOCH + Duration::from_secs(timestamp.into())
    }
}

impl fmt::Debug for UserId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserId")
            .field("raw", &self.as_raw())
            .field("name", &self.name_raw())
            .field("email", &self.email_raw())
            .field("comment", &self.comment_raw())
            .field("validity", &self.validity())
            .field("origin", &self.origin())
            .field("flags", &self.flags())
            .finish()
    }
}

impl fmt::Display for UserId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            &self
                .id_raw()
                .map(|s| s.to_string_lossy())
                .unwrap_or_default(),
        )
    }
}

impl_list_iterator!(pub struct UserIds(UserId: ffi::gpgme_user_id_t));
