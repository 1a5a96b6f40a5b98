#![allow(dead_code)]
//! Records laid out exactly as GPGME would hand them out, but allocated in
//! Rust memory so tests control every bit.
use std::{ffi::CString, mem, ptr};

use gpgme_shim::{ffi, Key, Signature, Signatures};
use libc::c_char;

#[derive(Default)]
struct Strings(Vec<CString>);

impl Strings {
    fn add(&mut self, s: &str) -> *mut c_char {
        let s = CString::new(s).unwrap();
        let ptr = s.as_ptr() as *mut c_char;
        self.0.push(s);
        ptr
    }
}

fn zeroed<T>() -> Box<T> {
    // All record fields are integers, pointers or byte arrays.
    Box::new(unsafe { mem::zeroed() })
}

pub struct TestKey {
    key: Box<ffi::_gpgme_key>,
    subkeys: Vec<Box<ffi::_gpgme_subkey>>,
    uids: Vec<Box<ffi::_gpgme_user_id>>,
    strings: Strings,
}

impl TestKey {
    pub fn new(bits: u32) -> TestKey {
        let mut key = zeroed::<ffi::_gpgme_key>();
        key.bitfield = bits;
        TestKey {
            key,
            subkeys: Vec::new(),
            uids: Vec::new(),
            strings: Strings::default(),
        }
    }

    pub fn with_fingerprint(mut self, fpr: &str) -> TestKey {
        self.key.fpr = self.strings.add(fpr);
        self
    }

    pub fn with_chain_id(mut self, chain_id: &str) -> TestKey {
        self.key.chain_id = self.strings.add(chain_id);
        self
    }

    pub fn with_issuer(mut self, serial: &str, name: &str) -> TestKey {
        self.key.issuer_serial = self.strings.add(serial);
        self.key.issuer_name = self.strings.add(name);
        self
    }

    pub fn with_protocol(mut self, protocol: ffi::gpgme_protocol_t) -> TestKey {
        self.key.protocol = protocol;
        self
    }

    pub fn with_owner_trust(mut self, trust: ffi::gpgme_validity_t) -> TestKey {
        self.key.owner_trust = trust;
        self
    }

    pub fn with_keylist_mode(mut self, mode: ffi::gpgme_keylist_mode_t) -> TestKey {
        self.key.keylist_mode = mode;
        self
    }

    pub fn with_last_update(mut self, secs: u32) -> TestKey {
        self.key.last_update = secs.into();
        self
    }

    pub fn with_subkey(self, bits: u32, keyid: &str, fpr: &str) -> TestKey {
        self.with_subkey_details(bits, keyid, fpr, 0, 0)
    }

    pub fn with_subkey_details(
        mut self,
        bits: u32,
        keyid: &str,
        fpr: &str,
        created: i32,
        expires: i32,
    ) -> TestKey {
        let mut subkey = zeroed::<ffi::_gpgme_subkey>();
        subkey.bitfield = bits;
        subkey.keyid = self.strings.add(keyid);
        subkey.fpr = self.strings.add(fpr);
        subkey.timestamp = created.into();
        subkey.expires = expires.into();
        subkey.length = 255;
        subkey.pubkey_algo = 303;
        self.push_subkey(subkey)
    }

    /// A subkey whose string fields are all NULL.
    pub fn with_bare_subkey(self, bits: u32) -> TestKey {
        let mut subkey = zeroed::<ffi::_gpgme_subkey>();
        subkey.bitfield = bits;
        self.push_subkey(subkey)
    }

    fn push_subkey(mut self, mut subkey: Box<ffi::_gpgme_subkey>) -> TestKey {
        let raw = ptr::addr_of_mut!(*subkey);
        match self.subkeys.last_mut() {
            Some(prev) => prev.next = raw,
            None => self.key.subkeys = raw,
        }
        self.subkeys.push(subkey);
        self
    }

    pub fn with_card_number(mut self, serial: &str) -> TestKey {
        let serial = self.strings.add(serial);
        if let Some(last) = self.subkeys.last_mut() {
            last.card_number = serial;
        }
        self
    }

    pub fn with_user_id(self, bits: u32, name: &str, email: &str) -> TestKey {
        self.with_user_id_details(bits, name, email, "", ffi::GPGME_VALIDITY_UNKNOWN)
    }

    pub fn with_user_id_details(
        mut self,
        bits: u32,
        name: &str,
        email: &str,
        comment: &str,
        validity: ffi::gpgme_validity_t,
    ) -> TestKey {
        let full = if comment.is_empty() {
            format!("{} <{}>", name, email)
        } else {
            format!("{} ({}) <{}>", name, comment, email)
        };
        let mut uid = zeroed::<ffi::_gpgme_user_id>();
        uid.bitfield = bits;
        uid.validity = validity;
        uid.uid = self.strings.add(&full);
        uid.name = self.strings.add(name);
        uid.email = self.strings.add(email);
        uid.comment = self.strings.add(comment);
        uid.address = self.strings.add(&email.to_lowercase());
        self.push_user_id(uid)
    }

    /// A user id whose string fields are all NULL.
    pub fn with_bare_user_id(self, bits: u32) -> TestKey {
        let mut uid = zeroed::<ffi::_gpgme_user_id>();
        uid.bitfield = bits;
        self.push_user_id(uid)
    }

    pub fn with_uidhash(mut self, hash: &str) -> TestKey {
        let hash = self.strings.add(hash);
        if let Some(last) = self.uids.last_mut() {
            last.uidhash = hash;
        }
        self
    }

    fn push_user_id(mut self, mut uid: Box<ffi::_gpgme_user_id>) -> TestKey {
        let raw = ptr::addr_of_mut!(*uid);
        match self.uids.last_mut() {
            Some(prev) => prev.next = raw,
            None => self.key.uids = raw,
        }
        self.uids.push(uid);
        self
    }

    pub fn as_raw(&self) -> ffi::gpgme_key_t {
        ptr::addr_of!(*self.key) as ffi::gpgme_key_t
    }

    pub fn subkey_raw(&self, idx: usize) -> ffi::gpgme_subkey_t {
        ptr::addr_of!(*self.subkeys[idx]) as ffi::gpgme_subkey_t
    }

    pub fn user_id_raw(&self, idx: usize) -> ffi::gpgme_user_id_t {
        ptr::addr_of!(*self.uids[idx]) as ffi::gpgme_user_id_t
    }

    pub fn view(&self) -> Key<'_> {
        unsafe { Key::from_raw(self.as_raw()) }
    }
}

pub struct TestSignature {
    sig: Box<ffi::_gpgme_signature>,
    strings: Strings,
}

impl TestSignature {
    pub fn new(bits: u32) -> TestSignature {
        let mut sig = zeroed::<ffi::_gpgme_signature>();
        sig.bitfield = bits;
        TestSignature {
            sig,
            strings: Strings::default(),
        }
    }

    pub fn with_fingerprint(mut self, fpr: &str) -> TestSignature {
        self.sig.fpr = self.strings.add(fpr);
        self
    }

    pub fn with_pka_address(mut self, address: &str) -> TestSignature {
        self.sig.pka_address = self.strings.add(address);
        self
    }

    pub fn with_summary(mut self, summary: ffi::gpgme_sigsum_t) -> TestSignature {
        self.sig.summary = summary;
        self
    }

    pub fn with_status(mut self, status: ffi::gpgme_error_t) -> TestSignature {
        self.sig.status = status;
        self
    }

    pub fn with_validity(
        mut self,
        validity: ffi::gpgme_validity_t,
        reason: ffi::gpgme_error_t,
    ) -> TestSignature {
        self.sig.validity = validity;
        self.sig.validity_reason = reason;
        self
    }

    pub fn with_times(mut self, created: u32, expires: u32) -> TestSignature {
        self.sig.timestamp = created.into();
        self.sig.exp_timestamp = expires.into();
        self
    }

    pub fn with_key(mut self, key: &TestKey) -> TestSignature {
        self.sig.key = key.as_raw();
        self
    }

    pub fn as_raw(&self) -> ffi::gpgme_signature_t {
        ptr::addr_of!(*self.sig) as ffi::gpgme_signature_t
    }

    pub fn view(&self) -> Signature<'_> {
        unsafe { Signature::from_raw(self.as_raw()) }
    }
}

/// Signatures chained through `next`, as in a verification result.
pub struct TestSignatures(Vec<TestSignature>);

impl TestSignatures {
    pub fn new(mut sigs: Vec<TestSignature>) -> TestSignatures {
        for i in 1..sigs.len() {
            let next = sigs[i].as_raw();
            sigs[i - 1].sig.next = next;
        }
        TestSignatures(sigs)
    }

    pub fn iter(&self) -> Signatures<'_> {
        let head = self.0.first().map_or(ptr::null_mut(), |s| s.as_raw());
        unsafe { Signatures::from_list(head) }
    }
}
