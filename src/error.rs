pub use gpg_error::{Error, ErrorCode, ErrorSource};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Turns a `gpgme_error_t` stored in a record into `Ok(())` when it carries
/// no error code.
#[inline]
pub(crate) fn check(err: ffi::gpgme_error_t) -> Result<()> {
    let err = Error::new(err);
    if err.code() == Error::NO_ERROR.code() {
        Ok(())
    } else {
        Err(err)
    }
}
