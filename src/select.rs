use std::ffi::CStr;

use crate::Key;

fn bytes_or_empty(s: Option<&CStr>) -> &[u8] {
    s.map_or(&[][..], CStr::to_bytes)
}

impl<'a> Key<'a> {
    /// Whether `user` names this key, either as the id of the primary key or
    /// as the e-mail of the first user id. Comparison is exact, and a missing
    /// id or e-mail compares equal to the empty string.
    pub fn matches(&self, user: &str) -> bool {
        let user = user.as_bytes();
        if let Some(primary) = self.primary_key() {
            if bytes_or_empty(primary.id_raw()) == user {
                return true;
            }
        }
        self.user_ids()
            .next()
            .map_or(false, |uid| bytes_or_empty(uid.email_raw()) == user)
    }
}

/// Picks the key that `user` refers to, by key id or e-mail.
///
/// When several keys match, the last one wins.
pub fn find_key<'a, I>(keys: I, user: &str) -> Option<Key<'a>>
where
    I: IntoIterator<Item = Key<'a>>,
{
    keys.into_iter().filter(|k| k.matches(user)).last()
}
