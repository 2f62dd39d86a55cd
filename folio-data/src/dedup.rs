//! Remove duplicate users after location expansion.

use std::collections::HashSet;

use folio_core::{Location, UserRecord};

#[derive(PartialEq, Eq, Hash)]
struct UserKey {
    user_id: u32,
    age_bits: Option<u64>,
    location: Location,
}

impl UserKey {
    fn of(user: &UserRecord) -> Self {
        Self {
            user_id: user.user_id,
            age_bits: user.age.map(f64::to_bits),
            location: user.location.clone(),
        }
    }
}

/// Drop users identical in every field, keeping the last occurrence.
///
/// Survivors keep their relative input order; the returned vector is indexed
/// contiguously from zero.
///
/// # Examples
/// ```
/// use folio_core::{Location, UserRecord};
/// use folio_data::deduplicate_users;
///
/// let a = UserRecord::new(1, None, Location::unknown());
/// let b = UserRecord::new(2, Some(40.0), Location::unknown());
/// let kept = deduplicate_users(vec![a.clone(), b.clone(), a.clone()]);
/// assert_eq!(kept, vec![b, a]);
/// ```
#[doc(alias = "UserDeduplicator")]
#[must_use]
pub fn deduplicate_users(users: Vec<UserRecord>) -> Vec<UserRecord> {
    let mut seen = HashSet::with_capacity(users.len());
    let mut kept: Vec<UserRecord> = users
        .into_iter()
        .rev()
        .filter(|user| seen.insert(UserKey::of(user)))
        .collect();
    kept.reverse();
    kept
}

/// Count rows whose user id already appeared earlier in `users`.
///
/// After [`deduplicate_users`] these are users sharing an id but differing in
/// another field; each one multiplies the ratings joined against that id.
#[must_use]
pub fn repeated_user_ids(users: &[UserRecord]) -> usize {
    let mut seen = HashSet::with_capacity(users.len());
    users
        .iter()
        .filter(|user| !seen.insert(user.user_id))
        .count()
}
