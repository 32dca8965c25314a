use serde::{Serialize, de::DeserializeOwned};
use std::fmt::{Debug, Display};
use uuid::Uuid;

use crate::store::models::User;

/// Decides how a store hands out identifiers for new records.
pub trait IdStrategy: Send + Sync + 'static {
    type Id: Clone
        + Eq
        + Debug
        + Display
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Returns an identifier not held by any of `existing`.
    fn next_id(&mut self, existing: &[User<Self::Id>]) -> Self::Id;
}

/// Random v4 UUIDs rendered as strings.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdStrategy for UuidIds {
    type Id = String;

    fn next_id(&mut self, existing: &[User<String>]) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !existing.iter().any(|user| user.id == id) {
                return id;
            }
        }
    }
}

/// Small integers starting at 1. Identifiers are never reused, even after
/// the record holding one has been deleted.
#[derive(Debug)]
pub struct SequentialIds {
    next: u32,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdStrategy for SequentialIds {
    type Id = u32;

    fn next_id(&mut self, existing: &[User<u32>]) -> u32 {
        let above_existing = existing
            .iter()
            .map(|user| user.id.saturating_add(1))
            .max()
            .unwrap_or(1);
        let id = self.next.max(above_existing);
        self.next = id.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::UserFields;

    fn user<Id>(id: Id) -> User<Id> {
        User {
            id,
            fields: UserFields::new("n", "e", "p", "g"),
        }
    }

    #[test]
    fn test_sequential_starts_at_one() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(&[]), 1);
        assert_eq!(ids.next_id(&[user(1)]), 2);
    }

    #[test]
    fn test_sequential_skips_past_existing() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(&[user(3), user(9)]), 10);
    }

    #[test]
    fn test_sequential_does_not_reuse_after_removal() {
        let mut ids = SequentialIds::default();
        let first = ids.next_id(&[]);
        let second = ids.next_id(&[user(first)]);
        // Both records gone
        assert_eq!(ids.next_id(&[]), second + 1);
    }

    #[test]
    fn test_uuid_ids_are_valid_and_distinct() {
        let mut ids = UuidIds;
        let a = ids.next_id(&[]);
        let b = ids.next_id(&[user(a.clone())]);
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert!(Uuid::parse_str(&b).is_ok());
    }
}
