pub mod ids;
pub mod models;

use thiserror::Error;

use crate::store::ids::IdStrategy;
use crate::store::models::{User, UserFields, UserUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User not found")]
    NotFound,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory user records in insertion order.
///
/// Failed operations leave the store untouched.
#[derive(Debug)]
pub struct UserStore<S: IdStrategy> {
    ids: S,
    users: Vec<User<S::Id>>,
}

impl<S: IdStrategy + Default> Default for UserStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: IdStrategy> UserStore<S> {
    pub fn new(ids: S) -> Self {
        Self {
            ids,
            users: Vec::new(),
        }
    }

    pub fn seed(&mut self, records: impl IntoIterator<Item = UserFields>) {
        for fields in records {
            self.create(fields);
        }
    }

    pub fn create(&mut self, fields: UserFields) -> User<S::Id> {
        let id = self.ids.next_id(&self.users);
        let user = User { id, fields };
        self.users.push(user.clone());
        user
    }

    pub fn list(&self) -> &[User<S::Id>] {
        &self.users
    }

    pub fn get(&self, id: &S::Id) -> StoreResult<&User<S::Id>> {
        self.users
            .iter()
            .find(|user| &user.id == id)
            .ok_or(StoreError::NotFound)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Replaces every field of the record; there is no partial merge.
    pub fn update(
        &mut self,
        id: &S::Id,
        fields: UserFields,
    ) -> StoreResult<UserUpdate<S::Id>> {
        let user = self
            .users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or(StoreError::NotFound)?;

        let old = std::mem::replace(&mut user.fields, fields);
        Ok(UserUpdate {
            old,
            new: user.clone(),
        })
    }

    pub fn delete(&mut self, id: &S::Id) -> StoreResult<User<S::Id>> {
        let index = self
            .users
            .iter()
            .position(|user| &user.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(self.users.remove(index))
    }
}
