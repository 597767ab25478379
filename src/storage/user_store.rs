use crate::{
    error::{RosterError, Result},
    model::User,
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Users present when no seed is configured.
pub fn default_seed() -> Vec<User> {
    vec![
        User::new("1", "test1", "email1"),
        User::new("2", "test2", "email2"),
    ]
}

/// Ordered collection of users plus the counter that assigns their ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCollection {
    users: Vec<User>,
    /// `None` once every id up to `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl UserCollection {
    /// An empty collection; the first insert gets id "1".
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a collection from existing users.
    ///
    /// The counter starts one past the largest numeric id so that assigned
    /// ids never collide with seeded ones.
    pub fn seeded(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(User::numeric_id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { users, next_id }
    }

    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub fn insert(&mut self, name: String, email: String) -> Result<User> {
        let id = self.next_id.ok_or(RosterError::IdsExhausted)?;
        let user = User::new(id.to_string(), name, email);
        self.next_id = id.checked_add(1);
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<User> {
        if index >= self.users.len() {
            return Err(RosterError::NotFound(format!("index {}", index)));
        }
        Ok(self.users.remove(index))
    }

    /// The id the next insert will receive, if any is left.
    pub fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserCollection {
    fn default() -> Self {
        Self::seeded(default_seed())
    }
}

/// Thread-safe handle over a [`UserCollection`].
///
/// Lookup-then-remove runs under a single write guard, so concurrent
/// requests cannot remove the wrong record.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<UserCollection>,
}

impl UserStore {
    pub fn new(collection: UserCollection) -> Self {
        Self {
            inner: RwLock::new(collection),
        }
    }

    pub fn seeded(users: Vec<User>) -> Self {
        Self::new(UserCollection::seeded(users))
    }

    // A panic while holding the guard cannot leave the collection half-updated,
    // so a poisoned lock is still safe to use.
    fn read_guard(&self) -> RwLockReadGuard<'_, UserCollection> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, UserCollection> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the collection.
    pub fn read<T>(&self, f: impl FnOnce(&UserCollection) -> T) -> T {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access to the collection.
    pub fn write<T>(&self, f: impl FnOnce(&mut UserCollection) -> T) -> T {
        f(&mut self.write_guard())
    }

    pub fn list_all(&self) -> Vec<User> {
        self.read(|c| c.list_all().to_vec())
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.read(|c| c.find_index_by_id(id).and_then(|i| c.get(i)).cloned())
    }

    pub fn insert(&self, name: String, email: String) -> Result<User> {
        self.write(|c| c.insert(name, email))
    }

    pub fn remove_by_id(&self, id: &str) -> Result<User> {
        self.write(|c| match c.find_index_by_id(id) {
            Some(index) => c.remove_at(index),
            None => Err(RosterError::NotFound(id.to_string())),
        })
    }

    pub fn len(&self) -> usize {
        self.read(UserCollection::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(UserCollection::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_seed_counter() {
        let collection = UserCollection::default();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.next_id(), Some(3));
    }

    #[test]
    fn test_empty_collection_starts_at_one() {
        let mut collection = UserCollection::new();
        assert!(collection.is_empty());
        let user = collection.insert("a".to_string(), "b".to_string()).unwrap();
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_seeded_ignores_non_numeric_ids() {
        let collection = UserCollection::seeded(vec![
            User::new("admin", "root", "root@x"),
            User::new("9", "nine", "nine@x"),
        ]);
        assert_eq!(collection.next_id(), Some(10));
    }

    #[test]
    fn test_seed_at_max_id_exhausts_counter() {
        let mut collection =
            UserCollection::seeded(vec![User::new(u64::MAX.to_string(), "a", "a")]);
        assert_eq!(collection.next_id(), None);
        assert!(matches!(
            collection.insert("b".to_string(), "b".to_string()),
            Err(RosterError::IdsExhausted)
        ));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut collection =
            UserCollection::seeded(vec![User::new((u64::MAX - 1).to_string(), "a", "a")]);
        let last = collection.insert("b".to_string(), "b".to_string()).unwrap();
        assert_eq!(last.id, u64::MAX.to_string());
        assert!(collection.insert("c".to_string(), "c".to_string()).is_err());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut collection = UserCollection::default();
        let user = collection
            .insert("test3".to_string(), "email3".to_string())
            .unwrap();

        assert_eq!(user, User::new("3", "test3", "email3"));
        assert_eq!(collection.next_id(), Some(4));
        let ids: Vec<_> = collection.list_all().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_find_index_by_id_is_exact() {
        let collection = UserCollection::default();
        assert_eq!(collection.find_index_by_id("1"), Some(0));
        assert_eq!(collection.find_index_by_id("2"), Some(1));
        assert_eq!(collection.find_index_by_id("99"), None);
        assert_eq!(collection.find_index_by_id(""), None);
        assert_eq!(collection.find_index_by_id(" 1"), None);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut collection = UserCollection::default();
        assert!(matches!(
            collection.remove_at(5),
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut collection = UserCollection::default();
        let third = collection.insert("a".to_string(), "a".to_string()).unwrap();
        let index = collection.find_index_by_id(&third.id).unwrap();
        collection.remove_at(index).unwrap();

        let fourth = collection.insert("b".to_string(), "b".to_string()).unwrap();
        assert_eq!(fourth.id, "4");
    }

    #[test]
    fn test_store_remove_by_id() {
        let store = UserStore::default();
        let removed = store.remove_by_id("1").unwrap();
        assert_eq!(removed.name, "test1");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id("1").is_none());
        assert!(matches!(
            store.remove_by_id("1"),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(UserStore::seeded(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store
                            .insert(format!("user-{}-{}", t, i), String::new())
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = store
            .list_all()
            .iter()
            .filter_map(User::numeric_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&200));
    }
}
