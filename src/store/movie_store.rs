//! # Movie Store
//!
//! Ordered, in-memory sequence of movie records. Insertion order is kept;
//! removing a record never reorders the rest.
//!
//! Every lookup that precedes a mutation runs under the same write lock, so
//! concurrent requests cannot race between finding an index and using it.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::schema::{Movie, MovieInput, MoviePatch};

use super::errors::{StoreError, StoreResult};

/// In-memory movie store
#[derive(Debug, Default)]
pub struct MovieStore {
    records: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    ///
    /// Identifiers must be unique.
    pub fn with_records(records: Vec<Movie>) -> StoreResult<Self> {
        let store = Self::new();
        for movie in records {
            store.insert(movie)?;
        }
        Ok(store)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Movie>>> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Movie>>> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }

    /// All records in insertion order
    pub fn list(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.read()?.clone())
    }

    /// Find a record by identifier
    pub fn get(&self, id: &str) -> StoreResult<Movie> {
        self.read()?
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append a record
    pub fn insert(&self, movie: Movie) -> StoreResult<Movie> {
        let mut records = self.write()?;
        if position(&records, &movie.id).is_some() {
            return Err(StoreError::DuplicateId(movie.id));
        }
        records.push(movie.clone());
        Ok(movie)
    }

    /// Replace the record with `id` by a full new body, keeping its identifier
    pub fn replace(&self, id: &str, input: MovieInput) -> StoreResult<Movie> {
        self.modify(id, |existing| input.into_movie(existing.id.clone()))
    }

    /// Merge a partial body into the record with `id`
    pub fn update(&self, id: &str, patch: MoviePatch) -> StoreResult<Movie> {
        self.modify(id, |existing| patch.apply_to(existing))
    }

    /// Remove the record with `id`, returning it
    pub fn remove(&self, id: &str) -> StoreResult<Movie> {
        let mut records = self.write()?;
        let index = position(&records, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(records.remove(index))
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.read().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find-then-replace-at-index as one critical section
    fn modify<F>(&self, id: &str, f: F) -> StoreResult<Movie>
    where
        F: FnOnce(&Movie) -> Movie,
    {
        let mut records = self.write()?;
        let index = position(&records, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let updated = f(&records[index]);
        records[index] = updated.clone();
        Ok(updated)
    }
}

fn position(records: &[Movie], id: &str) -> Option<usize> {
    records.iter().position(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Genre;
    use std::sync::Arc;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            year: 2000,
            director: "Someone".to_string(),
            duration: 100,
            rating: 7.0,
            genre: vec![Genre::Drama],
            poster: "https://example.com/p.jpg".to_string(),
        }
    }

    fn input(title: &str) -> MovieInput {
        MovieInput {
            title: title.to_string(),
            year: 2001,
            director: "Other".to_string(),
            duration: 90,
            rating: 6.5,
            genre: vec![Genre::Comedy],
            poster: "https://example.com/q.jpg".to_string(),
        }
    }

    fn store() -> MovieStore {
        MovieStore::with_records(vec![movie("a", "A"), movie("b", "B"), movie("c", "C")]).unwrap()
    }

    fn ids(store: &MovieStore) -> Vec<String> {
        store.list().unwrap().into_iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_insertion_order() {
        let store = store();
        store.insert(movie("d", "D")).unwrap();
        assert_eq!(ids(&store), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = store();
        let err = store.insert(movie("b", "Again")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "b"));
        assert_eq!(store.len(), 3);

        assert!(MovieStore::with_records(vec![movie("x", "X"), movie("x", "Y")]).is_err());
    }

    #[test]
    fn test_get() {
        let store = store();
        assert_eq!(store.get("b").unwrap().title, "B");
        assert!(matches!(store.get("zzz"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_remove_keeps_order() {
        let store = store();
        let removed = store.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&store), vec!["a", "c"]);
        assert!(matches!(store.remove("b"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_replace_keeps_id_and_position() {
        let store = store();
        let replaced = store.replace("b", input("New B")).unwrap();
        assert_eq!(replaced.id, "b");
        assert_eq!(replaced.title, "New B");
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(store.get("b").unwrap(), replaced);
    }

    #[test]
    fn test_update_merges() {
        let store = store();
        let patch = MoviePatch {
            rating: Some(9.5),
            ..Default::default()
        };
        let updated = store.update("c", patch).unwrap();
        assert_eq!(updated.rating, 9.5);
        assert_eq!(updated.title, "C");

        assert!(store.update("missing", MoviePatch::default()).is_err());
    }

    #[test]
    fn test_concurrent_inserts_are_not_lost() {
        let store = Arc::new(MovieStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.insert(movie(&format!("{}-{}", t, i), "T")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
