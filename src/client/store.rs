//! # List Store
//!
//! The client-held, ordered collection of books that presentation code
//! renders from.
//!
//! The store never edits a book in place. Every write swaps in a whole new
//! [`Snapshot`] and bumps the version by one, so a reader either sees the
//! value before a write or the value after it. The current value lives in a
//! `tokio::sync::watch` channel: writes happen under the channel's lock and
//! subscribers are woken with the latest value.
//!
//! ## Writes
//!
//! - [`ListStore::replace`] swaps in a new list unconditionally
//! - [`ListStore::update`] derives the new list from the current one atomically
//! - [`ListStore::retain`] filters the current list atomically
//! - [`ListStore::compare_and_replace`] swaps only if the version is unchanged
//!
//! Writes that would leave two books with the same id are rejected and the
//! store keeps its previous value.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;

use crate::shared::{Book, RecordId, SharedError};

/// Immutable view of the store at one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    books: Arc<Vec<Book>>,
    version: u64,
}

impl Snapshot {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.books.iter().position(|book| book.has_id(id))
    }

    pub fn get(&self, id: &RecordId) -> Option<&Book> {
        self.books.iter().find(|book| book.has_id(id))
    }

    pub fn to_vec(&self) -> Vec<Book> {
        self.books.as_ref().clone()
    }

    /// Shared handle to the book list, without copying it
    pub(crate) fn shared_books(&self) -> Arc<Vec<Book>> {
        Arc::clone(&self.books)
    }
}

/// A single atomic write: the value it replaced and the value it produced
#[derive(Debug, Clone)]
pub struct Transition {
    pub before: Snapshot,
    pub after: Snapshot,
}

impl Transition {
    fn unchanged(snapshot: Snapshot) -> Self {
        Self {
            before: snapshot.clone(),
            after: snapshot,
        }
    }

    /// Whether the write left the list untouched
    pub fn is_noop(&self) -> bool {
        self.before.version == self.after.version
    }
}

/// Handle to the client's book list
///
/// Cloning the handle shares the underlying store.
#[derive(Debug, Clone)]
pub struct ListStore {
    tx: Arc<watch::Sender<Snapshot>>,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::from_snapshot(Snapshot {
            books: Arc::new(Vec::new()),
            version: 0,
        })
    }
}

impl ListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `books`
    pub fn with_books(books: Vec<Book>) -> Result<Self, SharedError> {
        ensure_unique(&books)?;
        Ok(Self::from_snapshot(Snapshot {
            books: Arc::new(books),
            version: 0,
        }))
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        let (tx, _rx) = watch::channel(snapshot);
        Self { tx: Arc::new(tx) }
    }

    /// Read the current value
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Receiver woken on every write, for rendering
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Replace the whole list
    pub fn replace(&self, books: Vec<Book>) -> Result<Snapshot, SharedError> {
        self.update(move |_| books).map(|transition| transition.after)
    }

    /// Derive the next list from the current one as one atomic write
    ///
    /// `derive` runs under the store's write lock and must not block.
    pub fn update<F>(&self, derive: F) -> Result<Transition, SharedError>
    where
        F: FnOnce(&[Book]) -> Vec<Book>,
    {
        // overwritten by the closure, which the sender always runs
        let mut outcome = Ok(Transition::unchanged(self.snapshot()));
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            let books = derive(current.books());
            if let Err(error) = ensure_unique(&books) {
                outcome = Err(error);
                return false;
            }
            *current = Snapshot {
                books: Arc::new(books),
                version: before.version + 1,
            };
            outcome = Ok(Transition {
                before,
                after: current.clone(),
            });
            true
        });
        outcome
    }

    /// Drop every book for which `keep` is false
    ///
    /// A filter that removes nothing is not a write: the version stays the
    /// same and subscribers are not woken.
    pub fn retain<F>(&self, mut keep: F) -> Transition
    where
        F: FnMut(&Book) -> bool,
    {
        let mut outcome = Transition::unchanged(self.snapshot());
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            let books: Vec<Book> = current.books().iter().filter(|b| keep(*b)).cloned().collect();
            if books.len() == before.len() {
                outcome = Transition::unchanged(before);
                return false;
            }
            *current = Snapshot {
                books: Arc::new(books),
                version: before.version + 1,
            };
            outcome = Transition {
                before,
                after: current.clone(),
            };
            true
        });
        outcome
    }

    /// Replace the list only if nothing has written since `expected_version`
    ///
    /// Returns the new snapshot, or the current one if the version moved on.
    pub fn compare_and_replace(
        &self,
        expected_version: u64,
        books: Arc<Vec<Book>>,
    ) -> Result<Snapshot, Snapshot> {
        let mut outcome = Err(self.snapshot());
        self.tx.send_if_modified(|current| {
            if current.version != expected_version {
                outcome = Err(current.clone());
                return false;
            }
            *current = Snapshot {
                books,
                version: expected_version + 1,
            };
            outcome = Ok(current.clone());
            true
        });
        outcome
    }
}

fn ensure_unique(books: &[Book]) -> Result<(), SharedError> {
    let mut seen = HashSet::new();
    for id in books.iter().filter_map(|book| book.id.as_ref()) {
        if !seen.insert(id) {
            return Err(SharedError::validation(
                "_id",
                format!("duplicate book id {}", id),
            ));
        }
    }
    Ok(())
}
