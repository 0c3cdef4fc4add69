//! # Optimistic Mutations
//!
//! Applies add and delete mutations to the [`ListStore`] before the server
//! confirms them, and takes them back if the server does not.
//!
//! ## Protocol
//!
//! 1. Snapshot the store and apply the optimistic change in one atomic write.
//! 2. Send the request. This is the only await point.
//! 3. On success, keep the change (an add swaps its placeholder for the
//!    server's record).
//! 4. On failure, roll back.
//!
//! ## Rollback
//!
//! If nothing has written to the store since step 1, the snapshot is put
//! back as is ([`Rollback::Exact`]). Otherwise another mutation or a refresh
//! has landed in between, and restoring the snapshot would undo its work.
//! In that case only this mutation's inverse is applied to the current list
//! ([`Rollback::Merged`]): a deleted book is re-inserted next to its old
//! neighbour, an added placeholder is removed.
//!
//! ## Outcomes
//!
//! Every mutation returns a [`MutationOutcome`] and publishes a
//! [`MutationEvent`] to subscribers, so a failure is visible to presentation
//! code without reading logs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookshelf::client::{Config, HttpBooksApi, ListStore, MutationCoordinator};
//! use bookshelf::shared::RecordId;
//!
//! # async fn example() {
//! let store = ListStore::new();
//! let coordinator = MutationCoordinator::new(HttpBooksApi::new(Config::new()), store.clone());
//! coordinator.refresh().await.ok();
//!
//! let id = RecordId::parse("5f1d7c0a9e4b2c0017a3b2c1").unwrap();
//! let outcome = coordinator.remove_optimistically(&id).await;
//! if !outcome.is_confirmed() {
//!     // store is back to what it was
//! }
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use crate::client::books_api::BooksApi;
use crate::client::error::ApiError;
use crate::client::store::{ListStore, Snapshot, Transition};
use crate::shared::{Book, NewBook, RecordId, SharedError};

/// Capacity of the outcome broadcast channel
const EVENT_CAPACITY: usize = 64;

/// What a mutation was trying to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Add(NewBook),
    Delete(RecordId),
}

/// How a failed mutation was undone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// The pre-mutation snapshot was restored verbatim
    Exact,
    /// The store had moved on; only this mutation's effect was reverted
    Merged,
}

/// Result of one optimistic mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the delete
    Confirmed,
    /// The server accepted the add and returned this record
    Created(Book),
    /// The request failed and the optimistic change was undone
    RolledBack { error: ApiError, rollback: Rollback },
    /// The mutation was refused locally; nothing was sent
    Rejected(SharedError),
}

impl MutationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Created(_))
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::RolledBack { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Broadcast after every mutation settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationEvent {
    /// Per-coordinator sequence number, starting at 1
    pub seq: u64,
    pub kind: MutationKind,
    pub outcome: MutationOutcome,
}

/// Where a deleted book sat, so it can be put back
#[derive(Debug, Clone)]
struct Removed {
    book: Book,
    index: usize,
    predecessor: Option<RecordId>,
}

impl Removed {
    fn locate(snapshot: &Snapshot, id: &RecordId) -> Option<Self> {
        let index = snapshot.position(id)?;
        let books = snapshot.books();
        let predecessor = index
            .checked_sub(1)
            .and_then(|i| books[i].id.clone());
        Some(Self {
            book: books[index].clone(),
            index,
            predecessor,
        })
    }
}

/// Runs optimistic mutations against a [`ListStore`]
#[derive(Debug)]
pub struct MutationCoordinator<A> {
    api: A,
    store: ListStore,
    sequence: AtomicU64,
    events: broadcast::Sender<MutationEvent>,
}

impl<A: BooksApi> MutationCoordinator<A> {
    pub fn new(api: A, store: ListStore) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            store,
            sequence: AtomicU64::new(0),
            events,
        }
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Receive an event for every settled mutation
    pub fn subscribe(&self) -> broadcast::Receiver<MutationEvent> {
        self.events.subscribe()
    }

    /// Delete a book, removing it from the store before the server answers
    ///
    /// An id that is not in the store leaves the store untouched, but the
    /// request is still sent.
    pub async fn remove_optimistically(&self, book_id: &RecordId) -> MutationOutcome {
        let seq = self.next_seq();
        let kind = MutationKind::Delete(book_id.clone());
        tracing::info!(seq, "Deleting book {}", book_id);

        let transition = self.store.retain(|book| !book.has_id(book_id));
        let removed = Removed::locate(&transition.before, book_id);

        let outcome = match self.api.delete_book(book_id).await {
            Ok(()) => {
                tracing::debug!(seq, "Delete of {} confirmed", book_id);
                MutationOutcome::Confirmed
            }
            Err(error) => {
                tracing::warn!(seq, "Restoring deleted book {} to the list: {}", book_id, error);
                let rollback = self.roll_back(seq, &transition, |current| {
                    restore_removed(current, removed.as_ref())
                });
                MutationOutcome::RolledBack { error, rollback }
            }
        };

        self.publish(seq, kind, outcome)
    }

    /// Add a book, showing a placeholder until the server returns the record
    pub async fn add_optimistically(&self, draft: NewBook) -> MutationOutcome {
        let seq = self.next_seq();
        let kind = MutationKind::Add(draft.clone());
        tracing::info!(seq, "Adding book {:?} by {:?}", draft.title, draft.author);

        if let Err(error) = draft.validate() {
            tracing::warn!(seq, "Refusing to add book: {}", error);
            return self.publish(seq, kind, MutationOutcome::Rejected(error));
        }

        let placeholder = Book::placeholder(&draft);
        let transition = match self.store.update(|current| {
            let mut books = current.to_vec();
            books.push(placeholder.clone());
            books
        }) {
            Ok(transition) => transition,
            Err(error) => return self.publish(seq, kind, MutationOutcome::Rejected(error)),
        };

        let result = self.api.add_book(&draft).await.and_then(|created| {
            if !created.is_confirmed() {
                return Err(ApiError::decode("created book has no _id"));
            }
            created
                .validate()
                .map_err(|e| ApiError::decode(e.to_string()))?;
            Ok(created)
        });

        let outcome = match result {
            Ok(created) => {
                let confirmed = self
                    .store
                    .update(|current| confirm_placeholder(current, &placeholder, &created));
                if let Err(error) = confirmed {
                    tracing::error!(seq, "Could not swap in created book: {}", error);
                }
                tracing::debug!(seq, "Add confirmed as {:?}", created.id);
                MutationOutcome::Created(created)
            }
            Err(error) => {
                tracing::warn!(seq, "Removing unconfirmed book {:?}: {}", draft.title, error);
                let rollback = self.roll_back(seq, &transition, |current| {
                    remove_placeholder(current, &placeholder)
                });
                MutationOutcome::RolledBack { error, rollback }
            }
        };

        self.publish(seq, kind, outcome)
    }

    /// Replace the store with the server's list
    pub async fn refresh(&self) -> Result<Snapshot, ApiError> {
        let books = self.api.list_books().await?;
        let snapshot = self
            .store
            .replace(books)
            .map_err(|e| ApiError::decode(e.to_string()))?;
        tracing::debug!("Refreshed {} books at version {}", snapshot.len(), snapshot.version());
        Ok(snapshot)
    }

    fn roll_back<F>(&self, seq: u64, transition: &Transition, inverse: F) -> Rollback
    where
        F: FnOnce(&[Book]) -> Vec<Book>,
    {
        if transition.is_noop() {
            return Rollback::Exact;
        }

        match self
            .store
            .compare_and_replace(transition.after.version(), transition.before.shared_books())
        {
            Ok(_) => Rollback::Exact,
            Err(current) => {
                tracing::debug!(
                    seq,
                    "Store moved from version {} to {}, merging rollback",
                    transition.after.version(),
                    current.version()
                );
                if let Err(error) = self.store.update(inverse) {
                    tracing::error!(seq, "Rollback merge rejected: {}", error);
                }
                Rollback::Merged
            }
        }
    }

    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn publish(&self, seq: u64, kind: MutationKind, outcome: MutationOutcome) -> MutationOutcome {
        // no subscribers is fine
        let _ = self.events.send(MutationEvent {
            seq,
            kind,
            outcome: outcome.clone(),
        });
        outcome
    }
}

fn restore_removed(current: &[Book], removed: Option<&Removed>) -> Vec<Book> {
    let mut books = current.to_vec();
    let Some(removed) = removed else {
        return books;
    };
    let Some(id) = removed.book.id.as_ref() else {
        return books;
    };
    if books.iter().any(|book| book.has_id(id)) {
        return books;
    }

    let index = removed
        .predecessor
        .as_ref()
        .and_then(|p| books.iter().position(|book| book.has_id(p)))
        .map(|i| i + 1)
        .unwrap_or_else(|| removed.index.min(books.len()));
    books.insert(index, removed.book.clone());
    books
}

fn confirm_placeholder(current: &[Book], placeholder: &Book, created: &Book) -> Vec<Book> {
    let mut books = current.to_vec();
    let already_present = created
        .id
        .as_ref()
        .is_some_and(|id| books.iter().any(|book| book.has_id(id)));

    match books.iter().position(|book| book == placeholder) {
        Some(i) if already_present => {
            books.remove(i);
        }
        Some(i) => books[i] = created.clone(),
        None if !already_present => books.push(created.clone()),
        None => {}
    }
    books
}

fn remove_placeholder(current: &[Book], placeholder: &Book) -> Vec<Book> {
    let mut books = current.to_vec();
    if let Some(i) = books.iter().position(|book| book == placeholder) {
        books.remove(i);
    }
    books
}
