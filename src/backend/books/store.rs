/**
 * Book Storage
 *
 * Persistence seam for the books API. Handlers only see the `BookStore`
 * trait; `InMemoryBookStore` keeps books in insertion order and is what the
 * server runs with.
 *
 * # Thread Safety
 *
 * The store itself is not synchronized. It is shared between handlers as
 * `Arc<RwLock<dyn BookStore>>` (see `SharedBookStore`).
 */

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::shared::{Book, Comment, RecordId};

/// Store handle shared by all handlers
pub type SharedBookStore = Arc<RwLock<dyn BookStore>>;

/// Storage errors
#[derive(Debug, Error)]
pub enum BookStoreError {
    /// No book has the requested id
    #[error("no book exists with id {id}")]
    NotFound { id: RecordId },

    /// The backing storage could not be reached
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

impl BookStoreError {
    pub fn not_found(id: &RecordId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Book persistence
///
/// Input is validated by the caller; implementations only enforce identity.
pub trait BookStore: Send + Sync {
    /// All books in insertion order
    fn list(&self) -> Result<Vec<Book>, BookStoreError>;

    fn get(&self, id: &RecordId) -> Result<Book, BookStoreError>;

    /// Create a book with a fresh id and no comments
    fn insert(&mut self, title: String, author: String) -> Result<Book, BookStoreError>;

    /// Append a comment and return the updated book
    fn add_comment(&mut self, id: &RecordId, text: String) -> Result<Book, BookStoreError>;

    /// Delete one book, returning it
    fn remove(&mut self, id: &RecordId) -> Result<Book, BookStoreError>;

    /// Delete every book, returning how many there were
    fn clear(&mut self) -> Result<usize, BookStoreError>;
}

/// Book store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: Vec<Book>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap into the handle handlers expect
    pub fn shared(self) -> SharedBookStore {
        Arc::new(RwLock::new(self))
    }

    fn position(&self, id: &RecordId) -> Result<usize, BookStoreError> {
        self.books
            .iter()
            .position(|book| book.has_id(id))
            .ok_or_else(|| BookStoreError::not_found(id))
    }
}

impl BookStore for InMemoryBookStore {
    fn list(&self) -> Result<Vec<Book>, BookStoreError> {
        Ok(self.books.clone())
    }

    fn get(&self, id: &RecordId) -> Result<Book, BookStoreError> {
        let index = self.position(id)?;
        Ok(self.books[index].clone())
    }

    fn insert(&mut self, title: String, author: String) -> Result<Book, BookStoreError> {
        let mut id = RecordId::generate();
        while self.books.iter().any(|book| book.has_id(&id)) {
            id = RecordId::generate();
        }
        let book = Book::with_id(id, title, author);
        self.books.push(book.clone());
        Ok(book)
    }

    fn add_comment(&mut self, id: &RecordId, text: String) -> Result<Book, BookStoreError> {
        let index = self.position(id)?;
        let book = &mut self.books[index];
        book.comments.push(Comment::new(id.clone(), text));
        Ok(book.clone())
    }

    fn remove(&mut self, id: &RecordId) -> Result<Book, BookStoreError> {
        let index = self.position(id)?;
        Ok(self.books.remove(index))
    }

    fn clear(&mut self) -> Result<usize, BookStoreError> {
        let count = self.books.len();
        self.books.clear();
        Ok(count)
    }
}
