//! Book Data Structures
//!
//! Wire types for the books REST API. The same structs are produced by the
//! server and decoded by the client, so the field names here are the JSON
//! contract (`_id`, `title`, `author`, `comments`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::id::RecordId;

/// A comment attached to a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// The book this comment belongs to
    pub book_id: RecordId,
    /// Comment body
    pub text: String,
    /// When the comment was posted
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on a book
    pub fn new(book_id: RecordId, text: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            book_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// A book in the shared list
///
/// `id` is absent only for a book the client has added optimistically and
/// the server has not confirmed yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub author: String,
    /// Comments in posting order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Book {
    /// Create a book with a freshly generated id and no comments
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(RecordId::generate(), title, author)
    }

    pub fn with_id(id: RecordId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            author: author.into(),
            comments: Vec::new(),
        }
    }

    /// The unconfirmed stand-in shown while an add request is in flight
    pub fn placeholder(draft: &NewBook) -> Self {
        Self {
            id: None,
            title: draft.title.clone(),
            author: draft.author.clone(),
            comments: Vec::new(),
        }
    }

    pub fn has_id(&self, id: &RecordId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Whether the server has assigned this book an id
    pub fn is_confirmed(&self) -> bool {
        self.id.is_some()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Check the non-empty title and author rules
    pub fn validate(&self) -> Result<(), SharedError> {
        require("title", &self.title)?;
        require("author", &self.author)
    }
}

/// Body of `POST /api/books`
///
/// Missing fields decode as empty strings so that validation, not the JSON
/// extractor, decides the error message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        require("title", &self.title)?;
        require("author", &self.author)
    }
}

/// Body of `POST /api/books/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    #[serde(default)]
    pub comment: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("comment", &self.comment)
    }
}

/// Error envelope returned with every non-2xx API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body returned by the delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResult {
    pub result: String,
}

impl ActionResult {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(
            field,
            format!("missing required field {}", field),
        ));
    }
    Ok(())
}
