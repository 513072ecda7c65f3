// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Student Storage
//!
//! Handlers reach student records only through the [`StudentRepository`]
//! trait. The in-memory implementation backs the service today; a
//! relational implementation can replace it without touching the API layer.

pub mod memory;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Student, StudentInput};

pub use memory::InMemoryStudentStore;

/// Error type for student storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No record with this id
    #[error("student {0} not found")]
    NotFound(i64),
    /// Record failed a store-level check
    #[error("invalid student record: {0}")]
    InvalidInput(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// CRUD access to student records.
pub trait StudentRepository: Send + Sync {
    /// All records ordered by id.
    fn list(&self) -> StorageResult<Vec<Student>>;

    fn get(&self, id: i64) -> StorageResult<Student>;

    /// Insert a record and return it with its assigned id.
    fn create(&mut self, input: StudentInput) -> StorageResult<Student>;

    /// Replace the fields of an existing record.
    fn update(&mut self, id: i64, input: StudentInput) -> StorageResult<Student>;

    fn delete(&mut self, id: i64) -> StorageResult<()>;
}

/// Repository shared across request handlers.
pub type SharedStudentRepository = Arc<RwLock<Box<dyn StudentRepository>>>;

/// Wrap a repository for use in [`crate::state::AppState`].
pub fn shared(repository: impl StudentRepository + 'static) -> SharedStudentRepository {
    Arc::new(RwLock::new(Box::new(repository)))
}
