// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory student store.

use std::collections::BTreeMap;

use super::{StorageError, StorageResult, StudentRepository};
use crate::models::{Student, StudentInput};

/// Student records kept in process memory.
///
/// Ids are assigned from an auto-increment counter starting at 1 and are
/// never reused after a delete.
#[derive(Debug)]
pub struct InMemoryStudentStore {
    students: BTreeMap<i64, Student>,
    next_id: i64,
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check(input: &StudentInput) -> StorageResult<()> {
    if input.name.trim().is_empty() {
        return Err(StorageError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(())
}

impl StudentRepository for InMemoryStudentStore {
    fn list(&self) -> StorageResult<Vec<Student>> {
        Ok(self.students.values().cloned().collect())
    }

    fn get(&self, id: i64) -> StorageResult<Student> {
        self.students
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    fn create(&mut self, input: StudentInput) -> StorageResult<Student> {
        check(&input)?;

        let id = self.next_id;
        self.next_id += 1;

        let student = Student::from_input(id, input);
        self.students.insert(id, student.clone());
        Ok(student)
    }

    fn update(&mut self, id: i64, input: StudentInput) -> StorageResult<Student> {
        check(&input)?;

        let slot = self.students.get_mut(&id).ok_or(StorageError::NotFound(id))?;
        *slot = Student::from_input(id, input);
        Ok(slot.clone())
    }

    fn delete(&mut self, id: i64) -> StorageResult<()> {
        self.students
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }
}
