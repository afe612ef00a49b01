//! In-memory student store.
//!
//! Every student lives in a single process-local map guarded by an async
//! RwLock. Records are cloned out on read; writes go through [`StudentStore::modify`]
//! so the `updated_at` stamp can never be forgotten.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use coach_algo::StudentProfile;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::response::AppError;
use crate::services::chatbot::ChatSession;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("student {0} not found")]
    StudentNotFound(Uuid),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::StudentNotFound(_) => AppError::not_found("Student not found"),
        }
    }
}

/// One enrolled student and everything the coach knows about them.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub id: Uuid,
    pub profile: StudentProfile,
    /// 1-based count of diagnostic rounds, bumped when a round completes
    pub assessment_attempt: u32,
    pub chat: ChatSession,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct StudentStore {
    students: RwLock<HashMap<Uuid, StudentRecord>>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, profile: StudentProfile) -> StudentRecord {
        let now = Utc::now();
        let record = StudentRecord {
            id: Uuid::new_v4(),
            profile,
            assessment_attempt: 1,
            chat: ChatSession::default(),
            created_at: now,
            updated_at: now,
        };
        let mut students = self.students.write().await;
        students.insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, id: Uuid) -> Result<StudentRecord, StoreError> {
        let students = self.students.read().await;
        students
            .get(&id)
            .cloned()
            .ok_or(StoreError::StudentNotFound(id))
    }

    /// Run a closure against the record under the write lock and stamp
    /// `updated_at` afterwards.
    pub async fn modify<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut StudentRecord) -> T,
    ) -> Result<T, StoreError> {
        let mut students = self.students.write().await;
        let record = students
            .get_mut(&id)
            .ok_or(StoreError::StudentNotFound(id))?;
        let result = f(record);
        record.updated_at = Utc::now();
        Ok(result)
    }

    pub async fn count(&self) -> usize {
        self.students.read().await.len()
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
