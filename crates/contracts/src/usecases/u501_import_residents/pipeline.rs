//! Sequential submission of parsed rows.
//!
//! Every row becomes a [`RowTask`]; tasks run in file order and each one is
//! awaited until its request has settled before the next is started. At most
//! one registration request is in flight at any time.

use chrono::Utc;
use std::fmt;
use uuid::Uuid;

use super::error::ImportError;
use super::progress::{ImportOutcome, ImportStatus, RowResult};
use super::row::{parse_residents, ResidentRow};
use crate::domain::a001_society::SocietyId;
use crate::domain::a002_user::{RegisterUserDto, User};

/// Remote side of the import: whatever can register a user and list the
/// society's residents.
///
/// Implemented over `reqwest` by the native client and over `gloo-net` by the
/// web console; futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ResidentRegistry {
    type Error: fmt::Display;

    async fn register(&self, request: &RegisterUserDto) -> Result<(), Self::Error>;

    async fn refresh_residents(&self, society_id: SocietyId) -> Result<Vec<User>, Self::Error>;
}

/// One unit of work: a single registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTask {
    pub row_number: usize,
    pub line: u64,
    pub request: RegisterUserDto,
}

impl RowTask {
    async fn run<R: ResidentRegistry>(self, registry: &R) -> RowResult {
        let error = registry
            .register(&self.request)
            .await
            .err()
            .map(|e| e.to_string());

        RowResult {
            row_number: self.row_number,
            line: self.line,
            email: self.request.email,
            error,
        }
    }
}

/// Everything one import produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub outcome: ImportOutcome,
    /// Resident list reloaded after the run. A failed reload does not make
    /// the import fail; the error text is kept here instead.
    pub residents: Result<Vec<User>, String>,
}

pub struct ResidentImporter<'a, R> {
    registry: &'a R,
    society_id: SocietyId,
}

impl<'a, R: ResidentRegistry> ResidentImporter<'a, R> {
    pub fn new(registry: &'a R, society_id: SocietyId) -> Self {
        Self {
            registry,
            society_id,
        }
    }

    /// Turn parsed rows into ordered tasks, one per row.
    pub fn plan(&self, rows: &[ResidentRow]) -> Vec<RowTask> {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| RowTask {
                row_number: idx + 1,
                line: row.line,
                request: row.to_registration(self.society_id),
            })
            .collect()
    }

    /// Parse `file`, submit every row, then reload the resident list.
    ///
    /// `on_status` sees `Parsing`, `Uploading`, then `Complete`, or
    /// `ParseError` when the file is rejected (in which case nothing is
    /// submitted and the parse error is returned).
    pub async fn run<F>(&self, file: &[u8], mut on_status: F) -> Result<ImportReport, ImportError>
    where
        F: FnMut(&ImportStatus),
    {
        let started_at = Utc::now();
        on_status(&ImportStatus::Parsing);

        let rows = match parse_residents(file) {
            Ok((_, rows)) => rows,
            Err(e) => {
                on_status(&ImportStatus::ParseError {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        let tasks = self.plan(&rows);
        on_status(&ImportStatus::Uploading { total: tasks.len() });

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.run(self.registry).await);
        }

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        let outcome = ImportOutcome {
            session_id: Uuid::new_v4().to_string(),
            succeeded,
            failed: results.len() - succeeded,
            rows: results,
            started_at,
            finished_at: Utc::now(),
        };
        on_status(&outcome.status());

        let residents = self
            .registry
            .refresh_residents(self.society_id)
            .await
            .map_err(|e| e.to_string());

        Ok(ImportReport { outcome, residents })
    }
}
