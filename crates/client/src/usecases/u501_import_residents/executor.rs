use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::{RegisterUserDto, User};
use contracts::usecases::u501_import_residents::{
    parse_residents, ImportReport, ImportResidents, ImportStatus, ResidentField,
    ResidentImporter, ResidentRegistry, RowTask,
};
use contracts::usecases::common::UseCaseMetadata;
use std::path::Path;

use crate::api::ApiClient;
use crate::error::{ApiError, ClientResult};

impl ResidentRegistry for ApiClient {
    type Error = ApiError;

    async fn register(&self, request: &RegisterUserDto) -> Result<(), ApiError> {
        self.register_user(request).await
    }

    async fn refresh_residents(&self, society_id: SocietyId) -> Result<Vec<User>, ApiError> {
        self.users_by_society(society_id).await
    }
}

/// Импорт жильцов из CSV-файла: по одному запросу регистрации на строку.
pub async fn import_file(
    client: &ApiClient,
    society_id: SocietyId,
    path: &Path,
) -> ClientResult<ImportReport> {
    let bytes = tokio::fs::read(path).await?;
    tracing::info!(
        "{}: {} ({} bytes) into society {}",
        ImportResidents::full_name(),
        path.display(),
        bytes.len(),
        society_id
    );

    let importer = ResidentImporter::new(client, society_id);
    let report = importer
        .run(&bytes, |status| match status {
            ImportStatus::ParseError { .. } => tracing::error!("{}", status),
            ImportStatus::Idle => {}
            _ => tracing::info!("{}", status),
        })
        .await?;

    for row in report.outcome.failures() {
        tracing::warn!(
            "Row {} (line {}, email {}) failed: {}",
            row.row_number,
            row.line,
            row.email.as_deref().unwrap_or("<none>"),
            row.error.as_deref().unwrap_or_default()
        );
    }

    if let Err(e) = &report.residents {
        tracing::error!("Failed to reload residents after import: {}", e);
    }

    Ok(report)
}

/// What an import would send, without sending anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPreview {
    pub tasks: Vec<RowTask>,
    /// Поля, для которых в файле нет столбца (получат значения по умолчанию)
    pub missing_fields: Vec<ResidentField>,
}

pub async fn preview_file(
    client: &ApiClient,
    society_id: SocietyId,
    path: &Path,
) -> ClientResult<ImportPreview> {
    let bytes = tokio::fs::read(path).await?;
    let (columns, rows) = parse_residents(&bytes)?;

    let tasks = ResidentImporter::new(client, society_id).plan(&rows);
    tracing::info!("Dry run: {} rows parsed from {}", tasks.len(), path.display());

    Ok(ImportPreview {
        tasks,
        missing_fields: columns.unmapped(),
    })
}
