// ABOUTME: Document export endpoint
// ABOUTME: Streams the raw document content back with download headers for the chosen format

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::document_handlers::load_document;
use crate::response::{parse_document_id, ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(ApiError::BadRequest(
                "Invalid format. Must be 'pdf' or 'docx'".to_string(),
            )),
        }
    }
}

/// Document name made safe for a quoted `filename` parameter
fn attachment_filename(name: &str, format: ExportFormat) -> String {
    let stem: String = name
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim();
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("{}.{}", stem, format.extension())
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Export a document. The body is the stored content; no conversion happens.
pub async fn export_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Response> {
    let id = parse_document_id(&id)?;
    let format = match query.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };
    let document = load_document(&state, id).await?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        attachment_filename(&document.name, format)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert!("html".parse::<ExportFormat>().is_err());
        assert!("PDF".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_attachment_filename_strips_quotes_and_control_chars() {
        assert_eq!(
            attachment_filename("Acme - Product Roadmap", ExportFormat::Pdf),
            "Acme - Product Roadmap.pdf"
        );
        assert_eq!(
            attachment_filename("The \"Big\" Plan\r\nX-Evil: 1", ExportFormat::Docx),
            "The _Big_ PlanX-Evil: 1.docx"
        );
        assert_eq!(attachment_filename("\n\t", ExportFormat::Pdf), "document.pdf");
    }
}
