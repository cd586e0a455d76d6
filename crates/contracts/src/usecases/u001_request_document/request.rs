//! Заявка на документ, которая складывается в localStorage браузера.
//!
//! Хранится JSON-массив заявок без версии схемы и без синхронизации с сервером.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::CatalogError;

/// Ключ localStorage
pub const STORAGE_KEY: &str = "dtmp.documentRequests";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub id: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "documentTitle")]
    pub document_title: String,
    #[serde(rename = "requesterEmail")]
    pub requester_email: String,
    #[serde(rename = "requestedAt")]
    pub requested_at: DateTime<Utc>,
}

impl DocumentRequest {
    pub fn new(
        document_id: impl Into<String>,
        document_title: impl Into<String>,
        requester_email: impl Into<String>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            document_id: document_id.into(),
            document_title: document_title.into(),
            requester_email: requester_email.into(),
            requested_at,
        }
    }

    /// Минимальная проверка формы перед сохранением
    pub fn validate(&self) -> Result<(), CatalogError> {
        let email = self.requester_email.trim();
        if email.is_empty() {
            return Err(CatalogError::InvalidRequest("Email is required".into()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(CatalogError::InvalidRequest(format!(
                "'{}' is not a valid email",
                email
            ))),
        }
    }
}

/// Разобрать сохранённый массив; отсутствующее или испорченное значение даёт пустой список
pub fn read_document_requests(existing: Option<&str>) -> Vec<DocumentRequest> {
    existing
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

/// Дописать заявку в конец массива и вернуть новое значение для localStorage
pub fn append_document_request(
    existing: Option<&str>,
    request: DocumentRequest,
) -> Result<String, CatalogError> {
    let mut requests = read_document_requests(existing);
    requests.push(request);
    Ok(serde_json::to_string(&requests)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(doc: &str) -> DocumentRequest {
        DocumentRequest::new(
            doc,
            "Steering Committee Pack",
            "pm@example.com",
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_append_to_empty_storage() {
        let stored = append_document_request(None, request("tpl-003")).unwrap();
        let parsed = read_document_requests(Some(&stored));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].document_id, "tpl-003");
        assert!(stored.contains("\"documentId\":\"tpl-003\""));
    }

    #[test]
    fn test_append_keeps_existing_entries_in_order() {
        let first = append_document_request(None, request("tpl-001")).unwrap();
        let second = append_document_request(Some(&first), request("tpl-002")).unwrap();
        let ids: Vec<String> = read_document_requests(Some(&second))
            .into_iter()
            .map(|r| r.document_id)
            .collect();
        assert_eq!(ids, vec!["tpl-001", "tpl-002"]);
    }

    #[test]
    fn test_corrupt_storage_is_replaced() {
        let stored = append_document_request(Some("{not json"), request("tpl-004")).unwrap();
        assert_eq!(read_document_requests(Some(&stored)).len(), 1);
    }

    #[test]
    fn test_email_validation() {
        assert!(request("tpl-001").validate().is_ok());
        let mut bad = request("tpl-001");
        bad.requester_email = "not-an-email".into();
        assert!(matches!(
            bad.validate(),
            Err(CatalogError::InvalidRequest(msg)) if msg.contains("not-an-email")
        ));
        bad.requester_email = "  ".into();
        assert!(matches!(
            bad.validate(),
            Err(CatalogError::InvalidRequest(msg)) if msg == "Email is required"
        ));
    }
}
