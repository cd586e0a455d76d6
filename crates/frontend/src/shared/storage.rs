//! Обёртка над `window.localStorage` для заявок на документы

use contracts::shared::error::CatalogError;
use contracts::usecases::u001_request_document::{
    append_document_request, read_document_requests, DocumentRequest, STORAGE_KEY,
};

fn local_storage() -> Result<web_sys::Storage, CatalogError> {
    web_sys::window()
        .ok_or_else(|| CatalogError::StorageUnavailable("no window".into()))?
        .local_storage()
        .map_err(|_| CatalogError::StorageUnavailable("localStorage is not accessible".into()))?
        .ok_or_else(|| CatalogError::StorageUnavailable("localStorage is not available".into()))
}

fn read_raw() -> Option<String> {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

/// Все сохранённые заявки (испорченное значение читается как пустой список)
pub fn load_document_requests() -> Vec<DocumentRequest> {
    read_document_requests(read_raw().as_deref())
}

/// Дописать заявку; возвращает новое количество заявок
pub fn stage_document_request(request: DocumentRequest) -> Result<usize, CatalogError> {
    let storage = local_storage()?;
    let existing = storage.get_item(STORAGE_KEY).ok().flatten();
    let updated = append_document_request(existing.as_deref(), request)?;
    storage
        .set_item(STORAGE_KEY, &updated)
        .map_err(|_| CatalogError::StorageUnavailable("failed to write localStorage".into()))?;

    let count = read_document_requests(Some(&updated)).len();
    log::info!("document request staged, {} in storage", count);
    Ok(count)
}
