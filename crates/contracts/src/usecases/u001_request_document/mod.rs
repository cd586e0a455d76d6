pub mod request;

pub use request::{append_document_request, read_document_requests, DocumentRequest, STORAGE_KEY};
