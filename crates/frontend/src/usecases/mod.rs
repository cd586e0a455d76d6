pub mod u001_request_document;
