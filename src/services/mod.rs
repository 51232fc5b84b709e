pub mod analysis_service;
pub mod extractor;
pub mod ocr;
pub mod storage;
pub mod summary;
