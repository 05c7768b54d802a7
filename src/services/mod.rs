pub mod diagnostics_service;
pub mod product_service;
pub mod submission_service;
