pub mod app_error;
pub mod place_extractor;
pub mod report_printer;
