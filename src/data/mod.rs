//! Data module - survey export loading and processing

mod loader;
mod processor;

pub use loader::{LoaderError, SurveyLoader};
pub use processor::{ProcessorError, SurveyProcessor, METADATA_ROWS};
