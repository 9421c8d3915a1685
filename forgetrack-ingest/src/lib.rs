pub mod config;
pub mod extract;
pub mod validate;

pub use config::{Config, ParserConfig};
pub use extract::{Extraction, Outcome, SystemInfoExtractor};
