pub mod cleanup;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod inspector;
pub mod model;
pub mod progress;
pub mod resolver;
pub mod scanner;
pub mod scratch;
pub mod version;

pub use config::{AppConfig, ConfigOverrides, ParseMode};
pub use engine::{CleanerEngine, InspectionResult, RunResult};
pub use error::Error;
pub use model::ArchiveRecord;
pub use progress::{ProgressReporter, SilentReporter};
pub use resolver::KeepSet;
