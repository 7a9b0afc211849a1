pub mod batch;
pub mod config;
pub mod normalizer;
pub mod pipeline;
pub mod stage;
pub mod unicode;

pub use batch::{BatchError, BatchProcessor, RunReport};
pub use config::{NormalizeConfig, UnicodeForm};
pub use normalizer::{NormalizeStats, Normalizer};
pub use pipeline::Pipeline;
pub use stage::Stage;
