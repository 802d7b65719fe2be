pub mod error;
pub mod options;
pub mod partition;

pub use error::{Error, Result};
pub use options::{ListenerOptions, DEFAULT_ENV_PREFIX, REDACTED};
pub use partition::PartitionConfig;
