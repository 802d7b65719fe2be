//! Listener options: everything a replication listener session needs to
//! know before it connects.
//!
//! The three identifiers (connection string, publication, replication slot)
//! are fixed when the options are built. Partition routing and the
//! `write_nulls` flag stay mutable until the options are handed to the
//! listener.
//!
//! Nothing here is validated. A malformed connection string or an unknown
//! publication or slot is reported by the listener when it connects.
//!
//! # Example
//!
//! ```rust
//! use pgoutput_listener::{ListenerOptions, PartitionConfig};
//!
//! let mut options: ListenerOptions =
//!     ListenerOptions::new("Host=db;Database=app", "pub_orders", "slot_orders");
//! options.insert_partition("orders_2024", PartitionConfig::new(4, 0));
//! options.set_write_nulls(true);
//!
//! assert_eq!(options.publication_name(), "pub_orders");
//! assert!(options.partition("orders_2024").is_some());
//! ```

use crate::partition::PartitionConfig;
use crate::Result;
use ::config::Source;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Environment prefix used by [`ListenerOptions::from_file`].
///
/// `PGOUTPUT_LISTENER_WRITE_NULLS=true` overrides `write_nulls`.
pub const DEFAULT_ENV_PREFIX: &str = "PGOUTPUT_LISTENER";

/// Placeholder written by [`ListenerOptions::to_json_redacted`].
pub const REDACTED: &str = "<redacted>";

/// Parameters of one replication listener session.
///
/// `P` is the per-table partition routing value. It is opaque to the
/// options and defaults to [`PartitionConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListenerOptions<P = PartitionConfig> {
    #[serde(alias = "data_source_address")]
    connection_string: String,
    publication_name: String,
    replication_slot_name: String,
    /// Partition routing keyed by table or partition-parent name.
    #[serde(default = "HashMap::new")]
    pub partitions: HashMap<String, P>,
    /// Whether null column values are written to the JSON output.
    #[serde(default)]
    pub write_nulls: bool,
}

impl<P> ListenerOptions<P> {
    /// Creates options with no partitions and `write_nulls` off.
    ///
    /// The identifiers are stored as given, empty strings included.
    pub fn new(
        connection_string: impl Into<String>,
        publication_name: impl Into<String>,
        replication_slot_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_string: connection_string.into(),
            publication_name: publication_name.into(),
            replication_slot_name: replication_slot_name.into(),
            partitions: HashMap::new(),
            write_nulls: false,
        }
    }

    /// Opaque connection descriptor (host, credentials, database, ...).
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn publication_name(&self) -> &str {
        &self.publication_name
    }

    pub fn replication_slot_name(&self) -> &str {
        &self.replication_slot_name
    }

    pub fn partitions(&self) -> &HashMap<String, P> {
        &self.partitions
    }

    pub fn partitions_mut(&mut self) -> &mut HashMap<String, P> {
        &mut self.partitions
    }

    pub fn partition(&self, name: &str) -> Option<&P> {
        self.partitions.get(name)
    }

    /// Adds or replaces the routing for `name`, returning the replaced value.
    pub fn insert_partition(&mut self, name: impl Into<String>, config: P) -> Option<P> {
        self.partitions.insert(name.into(), config)
    }

    pub fn with_partition(mut self, name: impl Into<String>, config: P) -> Self {
        self.insert_partition(name, config);
        self
    }

    pub fn write_nulls(&self) -> bool {
        self.write_nulls
    }

    pub fn set_write_nulls(&mut self, write_nulls: bool) {
        self.write_nulls = write_nulls;
    }

    pub fn with_write_nulls(mut self, write_nulls: bool) -> Self {
        self.write_nulls = write_nulls;
        self
    }
}

impl<P: DeserializeOwned> ListenerOptions<P> {
    /// Loads options from a TOML or JSON file, overridden by
    /// `PGOUTPUT_LISTENER_*` environment variables.
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self> {
        Self::load(path, DEFAULT_ENV_PREFIX)
    }

    /// Same as [`from_file`](Self::from_file) with a custom environment
    /// prefix. Nested keys are separated by `__`.
    ///
    /// Environment values are kept as strings, so identifiers such as
    /// `007` arrive unchanged. Partition keys are read from the file with
    /// their case preserved; environment overrides do not reach them.
    pub fn load<T: AsRef<Path>>(path: T, env_prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading listener options from {:?}", path);

        let file = ::config::File::from(path);
        let mut raw = file.collect()?;

        let settings = ::config::Config::builder()
            .add_source(file)
            .add_source(
                ::config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut options: Self = settings.try_deserialize()?;

        // The merged tree lowercases every key, table names included.
        if let Some(partitions) = raw.remove("partitions") {
            options.partitions = partitions.try_deserialize()?;
        }

        info!(
            publication = %options.publication_name,
            slot = %options.replication_slot_name,
            partitions = options.partitions.len(),
            write_nulls = options.write_nulls,
            "Loaded listener options"
        );

        Ok(options)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

impl<P: Serialize> ListenerOptions<P> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Pretty JSON with the connection string masked, for display.
    pub fn to_json_redacted(&self) -> Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(connection_string) = value.get_mut("connection_string") {
            *connection_string = serde_json::Value::String(REDACTED.to_string());
        }
        serde_json::to_string_pretty(&value).map_err(Into::into)
    }
}
