use serde::{Deserialize, Serialize};

/// Routing rule for one partitioned table.
///
/// Change events for the table are spread over `partition_count`
/// partitions by hashing the value of the column at `column_index`.
/// [`ListenerOptions`](crate::ListenerOptions) treats this as an opaque
/// value; a router may use its own type instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PartitionConfig {
    pub partition_count: u32,
    #[serde(default)]
    pub column_index: usize,
}

impl PartitionConfig {
    pub fn new(partition_count: u32, column_index: usize) -> Self {
        Self {
            partition_count,
            column_index,
        }
    }

    /// Partition number for a hashed column value.
    ///
    /// A count of 0 or 1 means the table is not split and always maps to 0.
    pub fn partition_for(&self, hash: u64) -> u32 {
        if self.partition_count <= 1 {
            return 0;
        }
        (hash % u64::from(self.partition_count)) as u32
    }
}
