use crate::constants::{DEFAULT_MAX_DECOMPRESSED_LEN, SIZE_SLACK};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Extra capacity budgeted above the input length when compressing.
    /// - `None` → `SIZE_SLACK` (128 bytes).
    pub slack: Option<usize>,

    /// Sanity ceiling for the length a container prefix may declare.
    /// - `None` → `DEFAULT_MAX_DECOMPRESSED_LEN` (1 GiB).
    pub max_decompressed_len: Option<usize>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            slack: Some(SIZE_SLACK),
            max_decompressed_len: Some(DEFAULT_MAX_DECOMPRESSED_LEN),
        }
    }
}

impl ContainerConfig {
    pub fn new(slack: Option<usize>, max_decompressed_len: Option<usize>) -> Self {
        Self {
            slack: slack.or(Some(SIZE_SLACK)),
            max_decompressed_len: max_decompressed_len.or(Some(DEFAULT_MAX_DECOMPRESSED_LEN)),
        }
    }

    pub fn with_max_decompressed_len(mut self, max: usize) -> Self {
        self.max_decompressed_len = Some(max);
        self
    }

    pub fn slack(&self) -> usize {
        self.slack.unwrap_or(SIZE_SLACK)
    }

    pub fn max_decompressed_len(&self) -> usize {
        self.max_decompressed_len.unwrap_or(DEFAULT_MAX_DECOMPRESSED_LEN)
    }
}
