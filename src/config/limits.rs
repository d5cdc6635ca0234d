//! Upload size limits

use serde::{Deserialize, Serialize};

/// Upload limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted size of one uploaded file, in bytes.
    ///
    /// Must stay under MongoDB's 16 MB document cap since uploads are
    /// embedded in the asset document.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    15 * 1024 * 1024
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
