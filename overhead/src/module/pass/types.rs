///! ISS pass data types.

use serde::{Deserialize, Serialize};

/// One predicted ISS pass over a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    /// Unix epoch second at which the pass begins
    pub risetime: i64,
    /// Visibility window length in seconds
    pub duration: u32,
}
