//! Response bodies

use serde::{Deserialize, Serialize};

/// Response to a processed receipt
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response to a points lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
