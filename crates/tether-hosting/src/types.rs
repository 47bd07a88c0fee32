//! Hosting-service domain types.

use serde::{Deserialize, Serialize};

/// A merge request (or pull request) as reported by the hosting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    /// Service-assigned number of the request within the repository.
    pub number: u64,

    /// Request title.
    pub title: String,

    /// URL to view the request.
    pub web_url: String,

    /// Branch the request proposes to merge.
    pub source_branch: String,

    /// Branch the request targets.
    pub target_branch: String,
}
