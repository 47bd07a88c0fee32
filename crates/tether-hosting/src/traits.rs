//! Trait abstraction for hosting-service API operations.
//!
//! This module defines the `HostingApi` trait which abstracts the hosting
//! service, enabling dependency injection and testability.

use serde_json::Value;

use crate::error::Result;
use crate::types::MergeRequest;

/// Trait for hosting-service API operations.
///
/// This trait abstracts the hosting API, allowing for:
/// - Dependency injection in the sync lifecycle
/// - Mock implementations for testing
/// - Multiple service backends selected at construction time
pub trait HostingApi: Send + Sync {
    /// Ask the service to open a merge request from `source` into `target`.
    fn create_merge_request(
        &self,
        source: &str,
        target: &str,
    ) -> impl std::future::Future<Output = Result<MergeRequest>> + Send;

    /// Perform an authenticated GET against a service path.
    fn get(&self, path: &str) -> impl std::future::Future<Output = Result<Value>> + Send;

    /// Perform an authenticated POST against a service path.
    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;
}
