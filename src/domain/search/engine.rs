// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::credentials::EngineCredentials;
use crate::domain::models::search_query::{CandidateLink, Engine, SearchQuery};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{engine} returned status {status}")]
    Status { engine: Engine, status: u16 },
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query and return the candidate links in provider order.
    async fn search(
        &self,
        query: &SearchQuery,
        credentials: &EngineCredentials,
    ) -> Result<Vec<CandidateLink>, SearchError>;

    /// The engine this provider speaks for
    fn engine(&self) -> Engine;
}
