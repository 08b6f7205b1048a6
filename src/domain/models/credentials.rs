// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_query::Engine;
use std::fmt;

/// Opaque per-engine credential bundle.
#[derive(Clone, PartialEq, Eq)]
pub struct EngineCredentials {
    pub api_key: String,
    /// Engine-specific secondary id (the Google search-context id).
    pub context_id: Option<String>,
}

impl EngineCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            context_id: None,
        }
    }

    pub fn with_context_id(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }
}

// Keys must never end up in logs.
impl fmt::Debug for EngineCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineCredentials")
            .field("api_key", &"[REDACTED]")
            .field("context_id", &self.context_id.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// 所有引擎的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub google: EngineCredentials,
    pub bing: EngineCredentials,
}

impl Credentials {
    pub fn for_engine(&self, engine: Engine) -> &EngineCredentials {
        match engine {
            Engine::Google => &self.google,
            Engine::Bing => &self.bing,
        }
    }
}
