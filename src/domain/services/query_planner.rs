// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run::RunRequest;
use crate::domain::models::search_query::{Engine, SearchQuery};

/// Builds the queries for one engine: every variation (subject name first)
/// paired with every keyword, variation-major. Duplicate variations are kept.
pub fn plan_queries(engine: Engine, request: &RunRequest) -> Vec<SearchQuery> {
    request
        .all_variations()
        .flat_map(|variation| {
            request
                .keywords
                .iter()
                .map(move |keyword| SearchQuery::new(engine, variation, keyword.as_str()))
        })
        .collect()
}
