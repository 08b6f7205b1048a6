// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_query::Engine;
use serde::Serialize;
use std::fmt::Write as _;

/// A link whose page contained every term of the query that discovered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedMatch {
    pub engine: Engine,
    pub domain: String,
    pub url: String,
}

/// URLs verified under one domain, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResults {
    pub domain: String,
    pub urls: Vec<String>,
}

/// Domains verified for one engine, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineResults {
    pub engine: Engine,
    pub domains: Vec<DomainResults>,
}

/// 聚合结果集
///
/// 两级有序映射：引擎 → 域名 → URL 列表。
/// 引擎与域名按首次插入顺序排列，URL 按发现顺序排列，重复验证的 URL 不会被合并。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedResultSet {
    engines: Vec<EngineResults>,
}

impl AggregatedResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a verified match to `[engine][domain]`, creating buckets on first use.
    pub fn record(&mut self, verified: VerifiedMatch) {
        let engine_idx = match self.engines.iter().position(|e| e.engine == verified.engine) {
            Some(idx) => idx,
            None => {
                self.engines.push(EngineResults {
                    engine: verified.engine,
                    domains: Vec::new(),
                });
                self.engines.len() - 1
            }
        };

        let domains = &mut self.engines[engine_idx].domains;
        match domains.iter_mut().find(|d| d.domain == verified.domain) {
            Some(bucket) => bucket.urls.push(verified.url),
            None => domains.push(DomainResults {
                domain: verified.domain,
                urls: vec![verified.url],
            }),
        }
    }

    pub fn urls(&self, engine: Engine, domain: &str) -> Option<&[String]> {
        self.engine(engine)?
            .domains
            .iter()
            .find(|d| d.domain == domain)
            .map(|d| d.urls.as_slice())
    }

    pub fn engine(&self, engine: Engine) -> Option<&EngineResults> {
        self.engines.iter().find(|e| e.engine == engine)
    }

    pub fn engines(&self) -> impl Iterator<Item = &EngineResults> {
        self.engines.iter()
    }

    /// Total number of recorded URLs, duplicates included.
    pub fn match_count(&self) -> usize {
        self.engines
            .iter()
            .flat_map(|e| e.domains.iter())
            .map(|d| d.urls.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Plain-text report grouped by engine, then domain.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for engine in &self.engines {
            let _ = writeln!(out, "{} Results:", engine.engine);
            for domain in &engine.domains {
                let _ = writeln!(out, "\nDomain: {}", domain.domain);
                for url in &domain.urls {
                    let _ = writeln!(out, "  - {}", url);
                }
                out.push('\n');
            }
        }
        out
    }
}
