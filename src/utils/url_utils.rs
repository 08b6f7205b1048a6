// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 提取 URL 的主机部分作为聚合键
///
/// 协议相对 URL（`//host/path`）按 https 解析。无法解析或没有主机的 URL 返回 `None`。
/// 主机名不做真实性校验。
pub fn extract_domain(link: &str) -> Option<String> {
    let trimmed = link.trim();
    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) if trimmed.starts_with("//") => Url::parse(&format!("https:{}", trimmed)).ok()?,
        Err(_) => return None,
    };
    parsed.host_str().map(|host| host.to_string())
}

/// Whether `host` equals `suffix` or is one of its subdomains.
pub fn host_matches(host: &str, suffix: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let suffix = suffix.trim_end_matches('.').to_ascii_lowercase();
    host == suffix || host.ends_with(&format!(".{}", suffix))
}
