// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// True only when every term occurs in `text` as a substring, ignoring case.
/// All-or-nothing: there is no partial score.
pub fn matches_all<S: AsRef<str>>(text: &str, terms: &[S]) -> bool {
    let haystack = text.to_lowercase();
    terms
        .iter()
        .all(|term| haystack.contains(&term.as_ref().to_lowercase()))
}
