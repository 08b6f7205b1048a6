// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Reduces page markup to a flat, lowercase text stream for term matching.

use scraper::{ElementRef, Html, Node};

/// Elements treated as page chrome rather than content. Everything nested
/// inside them is dropped as well.
const NOISE_TAGS: &[&str] = &["script", "style", "header", "footer", "nav", "form"];

/// Parses `markup`, drops noise elements, and joins the remaining trimmed
/// text nodes with single spaces, lowercased.
pub fn normalize(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut fragments = Vec::new();
    collect_text(document.root_element(), &mut fragments);
    fragments.join(" ").to_lowercase()
}

fn collect_text<'a>(element: ElementRef<'a>, fragments: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed);
                }
            }
            Node::Element(el) if NOISE_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, fragments);
                }
            }
            _ => {}
        }
    }
}
