//! In-memory HTML page
//!
//! Holds a full page and rewrites the children of one container element,
//! addressed by its `id` attribute. This is the server-side stand-in for the
//! live DOM: the feed writes into it, the site binary saves it.

use std::ops::Range;
use std::sync::RwLock;

use crate::domain::ports::{Container, ElementRef, ANIMATE_ON_SCROLL_CLASS};
use crate::error::PageError;

/// A page whose container children can be replaced
pub struct HtmlDocument {
    container_id: String,
    html: RwLock<String>,
}

impl HtmlDocument {
    /// Wrap `html`, failing if it has no balanced element with `container_id`
    pub fn new(html: impl Into<String>, container_id: &str) -> Result<Self, PageError> {
        let html = html.into();
        locate_children(&html, container_id)?;

        Ok(Self {
            container_id: container_id.to_string(),
            html: RwLock::new(html),
        })
    }

    /// The whole page
    pub fn html(&self) -> String {
        self.html.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Children of the container element
    pub fn container_html(&self) -> String {
        let html = self.html.read().unwrap_or_else(|e| e.into_inner());
        match locate_children(&html, &self.container_id) {
            Ok(range) => html[range].to_string(),
            Err(_) => String::new(),
        }
    }
}

impl Container for HtmlDocument {
    fn id(&self) -> &str {
        &self.container_id
    }

    fn replace_contents(&self, markup: &str) {
        let mut html = self.html.write().unwrap_or_else(|e| e.into_inner());
        match locate_children(&html, &self.container_id) {
            Ok(range) => html.replace_range(range, markup),
            // Checked in `new`; only reachable if the markup we wrote removed it
            Err(e) => tracing::error!("Cannot replace container contents: {}", e),
        }
    }

    fn animated_elements(&self) -> Vec<ElementRef> {
        let count = class_token_count(&self.container_html(), ANIMATE_ON_SCROLL_CLASS);
        (0..count)
            .map(|i| ElementRef::new(&self.container_id, i))
            .collect()
    }
}

/// Byte range of the children of the element whose id is `id`
fn locate_children(html: &str, id: &str) -> Result<Range<usize>, PageError> {
    // ASCII lowercasing keeps byte offsets identical
    let lower = html.to_ascii_lowercase();
    let not_found = || PageError::ContainerNotFound(id.to_string());

    let attr_pos = [format!("id=\"{}\"", id), format!("id='{}'", id)]
        .iter()
        .filter_map(|needle| {
            html.match_indices(needle.as_str())
                .map(|(pos, _)| pos)
                .find(|&pos| {
                    html[..pos].ends_with(|c: char| c.is_ascii_whitespace())
                        && inside_tag(html, pos)
                })
        })
        .min()
        .ok_or_else(not_found)?;

    let tag_start = html[..attr_pos].rfind('<').ok_or_else(not_found)?;
    let tag_name: String = lower[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag_name.is_empty() {
        return Err(not_found());
    }

    let open_end = attr_pos + html[attr_pos..].find('>').ok_or_else(not_found)? + 1;
    let children_start = open_end;

    let open_marker = format!("<{}", tag_name);
    let close_marker = format!("</{}", tag_name);
    let mut depth = 1usize;
    let mut cursor = children_start;

    while depth > 0 {
        let next_open = find_tag(&lower, &open_marker, cursor);
        let next_close = find_tag(&lower, &close_marker, cursor)
            .ok_or_else(|| PageError::UnclosedContainer(id.to_string()))?;

        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor = open + open_marker.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Ok(children_start..next_close);
                }
                cursor = next_close + close_marker.len();
            }
        }
    }

    Err(PageError::UnclosedContainer(id.to_string()))
}

/// True if `pos` sits between a `<` and its `>`
fn inside_tag(html: &str, pos: usize) -> bool {
    let before = &html[..pos];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(lt), Some(gt)) => lt > gt,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Next `marker` at or after `from` that is a whole tag name
/// (`<div` matches `<div>` and `<div class=..>`, not `<divider>`)
fn find_tag(lower: &str, marker: &str, from: usize) -> Option<usize> {
    let mut cursor = from;
    while let Some(offset) = lower[cursor..].find(marker) {
        let pos = cursor + offset;
        let after = lower[pos + marker.len()..].chars().next();
        if matches!(after, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
            return Some(pos);
        }
        cursor = pos + marker.len();
    }
    None
}

/// Number of elements in `html` whose `class` attribute contains `token`.
///
/// Only real attributes count: the match must sit inside a tag and follow
/// whitespace, so text nodes and `data-class=` are ignored.
pub(crate) fn class_token_count(html: &str, token: &str) -> usize {
    let mut count = 0;
    for quote in ['"', '\''] {
        let needle = format!("class={}", quote);
        for (pos, _) in html.match_indices(needle.as_str()) {
            if !html[..pos].ends_with(|c: char| c.is_ascii_whitespace()) || !inside_tag(html, pos)
            {
                continue;
            }
            let value_start = pos + needle.len();
            if let Some(len) = html[value_start..].find(quote) {
                let value = &html[value_start..value_start + len];
                if value.split_ascii_whitespace().any(|t| t == token) {
                    count += 1;
                }
            }
        }
    }
    count
}
