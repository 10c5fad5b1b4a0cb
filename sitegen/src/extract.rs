//! Isolate the HTML document from a model reply.
//!
//! Models wrap their answer in prose ("Here you go:") and markdown fences
//! even when told not to. Extraction is best effort and total: anything it
//! cannot make sense of is passed through unchanged so the preview shows
//! whatever came back.
//!
//! Resolution order:
//! 1. a complete document inside a fenced block
//! 2. preferred opener up to the first `</html>` after it; a `<!DOCTYPE html`
//!    or an opener at the start of a line beats an inline `<html>` mention
//! 3. opener with no closer (truncated reply): opener to end, trailing fences dropped
//! 4. no opener, but the whole reply is one fenced block: the fence body
//! 5. otherwise the input as-is

use std::sync::OnceLock;

use regex::Regex;

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

const FENCE: &str = "```";

fn opener_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<!doctype\s+html\b|<html\b").expect("static regex"))
}

fn closer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</html\s*>").expect("static regex"))
}

fn any_fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```[\w+-]*[ \t]*\r?\n(.*?)```").expect("static regex"))
}

fn fenced_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A\s*```[\w+-]*[ \t]*\r?\n(.*?)\r?\n?[ \t]*```\s*\z").expect("static regex"))
}

/// Return the HTML document contained in `response`.
#[must_use]
pub fn extract_document(response: &str) -> String {
    let fenced_document = any_fence_re()
        .captures_iter(response)
        .filter_map(|c| c.get(1))
        .find_map(|body| complete_document(body.as_str()));
    if let Some(document) = fenced_document {
        return document.to_owned();
    }

    if let Some(document) = complete_document(response) {
        return document.to_owned();
    }

    if let Some(start) = preferred_opener(response) {
        log::debug!("extract: document has no closing tag, keeping tail");
        return strip_trailing_fences(&response[start..]).to_owned();
    }

    if let Some(body) = single_fence_body(response) {
        return body.to_owned();
    }

    response.to_owned()
}

/// Span from the preferred opener through the first closer after it.
fn complete_document(text: &str) -> Option<&str> {
    let start = preferred_opener(text)?;
    let closer = closer_re().find(&text[start..])?;
    Some(&text[start..start + closer.end()])
}

/// Byte offset of the opener most likely to start the real document.
///
/// A doctype or an opener that begins its line wins; an inline `<html>`
/// inside prose is only used when nothing better exists.
fn preferred_opener(text: &str) -> Option<usize> {
    let mut first = None;
    for opener in opener_re().find_iter(text) {
        let is_doctype = opener.as_str().starts_with("<!");
        let line_start = text[..opener.start()].rfind('\n').map_or(0, |i| i + 1);
        if is_doctype || text[line_start..opener.start()].trim().is_empty() {
            return Some(opener.start());
        }
        first.get_or_insert(opener.start());
    }
    first
}

fn strip_trailing_fences(text: &str) -> &str {
    let mut trimmed = text.trim_end();
    while let Some(rest) = trimmed.strip_suffix(FENCE) {
        trimmed = rest.trim_end();
    }
    trimmed
}

fn single_fence_body(response: &str) -> Option<&str> {
    let captures = fenced_re().captures(response)?;
    let body = captures.get(1)?.as_str();
    // Several fenced blocks glued together are not a single document.
    if body.contains(FENCE) {
        return None;
    }
    Some(body)
}
