//! The current document buffer and its file export.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

/// Document shown before the first generation.
pub const PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Document</title>
  <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
</head>
<body class="p-2.5">
  <h1 class="text-[30px] font-bold">Welcome to WebBuilder</h1>
</body>
</html>
"#;

/// File name used by the download action.
pub const EXPORT_FILENAME: &str = "index.html";

/// Media type used by the download action.
pub const EXPORT_MEDIA_TYPE: &str = "text/html";

// Unreserved characters per RFC 3986 stay literal; everything else is escaped.
const DATA_URL_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Single text buffer holding a complete markup document.
///
/// Only the latest value is kept. Content is not validated: the preview is
/// sandboxed and tolerant of malformed markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Full replace. Used by both generation and manual edits.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Snapshot the buffer as a downloadable file.
    #[must_use]
    pub fn export(&self) -> Export {
        Export { filename: EXPORT_FILENAME, media_type: EXPORT_MEDIA_TYPE, body: self.text.clone() }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(PLACEHOLDER)
    }
}

/// A document serialized for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: &'static str,
    pub media_type: &'static str,
    pub body: String,
}

impl Export {
    /// `data:` URL carrying the body byte-for-byte, for an `<a download>` link.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            self.media_type,
            utf8_percent_encode(&self.body, DATA_URL_ESCAPES)
        )
    }
}
