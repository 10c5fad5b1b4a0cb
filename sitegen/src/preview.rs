//! What the preview surfaces render.
//!
//! The document is untrusted model output. Every frame gets the same
//! least-privilege sandbox: scripts may run, but the frame has an opaque
//! origin and cannot navigate the top-level page.

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;

/// `sandbox` attribute for every preview iframe.
pub const SANDBOX: &str = "allow-scripts";

/// Width presets offered by the full-screen preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthPreset {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl WidthPreset {
    pub const ALL: [Self; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// CSS width applied to the iframe.
    #[must_use]
    pub fn css_width(self) -> &'static str {
        match self {
            Self::Desktop => "100%",
            Self::Tablet => "768px",
            Self::Mobile => "375px",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
        }
    }
}

/// Everything an iframe needs to show the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub srcdoc: String,
    pub sandbox: &'static str,
    pub width: &'static str,
    pub title: &'static str,
}

impl PreviewFrame {
    #[must_use]
    pub fn embedded(document: &str) -> Self {
        Self { srcdoc: document.to_owned(), sandbox: SANDBOX, width: WidthPreset::Desktop.css_width(), title: "Preview" }
    }

    #[must_use]
    pub fn fullscreen(document: &str, width: WidthPreset) -> Self {
        Self { srcdoc: document.to_owned(), sandbox: SANDBOX, width: width.css_width(), title: "Full Preview" }
    }
}

/// Content of the embedded preview panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddedPreview {
    /// The code pane is showing instead.
    Hidden,
    /// A generation is in flight.
    Loading,
    Frame(PreviewFrame),
}
