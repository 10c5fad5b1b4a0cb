//! Workbench — the orchestration state machine behind the UI shell.
//!
//! DESIGN
//! ======
//! Three orthogonal pieces of state share one owner:
//! - generation status: `Idle` ⇄ `Generating`
//! - pane: `Code` / `Preview` (two renderings of the same document)
//! - full-screen preview: closed, or open with its own width preset
//!
//! The network call is not made here. `submit` hands back a
//! [`PromptRequest`] to dispatch and flips the busy flag; the caller feeds
//! the outcome to `settle`. While busy, further submits are no-ops, so at
//! most one call is ever in flight.

use crate::document::{Document, Export};
use crate::extract::extract_document;
use crate::generate::GenerationResult;
use crate::notice::Notice;
use crate::preview::{EmbeddedPreview, PreviewFrame, WidthPreset};
use crate::prompt::{PromptRequest, compose};

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
}

/// Which rendering of the document the main panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pane {
    Code,
    #[default]
    Preview,
}

/// Outcome of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Send this request; the workbench is now generating.
    Dispatch(PromptRequest),
    /// Input rejected; show the notice.
    Rejected(Notice),
    /// A generation is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct Workbench {
    document: Document,
    status: GenerationStatus,
    pane: Pane,
    fullscreen: Option<WidthPreset>,
}

impl Workbench {
    /// Fresh session holding the placeholder document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.status == GenerationStatus::Generating
    }

    #[must_use]
    pub fn pane(&self) -> Pane {
        self.pane
    }

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Handle the submit action for `description`.
    pub fn submit(&mut self, description: &str) -> Submission {
        if self.is_generating() {
            log::debug!("workbench: submit ignored, generation in flight");
            return Submission::Busy;
        }
        if description.trim().is_empty() {
            return Submission::Rejected(Notice::blank_prompt());
        }
        self.status = GenerationStatus::Generating;
        Submission::Dispatch(compose(description))
    }

    /// Apply the outcome of the dispatched call and return to `Idle`.
    ///
    /// Success replaces the document with the extracted markup. Failure
    /// leaves the document untouched and yields a notice.
    pub fn settle(&mut self, result: GenerationResult) -> Option<Notice> {
        if !self.is_generating() {
            log::warn!("workbench: settle without a generation in flight, ignoring");
            return None;
        }
        self.status = GenerationStatus::Idle;
        match result {
            Ok(text) => {
                self.document.replace(extract_document(&text));
                None
            }
            Err(e) => Some(Notice::generation_failed(&e)),
        }
    }

    // =========================================================================
    // EDITING / PANES
    // =========================================================================

    /// Manual edit from the code pane. Not guarded by generation status.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.document.replace(text);
    }

    pub fn show_code(&mut self) {
        self.pane = Pane::Code;
    }

    pub fn show_preview(&mut self) {
        self.pane = Pane::Preview;
    }

    pub fn toggle_code(&mut self) {
        self.pane = match self.pane {
            Pane::Code => Pane::Preview,
            Pane::Preview => Pane::Code,
        };
    }

    /// What the embedded preview panel should render right now.
    #[must_use]
    pub fn embedded_preview(&self) -> EmbeddedPreview {
        match (self.pane, self.status) {
            (Pane::Code, _) => EmbeddedPreview::Hidden,
            (Pane::Preview, GenerationStatus::Generating) => EmbeddedPreview::Loading,
            (Pane::Preview, GenerationStatus::Idle) => {
                EmbeddedPreview::Frame(PreviewFrame::embedded(self.document.as_str()))
            }
        }
    }

    // =========================================================================
    // FULL-SCREEN PREVIEW
    // =========================================================================

    /// Open the full-screen preview. Width always starts at desktop.
    pub fn open_fullscreen(&mut self) {
        self.fullscreen = Some(WidthPreset::Desktop);
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    /// Change the full-screen width. Ignored while closed.
    pub fn select_width(&mut self, preset: WidthPreset) {
        if let Some(width) = self.fullscreen.as_mut() {
            *width = preset;
        }
    }

    /// Selected width, or `None` when the full-screen preview is closed.
    #[must_use]
    pub fn fullscreen_width(&self) -> Option<WidthPreset> {
        self.fullscreen
    }

    /// Frame for the full-screen preview. Independent of pane and status.
    #[must_use]
    pub fn fullscreen_preview(&self) -> Option<PreviewFrame> {
        self.fullscreen
            .map(|width| PreviewFrame::fullscreen(self.document.as_str(), width))
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    #[must_use]
    pub fn export(&self) -> Export {
        self.document.export()
    }
}
