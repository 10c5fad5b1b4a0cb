//! Prompt-to-document pipeline shared by `server` and `client`.
//!
//! This crate owns everything that is not I/O: the instruction preamble, the
//! extraction of an HTML document from a model reply, the in-memory document
//! buffer, the preview model, and the `Workbench` state machine that ties them
//! together. The network call sits behind [`generate::GenerationClient`] so the
//! browser and tests can plug in their own transport.

pub mod document;
pub mod extract;
pub mod generate;
pub mod notice;
pub mod preview;
pub mod prompt;
pub mod session;
pub mod wire;

pub use document::{Document, Export};
pub use extract::extract_document;
pub use generate::{GenerationClient, GenerationError, GenerationResult};
pub use notice::{Notice, NoticeLevel};
pub use preview::{EmbeddedPreview, PreviewFrame, WidthPreset};
pub use prompt::PromptRequest;
pub use session::{GenerationStatus, Pane, Submission, Workbench};
