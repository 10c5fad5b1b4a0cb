//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `Workbench` and toast state from
//! Leptos context providers set up in `app::App`.

pub mod code_editor;
pub mod fullscreen_modal;
pub mod navbar;
pub mod preview_frame;
pub mod preview_panel;
pub mod prompt_panel;
pub mod toast_stack;
