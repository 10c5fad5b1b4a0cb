//! Client-side reactive state that is not part of the workbench.

pub mod toasts;
