//! Networking for the generation endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `sitegen::GenerationClient` over `POST /api/generate`.
//! The server holds the model credentials; the browser never talks to the
//! model provider directly.

pub mod api;
