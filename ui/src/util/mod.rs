//! Utility helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (theme lookup, gesture dispatch, text normalization) are kept
//! out of the `view!` bodies so the render decisions can be unit tested
//! without a DOM.

pub mod gesture;
#[cfg(all(test, feature = "ssr"))]
pub(crate) mod render;
pub mod text;
pub mod theme;
