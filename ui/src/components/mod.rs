//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from props and report gestures through optional
//! callbacks. None of them owns business data; parents hold the signals that
//! drive `loading` and `is_submitting`.

pub mod form_shell;
pub mod icons;
pub mod loading_indicator;
pub mod spinner;
pub mod stat_card;
