//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The preview page owns the demo state (signals for loading and submitting)
//! and delegates all rendering to `components`.

pub mod preview;
