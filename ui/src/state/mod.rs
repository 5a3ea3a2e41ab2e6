//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The component kit owns no business state. What lives here is ambient
//! configuration handed down through Leptos context.

pub mod labels;
