//! Discrete user-gesture dispatch.
//!
//! DESIGN
//! ======
//! Every interactive component funnels a click, key press or submit through
//! [`dispatch`], which runs the parent's handler at most once and never
//! queues a blocked gesture for later.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// What happened to a single gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The handler ran exactly once.
    Dispatched,
    /// The gesture arrived while the component was busy and was dropped.
    Blocked,
    /// No handler was supplied.
    Unhandled,
}

/// Run `handler` once for one gesture unless `blocked`.
pub fn dispatch<F: FnOnce()>(blocked: bool, handler: Option<F>) -> GestureOutcome {
    if blocked {
        #[cfg(feature = "hydrate")]
        log::debug!("gesture dropped while busy");
        return GestureOutcome::Blocked;
    }
    match handler {
        Some(run) => {
            run();
            GestureOutcome::Dispatched
        }
        None => GestureOutcome::Unhandled,
    }
}

/// Whether `key` (a `KeyboardEvent.key` value) activates a focused button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
