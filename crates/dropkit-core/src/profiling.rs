//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

/// Turn on scope collection.
///
/// Attach `puffin_viewer` (or any puffin sink) to inspect the frames.
pub fn init_profiling() {
    #[cfg(feature = "profiling")]
    {
        puffin::set_scopes_on(true);
        tracing::info!("puffin scopes enabled");
    }
}

/// Mark the start of a new profiling frame.
///
/// Hosts call this once per event-loop turn.
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
