//! Frame profiling through `puffin`.
//!
//! [`profile_function!`] and [`profile_scope!`] forward to puffin when the
//! default `profiling` feature is on and expand to nothing otherwise, so the
//! layout and draw passes stay instrumented in every build.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{noop_profile_function as profile_function, noop_profile_scope as profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_scope {
    ($($arg:tt)*) => {};
}

/// Address `puffin_viewer` connects to by default.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
static SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Turn scope collection on and serve frames over HTTP at `addr`.
///
/// Returns `false` if the server could not bind. Calling it again after a
/// successful start is a no-op.
///
/// ```no_run
/// palisade_core::profiling::serve(palisade_core::profiling::DEFAULT_SERVER_ADDR);
/// ```
#[cfg(feature = "profiling")]
pub fn serve(addr: &str) -> bool {
    if SERVER.get().is_some() {
        return true;
    }
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!(addr, "profiler listening");
            let _ = SERVER.set(server);
            true
        }
        Err(err) => {
            tracing::error!(addr, %err, "could not start profiler server");
            false
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn serve(addr: &str) -> bool {
    tracing::warn!(addr, "profiler requested without the `profiling` feature");
    false
}

/// Close the current profiling frame. Called once per root panel tick.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
