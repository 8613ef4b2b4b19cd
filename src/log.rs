//! Feature-gated logging.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros
//! and accept fields (`debug!(weight = w, "resolved")`). Without it they
//! swallow their arguments, so call sites compile unchanged.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __varicon_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __varicon_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__varicon_debug as debug, __varicon_warn as warn};
