#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core of `dyncontainer`: a growable indexed container built on a fixed-size
//! backing block, without using any built-in growable collection for storage.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so downstream crates and doc tests can name them
// the same way on std and no_std.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod container;
pub mod error;
pub mod growth;
pub mod value;

pub use container::Container;
pub use error::{ContainerError, IndexOp};
pub use growth::DEFAULT_CAPACITY;
pub use value::Value;


/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_growth() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
