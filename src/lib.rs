//! dyncontainer - A growable indexed container on a fixed-size backing block
//!
//! # Overview
//!
//! `Container<T>` is a dynamically resizing array that manages its own storage:
//! one exclusively owned block of slots that is replaced by a 1.5x larger one
//! whenever it fills up. It supports:
//!
//! - Appending and positional insertion
//! - Removal by position or by value (first match)
//! - Membership and index search
//! - Size queries, clearing, and snapshot export
//!
//! Index errors are returned as [`ContainerError`] values, never as panics.
//!
//! # Quick Start
//!
//! ```
//! use dyncontainer::{Container, Value};
//!
//! let mut items = Container::new();
//! items.add(Value::from("Hello"));
//! items.add(Value::from(11));
//! items.add(Value::from(3.554));
//! items.insert(1, Value::from("World")).unwrap();
//!
//! assert_eq!(items.len(), 4);
//! assert_eq!(items.to_string(), "[Hello, World, 11, 3.554]");
//!
//! let first = items.remove_at(0).unwrap();
//! assert_eq!(first.as_str(), Some("Hello"));
//! assert!(items.remove(&Value::from("World")));
//! assert_eq!(items.to_string(), "[11, 3.554]");
//! ```
//!
//! # Homogeneous containers
//!
//! Any element type works; search needs `PartialEq` and snapshots need `Clone`.
//! Use `Option<T>` when slots must be able to hold "no value":
//!
//! ```
//! use dyncontainer::{Container, ContainerError};
//!
//! let mut ids: Container<Option<u32>> = Container::with_capacity(2)?;
//! ids.add(Some(4));
//! ids.add(None);
//! ids.add(Some(9));
//!
//! assert_eq!(ids.index_of(&None), Some(1));
//! assert!(matches!(
//!     ids.get(3),
//!     Err(ContainerError::IndexOutOfBounds { index: 3, len: 3, .. })
//! ));
//! # Ok::<(), ContainerError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use dyncontainer_core::{
    Container, ContainerError, DEFAULT_CAPACITY, IndexOp, Value, container, error, growth, value,
};
