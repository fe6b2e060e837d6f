//! Map type re-exports for conditional ordering.
//!
//! This module provides the `Map` type alias used for the unordered lookup maps of the
//! document (components, schema properties, extensions, ...).
//! The concrete type depends on the `preserve_order` feature:
//! - When `preserve_order` is enabled: `IndexMap` (preserves insertion order)
//! - When disabled (default): `BTreeMap` (sorted by keys)
//!
//! Collections whose order is observable in the document (paths, responses, callbacks)
//! do not use this alias, see [`OrderedMap`](super::OrderedMap).

cfg_if::cfg_if! {
    if #[cfg(feature = "preserve_order")] {
        pub use indexmap::IndexMap as Map;
    } else {
        pub use std::collections::BTreeMap as Map;
    }
}
