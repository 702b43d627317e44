#![forbid(unsafe_code)]

//! Runtime half of the Aura theme engine.
//!
//! [`CustomizationStore`] persists the selected theme and per-dimension
//! overrides as flat key-value state. [`PresentationSurface`] is the shared,
//! injectable surface (custom properties, data attributes, coarse classes)
//! that rendering surfaces read. [`ChangeHub`] fans style-change events out
//! to subscribers, and [`ThemeContext`] ties the pieces together: every
//! mutation persists, re-resolves, publishes, and notifies, in that order.

pub mod context;
pub mod notify;
pub mod publish;
pub mod store;
pub mod surface;

pub use context::{DEFAULT_THEME, ThemeContext};
pub use notify::{ChangeHub, StyleChanged, Subscription};
pub use publish::publish;
pub use store::{
    CustomizationStore, FileStorage, MemoryStorage, OverrideField, StorageBackend, StorageError,
    StorageResult, keys,
};
pub use surface::{PresentationSurface, attrs, classes, props};
