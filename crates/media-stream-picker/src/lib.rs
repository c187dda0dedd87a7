//! Core model for a desktop media-source picker.
//!
//! Discovers the capturable screens and top-level windows through a
//! [`SourceEnumerator`], refreshes them on a background worker, and exposes
//! the accepted [`Snapshot`] plus selection state to a presentation layer
//! through an observer list. The worker and the interactive context only ever
//! exchange fully-formed, immutable snapshots.

pub mod diff;
pub mod enumerator;
pub mod observer;
pub mod refresh;
pub mod selection;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod source;
pub mod thumbnail;

pub use diff::has_material_change;
pub use enumerator::SourceEnumerator;
pub use observer::{Subject, SubscriptionId};
pub use refresh::{DEFAULT_REFRESH_INTERVAL, RefreshDriver, RefreshScheduler, TickOutcome};
pub use selection::Selection;
pub use session::{PickerEvent, PickerSession, ShareRequest};
pub use settings::{SettingsStore, WriteError};
pub use snapshot::{ScreenCapture, Snapshot, WindowCapture};
pub use source::{CaptureSource, FULLSCREEN_FILE_NAME, SourceId};
pub use thumbnail::Thumbnail;
