// src/constants.rs
//
// Application-wide defaults shared by the store, the configuration layer
// and the demo seed.

/// Identifier of the builtin folder.
///
/// The builtin folder is created together with every store and can never be
/// removed. Selecting it as the active folder disables folder filtering.
///
/// Used in: `domain/ids.rs`
pub const BUILTIN_FOLDER_ID: &str = "inbox";

/// Display name of the builtin folder unless configured otherwise.
///
/// Used in: `application/entity_store.rs`, `infrastructure/config.rs`
pub const DEFAULT_BUILTIN_FOLDER_NAME: &str = "All Notes";

/// Title given to freshly created notes, and shown for notes with a blank title.
///
/// Used in: `application/entity_store.rs`, `ports/projection.rs`
pub const UNTITLED_TITLE: &str = "Untitled";

/// Tag color used when the caller does not pick one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_TAG_COLOR: &str = "#1976d2";

/// `strftime` pattern for the abbreviated month+day shown in note lists.
///
/// Used in: `ports/projection.rs`
pub const SHORT_DATE_FORMAT: &str = "%b %-d";
