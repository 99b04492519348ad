// ABOUTME: Studio module: session state machine for generate, restore, and export.
// ABOUTME: Notifications raised by actions are queued on the session for the UI to drain.

pub mod notification;
pub mod session;

pub use notification::{Notification, Severity};
pub use session::{ExportReceipt, GenerationRequest, HistoryEntry, Studio};
