//! Session state for the Vault-Tec terminal.
//!
//! A [`Session`] owns the history log, the active panel, the focus mode, and
//! the display settings. It is the only writer of that state: commands hand
//! back effects and the session applies them in one synchronous step.

pub mod boot;
pub mod clock;
pub mod dispatcher;
pub mod session;

pub use boot::{BOOT_LINES, BootSequence, WELCOME_LINES};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{PanelViews, dispatch, dispatch_tag};
pub use session::{FocusMode, HistoryEntry, HistoryKind, Session};
