//! Outbound notification delivery for roomgate.
//!
//! - [`LineNotifyDelivery`] posts messages to the LINE Notify API.
//! - [`LogNotifier`] only writes the message to the log; used when no
//!   LINE token is configured.
//!
//! Both implement [`roomgate_core::notify::Notifier`].

pub mod delivery;

pub use delivery::line::{LineNotifyConfig, LineNotifyDelivery, LineNotifyError};
pub use delivery::log::LogNotifier;
