//! Panel side: the controller that drives the host through the bridge

pub mod bridge;
pub mod controller;
pub mod monitor;
pub mod notify;

pub use bridge::{Completion, EvalBridge, LocalBridge};
pub use controller::{PanelController, RenameMode};
pub use monitor::Monitor;
pub use notify::{LogNotifier, Notifier, Status, StatusKind};
