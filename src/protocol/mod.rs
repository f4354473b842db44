//! Wire protocol between the panel and the host runtime
//!
//! Requests are call expressions, answers are JSON objects.

pub mod call;
pub mod response;

pub use call::{ScriptArg, ScriptCall, escape_string};
pub use response::{ErrorKind, RenameError, RenameResponse, RenameResult};
