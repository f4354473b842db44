//! Remote-evaluation bridge
//!
//! The panel hands the bridge a call expression and a completion callback.
//! `evaluate` returns immediately; the answer arrives later through the
//! callback, possibly on another thread.

use std::thread;

use crossbeam_channel::{Sender, unbounded};
use log::{debug, error};

use crate::errors::{Result, generic_error};
use crate::host::{HostProject, HostRuntime};

/// Callback receiving the host's textual answer
pub type Completion = Box<dyn FnOnce(String) + Send + 'static>;

/// Channel through which the panel evaluates script in the host
pub trait EvalBridge: Send + Sync + 'static {
    fn evaluate(&self, source: String, on_complete: Completion);
}

type Job = (String, Completion);

/// Bridge running a [`HostRuntime`] in-process on a dedicated host thread
///
/// Requests are executed one at a time in submission order, as the editing
/// application does with its scripting engine.
pub struct LocalBridge {
    sender: Sender<Job>,
    _handle: thread::JoinHandle<()>,
}

impl LocalBridge {
    /// Start the host thread serving `project`
    ///
    /// # Errors
    /// Returns an error if the host thread cannot be spawned
    pub fn spawn<P>(project: P) -> Result<Self>
    where
        P: HostProject + Send + 'static,
    {
        let (sender, receiver) = unbounded::<Job>();
        let runtime = HostRuntime::new(project);

        let handle = thread::Builder::new()
            .name("sequence-renamer-host".to_string())
            .spawn(move || {
                debug!("Host thread started");
                while let Ok((source, on_complete)) = receiver.recv() {
                    let answer = runtime.evaluate(&source);
                    on_complete(answer);
                }
                debug!("Host thread stopped");
            })
            .map_err(|e| generic_error(&format!("Failed to spawn host thread: {e}")))?;

        Ok(LocalBridge {
            sender,
            _handle: handle,
        })
    }
}

impl EvalBridge for LocalBridge {
    fn evaluate(&self, source: String, on_complete: Completion) {
        if let Err(e) = self.sender.send((source, on_complete)) {
            error!("Failed to enqueue evaluation: {e}");
        }
    }
}
