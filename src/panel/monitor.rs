//! Fixed-interval polling timer
//!
//! Fires once synchronously on start, then every interval on a timer thread
//! until stopped or dropped.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, error, info};

use crate::errors::{Result, generic_error};

type Tick = Arc<dyn Fn() + Send + Sync + 'static>;

/// Running poll timer
pub struct Monitor {
    stop: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Monitor {
    /// Run `on_tick` now, then every `interval`
    ///
    /// # Errors
    /// Returns an error if the timer thread cannot be spawned
    pub fn start<F>(interval: Duration, on_tick: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let on_tick: Tick = Arc::new(on_tick);
        let (stop_tx, stop_rx) = bounded::<()>(0);

        on_tick();

        let timer_tick = Arc::clone(&on_tick);
        let handle = thread::Builder::new()
            .name("sequence-renamer-monitor".to_string())
            .spawn(move || {
                let ticker = tick(interval);
                loop {
                    select! {
                        recv(stop_rx) -> _ => break,
                        recv(ticker) -> _ => timer_tick(),
                    }
                }
                debug!("Monitor thread exited");
            })
            .map_err(|e| generic_error(&format!("Failed to spawn monitor thread: {e}")))?;

        info!("Auto-rename monitoring started (every {interval:?})");

        Ok(Monitor {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the timer; a tick already running finishes first
    pub fn stop(&mut self) {
        // disconnecting the stop channel wakes the timer thread
        drop(self.stop.take());

        if let Some(handle) = self.handle.take() {
            if handle.thread().id() == thread::current().id() {
                info!("Auto-rename monitoring stopped");
                return;
            }
            if handle.join().is_err() {
                error!("Monitor thread panicked");
            }
            info!("Auto-rename monitoring stopped");
        }
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fires_immediately() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let mut monitor = Monitor::start(Duration::from_secs(3600), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(ticks.load(Ordering::SeqCst), 1);
        assert!(monitor.is_running());
        monitor.stop();
        assert!(!monitor.is_running());
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_keeps_ticking_until_stopped() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let mut monitor = Monitor::start(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while ticks.load(Ordering::SeqCst) < 3 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        monitor.stop();

        let stopped_at = ticks.load(Ordering::SeqCst);
        assert!(stopped_at >= 3);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks.load(Ordering::SeqCst), stopped_at);
    }
}
