//! Panel session
//!
//! A [`PanelController`] lives from panel open to panel close and owns what
//! the panel needs between events: current settings, the poll timer and the
//! cached sequence count. Bridge callbacks hold the shared session, so an
//! answer arriving after the controller is gone is simply dropped.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use anyhow::Result;
use log::{debug, trace, warn};

use crate::config::{RenameConfig, Settings, SettingsFile};
use crate::constants::{
    AUTO_DISABLED_STATUS, AUTO_ENABLED_STATUS, FN_HAS_SEQUENCE, FN_RENAME_SEQUENCE,
    FN_SEQUENCE_COUNT, MALFORMED_STATUS, MONITOR_INTERVAL, RENAMED_STATUS,
};
use crate::protocol::{RenameResponse, ScriptCall};

use super::bridge::EvalBridge;
use super::monitor::Monitor;
use super::notify::{Notifier, Status};

const UNKNOWN_COUNT: i64 = -1;

/// What triggered a rename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    /// Rename button; every outcome is shown
    Manual,
    /// Poll timer; "sequence not found" is not shown
    Auto,
}

struct Session<B, N> {
    bridge: B,
    notifier: N,
    settings: Mutex<Settings>,
    store: SettingsFile,
    last_sequence_count: AtomicI64,
    monitoring: AtomicBool,
}

impl<B: EvalBridge, N: Notifier> Session<B, N> {
    fn settings(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::SeqCst)
    }

    fn check_for_template_sequence(self: &Arc<Self>) {
        let config = self.settings().rename_config();
        if !config.is_enabled() {
            trace!("No template name configured, skipping poll");
            return;
        }

        let session = Arc::clone(self);
        self.bridge.evaluate(
            ScriptCall::new(FN_SEQUENCE_COUNT).to_source(),
            Box::new(move |answer| session.on_sequence_count(&answer, config)),
        );
    }

    fn on_sequence_count(self: &Arc<Self>, answer: &str, config: RenameConfig) {
        if !self.is_monitoring() {
            return;
        }

        let Ok(current) = answer.trim().parse::<i64>() else {
            debug!("Unexpected sequence count answer: {answer}");
            return;
        };
        if current < 0 {
            trace!("No project open");
            return;
        }

        let previous = self.last_sequence_count.swap(current, Ordering::SeqCst);
        if previous == current {
            return;
        }
        debug!("Sequence count changed from {previous} to {current}");

        let probe = ScriptCall::new(FN_HAS_SEQUENCE)
            .string(&config.template_name)
            .to_source();
        let session = Arc::clone(self);
        self.bridge.evaluate(
            probe,
            Box::new(move |answer| {
                if answer.trim() == "true" && session.is_monitoring() {
                    session.execute_rename(RenameMode::Auto);
                }
            }),
        );
    }

    fn execute_rename(self: &Arc<Self>, mode: RenameMode) {
        let config = self.settings().rename_config();
        let call = ScriptCall::new(FN_RENAME_SEQUENCE)
            .string(&config.template_name)
            .integer(config.folder_depth);

        let session = Arc::clone(self);
        self.bridge.evaluate(
            call.to_source(),
            Box::new(move |answer| session.on_rename_answer(&answer, mode)),
        );
    }

    fn on_rename_answer(&self, answer: &str, mode: RenameMode) {
        if mode == RenameMode::Auto && !self.is_monitoring() {
            debug!("Monitoring stopped, ignoring rename answer");
            return;
        }

        match RenameResponse::from_json(answer) {
            Ok(response) if response.success => {
                let new_name = response.new_name.unwrap_or_default();
                self.notifier
                    .notify(Status::success(format!("{RENAMED_STATUS} \"{new_name}\"")));
            }
            Ok(response) => {
                if mode == RenameMode::Auto && response.is_sequence_not_found() {
                    debug!("Template sequence already renamed");
                    return;
                }
                self.notifier
                    .notify(Status::error(response.error.unwrap_or_default()));
            }
            Err(e) => {
                warn!("{e}");
                self.notifier
                    .notify(Status::error(format!("{MALFORMED_STATUS} {answer}")));
            }
        }
    }
}

/// Controller of one open settings panel
pub struct PanelController<B: EvalBridge, N: Notifier> {
    session: Arc<Session<B, N>>,
    monitor: Option<Monitor>,
    interval: Duration,
}

impl<B: EvalBridge, N: Notifier> PanelController<B, N> {
    /// Open the panel: load settings and start monitoring if auto mode is on
    ///
    /// # Errors
    /// Returns an error if the settings cannot be loaded or the timer cannot start
    pub fn open(bridge: B, notifier: N, store: SettingsFile) -> Result<Self> {
        PanelController::open_with_interval(bridge, notifier, store, MONITOR_INTERVAL)
    }

    /// [`open`](Self::open) with a custom poll interval
    pub fn open_with_interval(
        bridge: B,
        notifier: N,
        store: SettingsFile,
        interval: Duration,
    ) -> Result<Self> {
        let settings = store.load_or_create()?;
        let auto_rename = settings.auto_rename;

        let mut controller = PanelController {
            session: Arc::new(Session {
                bridge,
                notifier,
                settings: Mutex::new(settings),
                store,
                last_sequence_count: AtomicI64::new(UNKNOWN_COUNT),
                monitoring: AtomicBool::new(false),
            }),
            monitor: None,
            interval,
        };

        if auto_rename {
            controller.start_monitoring()?;
        }
        Ok(controller)
    }

    /// Copy of the current settings
    pub fn settings(&self) -> Settings {
        self.session.settings().clone()
    }

    pub fn is_monitoring(&self) -> bool {
        self.session.is_monitoring()
    }

    pub fn set_template_name(&mut self, template_name: &str) -> Result<()> {
        self.update(|settings| settings.template_name = template_name.to_string())
    }

    pub fn set_folder_depth(&mut self, folder_depth: u32) -> Result<()> {
        self.update(|settings| settings.folder_depth = folder_depth)
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.update(|settings| settings.language = language.to_string())
    }

    /// Switch auto mode, persisting the choice
    pub fn set_auto_rename(&mut self, enabled: bool) -> Result<()> {
        self.update(|settings| settings.auto_rename = enabled)?;

        if enabled {
            self.start_monitoring()?;
            self.session
                .notifier
                .notify(Status::success(AUTO_ENABLED_STATUS));
        } else {
            self.stop_monitoring();
            self.session.notifier.notify(Status::info(AUTO_DISABLED_STATUS));
        }
        Ok(())
    }

    /// Rename now, reporting every outcome
    pub fn rename_now(&self) {
        self.session.execute_rename(RenameMode::Manual);
    }

    /// Run one poll of auto mode
    pub fn check_for_template_sequence(&self) {
        self.session.check_for_template_sequence();
    }

    /// Close the panel, stopping the timer
    pub fn close(mut self) {
        self.stop_monitoring();
    }

    fn update(&mut self, change: impl FnOnce(&mut Settings)) -> Result<()> {
        let snapshot = {
            let mut settings = self.session.settings();
            change(&mut settings);
            settings.clone()
        };
        self.session.store.save(&snapshot)
    }

    fn start_monitoring(&mut self) -> Result<()> {
        self.stop_monitoring();
        self.session
            .last_sequence_count
            .store(UNKNOWN_COUNT, Ordering::SeqCst);
        self.session.monitoring.store(true, Ordering::SeqCst);

        let session = Arc::clone(&self.session);
        match Monitor::start(self.interval, move || session.check_for_template_sequence()) {
            Ok(monitor) => {
                self.monitor = Some(monitor);
                Ok(())
            }
            Err(e) => {
                self.session.monitoring.store(false, Ordering::SeqCst);
                Err(e.into())
            }
        }
    }

    fn stop_monitoring(&mut self) {
        self.session.monitoring.store(false, Ordering::SeqCst);
        if let Some(mut monitor) = self.monitor.take() {
            monitor.stop();
        }
    }
}

impl<B: EvalBridge, N: Notifier> Drop for PanelController<B, N> {
    fn drop(&mut self) {
        self.stop_monitoring();
    }
}
