// SPDX-License-Identifier: MPL-2.0
//! Notification manager tying the queue, the display lifecycle and the
//! follow loop to the host.
//!
//! The host owns one manager, hands it a viewpoint source and the output
//! surfaces, and calls [`NotificationManager::tick`] once per frame. Within a
//! tick the order is fixed:
//!
//! 1. polling loop check (may dequeue and show),
//! 2. lifecycle and animation step,
//! 3. follow step.
//!
//! The polling check therefore reads the showing flag before the same
//! frame's animation completion clears it; the freed slot is picked up on the
//! next check.
//!
//! # Example
//!
//! ```
//! use vr_notifications::config::NotificationSettings;
//! use vr_notifications::domain::Pose;
//! use vr_notifications::notifications::{
//!     FixedViewpoint, LabelSurface, NoLayoutRefresh, NotificationManager, SlotBindings,
//!     SlotSurface, SlotTransform,
//! };
//! use vr_notifications::domain::{Color, Vec3};
//!
//! struct Headless;
//! impl SlotSurface for Headless {
//!     fn set_visible(&mut self, _: bool) {}
//!     fn set_scale(&mut self, _: Vec3) {}
//!     fn set_transform(&mut self, _: &SlotTransform) {}
//! }
//! impl LabelSurface for Headless {
//!     fn set_text(&mut self, _: &str) {}
//!     fn set_message_color(&mut self, _: Color) {}
//!     fn set_background_color(&mut self, _: Color) {}
//! }
//!
//! let settings = NotificationSettings {
//!     show_welcome_message_at_start: false,
//!     ..NotificationSettings::default()
//! };
//! let mut manager = NotificationManager::new(
//!     settings,
//!     FixedViewpoint(Pose::default()),
//!     SlotBindings::new(Headless, Headless, NoLayoutRefresh),
//! )?;
//! manager.start()?;
//! manager.send_message("Saved");
//! manager.tick(0.016);
//! assert!(manager.is_message_showing());
//! # Ok::<(), vr_notifications::error::Error>(())
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use super::follow::{FollowLoop, FollowStep};
use super::host::{SlotBindings, ViewpointSource};
use super::lifecycle::{
    DisplayLifecycle, LifecycleEvent, LifecyclePhase, LifecycleTiming, SlotState,
};
use super::notification::{Notification, Severity};
use super::placement::{target_transform, PlacementSettings, SlotTransform};
use super::scheduler::{NotificationScheduler, PollOutcome};
use super::style::StyleTable;
use crate::config::{NotificationSettings, DEBUG_MESSAGE_PREFIX, WELCOME_MESSAGE};
use crate::diagnostics::{
    BufferCapacity, DiagnosticEvent, DiagnosticEventKind, DiagnosticsCollector,
};
use crate::domain::Vec3;
use crate::error::{Error, Result};

/// Set while an exclusive manager is alive.
static EXCLUSIVE_INSTANCE: AtomicBool = AtomicBool::new(false);

/// Releases the exclusive flag on drop.
#[derive(Debug)]
struct ExclusiveClaim;

impl ExclusiveClaim {
    fn acquire() -> Result<Self> {
        EXCLUSIVE_INSTANCE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ExclusiveClaim)
            .map_err(|_| Error::AlreadyConstructed)
    }
}

impl Drop for ExclusiveClaim {
    fn drop(&mut self) {
        EXCLUSIVE_INSTANCE.store(false, Ordering::Release);
    }
}

pub struct NotificationManager {
    settings: NotificationSettings,
    styles: StyleTable,
    placement: PlacementSettings,
    viewpoint: Box<dyn ViewpointSource>,
    surfaces: SlotBindings,

    slot: SlotState,
    scheduler: NotificationScheduler,
    lifecycle: DisplayLifecycle,
    follow: FollowLoop,

    started: bool,
    startup_elapsed: f32,
    waiting_logged: bool,
    clock: f32,
    debug_counter: u64,
    diagnostics: DiagnosticsCollector,
    _exclusive: Option<ExclusiveClaim>,
}

impl std::fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationManager")
            .field("started", &self.started)
            .field("phase", &self.lifecycle.phase())
            .field("queued", &self.scheduler.len())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl NotificationManager {
    /// Builds a manager. Settings are sanitized; the style table must cover
    /// every severity.
    ///
    /// Nothing is displayed until [`start`](Self::start) succeeds, either
    /// explicitly or from [`tick`](Self::tick) once `startup_delay` elapsed.
    pub fn new(
        settings: NotificationSettings,
        viewpoint: impl ViewpointSource + 'static,
        surfaces: SlotBindings,
    ) -> Result<Self> {
        let settings = settings.sanitized();
        let styles = StyleTable::from_named(&settings.styles)?;
        Ok(Self {
            placement: settings.placement(),
            scheduler: NotificationScheduler::new(settings.checking_frequency),
            lifecycle: DisplayLifecycle::new(LifecycleTiming::from(&settings)),
            follow: FollowLoop::new(settings.follow_head_smooth, settings.look_at_head_smooth),
            diagnostics: DiagnosticsCollector::new(BufferCapacity::new(
                settings.diagnostics_capacity,
            )),
            styles,
            settings,
            viewpoint: Box::new(viewpoint),
            surfaces,
            slot: SlotState::default(),
            started: false,
            startup_elapsed: 0.0,
            waiting_logged: false,
            clock: 0.0,
            debug_counter: 0,
            _exclusive: None,
        })
    }

    /// Like [`new`](Self::new), but fails with [`Error::AlreadyConstructed`]
    /// while another exclusive manager is alive in this process.
    pub fn new_exclusive(
        settings: NotificationSettings,
        viewpoint: impl ViewpointSource + 'static,
        surfaces: SlotBindings,
    ) -> Result<Self> {
        let claim = ExclusiveClaim::acquire()?;
        let mut manager = Self::new(settings, viewpoint, surfaces)?;
        manager._exclusive = Some(claim);
        Ok(manager)
    }

    /// Resolves the viewpoint and begins processing the queue.
    ///
    /// Collapses the slot, enqueues the welcome message if enabled and starts
    /// the loops for anything sent before startup. Calling it again after a
    /// successful start does nothing.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        if self.viewpoint.pose().is_none() {
            return Err(Error::NoViewpoint);
        }
        self.started = true;
        log::info!("[notifications] started after {:.2}s", self.clock);

        self.slot.scale = Vec3::ZERO;
        self.surfaces.slot.set_scale(self.slot.scale);

        if self.settings.show_welcome_message_at_start {
            self.send_message(WELCOME_MESSAGE);
        }
        if !self.scheduler.is_empty() {
            self.ensure_loops();
        }
        Ok(())
    }

    /// Sends an info notification.
    pub fn send_message(&mut self, message: &str) {
        self.send_message_with_severity(message, Severity::Info);
    }

    pub fn send_message_with_severity(&mut self, message: &str, severity: Severity) {
        self.send_notification(Notification::new(message, severity));
    }

    /// Sends a two-line notification with a de-emphasized second line.
    pub fn send_message_with_sub(&mut self, message: &str, sub_message: &str, severity: Severity) {
        self.send_notification(Notification::with_sub_message(
            message,
            sub_message,
            severity,
        ));
    }

    /// Enqueues `notification` and starts the loops if they are not running.
    pub fn send_notification(&mut self, notification: Notification) {
        if self.settings.print_debug_messages {
            log::info!("[notifications] {}", notification.message());
        }
        let severity = notification.severity();
        self.scheduler.enqueue(notification);
        self.record(DiagnosticEventKind::Enqueued {
            severity,
            queue_len: self.scheduler.len(),
        });
        if self.started {
            self.ensure_loops();
        }
    }

    /// Sends `"Message #N"`, numbering from 1 for the lifetime of this manager.
    pub fn send_debug_message(&mut self) {
        self.debug_counter += 1;
        let message = format!("{DEBUG_MESSAGE_PREFIX}{}", self.debug_counter);
        self.send_notification(Notification::info(message));
    }

    /// Advances the manager by `dt` seconds. Negative or non-finite values
    /// count as zero.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += dt;

        if !self.started && !self.try_deferred_start(dt) {
            return;
        }

        match self.scheduler.poll(dt, self.lifecycle.is_idle()) {
            PollOutcome::Dequeued(notification) => self.show(notification),
            PollOutcome::Finished => {
                log::debug!("[notifications] queue drained");
                self.record(DiagnosticEventKind::PollingFinished);
            }
            PollOutcome::Inactive | PollOutcome::Waiting | PollOutcome::Busy => {}
        }

        if let Some(event) = self.lifecycle.tick(dt, &mut self.slot, &mut self.surfaces) {
            let kind = match event {
                LifecycleEvent::HoldStarted => DiagnosticEventKind::HoldStarted,
                LifecycleEvent::HideStarted => DiagnosticEventKind::HideStarted,
                LifecycleEvent::Hidden => DiagnosticEventKind::Hidden,
            };
            self.record(kind);
        }

        let active = self.scheduler.is_running() || self.lifecycle.is_message_showing();
        let pose = self.viewpoint.pose();
        match self.follow.tick(
            dt,
            active,
            pose.as_ref(),
            &self.placement,
            &mut self.slot.transform,
        ) {
            FollowStep::Moved => self.surfaces.slot.set_transform(&self.slot.transform),
            FollowStep::Stopped => self.record(DiagnosticEventKind::FollowStopped),
            FollowStep::NoViewpoint => {
                log::trace!("[notifications] follow skipped: no viewpoint");
            }
            FollowStep::Inactive => {}
        }
    }

    fn try_deferred_start(&mut self, dt: f32) -> bool {
        self.startup_elapsed += dt;
        if self.startup_elapsed < self.settings.startup_delay {
            return false;
        }
        match self.start() {
            Ok(()) => true,
            Err(err) => {
                if !self.waiting_logged {
                    log::warn!("[notifications] startup deferred: {err}");
                    self.waiting_logged = true;
                }
                false
            }
        }
    }

    fn ensure_loops(&mut self) {
        if self.scheduler.start() {
            log::debug!("[notifications] polling loop started");
            self.record(DiagnosticEventKind::PollingStarted);
            if self.settings.follow_head && self.follow.start() {
                self.record(DiagnosticEventKind::FollowStarted);
            }
        }
    }

    fn show(&mut self, notification: Notification) {
        let Some(pose) = self.viewpoint.pose() else {
            let err = Error::NoViewpoint;
            log::error!(
                "[notifications] dropping '{}': {err}",
                notification.message()
            );
            self.record(DiagnosticEventKind::ShowFailed {
                message: notification.message().to_string(),
                reason: err.to_string(),
            });
            return;
        };

        let style = *self.styles.resolve(notification.severity());
        let transform = target_transform(&pose, &self.placement);
        let kind = DiagnosticEventKind::Shown {
            severity: notification.severity(),
            message: notification.message().to_string(),
        };
        log::debug!(
            "[notifications] showing {} '{}'",
            notification.severity(),
            notification.message()
        );
        self.lifecycle.show(
            notification,
            &style,
            transform,
            &mut self.slot,
            &mut self.surfaces,
        );
        self.record(kind);
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        self.diagnostics.record(kind, self.clock);
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True while the polling loop runs.
    #[must_use]
    pub fn is_executor_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// True from the start of a show until its hide completes.
    #[must_use]
    pub fn is_message_showing(&self) -> bool {
        self.lifecycle.is_message_showing()
    }

    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow.is_running()
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.scheduler.len()
    }

    #[must_use]
    pub fn active_notification(&self) -> Option<&Notification> {
        self.lifecycle.active()
    }

    #[must_use]
    pub fn slot_scale(&self) -> Vec3 {
        self.slot.scale
    }

    #[must_use]
    pub fn is_slot_visible(&self) -> bool {
        self.slot.visible
    }

    #[must_use]
    pub fn slot_transform(&self) -> SlotTransform {
        self.slot.transform
    }

    /// Seconds ticked since construction.
    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    #[must_use]
    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Recorded lifecycle events, oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.diagnostics.events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, Pose};
    use crate::notifications::host::{
        FixedViewpoint, LabelSurface, NoLayoutRefresh, SharedViewpoint, SlotSurface,
    };
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Writes {
        texts: Vec<String>,
        scales: usize,
        transforms: usize,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Writes>>);

    impl SlotSurface for Recorder {
        fn set_visible(&mut self, _: bool) {}
        fn set_scale(&mut self, _: Vec3) {
            self.0.borrow_mut().scales += 1;
        }
        fn set_transform(&mut self, _: &SlotTransform) {
            self.0.borrow_mut().transforms += 1;
        }
    }

    impl LabelSurface for Recorder {
        fn set_text(&mut self, text: &str) {
            self.0.borrow_mut().texts.push(text.to_string());
        }
        fn set_message_color(&mut self, _: Color) {}
        fn set_background_color(&mut self, _: Color) {}
    }

    fn quiet_settings() -> NotificationSettings {
        NotificationSettings {
            show_welcome_message_at_start: false,
            ..NotificationSettings::default()
        }
    }

    fn manager_with(
        settings: NotificationSettings,
        viewpoint: impl ViewpointSource + 'static,
    ) -> (NotificationManager, Recorder) {
        let recorder = Recorder::default();
        let bindings = SlotBindings::new(recorder.clone(), recorder.clone(), NoLayoutRefresh);
        let manager = NotificationManager::new(settings, viewpoint, bindings)
            .expect("default styles are complete");
        (manager, recorder)
    }

    fn kinds(manager: &NotificationManager) -> Vec<DiagnosticEventKind> {
        manager.events().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn enqueue_before_start_only_appends() {
        let (mut manager, _) = manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        manager.send_message("early");
        assert_eq!(manager.queued_count(), 1);
        assert!(!manager.is_executor_running());

        manager.start().expect("viewpoint available");
        assert!(manager.is_executor_running());
        assert!(manager.is_following());
    }

    #[test]
    fn start_without_viewpoint_fails() {
        let (mut manager, _) = manager_with(quiet_settings(), SharedViewpoint::default());
        assert_eq!(manager.start(), Err(Error::NoViewpoint));
        assert!(!manager.is_started());
    }

    #[test]
    fn tick_retries_startup_until_viewpoint_appears() {
        let viewpoint = SharedViewpoint::default();
        let (mut manager, _) = manager_with(
            NotificationSettings {
                startup_delay: 0.5,
                ..NotificationSettings::default()
            },
            viewpoint.clone(),
        );

        manager.tick(0.3);
        assert!(!manager.is_started());
        manager.tick(0.3);
        assert!(!manager.is_started(), "no viewpoint yet");

        viewpoint.set(Pose::default());
        manager.tick(0.016);
        assert!(manager.is_started());
        assert_eq!(
            manager.active_notification().map(Notification::message),
            Some(WELCOME_MESSAGE)
        );
    }

    #[test]
    fn welcome_message_is_optional() {
        let (mut manager, _) = manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        manager.start().expect("viewpoint available");
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.is_executor_running());
    }

    #[test]
    fn debug_messages_are_numbered_per_manager() {
        let (mut manager, recorder) =
            manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        manager.start().expect("viewpoint available");
        manager.send_debug_message();
        manager.send_debug_message();
        manager.send_debug_message();
        for _ in 0..600 {
            manager.tick(0.05);
        }
        assert_eq!(
            recorder.0.borrow().texts,
            vec!["Message #1", "Message #2", "Message #3"]
        );

        let (mut other, _) = manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        other.send_debug_message();
        assert_eq!(other.queued_count(), 1);
        assert_eq!(other.debug_counter, 1);
    }

    #[test]
    fn loops_start_once_per_run() {
        let (mut manager, _) = manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        manager.start().expect("viewpoint available");
        manager.send_message("a");
        manager.send_message("b");
        manager.send_message("c");

        let summary = manager.diagnostics().summary();
        assert_eq!(summary.count("polling_started"), 1);
        assert_eq!(summary.count("follow_started"), 1);
    }

    #[test]
    fn follow_is_skipped_when_disabled() {
        let (mut manager, recorder) = manager_with(
            NotificationSettings {
                follow_head: false,
                ..quiet_settings()
            },
            FixedViewpoint(Pose::default()),
        );
        manager.start().expect("viewpoint available");
        manager.send_message("static");
        for _ in 0..10 {
            manager.tick(0.016);
        }
        assert!(!manager.is_following());
        // Only the placement done by show itself.
        assert_eq!(recorder.0.borrow().transforms, 1);
    }

    #[test]
    fn lost_viewpoint_skips_the_notification() {
        let viewpoint = SharedViewpoint::new(Some(Pose::default()));
        let (mut manager, recorder) = manager_with(quiet_settings(), viewpoint.clone());
        manager.start().expect("viewpoint available");

        viewpoint.clear();
        manager.send_message("lost");
        manager.send_message("found");
        manager.tick(0.0);
        assert_eq!(manager.phase(), LifecyclePhase::Idle);
        assert!(manager.is_executor_running());

        viewpoint.set(Pose::default());
        manager.tick(0.1);
        assert_eq!(
            manager.active_notification().map(Notification::message),
            Some("found")
        );
        assert_eq!(recorder.0.borrow().texts, vec!["found"]);
        assert!(kinds(&manager).iter().any(|k| matches!(
            k,
            DiagnosticEventKind::ShowFailed { message, .. } if message == "lost"
        )));
    }

    #[test]
    fn negative_and_nan_dt_do_not_advance() {
        let (mut manager, _) = manager_with(quiet_settings(), FixedViewpoint(Pose::default()));
        manager.start().expect("viewpoint available");
        manager.tick(-1.0);
        manager.tick(f32::NAN);
        assert_abs_diff_eq!(manager.clock(), 0.0);
    }

    #[test]
    fn missing_style_fails_construction() {
        let mut settings = quiet_settings();
        settings.styles.remove("error");
        let result = NotificationManager::new(
            settings,
            FixedViewpoint(Pose::default()),
            SlotBindings::new(Recorder::default(), Recorder::default(), NoLayoutRefresh),
        );
        assert!(matches!(result, Err(Error::MissingStyle(Severity::Error))));
    }

    #[test]
    fn exclusive_factory_rejects_second_instance_until_drop() {
        let bindings =
            || SlotBindings::new(Recorder::default(), Recorder::default(), NoLayoutRefresh);
        let first = NotificationManager::new_exclusive(
            quiet_settings(),
            FixedViewpoint(Pose::default()),
            bindings(),
        )
        .expect("first exclusive instance");

        let second = NotificationManager::new_exclusive(
            quiet_settings(),
            FixedViewpoint(Pose::default()),
            bindings(),
        );
        assert!(matches!(second, Err(Error::AlreadyConstructed)));

        // Unrestricted managers are unaffected.
        assert!(NotificationManager::new(
            quiet_settings(),
            FixedViewpoint(Pose::default()),
            bindings()
        )
        .is_ok());

        drop(first);
        assert!(NotificationManager::new_exclusive(
            quiet_settings(),
            FixedViewpoint(Pose::default()),
            bindings()
        )
        .is_ok());
    }
}
