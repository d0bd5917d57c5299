// SPDX-License-Identifier: MPL-2.0
//! Recording host surfaces shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use vr_notifications::config::NotificationSettings;
use vr_notifications::domain::{Color, Pose, Vec3};
use vr_notifications::notifications::{
    LabelSurface, LayoutRefresh, NotificationManager, SharedViewpoint, SlotBindings, SlotSurface,
    SlotTransform,
};

/// Everything the manager wrote to the host, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceWrite {
    Visible(bool),
    Scale(Vec3),
    Transform(SlotTransform),
    Text(String),
    MessageColor(Color),
    BackgroundColor(Color),
    LayoutRefresh,
}

#[derive(Clone, Default)]
pub struct RecordingHost(Rc<RefCell<Vec<SurfaceWrite>>>);

impl RecordingHost {
    pub fn writes(&self) -> Vec<SurfaceWrite> {
        self.0.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|w| match w {
                SurfaceWrite::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_color_pair(&self) -> Option<(Color, Color)> {
        let writes = self.0.borrow();
        let background = writes.iter().rev().find_map(|w| match w {
            SurfaceWrite::BackgroundColor(c) => Some(*c),
            _ => None,
        })?;
        let message = writes.iter().rev().find_map(|w| match w {
            SurfaceWrite::MessageColor(c) => Some(*c),
            _ => None,
        })?;
        Some((background, message))
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn bindings(&self) -> SlotBindings {
        SlotBindings::new(self.clone(), self.clone(), self.clone())
    }

    fn push(&self, write: SurfaceWrite) {
        self.0.borrow_mut().push(write);
    }
}

impl SlotSurface for RecordingHost {
    fn set_visible(&mut self, visible: bool) {
        self.push(SurfaceWrite::Visible(visible));
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.push(SurfaceWrite::Scale(scale));
    }

    fn set_transform(&mut self, transform: &SlotTransform) {
        self.push(SurfaceWrite::Transform(*transform));
    }
}

impl LabelSurface for RecordingHost {
    fn set_text(&mut self, text: &str) {
        self.push(SurfaceWrite::Text(text.to_string()));
    }

    fn set_message_color(&mut self, color: Color) {
        self.push(SurfaceWrite::MessageColor(color));
    }

    fn set_background_color(&mut self, color: Color) {
        self.push(SurfaceWrite::BackgroundColor(color));
    }
}

impl LayoutRefresh for RecordingHost {
    fn refresh_layout(&mut self) {
        self.push(SurfaceWrite::LayoutRefresh);
    }
}

/// Default settings without the welcome message.
pub fn quiet_settings() -> NotificationSettings {
    NotificationSettings {
        show_welcome_message_at_start: false,
        ..NotificationSettings::default()
    }
}

/// A started manager looking down +Z from head height.
pub fn started_manager(
    settings: NotificationSettings,
) -> (NotificationManager, RecordingHost, SharedViewpoint) {
    let host = RecordingHost::default();
    let viewpoint = SharedViewpoint::new(Some(Pose::looking_forward(Vec3::new(0.0, 1.6, 0.0))));
    let mut manager = NotificationManager::new(settings, viewpoint.clone(), host.bindings())
        .expect("settings are valid");
    manager.start().expect("viewpoint is available");
    (manager, host, viewpoint)
}

/// Ticks `manager` for `seconds` at a fixed step.
pub fn run_for(manager: &mut NotificationManager, seconds: f32, dt: f32) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        manager.tick(dt);
    }
}
