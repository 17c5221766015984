//! Notification toasts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use generation::{NotificationLog, NotificationPriority};

/// How many recent notifications stay on screen.
const VISIBLE_NOTIFICATIONS: usize = 5;

pub fn notifications_ui(mut contexts: EguiContexts, log: Res<NotificationLog>) {
    let entries = log.entries();
    if entries.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(contexts.ctx_mut(), |ui| {
            let start = entries.len().saturating_sub(VISIBLE_NOTIFICATIONS);
            for entry in &entries[start..] {
                let color = match entry.priority {
                    NotificationPriority::Warning => egui::Color32::from_rgb(230, 160, 60),
                    NotificationPriority::Info => egui::Color32::from_rgb(200, 200, 205),
                    NotificationPriority::Positive => egui::Color32::from_rgb(120, 200, 120),
                };
                ui.colored_label(color, format!("[{}] {}", entry.priority.label(), entry.text));
            }
        });
}
