//! Small reusable pieces shared by the views.

use eframe::egui;

use crate::{
    controller::{
        events::Intent,
        state::{AppState, Dropdown, FormField, Modal, NoticeKind},
    },
    i18n::{tr, Language},
    ui::theme,
};

pub fn brand(ui: &mut egui::Ui, size: f32) {
    ui.label(
        egui::RichText::new("BIG HOUSE")
            .size(size)
            .strong()
            .color(theme::NAVY),
    );
}

/// Single-line input bound to a form buffer; edits come back as intents.
pub fn form_field(
    ui: &mut egui::Ui,
    state: &AppState,
    field: FormField,
    hint: &str,
    intents: &mut Vec<Intent>,
) -> egui::Response {
    let mut buffer = state.form_value(field).to_string();
    let edit = egui::TextEdit::singleline(&mut buffer)
        .id_salt(field_id(field))
        .hint_text(hint)
        .password(field == FormField::Password)
        .desired_width(f32::INFINITY);
    let response = ui.add_sized([ui.available_width(), 32.0], edit);
    if response.changed() {
        intents.push(Intent::Edit(field, buffer));
    }
    response
}

pub fn labeled_field(
    ui: &mut egui::Ui,
    state: &AppState,
    label: &str,
    field: FormField,
    hint: &str,
    intents: &mut Vec<Intent>,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    form_field(ui, state, field, hint, intents)
}

fn field_id(field: FormField) -> &'static str {
    match field {
        FormField::Email => "field_email",
        FormField::Password => "field_password",
        FormField::Name => "field_name",
        FormField::SearchQuery => "field_search",
        FormField::DeepQuery => "field_deep_query",
        FormField::BuyPrice => "field_buy_price",
        FormField::Surface => "field_surface",
        FormField::City => "field_city",
    }
}

pub fn primary_button(ui: &mut egui::Ui, enabled: bool, text: &str) -> bool {
    let button = egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
        .fill(theme::ACCENT)
        .min_size(egui::vec2(ui.available_width().min(320.0), 38.0));
    ui.add_enabled(enabled, button).clicked()
}

pub fn language_picker(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    let current = state.language;
    let open = state.dropdown == Some(Dropdown::Language);
    ui.vertical(|ui| {
        if ui
            .button(format!("🌐 {} {}", current.flag(), if open { "▲" } else { "▼" }))
            .clicked()
        {
            intents.push(Intent::ToggleDropdown(Dropdown::Language));
        }
        if open {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for lang in Language::ALL {
                    let text = format!("{} {}", lang.flag(), lang.label());
                    if ui.selectable_label(lang == current, text).clicked() {
                        intents.push(Intent::SetLanguage(lang));
                    }
                }
            });
        }
    });
}

pub fn notice_banner(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    let Some(notice) = state.notice.as_ref() else {
        return;
    };
    let (fill, text_color) = match notice.kind {
        NoticeKind::Success => (egui::Color32::from_rgb(220, 252, 231), theme::POSITIVE),
        NoticeKind::Info => (egui::Color32::from_rgb(219, 234, 254), theme::NAVY),
        NoticeKind::Error => (egui::Color32::from_rgb(254, 226, 226), theme::DANGER),
    };
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(notice.message.render(state.language)).color(text_color),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        intents.push(Intent::DismissNotice);
                    }
                });
            });
        });
}

/// Upgrade / daily-limit prompt. Both offer a way out and a shortcut to pricing.
pub fn gate_modal(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    let Some(modal) = state.modal else {
        return;
    };
    let lang = state.language;
    let (icon, title, body, dismiss, cta) = match modal {
        Modal::Upgrade => ("🔒", "upgrade_title", "upgrade_msg", "cancel", "upgrade_cta"),
        Modal::Limit => ("⏱", "limit_title", "limit_msg", "close", "upg_plus"),
    };
    egui::Window::new(tr(lang, title))
        .id(egui::Id::new("gate_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(40.0));
                ui.label(tr(lang, body));
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(tr(lang, dismiss)).clicked() {
                    intents.push(Intent::DismissModal);
                }
                if primary_button(ui, true, tr(lang, cta)) {
                    intents.push(Intent::ModalToPricing);
                }
            });
        });
}

pub fn status_line(ui: &mut egui::Ui, state: &AppState) {
    if state.status.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.small(egui::RichText::new(&state.status).weak());
    });
}
