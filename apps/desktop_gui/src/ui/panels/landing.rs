use eframe::egui;

use crate::{
    controller::{
        events::Intent,
        state::{AppState, AuthMode, Dropdown, View},
    },
    i18n::tr,
    ui::{theme, widgets},
};

fn account_menu(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    let lang = state.language;
    if state.has_token {
        let name = state
            .user
            .as_ref()
            .map(|user| user.name.as_str())
            .unwrap_or_else(|| tr(lang, "dashboard"));
        if ui.button(format!("👤 {name}")).clicked() {
            intents.push(Intent::Navigate(View::Dashboard));
        }
        return;
    }

    let open = state.dropdown == Some(Dropdown::User);
    ui.vertical(|ui| {
        let label = format!("👤 {} / {}", tr(lang, "login"), tr(lang, "register"));
        if ui.button(label).clicked() {
            intents.push(Intent::ToggleDropdown(Dropdown::User));
        }
        if open {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                if ui.selectable_label(false, format!("🔑 {}", tr(lang, "login"))).clicked() {
                    intents.push(Intent::OpenAuth(AuthMode::Login));
                }
                if ui
                    .selectable_label(false, format!("✨ {}", tr(lang, "register")))
                    .clicked()
                {
                    intents.push(Intent::OpenAuth(AuthMode::Register));
                }
            });
        }
    });
}

pub fn show(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    let lang = state.language;

    egui::TopBottomPanel::top("landing_nav")
        .frame(
            egui::Frame::NONE
                .fill(theme::CARD)
                .inner_margin(egui::Margin::symmetric(32, 14)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::brand(ui, 22.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    account_menu(ui, state, intents);
                    widgets::language_picker(ui, state, intents);
                });
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_size();
        ui.add_space((avail.y * 0.15).clamp(24.0, 120.0));
        ui.vertical_centered(|ui| {
            ui.set_max_width(avail.x.min(720.0));
            widgets::notice_banner(ui, state, intents);
            ui.label(
                egui::RichText::new(tr(lang, "hero_badge"))
                    .color(theme::ACCENT)
                    .strong(),
            );
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - 360.0) / 2.0).max(0.0));
                ui.label(egui::RichText::new("BIG").size(64.0).strong().color(theme::NAVY));
                ui.label(egui::RichText::new("HOUSE").size(64.0).strong().color(theme::ACCENT));
            });
            ui.label(egui::RichText::new(tr(lang, "tagline")).size(18.0).color(theme::MUTED));
            ui.add_space(18.0);

            if state.has_token {
                let label = format!("{} →", tr(lang, "dashboard"));
                if widgets::primary_button(ui, true, &label) {
                    intents.push(Intent::Navigate(View::Dashboard));
                }
            } else {
                if widgets::primary_button(ui, true, &format!("✨ {}", tr(lang, "register"))) {
                    intents.push(Intent::OpenAuth(AuthMode::Register));
                }
                if ui.button(tr(lang, "login")).clicked() {
                    intents.push(Intent::OpenAuth(AuthMode::Login));
                }
            }
        });
    });
}
