use eframe::egui;

use crate::{
    controller::{
        events::Intent,
        state::{AppState, AuthMode, FormField, View},
    },
    i18n::tr,
    ui::{theme, widgets},
};

pub fn show(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    let lang = state.language;
    let mode = state.auth_mode;

    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_size();
        let card_width = avail.x.clamp(380.0, 460.0);
        ui.add_space((avail.y * 0.08).clamp(12.0, 70.0));

        ui.vertical_centered(|ui| {
            ui.set_width(card_width);
            theme::card_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    widgets::brand(ui, 26.0);
                    ui.label(egui::RichText::new(tr(lang, "tagline")).color(theme::MUTED));
                });
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    for (tab_mode, key) in [(AuthMode::Login, "login"), (AuthMode::Register, "register")] {
                        if ui.selectable_label(mode == tab_mode, tr(lang, key)).clicked() {
                            intents.push(Intent::SetAuthMode(tab_mode));
                        }
                    }
                });

                if let Some(error) = state.auth_error.as_ref() {
                    ui.colored_label(theme::DANGER, error.render(lang));
                }

                if mode == AuthMode::Register {
                    widgets::labeled_field(
                        ui,
                        state,
                        tr(lang, "name"),
                        FormField::Name,
                        tr(lang, "name_ph"),
                        intents,
                    );
                }
                widgets::labeled_field(
                    ui,
                    state,
                    tr(lang, "email"),
                    FormField::Email,
                    tr(lang, "email_ph"),
                    intents,
                );
                let password = widgets::labeled_field(
                    ui,
                    state,
                    tr(lang, "password"),
                    FormField::Password,
                    tr(lang, "pass_ph"),
                    intents,
                );
                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if password.lost_focus() && enter_pressed {
                    intents.push(Intent::SubmitAuth);
                }

                ui.add_space(6.0);
                let submit_label = if state.auth_loading {
                    tr(lang, "loading")
                } else if mode == AuthMode::Login {
                    tr(lang, "login")
                } else {
                    tr(lang, "register")
                };
                if widgets::primary_button(ui, state.can_submit_auth(), submit_label) {
                    intents.push(Intent::SubmitAuth);
                }

                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(tr(lang, "or")).color(theme::MUTED));
                });
                if ui
                    .add_sized(
                        [ui.available_width(), 34.0],
                        egui::Button::new(format!("G  {}", tr(lang, "continue_google"))),
                    )
                    .clicked()
                {
                    intents.push(Intent::StartGoogleSignIn);
                }

                ui.horizontal(|ui| {
                    let (prompt, switch_key) = match mode {
                        AuthMode::Login => ("no_account", "register"),
                        AuthMode::Register => ("have_account", "login"),
                    };
                    ui.label(tr(lang, prompt));
                    if ui.link(tr(lang, switch_key)).clicked() {
                        intents.push(Intent::ToggleAuthMode);
                    }
                });
            });

            ui.add_space(8.0);
            widgets::notice_banner(ui, state, intents);
            if ui.link("← BIG HOUSE").clicked() {
                intents.push(Intent::Navigate(View::Landing));
            }
        });
    });
}
