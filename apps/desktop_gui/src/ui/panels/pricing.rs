use eframe::egui;
use shared::domain::{BillingPeriod, Plan};

use crate::{
    controller::{
        events::Intent,
        state::{AppState, View},
    },
    i18n::{tr, Language},
    ui::{theme, widgets},
};

struct PlanCard {
    plan: Plan,
    name_key: &'static str,
    desc_key: &'static str,
    included: &'static [&'static str],
    excluded: &'static [&'static str],
    featured: bool,
}

const CARDS: [PlanCard; 3] = [
    PlanCard {
        plan: Plan::Free,
        name_key: "free_plan",
        desc_key: "free_desc",
        included: &["ff1", "ff2", "ff3"],
        excluded: &["fnd", "fnc"],
        featured: false,
    },
    PlanCard {
        plan: Plan::Pro,
        name_key: "pro_plan",
        desc_key: "pro_desc",
        included: &["fp1", "fp2", "fp3", "fp4", "fp5"],
        excluded: &[],
        featured: true,
    },
    PlanCard {
        plan: Plan::Plus,
        name_key: "plus_plan",
        desc_key: "plus_desc",
        included: &["fpl1", "fpl2", "fpl3", "fpl4", "fpl5"],
        excluded: &[],
        featured: false,
    },
];

fn period_suffix(lang: Language, billing: BillingPeriod) -> &'static str {
    match billing {
        BillingPeriod::Monthly => tr(lang, "per_month"),
        BillingPeriod::Yearly => tr(lang, "per_year"),
    }
}

fn plan_card(ui: &mut egui::Ui, state: &AppState, card: &PlanCard, intents: &mut Vec<Intent>) {
    let lang = state.language;
    let stroke = if card.featured {
        egui::Stroke::new(2.0, theme::ACCENT)
    } else {
        egui::Stroke::new(1.0, theme::CARD_STROKE)
    };
    theme::card_frame().stroke(stroke).show(ui, |ui| {
        ui.set_width(220.0);
        if card.featured {
            ui.label(egui::RichText::new(tr(lang, "popular")).color(theme::ACCENT).strong());
        }
        ui.label(egui::RichText::new(tr(lang, card.name_key)).size(20.0).strong());
        ui.label(
            egui::RichText::new(format!("€{}", card.plan.display_price(state.billing)))
                .size(30.0)
                .strong()
                .color(theme::NAVY),
        );
        ui.label(egui::RichText::new(period_suffix(lang, state.billing)).color(theme::MUTED));
        ui.label(tr(lang, card.desc_key));
        ui.separator();
        for key in card.included {
            ui.label(format!("✓ {}", tr(lang, key)));
        }
        for key in card.excluded {
            ui.label(egui::RichText::new(format!("✗ {}", tr(lang, key))).weak());
        }
        ui.add_space(6.0);
        let cta = match card.plan {
            Plan::Free => tr(lang, "start_free").to_string(),
            plan => format!("{} {}", tr(lang, "continue_with"), tr(lang, plan_name_key(plan))),
        };
        let enabled = !state.upgrade_pending;
        let clicked = if card.featured {
            widgets::primary_button(ui, enabled, &cta)
        } else {
            ui.add_enabled(enabled, egui::Button::new(cta)).clicked()
        };
        if clicked {
            intents.push(Intent::ChoosePlan(card.plan));
        }
    });
}

fn plan_name_key(plan: Plan) -> &'static str {
    match plan {
        Plan::Free => "free_plan",
        Plan::Pro => "pro_plan",
        Plan::Plus => "plus_plan",
    }
}

/// Card fields are cosmetic; nothing typed here leaves the window.
fn card_dialog(ctx: &egui::Context, state: &AppState, plan: Plan, intents: &mut Vec<Intent>) {
    let lang = state.language;
    let mut open = true;
    egui::Window::new(format!("💳 {}", tr(lang, "add_card")))
        .id(egui::Id::new("card_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "{} {} · €{}{}",
                tr(lang, "card_sub"),
                tr(lang, plan_name_key(plan)),
                plan.display_price(state.billing),
                period_suffix(lang, state.billing)
            ));
            let mut placeholder = String::new();
            ui.label(tr(lang, "card_num"));
            ui.add(egui::TextEdit::singleline(&mut placeholder).hint_text(tr(lang, "card_num_ph")));
            ui.horizontal(|ui| {
                let mut expiry = String::new();
                let mut cvv = String::new();
                ui.vertical(|ui| {
                    ui.label(tr(lang, "expiry"));
                    ui.add(
                        egui::TextEdit::singleline(&mut expiry)
                            .hint_text(tr(lang, "expiry_ph"))
                            .desired_width(100.0),
                    );
                });
                ui.vertical(|ui| {
                    ui.label(tr(lang, "cvv"));
                    ui.add(
                        egui::TextEdit::singleline(&mut cvv)
                            .hint_text("123")
                            .desired_width(60.0),
                    );
                });
            });
            ui.add_space(6.0);
            if widgets::primary_button(ui, !state.upgrade_pending, tr(lang, "activate")) {
                intents.push(Intent::ActivateCard);
            }
            if ui
                .add_enabled(!state.upgrade_pending, egui::Button::new(tr(lang, "skip_card")))
                .clicked()
            {
                intents.push(Intent::SkipCard);
            }
        });
    if !open {
        intents.push(Intent::CloseCard);
    }
}

pub fn show(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    let lang = state.language;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                widgets::brand(ui, 14.0);
                ui.heading(egui::RichText::new(tr(lang, "choose_plan")).size(30.0).strong());
                ui.label(egui::RichText::new(tr(lang, "plan_sub")).color(theme::MUTED));
                widgets::notice_banner(ui, state, intents);

                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - 320.0) / 2.0).max(0.0));
                    let monthly = state.billing == BillingPeriod::Monthly;
                    if ui.selectable_label(monthly, tr(lang, "monthly")).clicked() && !monthly {
                        intents.push(Intent::ToggleBilling);
                    }
                    if ui.selectable_label(!monthly, tr(lang, "yearly")).clicked() && monthly {
                        intents.push(Intent::ToggleBilling);
                    }
                    if !monthly {
                        ui.label(
                            egui::RichText::new(tr(lang, "save_yearly"))
                                .color(theme::POSITIVE)
                                .strong(),
                        );
                    }
                });
                ui.add_space(12.0);

                ui.horizontal_top(|ui| {
                    ui.add_space(((ui.available_width() - 3.0 * 270.0) / 2.0).max(0.0));
                    for card in &CARDS {
                        plan_card(ui, state, card, intents);
                    }
                });

                ui.add_space(12.0);
                if state.has_token && ui.link(tr(lang, "dashboard")).clicked() {
                    intents.push(Intent::Navigate(View::Dashboard));
                }
            });
        });
    });

    if let Some(plan) = state.card_plan {
        card_dialog(ctx, state, plan, intents);
    }
}
