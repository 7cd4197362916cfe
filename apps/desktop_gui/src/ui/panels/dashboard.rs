use client_core::access::{remaining_quota, Quota};
use eframe::egui;
use shared::{
    domain::{Feature, Plan, RenovationLevel, UserProfile, DAILY_QUOTA},
    protocol::CalculationResult,
};

use crate::{
    controller::{
        events::Intent,
        state::{AppState, Dropdown, FormField, View},
    },
    i18n::{format_long_date, tr, Language},
    ui::{theme, widgets},
};

const DEEP_SUGGESTIONS: [(&str, &str); 3] = [
    (
        "🇫🇷 Parigi 110mq ROI 22%",
        "Cercami una casa da ristrutturare a Parigi centro, 110mq, ROI 22%",
    ),
    (
        "🇮🇹 Milano NoLo Reddito",
        "Investimento Milano NoLo bilocale da mettere a reddito",
    ),
    (
        "🇮🇹 Roma Affitti Brevi",
        "Analisi mercato affitti brevi Roma Centro Storico",
    ),
];

fn tab_meta(feature: Feature) -> (&'static str, &'static str, &'static str) {
    match feature {
        Feature::Search => ("🔍", "ricerca", "all_plans"),
        Feature::DeepResearch => ("🔬", "deepresearch", "pro_feat"),
        Feature::Calculator => ("🧮", "calcola", "pro_feat"),
    }
}

fn renovation_key(level: RenovationLevel) -> &'static str {
    match level {
        RenovationLevel::Low => "low",
        RenovationLevel::Medium => "med",
        RenovationLevel::High => "high",
    }
}

fn plan_badge(plan: Plan) -> &'static str {
    match plan {
        Plan::Free => "🆓 Free",
        Plan::Pro => "⚡ Pro",
        Plan::Plus => "👑 Plus",
    }
}

/// "desc remaining/2" on the metered tier, "desc unlimited" otherwise.
fn usage_line(lang: Language, user: &UserProfile, feature: Feature) -> String {
    let (desc, usage, unlimited) = match feature {
        Feature::Calculator => ("calc_sub", "calc_usage", "calc_unlimited"),
        _ => ("deep_title", "deep_usage", "deep_unlimited"),
    };
    match remaining_quota(feature, user) {
        Quota::Remaining(left) => format!(
            "{} {} {left}/{DAILY_QUOTA}",
            tr(lang, desc),
            tr(lang, usage)
        ),
        _ => format!("{} {}", tr(lang, desc), tr(lang, unlimited)),
    }
}

fn sidebar(ui: &mut egui::Ui, state: &AppState, user: &UserProfile, intents: &mut Vec<Intent>) {
    let lang = state.language;
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("BIG").size(22.0).strong().color(theme::NAVY));
        ui.label(egui::RichText::new("HOUSE").size(22.0).strong().color(theme::ACCENT));
    });
    ui.add_space(16.0);

    for feature in Feature::ALL {
        let (icon, title, sub) = tab_meta(feature);
        let badge = match remaining_quota(feature, user) {
            Quota::Locked => " 🔒".to_string(),
            Quota::Remaining(left) => format!("  {left}/{DAILY_QUOTA}"),
            Quota::Unlimited => String::new(),
        };
        let text = format!("{icon}  {}{badge}\n{}", tr(lang, title), tr(lang, sub));
        let selected = state.tab == feature;
        if ui.selectable_label(selected, text).clicked() {
            intents.push(Intent::SelectTab(feature));
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(12.0);
        let upgrade_key = match user.plan {
            Plan::Free => Some("upg_to_pro"),
            Plan::Pro => Some("upg_to_plus"),
            Plan::Plus => None,
        };
        if let Some(key) = upgrade_key {
            if widgets::primary_button(ui, true, tr(lang, key)) {
                intents.push(Intent::Navigate(View::Pricing));
            }
        }
        ui.label(egui::RichText::new(plan_badge(user.plan)).size(18.0).strong());
        ui.label(egui::RichText::new(tr(lang, "active_plan")).color(theme::MUTED));
    });
}

fn top_bar(
    ui: &mut egui::Ui,
    state: &AppState,
    user: &UserProfile,
    intents: &mut Vec<Intent>,
) {
    let lang = state.language;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(format!("{}, {} 👋", tr(lang, "welcome"), user.name))
                    .size(20.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(format_long_date(&chrono::Local::now(), lang))
                    .color(theme::MUTED),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                let avatar = egui::Button::new(
                    egui::RichText::new(user.initial().to_string())
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(theme::NAVY)
                .corner_radius(18.0)
                .min_size(egui::vec2(36.0, 36.0));
                if ui.add(avatar).clicked() {
                    intents.push(Intent::ToggleDropdown(Dropdown::User));
                }
                if state.dropdown == Some(Dropdown::User) {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        if ui
                            .selectable_label(false, format!("🚪 {}", tr(lang, "logout")))
                            .clicked()
                        {
                            intents.push(Intent::Logout);
                        }
                    });
                }
            });
            widgets::language_picker(ui, state, intents);
        });
    });
}

fn search_tab(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    let lang = state.language;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(egui::RichText::new(tr(lang, "dash_title")).size(28.0).strong());
        ui.label(egui::RichText::new(tr(lang, "dash_sub")).color(theme::MUTED));
        ui.add_space(12.0);
        ui.set_max_width(640.0);
        let field = widgets::form_field(
            ui,
            state,
            FormField::SearchQuery,
            tr(lang, "search_ph"),
            intents,
        );
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let submitted = field.lost_focus() && enter_pressed;
        if widgets::primary_button(ui, true, &format!("🔍 {}", tr(lang, "analyze"))) || submitted {
            intents.push(Intent::SubmitSearch);
        }
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for key in ["sug1", "sug2", "sug3", "sug4"] {
                let text = tr(lang, key);
                if ui.button(text).clicked() {
                    intents.push(Intent::Edit(FormField::SearchQuery, text.to_string()));
                }
            }
        });
    });
}

fn deep_research_tab(
    ui: &mut egui::Ui,
    state: &AppState,
    user: &UserProfile,
    intents: &mut Vec<Intent>,
) {
    let lang = state.language;
    ui.set_max_width(720.0);
    ui.heading(format!("🔬 {}", tr(lang, "deepresearch")));
    ui.label(egui::RichText::new(usage_line(lang, user, Feature::DeepResearch)).color(theme::MUTED));

    let mut query = state.deep_query.clone();
    let edit = egui::TextEdit::multiline(&mut query)
        .id_salt("field_deep_query")
        .hint_text(tr(lang, "deep_ph"))
        .desired_rows(5)
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        intents.push(Intent::Edit(FormField::DeepQuery, query));
    }

    ui.horizontal_wrapped(|ui| {
        for (label, prompt) in DEEP_SUGGESTIONS {
            if ui.button(label).clicked() {
                intents.push(Intent::Edit(FormField::DeepQuery, prompt.to_string()));
            }
        }
    });

    let label = if state.deep_loading {
        tr(lang, "loading")
    } else {
        tr(lang, "start_deep")
    };
    if widgets::primary_button(ui, state.can_submit_deep_research(), label) {
        intents.push(Intent::SubmitDeepResearch);
    }

    if let Some(result) = state.deep_result.as_deref() {
        ui.add_space(8.0);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(result);
        });
    }
}

fn result_cell(ui: &mut egui::Ui, caption: &str, value: String, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(caption).color(theme::MUTED));
        ui.label(egui::RichText::new(value).size(26.0).strong().color(color));
    });
}

fn calculation_result(
    ui: &mut egui::Ui,
    state: &AppState,
    result: &CalculationResult,
    intents: &mut Vec<Intent>,
) {
    let lang = state.language;
    let field = |key: &str| result.display(key).unwrap_or_else(|| "-".to_string());
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("calculation_result")
            .num_columns(2)
            .spacing([40.0, 18.0])
            .show(ui, |ui| {
                result_cell(
                    ui,
                    tr(lang, "renovation_cost"),
                    format!("€ {}", field(CalculationResult::RENOVATION_COST)),
                    theme::NAVY,
                );
                result_cell(
                    ui,
                    tr(lang, "estimated_value"),
                    format!("€ {}", field(CalculationResult::ESTIMATED_VALUE)),
                    theme::NAVY,
                );
                ui.end_row();
                result_cell(
                    ui,
                    tr(lang, "estimated_roi"),
                    format!("{}%", field(CalculationResult::ROI)),
                    theme::POSITIVE,
                );
                result_cell(
                    ui,
                    tr(lang, "works_duration"),
                    format!(
                        "{} {}",
                        field(CalculationResult::DURATION_MONTHS),
                        tr(lang, "months")
                    ),
                    theme::NAVY,
                );
                ui.end_row();
            });
        ui.add_space(10.0);
        let label = if state.report_loading {
            tr(lang, "loading").to_string()
        } else {
            format!("📄 {}", tr(lang, "download_report"))
        };
        if ui
            .add_enabled(!state.report_loading, egui::Button::new(label))
            .clicked()
        {
            intents.push(Intent::DownloadReport);
        }
    });
}

fn calculator_tab(
    ui: &mut egui::Ui,
    state: &AppState,
    user: &UserProfile,
    intents: &mut Vec<Intent>,
) {
    let lang = state.language;
    ui.set_max_width(720.0);
    ui.heading(format!("🧮 {}", tr(lang, "calcola")));
    ui.label(egui::RichText::new(usage_line(lang, user, Feature::Calculator)).color(theme::MUTED));

    egui::Grid::new("calculator_form")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            ui.vertical(|ui| {
                widgets::labeled_field(
                    ui,
                    state,
                    tr(lang, "buy_price"),
                    FormField::BuyPrice,
                    tr(lang, "buy_ph"),
                    intents,
                );
            });
            ui.vertical(|ui| {
                widgets::labeled_field(
                    ui,
                    state,
                    tr(lang, "surface"),
                    FormField::Surface,
                    tr(lang, "surf_ph"),
                    intents,
                );
            });
            ui.end_row();
            ui.vertical(|ui| {
                widgets::labeled_field(
                    ui,
                    state,
                    tr(lang, "city"),
                    FormField::City,
                    tr(lang, "city_ph"),
                    intents,
                );
            });
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(tr(lang, "renov_lvl")).strong());
                let current = state.calculator.renovation_level;
                egui::ComboBox::from_id_salt("renovation_level")
                    .selected_text(tr(lang, renovation_key(current)))
                    .show_ui(ui, |ui| {
                        for level in RenovationLevel::ALL {
                            if ui
                                .selectable_label(level == current, tr(lang, renovation_key(level)))
                                .clicked()
                            {
                                intents.push(Intent::SetRenovationLevel(level));
                            }
                        }
                    });
            });
            ui.end_row();
        });

    let label = if state.calc_loading {
        tr(lang, "loading")
    } else {
        tr(lang, "calc_btn")
    };
    if widgets::primary_button(ui, state.can_submit_calculation(), label) {
        intents.push(Intent::SubmitCalculation);
    }

    if let Some(calculation) = state.calculation.as_ref() {
        ui.add_space(8.0);
        calculation_result(ui, state, &calculation.result, intents);
    }
}

pub fn show(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    let Some(user) = state.user.as_ref() else {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.spinner();
                ui.label(tr(state.language, "loading"));
            });
        });
        return;
    };

    egui::SidePanel::left("dashboard_sidebar")
        .exact_width(240.0)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(theme::CARD)
                .inner_margin(egui::Margin::symmetric(14, 10)),
        )
        .show(ctx, |ui| sidebar(ui, state, user, intents));

    egui::TopBottomPanel::top("dashboard_top")
        .frame(
            egui::Frame::NONE
                .fill(theme::CARD)
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| top_bar(ui, state, user, intents));

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            widgets::notice_banner(ui, state, intents);
            match state.tab {
                Feature::Search => search_tab(ui, state, intents),
                Feature::DeepResearch => deep_research_tab(ui, state, user, intents),
                Feature::Calculator => calculator_tab(ui, state, user, intents),
            }
        });
    });

    widgets::gate_modal(ctx, state, intents);
}
