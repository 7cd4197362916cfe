use eframe::egui;

pub const NAVY: egui::Color32 = egui::Color32::from_rgb(26, 58, 110);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);
pub const PAGE: egui::Color32 = egui::Color32::from_rgb(248, 250, 255);
pub const CARD: egui::Color32 = egui::Color32::WHITE;
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE;
    visuals.window_fill = CARD;
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
}
