//! SlowCalc application

use egui::Context;
use slowcalc::config::CalcSettings;
use slowcalc::input::Button;
use slowcalc::session::{Calculator, Notice};
use slowcore::dither::draw_window_shadow;
use slowcore::repaint::RepaintController;
use slowcore::theme::{menu_bar, SlowColors, SlowTheme};
use slowcore::widgets::{status_bar, KeyButton};

pub struct SlowCalcApp {
    calc: Calculator,
    settings: CalcSettings,
    theme: SlowTheme,
    /// Message of the error dialog currently shown
    error_dialog: Option<String>,
    show_about: bool,
    repaint: RepaintController,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self {
            calc: Calculator::with_max_entry_len(settings.max_entry_len),
            settings,
            theme: SlowTheme::default(),
            error_dialog: None,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn press(&mut self, button: Button) {
        if let Some(notice) = self.calc.press(button) {
            self.notify(notice);
        }
        self.repaint.mark_needs_repaint();
    }

    fn notify(&mut self, notice: Notice) {
        if notice.dialog && self.settings.error_dialogs {
            self.error_dialog = Some(notice.message);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        SlowTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(display_height);
            ui.set_max_height(display_height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.calc.display())
                        .font(self.theme.display_font())
                        .strong(),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let size = self.settings.button_size;
        let mut pressed = None;
        for row in Button::KEYPAD {
            ui.horizontal(|ui| {
                for button in row {
                    if ui.add(KeyButton::new(&button.label(), size)).clicked() {
                        pressed = Some(button);
                    }
                }
            });
        }
        if let Some(button) = pressed {
            self.press(button);
        }
    }

    fn status_text(&self) -> String {
        let ev = self.calc.evaluator();
        let op = ev.operator().map(|op| op.to_string()).unwrap_or_else(|| "-".to_string());
        format!("op {}  stack {}", op, ev.depth())
    }

    fn render_error_dialog(&mut self, ctx: &Context) {
        let Some(message) = self.error_dialog.clone() else {
            return;
        };
        let resp = egui::Window::new("Error!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(message.as_str());
                    ui.add_space(4.0);
                    if ui.button("ok").clicked() {
                        self.error_dialog = None;
                    }
                });
            });
        if let Some(r) = &resp {
            draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("buttons: 0-9 + - * / = C");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            draw_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear").clicked() {
                        self.press(Button::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(SlowColors::WHITE)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                // Keys stay inert while an error dialog is up
                ui.add_enabled_ui(self.error_dialog.is_none(), |ui| {
                    self.render_keypad(ui);
                });
            });

        self.render_error_dialog(ctx);
        if self.show_about {
            self.render_about(ctx);
        }
        self.repaint.end_frame(ctx);
    }
}
