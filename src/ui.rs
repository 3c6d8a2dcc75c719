use crate::camera::CameraMode;
use crate::settings::Settings;

/// What the UI asked the app to do this frame.
#[derive(Default)]
pub struct UiResponse {
    pub text_edited: bool,
    pub reset_points: bool,
    pub save_input: bool,
    pub reset_camera: bool,
    pub switch_mode: Option<CameraMode>,
}

pub struct Ui {
    pub settings: Settings,
    pub input_text: String,
    /// Last rejection reason, shown until the next successful parse.
    pub parse_status: Option<String>,
}

impl Ui {
    pub fn new(settings: Settings, input_text: String) -> Self {
        Self {
            settings,
            input_text,
            parse_status: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, mode: &CameraMode) -> UiResponse {
        let mut response = UiResponse::default();

        egui::SidePanel::left("points_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Points");
                ui.label("JSON array of [x, y, z] triples:");

                let editor = ui.add(
                    egui::TextEdit::multiline(&mut self.input_text)
                        .code_editor()
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
                if editor.changed() {
                    response.text_edited = true;
                }

                match &self.parse_status {
                    Some(status) => {
                        ui.colored_label(egui::Color32::LIGHT_RED, status);
                    }
                    None => {
                        ui.weak("point list applied");
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("Reset points").clicked() {
                        response.reset_points = true;
                    }
                    if ui.button("Save input").clicked() {
                        response.save_input = true;
                    }
                });

                ui.separator();
                ui.heading("Camera");

                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(!mode.is_free(), "Origin")
                        .clicked()
                        && mode.is_free()
                    {
                        response.switch_mode = Some(CameraMode::origin());
                    }
                    if ui.selectable_label(mode.is_free(), "Free").clicked() && !mode.is_free() {
                        response.switch_mode = Some(CameraMode::free());
                    }
                });

                if ui.button("Reset camera").clicked() {
                    response.reset_camera = true;
                }

                if ui
                    .checkbox(&mut self.settings.display.show_grid, "Show grid")
                    .changed()
                {
                    self.settings.display.save();
                }

                ui.separator();
                ui.weak("Drag: orbit");
                ui.weak("Wheel: zoom (Origin mode)");
                ui.weak("W/S/A/D/R/F: fly (Free mode)");
            });

        response
    }
}
