use crate::layout::layout_cars;
use crate::lot::CarSizes;
use crate::settings::Settings;
use crate::sort::Algorithm;

/// What the status label at the top of the window reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Running {
        algorithm: Algorithm,
        /// (zero-based step, total steps) of the last applied snapshot
        progress: Option<(usize, usize)>,
    },
    Completed,
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Idle => String::new(),
            Status::Running {
                algorithm,
                progress: None,
            } => format!("{}...", algorithm.name()),
            Status::Running {
                algorithm,
                progress: Some((step, total)),
            } => format!("{}: step {} of {}", algorithm.name(), step + 1, total),
            Status::Completed => "Sorting completed".to_string(),
        }
    }
}

/// Actions requested by the user during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiResponse {
    pub sort: bool,
    pub reset: bool,
    pub settings_changed: bool,
}

/// Draw the whole window: status label, parking lot and control strip.
pub fn show(
    ctx: &egui::Context,
    status: &Status,
    sizes: &CarSizes,
    settings: &mut Settings,
    running: bool,
) -> UiResponse {
    let mut response = UiResponse::default();

    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(status.text()).size(20.0).strong());
        });
    });

    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!running, egui::Button::new("Sort"))
                .clicked()
            {
                response.sort = true;
            }

            if ui.button("Reset").clicked() {
                response.reset = true;
            }

            egui::ComboBox::from_id_salt("algorithm")
                .selected_text(settings.animation.algorithm.name())
                .show_ui(ui, |ui| {
                    for algorithm in Algorithm::ALL {
                        if ui
                            .selectable_value(
                                &mut settings.animation.algorithm,
                                algorithm,
                                algorithm.name(),
                            )
                            .changed()
                        {
                            response.settings_changed = true;
                        }
                    }
                });

            ui.separator();

            let delay = ui.add(
                egui::Slider::new(&mut settings.animation.step_delay_ms, 50..=2000)
                    .text("ms per step"),
            );
            // Save when a drag ends, not on every tick
            if delay.drag_stopped() || (delay.changed() && !delay.dragged()) {
                response.settings_changed = true;
            }
        });
    });

    let frame = egui::Frame::default().fill(settings.colors.background_color32());
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let surface = ui.max_rect();
        let painter = ui.painter_at(surface);
        for car in layout_cars(sizes.as_slice(), surface.width()) {
            painter.rect_filled(
                car.to_egui(surface.min),
                0.0,
                settings.colors.car_color32(car.size),
            );
        }
    });

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_tracks_run_progress() {
        assert_eq!(Status::Idle.text(), "");
        assert_eq!(
            Status::Running {
                algorithm: Algorithm::Merge,
                progress: None
            }
            .text(),
            "Merge Sort..."
        );
        assert_eq!(
            Status::Running {
                algorithm: Algorithm::Bubble,
                progress: Some((2, 7))
            }
            .text(),
            "Bubble Sort: step 3 of 7"
        );
        assert_eq!(Status::Completed.text(), "Sorting completed");
    }
}
