use crate::sort::Algorithm;

use serde::{Deserialize, Serialize};

pub const CONFY_APP_NAME: &str = "parking-vis";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub step_delay_ms: u64,
    pub algorithm: Algorithm,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: 500,
            algorithm: Algorithm::Bubble,
        }
    }
}

impl AnimationSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "animation").unwrap_or_else(|e| {
            log::warn!("Failed to load animation settings, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "animation", self) {
            log::warn!("Failed to save animation settings: {}", e);
        }
    }

    pub fn step_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.step_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background: [f32; 3],
    /// Indexed by car size minus one.
    pub car_colors: [[f32; 3]; 5],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            car_colors: [
                [1.0, 0.0, 0.0],           // red
                [0.0, 0.0, 1.0],           // blue
                [0.0, 1.0, 0.0],           // green
                [1.0, 1.0, 0.0],           // yellow
                [1.0, 200.0 / 255.0, 0.0], // orange
            ],
        }
    }
}

impl ColorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "colors").unwrap_or_default()
    }

    pub fn background_color32(&self) -> egui::Color32 {
        to_color32(self.background)
    }

    /// Fill color for a car of the given size; sizes outside the palette clamp to its ends.
    pub fn car_color32(&self, size: u8) -> egui::Color32 {
        let idx = (size.max(1) as usize - 1).min(self.car_colors.len() - 1);
        to_color32(self.car_colors[idx])
    }
}

fn to_color32(rgb: [f32; 3]) -> egui::Color32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(c(rgb[0]), c(rgb[1]), c(rgb[2]))
}

// Aggregate struct for convenience
pub struct Settings {
    pub animation: AnimationSettings,
    pub colors: ColorSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            animation: AnimationSettings::load(),
            colors: ColorSettings::load(),
        }
    }
}
