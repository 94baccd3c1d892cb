/// Unit width of a car; a car of size `n` is `n * CAR_WIDTH` wide.
pub const CAR_WIDTH: f32 = 50.0;
pub const CAR_HEIGHT: f32 = 30.0;
pub const SPACE_BETWEEN_CARS: f32 = 20.0;
/// Left, top and right inset of the lot inside the drawing surface.
pub const LOT_MARGIN: f32 = 50.0;

/// Placement of one parked car, relative to the drawing surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarRect {
    pub size: u8,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Lay cars out left to right, wrapping to a new row when the next car would
/// cross the right margin.
pub fn layout_cars(sizes: &[u8], surface_width: f32) -> Vec<CarRect> {
    let mut x = LOT_MARGIN;
    let mut y = LOT_MARGIN;
    let right_edge = surface_width - LOT_MARGIN;

    sizes
        .iter()
        .map(|&size| {
            let width = size as f32 * CAR_WIDTH;
            if x + width > right_edge {
                x = LOT_MARGIN;
                y += CAR_HEIGHT + SPACE_BETWEEN_CARS;
            }
            let rect = CarRect {
                size,
                x,
                y,
                width,
                height: CAR_HEIGHT,
            };
            x += width + SPACE_BETWEEN_CARS;
            rect
        })
        .collect()
}

impl CarRect {
    pub fn to_egui(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(self.x, self.y),
            egui::vec2(self.width, self.height),
        )
    }
}
