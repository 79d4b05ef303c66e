//! Frame layout math for the background, time-scale bar and HUD

use glam::Vec2;

use crate::sim::PlayArea;

/// Placement of an image scaled to cover a surface while keeping its aspect
/// ratio. Returns `(origin, size)`; the overflow is split evenly so the image
/// stays centered.
pub fn background_cover(surface_size: Vec2, image_size: Vec2) -> (Vec2, Vec2) {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return (Vec2::ZERO, surface_size);
    }
    let scale = (surface_size.x / image_size.x).max(surface_size.y / image_size.y);
    let size = image_size * scale;
    let origin = (surface_size - size) / 2.0;
    (origin, size)
}

/// Rect for the time-scale bar in the header strip.
///
/// A time scale of 2 fills the full width, matching the tap mapping
/// `x / width * 2`.
pub fn time_scale_bar(area: &impl PlayArea, time_scale: f32) -> (Vec2, Vec2) {
    (
        Vec2::new(0.0, area.floor_y()),
        Vec2::new(area.width() * time_scale / 2.0, area.header_height()),
    )
}

pub fn hud_text(bounce_streak: u32, best_bounce_streak: u32) -> String {
    format!("Bounces: {bounce_streak} (record: {best_bounce_streak})")
}
