use eframe::egui::{self, Image, Ui, Vec2, load::SizedTexture};

use crate::ui::PictureView;

/// Scales `content` uniformly so it fits inside `available`.
///
/// Returns [`Vec2::ZERO`] when either size has no area.
#[must_use]
pub(crate) fn fit_size(content: Vec2, available: Vec2) -> Vec2 {
    if content.min_elem() <= 0.0 || available.min_elem() <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (available / content).min_elem();
    content * scale
}

/// Draws `picture` as large as fits in the remaining space, centered.
pub(crate) fn show_fitted(ui: &mut Ui, picture: &PictureView) -> egui::Response {
    let size = fit_size(picture.size, ui.available_size());
    let image = Image::new(SizedTexture::new(picture.texture, size)).fit_to_exact_size(size);
    ui.centered_and_justified(|ui| ui.add(image)).inner
}
