use eframe::egui::{TextureId, Vec2};

pub(crate) mod board;
pub(crate) mod dialogs;
pub(crate) mod home_screen;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod puzzle_screen;
pub(crate) mod spinner;

/// A texture plus the pixel size it was uploaded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PictureView {
    pub(crate) texture: TextureId,
    pub(crate) size: Vec2,
}
