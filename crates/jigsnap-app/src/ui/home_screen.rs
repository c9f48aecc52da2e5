use std::path::PathBuf;

use eframe::egui::{Key, Slider, TextEdit, Ui};
use egui_extras::{Size, StripBuilder};
use jigsnap_core::GridSize;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{PictureView, layout},
};

#[derive(Debug, Clone)]
pub(crate) struct HomeScreenViewModel {
    pub(crate) preview: Option<PictureView>,
    pub(crate) path_input: String,
    pub(crate) piece_count: GridSize,
}

const HEADING_HEIGHT: f32 = 40.0;
const CONTROLS_HEIGHT: f32 = 110.0;
const MIN_PREVIEW_HEIGHT: f32 = 80.0;
const CHOOSE_BUTTON_WIDTH: f32 = 110.0;

pub(crate) fn show(ui: &mut Ui, vm: &HomeScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::exact(HEADING_HEIGHT))
        .size(Size::remainder().at_least(MIN_PREVIEW_HEIGHT))
        .size(Size::exact(CONTROLS_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Jigsnap");
                });
            });
            strip.cell(|ui| match &vm.preview {
                Some(preview) => {
                    layout::show_fitted(ui, preview);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.weak("No image selected. Choose a photo or drop one here.");
                    });
                }
            });
            strip.cell(|ui| show_controls(ui, vm, action_queue));
        });
}

fn show_controls(ui: &mut Ui, vm: &HomeScreenViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let mut path = vm.path_input.clone();
        let width = (ui.available_width() - CHOOSE_BUTTON_WIDTH).max(0.0);
        let response = ui.add(
            TextEdit::singleline(&mut path)
                .hint_text("Path to a photo")
                .desired_width(width),
        );
        if response.changed() {
            action_queue.request(Action::EditImagePath(path.clone()));
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Choose image").clicked() || submitted {
            action_queue.request(Action::SelectImage(PathBuf::from(path.trim())));
        }
    });

    ui.add_space(4.0);
    let mut side = vm.piece_count.side();
    let range = GridSize::MIN_SELECTABLE.side()..=GridSize::MAX_SELECTABLE.side();
    let label = format!("pieces per side ({} tiles)", vm.piece_count.tile_count());
    let slider = Slider::new(&mut side, range).text(label);
    if ui.add(slider).changed() {
        action_queue.request(Action::SetPieceCount(GridSize::clamped(side)));
    }

    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        if ui.button("Start puzzle").clicked() {
            action_queue.request(Action::StartPuzzle);
        }
    });
}
