use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};
use jigsnap_game::PuzzleStatus;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        PictureView,
        board::{self, BoardViewModel},
        layout,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct PuzzleScreenViewModel {
    pub(crate) original: PictureView,
    pub(crate) board: BoardViewModel,
    pub(crate) status: PuzzleStatus,
}

const SIDE_PANEL_WIDTH: f32 = 200.0;
const THUMBNAIL_HEIGHT: f32 = 160.0;

pub(crate) fn show(ui: &mut Ui, vm: &PuzzleScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::exact(SIDE_PANEL_WIDTH))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.cell(|ui| show_side_panel(ui, vm, action_queue));
            strip.cell(|ui| board::show(ui, &vm.board, action_queue));
        });
}

fn show_side_panel(ui: &mut Ui, vm: &PuzzleScreenViewModel, action_queue: &mut ActionRequestQueue) {
    ui.heading("Original");
    ui.weak("Cropped to the tile grid");
    StripBuilder::new(ui)
        .size(Size::exact(THUMBNAIL_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                layout::show_fitted(ui, &vm.original);
            });
            strip.cell(|ui| {
                ui.add_space(8.0);
                let status = match vm.status {
                    PuzzleStatus::InProgress => {
                        RichText::new("Drag a tile onto another to swap them.")
                    }
                    PuzzleStatus::Solved => {
                        RichText::new("Puzzle Solved!").color(ui.visuals().warn_fg_color)
                    }
                };
                ui.label(status);
                ui.add_space(8.0);
                if vm.status.is_solved() && ui.button("Back to home").clicked() {
                    action_queue.request(Action::BackToHome);
                }
                if ui.button("Exit game").clicked() {
                    action_queue.request(Action::OpenExitDialog);
                }
            });
        });
}
