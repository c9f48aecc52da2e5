use eframe::egui::{
    Id, Image, Response, Stroke, StrokeKind, TextureId, Ui, Vec2, load::SizedTexture,
};
use jigsnap_core::SlotIndex;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::layout,
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TileVisualState: u8 {
        const DRAGGABLE = 0b0000_0001;
        const SOLVED = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoardCell {
    pub(crate) slot: SlotIndex,
    pub(crate) texture: TextureId,
    pub(crate) visual_state: TileVisualState,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoardViewModel {
    pub(crate) columns: usize,
    /// Size of one tile in source pixels.
    pub(crate) tile_size: Vec2,
    /// Row-major, one per slot.
    pub(crate) cells: Vec<BoardCell>,
}

const TILE_GAP: f32 = 2.0;
const DROP_TARGET_STROKE_WIDTH: f32 = 3.0;
const SOLVED_STROKE_WIDTH: f32 = 1.0;

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    if vm.columns == 0 {
        return;
    }
    let columns = vm.columns as f32;
    let gaps = Vec2::splat(TILE_GAP * (columns - 1.0));
    let board_size = layout::fit_size(vm.tile_size * columns, ui.available_size() - gaps);
    let tile_size = board_size / columns;

    ui.spacing_mut().item_spacing = Vec2::splat(TILE_GAP);
    ui.vertical(|ui| {
        for row in vm.cells.chunks(vm.columns) {
            ui.horizontal(|ui| {
                // Center the row inside the full-width horizontal layout.
                let row_width = board_size.x + gaps.x;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for cell in row {
                    show_tile(ui, cell, tile_size, action_queue);
                }
            });
        }
    });
}

fn show_tile(ui: &mut Ui, cell: &BoardCell, size: Vec2, action_queue: &mut ActionRequestQueue) {
    let image = Image::new(SizedTexture::new(cell.texture, size)).fit_to_exact_size(size);

    let response = if cell.visual_state.contains(TileVisualState::DRAGGABLE) {
        let id = Id::new(("board_tile", cell.slot));
        ui.dnd_drag_source(id, cell.slot, |ui| ui.add(image)).response
    } else {
        ui.add(image)
    };

    if let Some(from) = response.dnd_release_payload::<SlotIndex>()
        && *from != cell.slot
    {
        action_queue.request(Action::SwapTiles {
            from: *from,
            to: cell.slot,
        });
    }

    if let Some(stroke) = tile_stroke(ui, cell, &response) {
        ui.painter()
            .rect_stroke(response.rect, 0.0, stroke, StrokeKind::Inside);
    }
}

fn tile_stroke(ui: &Ui, cell: &BoardCell, response: &Response) -> Option<Stroke> {
    let visuals = ui.visuals();
    let is_drop_target = response
        .dnd_hover_payload::<SlotIndex>()
        .is_some_and(|from| *from != cell.slot);
    if is_drop_target {
        let color = visuals.selection.stroke.color;
        return Some(Stroke::new(DROP_TARGET_STROKE_WIDTH, color));
    }
    if cell.visual_state.contains(TileVisualState::SOLVED) {
        return Some(Stroke::new(SOLVED_STROKE_WIDTH, visuals.warn_fg_color));
    }
    None
}
