use eframe::egui::Vec2;
use jigsnap_core::TileLayout;

use crate::{
    renderer::{SessionSurfaces, Surface},
    state::{AppState, HomeState, PuzzleState},
    ui::{
        PictureView,
        board::{BoardCell, BoardViewModel, TileVisualState},
        home_screen::HomeScreenViewModel,
        puzzle_screen::PuzzleScreenViewModel,
    },
};

fn picture_view<S: Surface>(surface: &S) -> PictureView {
    PictureView {
        texture: surface.texture_id(),
        size: surface.pixel_size(),
    }
}

#[must_use]
pub(crate) fn build_home_screen_vm<S: Surface>(
    app_state: &AppState,
    home: &HomeState,
    preview: Option<&S>,
) -> HomeScreenViewModel {
    HomeScreenViewModel {
        preview: preview.map(picture_view),
        path_input: home.path_input.clone(),
        piece_count: app_state.settings.piece_count,
    }
}

#[must_use]
pub(crate) fn build_board_vm<S: Surface>(
    puzzle: &PuzzleState,
    surfaces: &SessionSurfaces<S>,
) -> BoardViewModel {
    let game = &puzzle.game;
    let layout = TileLayout::for_picture(&puzzle.picture, game.grid());

    let mut visual_state = TileVisualState::empty();
    if game.is_solved() {
        visual_state |= TileVisualState::SOLVED;
    } else {
        visual_state |= TileVisualState::DRAGGABLE;
    }

    let cells = game
        .arrangement()
        .tiles()
        .map(|(slot, tile)| BoardCell {
            slot,
            texture: surfaces.tile(tile).texture_id(),
            visual_state,
        })
        .collect();

    #[expect(clippy::cast_precision_loss)]
    let tile_size = Vec2::new(layout.tile_width() as f32, layout.tile_height() as f32);
    BoardViewModel {
        columns: game.grid().side() as usize,
        tile_size,
        cells,
    }
}

#[must_use]
pub(crate) fn build_puzzle_screen_vm<S: Surface>(
    puzzle: &PuzzleState,
    surfaces: &SessionSurfaces<S>,
) -> PuzzleScreenViewModel {
    PuzzleScreenViewModel {
        original: picture_view(surfaces.original()),
        board: build_board_vm(puzzle, surfaces),
        status: puzzle.game.status(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use image::{Rgba, RgbaImage};
    use jigsnap_core::{GridSize, Picture, SlotIndex, partition};
    use jigsnap_game::{Arrangement, Game};

    use super::*;
    use crate::{
        renderer::{
            TextureCache,
            testing::{FakeRenderer, FakeSurface},
        },
        state::Settings,
    };

    fn puzzle(app_state: &mut AppState, order: &[usize]) -> PuzzleState {
        let pixels = RgbaImage::from_pixel(20, 10, Rgba([9, 9, 9, 255]));
        let picture = Arc::new(Picture::new(pixels).unwrap());
        let grid = GridSize::new(2).unwrap();
        let arrangement = Arrangement::from_order(grid, partition(&picture, grid), order).unwrap();
        PuzzleState {
            session: app_state.next_session_id(),
            game: Game::from_arrangement(arrangement),
            picture,
            exit_dialog_open: false,
        }
    }

    #[test]
    fn board_cells_follow_current_arrangement() {
        let mut app_state = AppState::new(Settings::default());
        let puzzle = puzzle(&mut app_state, &[3, 1, 2, 0]);
        let mut cache = TextureCache::default();
        let surfaces = cache.session(&mut FakeRenderer::default(), &puzzle);

        let vm = build_board_vm(&puzzle, surfaces);
        assert_eq!(vm.columns, 2);
        assert_eq!(vm.tile_size, Vec2::new(10.0, 5.0));
        assert_eq!(vm.cells.len(), 4);
        for (i, cell) in vm.cells.iter().enumerate() {
            assert_eq!(cell.slot, SlotIndex::new(i));
            assert_eq!(cell.visual_state, TileVisualState::DRAGGABLE);
        }
        // Slot 0 shows the tile cut from slot 3.
        let arrangement = puzzle.game.arrangement();
        let tile = arrangement.tile_at(SlotIndex::new(0)).unwrap();
        assert_eq!(vm.cells[0].texture, surfaces.tile(tile).texture_id());
        assert_ne!(vm.cells[0].texture, vm.cells[1].texture);
    }

    #[test]
    fn solved_board_disables_dragging() {
        let mut app_state = AppState::new(Settings::default());
        let puzzle = puzzle(&mut app_state, &[0, 1, 2, 3]);
        let mut cache = TextureCache::default();
        let surfaces = cache.session(&mut FakeRenderer::default(), &puzzle);

        let vm = build_puzzle_screen_vm(&puzzle, surfaces);
        assert!(vm.status.is_solved());
        for cell in &vm.board.cells {
            assert_eq!(cell.visual_state, TileVisualState::SOLVED);
        }
        assert_eq!(vm.original.size, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn home_vm_reflects_settings_and_input() {
        let mut app_state = AppState::new(Settings::default());
        app_state.settings.piece_count = GridSize::new(5).unwrap();
        let home = HomeState {
            path_input: "cat.jpg".to_owned(),
            selected: None,
        };

        let vm = build_home_screen_vm::<FakeSurface>(&app_state, &home, None);
        assert_eq!(vm.piece_count.side(), 5);
        assert_eq!(vm.path_input, "cat.jpg");
        assert!(vm.preview.is_none());
    }
}
