use std::{path::PathBuf, sync::Arc};

use jigsnap_core::SlotIndex;
use jigsnap_game::{GameError, SwapOutcome};

use crate::{
    action::{Action, ActionRequestQueue},
    async_work::{WorkRequest, WorkResponse},
    image_source::{LoadError, PreparedPuzzle},
    state::{
        AppState, HomeState, Notice, PuzzleState, Screen, SelectedImage, SpinnerKind, UiState,
    },
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::EditImagePath(text) => {
            if let Some(home) = ctx.app_state.home_mut() {
                home.path_input = text;
            }
        }
        Action::SelectImage(path) => ctx.select_image(path),
        Action::SetPieceCount(grid) => ctx.app_state.settings.piece_count = grid,
        Action::StartPuzzle => ctx.start_puzzle(),
        Action::ApplyWorkResponse(response) => ctx.apply_work_response(response),
        Action::SwapTiles { from, to } => ctx.swap_tiles(from, to),
        Action::OpenExitDialog => ctx.set_exit_dialog(true),
        Action::CloseExitDialog => ctx.set_exit_dialog(false),
        Action::BackToHome => ctx.back_to_home(),
        Action::ExitApp => {
            log::info!("exit requested");
            ctx.app_state.exit_requested = true;
        }
        Action::DismissNotice => ctx.app_state.notice = None,
    }
}

impl ActionContext<'_> {
    fn select_image(&mut self, path: PathBuf) {
        let Some(home) = self.app_state.home_mut() else {
            log::warn!("ignoring image selection outside the home screen");
            return;
        };
        home.path_input = path.display().to_string();
        if path.as_os_str().is_empty() {
            self.app_state.notice = Some(Notice::SelectImageFirst);
            return;
        }
        self.start_work(WorkRequest::LoadImage(path), SpinnerKind::LoadingImage);
    }

    fn start_puzzle(&mut self) {
        let settings = &self.app_state.settings;
        let home = self.app_state.home();
        let Some(selected) = home.and_then(|home| home.selected.as_ref()) else {
            self.app_state.notice = Some(Notice::SelectImageFirst);
            return;
        };
        log::info!(
            "preparing {} puzzle from {}",
            settings.piece_count,
            selected.path.display()
        );
        let request = WorkRequest::PreparePuzzle {
            picture: Arc::clone(&selected.picture),
            grid: settings.piece_count,
            cache_dir: settings.cache_dir.clone(),
            seed: settings.shuffle_seed(),
        };
        self.start_work(request, SpinnerKind::PreparingPuzzle);
    }

    fn start_work(&mut self, request: WorkRequest, spinner: SpinnerKind) {
        if let Err(err) = self.ui_state.start_work(request, spinner) {
            log::error!("failed to schedule work: {err}");
            self.app_state.notice = Some(Notice::LoadFailed(LoadError::GENERIC_MESSAGE));
        }
    }

    fn apply_work_response(&mut self, response: WorkResponse) {
        match response {
            WorkResponse::ImageLoaded { path, picture } => {
                let Some(home) = self.app_state.home_mut() else {
                    log::warn!(
                        "dropping loaded image {}: not on home screen",
                        path.display()
                    );
                    return;
                };
                log::info!(
                    "selected {} ({}x{})",
                    path.display(),
                    picture.width(),
                    picture.height()
                );
                home.path_input = path.display().to_string();
                home.selected = Some(SelectedImage { path, picture });
            }
            WorkResponse::PuzzleReady(prepared) => self.enter_puzzle(prepared),
            WorkResponse::Failed(err) => {
                log::warn!("{err}");
                self.app_state.notice = Some(Notice::LoadFailed(err.user_message()));
            }
            WorkResponse::Error(err) => {
                log::error!("background work failed: {err}");
                self.app_state.notice = Some(Notice::LoadFailed(LoadError::GENERIC_MESSAGE));
            }
        }
    }

    fn enter_puzzle(&mut self, prepared: PreparedPuzzle) {
        if !self.app_state.screen.is_home() {
            log::warn!("dropping prepared puzzle: not on home screen");
            return;
        }
        let PreparedPuzzle { game, picture } = prepared;
        let solved = game.is_solved();
        let session = self.app_state.next_session_id();
        log::info!("starting session {session} with a {} grid", game.grid());
        self.app_state.screen = Screen::Puzzle(PuzzleState {
            session,
            game,
            picture,
            exit_dialog_open: false,
        });
        if solved {
            self.app_state.notice = Some(Notice::Solved);
        }
    }

    fn swap_tiles(&mut self, from: SlotIndex, to: SlotIndex) {
        let Some(puzzle) = self.app_state.puzzle_mut() else {
            log::warn!("ignoring swap outside the puzzle screen");
            return;
        };
        let grid = puzzle.game.grid();
        debug_assert!(
            grid.contains(from) && grid.contains(to),
            "board produced a swap outside the {grid} grid: {from} <-> {to}"
        );
        match puzzle.game.swap_tiles(from, to) {
            Ok(SwapOutcome::Solved) => {
                log::info!("session {} solved", puzzle.session);
                self.app_state.notice = Some(Notice::Solved);
            }
            Ok(SwapOutcome::InProgress) => {}
            Err(GameError::AlreadySolved) => log::debug!("ignoring swap after solve"),
            Err(err) => log::error!("rejected swap {from} <-> {to}: {err}"),
        }
    }

    fn set_exit_dialog(&mut self, open: bool) {
        if let Some(puzzle) = self.app_state.puzzle_mut() {
            puzzle.exit_dialog_open = open;
        }
    }

    fn back_to_home(&mut self) {
        if let Some(puzzle) = self.app_state.puzzle() {
            log::info!("leaving session {}", puzzle.session);
        }
        self.app_state.screen = Screen::Home(HomeState::default());
        self.app_state.notice = None;
        self.ui_state.textures.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread, time::Duration};

    use image::{Rgba, RgbaImage};
    use jigsnap_core::{GridSize, Picture, partition};
    use jigsnap_game::{Arrangement, Game, PuzzleStatus};
    use tempfile::tempdir;

    use super::handle;
    use crate::{
        action::{Action, ActionRequestQueue},
        async_work::WorkResponse,
        image_source::{LoadError, PreparedPuzzle},
        state::{AppState, Notice, Screen, Settings, UiState},
    };

    #[expect(clippy::cast_possible_truncation)]
    fn picture() -> Arc<Picture> {
        let pixels = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8 * 60, y as u8 * 60, 0, 255]));
        Arc::new(Picture::new(pixels).unwrap())
    }

    fn prepared(order: &[usize]) -> PreparedPuzzle {
        let picture = picture();
        let grid = GridSize::new(2).unwrap();
        let tiles = partition(&picture, grid);
        let arrangement = Arrangement::from_order(grid, tiles, order).unwrap();
        PreparedPuzzle {
            game: Game::from_arrangement(arrangement),
            picture,
        }
    }

    fn puzzle_state(order: &[usize]) -> (AppState, UiState) {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ApplyWorkResponse(WorkResponse::PuzzleReady(prepared(order))),
        );
        (app_state, ui_state)
    }

    fn swap(app_state: &mut AppState, ui_state: &mut UiState, from: usize, to: usize) {
        handle(
            app_state,
            ui_state,
            Action::SwapTiles {
                from: from.into(),
                to: to.into(),
            },
        );
    }

    #[test]
    fn start_without_image_shows_notice() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();

        handle(&mut app_state, &mut ui_state, Action::StartPuzzle);

        assert_eq!(app_state.notice, Some(Notice::SelectImageFirst));
        assert!(app_state.screen.is_home());
        assert!(ui_state.active_spinner().is_none());

        handle(&mut app_state, &mut ui_state, Action::DismissNotice);
        assert_eq!(app_state.notice, None);
    }

    #[test]
    fn loaded_image_becomes_selection() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let picture = picture();

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ApplyWorkResponse(WorkResponse::ImageLoaded {
                path: "photo.png".into(),
                picture: Arc::clone(&picture),
            }),
        );

        let home = app_state.home().unwrap();
        assert_eq!(home.path_input, "photo.png");
        let selected = home.selected.as_ref().unwrap();
        assert!(Arc::ptr_eq(&selected.picture, &picture));
    }

    #[test]
    fn failed_load_stays_on_home_with_notice() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ApplyWorkResponse(WorkResponse::Failed(LoadError::MissingInput)),
        );

        assert!(app_state.screen.is_home());
        assert_eq!(
            app_state.notice,
            Some(Notice::LoadFailed("Please select an image first"))
        );
    }

    #[test]
    fn swaps_until_solved_show_notice_once() {
        let (mut app_state, mut ui_state) = puzzle_state(&[3, 1, 2, 0]);
        assert!(app_state.screen.is_puzzle());
        assert_eq!(app_state.notice, None);

        swap(&mut app_state, &mut ui_state, 1, 2);
        assert_eq!(app_state.notice, None);
        swap(&mut app_state, &mut ui_state, 1, 2);
        swap(&mut app_state, &mut ui_state, 0, 3);
        assert_eq!(app_state.notice, Some(Notice::Solved));

        handle(&mut app_state, &mut ui_state, Action::DismissNotice);
        swap(&mut app_state, &mut ui_state, 0, 1);
        assert_eq!(app_state.notice, None);

        let puzzle = app_state.puzzle().unwrap();
        assert_eq!(puzzle.game.status(), PuzzleStatus::Solved);
        assert!(puzzle.game.arrangement().is_solved());
    }

    #[test]
    fn identity_shuffle_is_solved_on_entry() {
        let (app_state, _ui_state) = puzzle_state(&[0, 1, 2, 3]);
        assert_eq!(app_state.notice, Some(Notice::Solved));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "swap outside"))]
    fn out_of_range_swap_is_a_contract_violation() {
        let (mut app_state, mut ui_state) = puzzle_state(&[1, 0, 2, 3]);
        swap(&mut app_state, &mut ui_state, 0, 4);

        let puzzle = app_state.puzzle().unwrap();
        assert_eq!(puzzle.game.arrangement().order()[0].index(), 1);
    }

    #[test]
    fn exit_dialog_choices() {
        let (mut app_state, mut ui_state) = puzzle_state(&[1, 0, 2, 3]);

        handle(&mut app_state, &mut ui_state, Action::OpenExitDialog);
        assert!(app_state.puzzle().unwrap().exit_dialog_open);
        handle(&mut app_state, &mut ui_state, Action::CloseExitDialog);
        assert!(!app_state.puzzle().unwrap().exit_dialog_open);

        handle(&mut app_state, &mut ui_state, Action::OpenExitDialog);
        handle(&mut app_state, &mut ui_state, Action::BackToHome);
        let home = app_state.home().unwrap();
        assert!(home.selected.is_none());
        assert!(home.path_input.is_empty());

        handle(&mut app_state, &mut ui_state, Action::ExitApp);
        assert!(app_state.exit_requested);
    }

    #[test]
    fn piece_count_and_path_edits_update_state() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetPieceCount(GridSize::MAX_SELECTABLE),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            Action::EditImagePath("a.png".to_owned()),
        );

        assert_eq!(app_state.settings.piece_count.side(), 6);
        assert_eq!(app_state.home().unwrap().path_input, "a.png");
    }

    #[test]
    fn selecting_image_loads_it_in_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("select.png");
        picture().as_rgba().save(&path).unwrap();

        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let select = Action::SelectImage(path.clone());
        handle(&mut app_state, &mut ui_state, select);
        assert!(ui_state.active_spinner().is_some());

        let mut queue = ActionRequestQueue::default();
        for _ in 0..500 {
            ui_state.poll_work(&mut queue);
            if ui_state.active_spinner().is_none() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        super::handle_all(&mut app_state, &mut ui_state, &mut queue);

        let selected = app_state.home().unwrap().selected.as_ref().unwrap();
        assert_eq!(selected.path, path);
        assert_eq!(*selected.picture, *picture());
    }

    #[test]
    fn swap_on_home_screen_is_ignored() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        swap(&mut app_state, &mut ui_state, 0, 1);
        assert!(matches!(app_state.screen, Screen::Home(_)));
    }
}
