//! Jigsnap desktop application UI.
//!
//! # Design Notes
//! - Two screens: home (choose a photo and a piece count) and puzzle (drag tiles to
//!   swap them until the picture is restored).
//! - Every user intent goes through the action queue; egui code only reads view
//!   models built from `AppState`.
//! - Decoding and cache file I/O run on a background worker while a spinner blocks
//!   input.

use std::path::PathBuf;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, Ui, ViewportCommand},
};
use jigsnap_core::GridSize;
use jigsnap_game::ShuffleSeed;

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler, async_work,
    renderer::EguiRenderer,
    state::{AppState, Screen, Settings, UiState},
    ui, view_model_builder,
};

/// Start-up configuration, usually taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Image to load on start.
    pub image: Option<PathBuf>,
    pub piece_count: Option<GridSize>,
    /// Directory for the transient puzzle image; defaults to a temp subdirectory.
    pub cache_dir: Option<PathBuf>,
    pub seed: Option<ShuffleSeed>,
}

#[derive(Debug)]
pub struct JigsnapApp {
    app_state: AppState,
    ui_state: UiState,
}

impl JigsnapApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, options: LaunchOptions) -> Self {
        async_work::warm_up();

        let LaunchOptions {
            image,
            piece_count,
            cache_dir,
            seed,
        } = options;
        let settings = Settings {
            piece_count: piece_count.unwrap_or(GridSize::DEFAULT),
            cache_dir: cache_dir.unwrap_or_else(Settings::default_cache_dir),
            seed,
        };
        log::debug!("settings: {settings:?}");

        let mut app = Self {
            app_state: AppState::new(settings),
            ui_state: UiState::default(),
        };
        if let Some(path) = image {
            action_handler::handle(
                &mut app.app_state,
                &mut app.ui_state,
                Action::SelectImage(path),
            );
        }
        app
    }

    fn is_modal_active(&self) -> bool {
        self.app_state.notice.is_some()
            || self.ui_state.active_spinner().is_some()
            || self
                .app_state
                .puzzle()
                .is_some_and(|puzzle| puzzle.exit_dialog_open)
    }

    fn show_screen(&mut self, ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
        let mut renderer = EguiRenderer::new(ui.ctx().clone());
        let textures = &mut self.ui_state.textures;
        match &self.app_state.screen {
            Screen::Home(home) => {
                let preview = home
                    .selected
                    .as_ref()
                    .map(|selected| textures.preview(&mut renderer, &selected.picture).clone());
                let vm = view_model_builder::build_home_screen_vm(
                    &self.app_state,
                    home,
                    preview.as_ref(),
                );
                ui::home_screen::show(ui, &vm, action_queue);
            }
            Screen::Puzzle(puzzle) => {
                let surfaces = textures.session(&mut renderer, puzzle);
                let vm = view_model_builder::build_puzzle_screen_vm(puzzle, surfaces);
                ui::puzzle_screen::show(ui, &vm, action_queue);
            }
        }
    }

    fn show_modals(&self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        if let Some(puzzle) = self.app_state.puzzle()
            && puzzle.exit_dialog_open
        {
            ui::dialogs::show_exit_confirm(ctx, action_queue);
        }

        if let Some(notice) = self.app_state.notice {
            ui::dialogs::show_notice(ctx, notice, action_queue);
        }

        if let Some(spinner) = self.ui_state.active_spinner() {
            ui::spinner::show(ctx, spinner);
        }
    }
}

impl App for JigsnapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.poll_work(&mut action_queue);
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if !self.is_modal_active() {
            ctx.input(|i| {
                ui::input::handle_input(i, &self.app_state.screen, &mut action_queue);
            });
            action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        CentralPanel::default().show(ctx, |ui| {
            self.show_screen(ui, &mut action_queue);
        });
        self.show_modals(ctx, &mut action_queue);

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.app_state.exit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
