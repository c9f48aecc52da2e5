use std::{path::PathBuf, sync::Arc};

use jigsnap_core::Picture;
use jigsnap_game::Game;

use crate::state::Settings;

// AppState holds the session state driven by actions. Nothing here is persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) settings: Settings,
    pub(crate) screen: Screen,
    pub(crate) notice: Option<Notice>,
    pub(crate) exit_requested: bool,
    next_session: u64,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            settings,
            screen: Screen::Home(HomeState::default()),
            notice: None,
            exit_requested: false,
            next_session: 0,
        }
    }

    /// Returns a fresh id for a puzzle session.
    pub(crate) fn next_session_id(&mut self) -> SessionId {
        let id = SessionId(self.next_session);
        self.next_session += 1;
        id
    }

    #[must_use]
    pub(crate) fn home(&self) -> Option<&HomeState> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            Screen::Puzzle(_) => None,
        }
    }

    #[must_use]
    pub(crate) fn puzzle(&self) -> Option<&PuzzleState> {
        match &self.screen {
            Screen::Home(_) => None,
            Screen::Puzzle(puzzle) => Some(puzzle),
        }
    }

    #[must_use]
    pub(crate) fn home_mut(&mut self) -> Option<&mut HomeState> {
        match &mut self.screen {
            Screen::Home(home) => Some(home),
            Screen::Puzzle(_) => None,
        }
    }

    #[must_use]
    pub(crate) fn puzzle_mut(&mut self) -> Option<&mut PuzzleState> {
        match &mut self.screen {
            Screen::Home(_) => None,
            Screen::Puzzle(puzzle) => Some(puzzle),
        }
    }
}

#[derive(Debug, derive_more::IsVariant)]
pub(crate) enum Screen {
    Home(HomeState),
    Puzzle(PuzzleState),
}

#[derive(Debug, Default)]
pub(crate) struct HomeState {
    pub(crate) path_input: String,
    pub(crate) selected: Option<SelectedImage>,
}

#[derive(Debug, Clone)]
pub(crate) struct SelectedImage {
    pub(crate) path: PathBuf,
    pub(crate) picture: Arc<Picture>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub(crate) struct SessionId(u64);

#[derive(Debug)]
pub(crate) struct PuzzleState {
    pub(crate) session: SessionId,
    pub(crate) game: Game,
    /// The cached picture the tiles were cut from.
    pub(crate) picture: Arc<Picture>,
    pub(crate) exit_dialog_open: bool,
}

/// A message shown to the player in a dismissable dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notice {
    SelectImageFirst,
    LoadFailed(&'static str),
    Solved,
}

impl Notice {
    #[must_use]
    pub(crate) fn message(self) -> &'static str {
        match self {
            Notice::SelectImageFirst => "Please select an image first",
            Notice::LoadFailed(message) => message,
            Notice::Solved => "Puzzle Solved!",
        }
    }
}
