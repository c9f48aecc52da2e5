use std::{mem, path::PathBuf};

use jigsnap_core::{GridSize, SlotIndex};

use crate::async_work::WorkResponse;

#[derive(Debug)]
pub(crate) enum Action {
    EditImagePath(String),
    SelectImage(PathBuf),
    SetPieceCount(GridSize),
    StartPuzzle,
    ApplyWorkResponse(WorkResponse),
    SwapTiles { from: SlotIndex, to: SlotIndex },
    OpenExitDialog,
    CloseExitDialog,
    BackToHome,
    ExitApp,
    DismissNotice,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::StartPuzzle);
        queue.request(Action::DismissNotice);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::StartPuzzle));
        assert!(matches!(drained[1], Action::DismissNotice));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
