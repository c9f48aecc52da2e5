use eframe::egui::TextureHandle;

use crate::{
    action::{Action, ActionRequestQueue},
    async_work::{self, WorkError, WorkHandle, WorkRequest, WorkResponse},
    renderer::TextureCache,
};

// UiState holds ephemeral UI-only state (in-flight work, textures).
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pending: Option<PendingWork>,
    pub(crate) textures: TextureCache<TextureHandle>,
}

impl UiState {
    /// Sends `request` to the background worker and shows `spinner` until it completes.
    pub(crate) fn start_work(
        &mut self,
        request: WorkRequest,
        spinner: SpinnerKind,
    ) -> Result<(), WorkError> {
        if let Some(previous) = &self.pending {
            log::warn!("discarding in-flight {:?} work", previous.spinner);
        }
        self.pending = None;
        let handle = async_work::enqueue(request)?;
        self.pending = Some(PendingWork { handle, spinner });
        Ok(())
    }

    /// Forwards a finished work response to the action queue.
    pub(crate) fn poll_work(&mut self, action_queue: &mut ActionRequestQueue) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        let response = match pending.handle.poll() {
            Ok(Some(response)) => response,
            Ok(None) => return,
            Err(err) => WorkResponse::Error(err),
        };
        self.pending = None;
        action_queue.request(Action::ApplyWorkResponse(response));
    }

    #[must_use]
    pub(crate) fn active_spinner(&self) -> Option<SpinnerKind> {
        self.pending.as_ref().map(|pending| pending.spinner)
    }
}

#[derive(Debug)]
struct PendingWork {
    handle: WorkHandle,
    spinner: SpinnerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    LoadingImage,
    PreparingPuzzle,
}
