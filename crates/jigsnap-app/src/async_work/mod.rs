//! Background loading of images and puzzle setup.
//!
//! Requests run on one shared worker thread (see `worker`). The UI keeps the
//! returned [`WorkHandle`] and polls it once per frame, so decoding and cache file
//! I/O never block rendering. Puzzle state itself is only touched on the UI thread.

use std::{path::PathBuf, sync::Arc};

use jigsnap_core::{GridSize, Picture};
use jigsnap_game::ShuffleSeed;

use crate::image_source::{self, LoadError, PreparedPuzzle};

mod worker;

pub(crate) use self::worker::{WorkHandle, enqueue, warm_up};

/// A request that can be offloaded to the background worker.
#[derive(Debug)]
pub(crate) enum WorkRequest {
    /// Read and decode an image file for the home screen.
    LoadImage(PathBuf),
    /// Cache the picture and build a shuffled game from the cached copy.
    PreparePuzzle {
        picture: Arc<Picture>,
        grid: GridSize,
        cache_dir: PathBuf,
        seed: ShuffleSeed,
    },
}

/// A response produced by background work.
#[derive(Debug, derive_more::IsVariant)]
pub(crate) enum WorkResponse {
    ImageLoaded {
        path: PathBuf,
        picture: Arc<Picture>,
    },
    PuzzleReady(PreparedPuzzle),
    Failed(LoadError),
    /// The worker could not be reached.
    Error(WorkError),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
}

impl WorkRequest {
    /// Handle a request and produce the corresponding response.
    #[must_use]
    pub(crate) fn handle(self) -> WorkResponse {
        match self {
            WorkRequest::LoadImage(path) => match image_source::load_picture(&path) {
                Ok(picture) => WorkResponse::ImageLoaded {
                    path,
                    picture: Arc::new(picture),
                },
                Err(err) => WorkResponse::Failed(err),
            },
            WorkRequest::PreparePuzzle {
                picture,
                grid,
                cache_dir,
                seed,
            } => match image_source::prepare_puzzle(&picture, grid, &cache_dir, seed) {
                Ok(prepared) => WorkResponse::PuzzleReady(prepared),
                Err(err) => WorkResponse::Failed(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use super::*;

    #[test]
    fn load_missing_file_reports_failure() {
        let path = env::temp_dir().join("jigsnap-test-no-such-image.png");
        let response = WorkRequest::LoadImage(path).handle();
        assert!(matches!(response, WorkResponse::Failed(LoadError::Io { .. })));
    }

    #[test]
    fn load_empty_path_reports_missing_input() {
        let response = WorkRequest::LoadImage(Path::new("").to_owned()).handle();
        assert!(matches!(
            response,
            WorkResponse::Failed(LoadError::MissingInput)
        ));
    }
}
