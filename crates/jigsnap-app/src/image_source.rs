//! Loading source photos and the transient puzzle cache file.
//!
//! The home screen decodes the chosen file once for its preview. Starting a puzzle
//! re-encodes that picture as PNG into the cache directory and the puzzle is built
//! from a fresh decode of the cache file, so the session never depends on the
//! original file staying in place.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use image::ImageFormat;
use jigsnap_core::{GridSize, Picture, PictureError};
use jigsnap_game::{Game, GameError, ShuffleSeed};

/// File name of the cached copy inside the cache directory.
pub(crate) const CACHE_FILE_NAME: &str = "puzzle_image.png";

/// Errors that abort loading an image or starting a puzzle.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum LoadError {
    #[display("no image was selected")]
    MissingInput,
    #[display("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: PictureError },
    #[display("failed to write {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        source: image::ImageError,
    },
    #[display("failed to set up puzzle: {_0}")]
    Setup(GameError),
}

impl LoadError {
    pub(crate) const GENERIC_MESSAGE: &'static str = "Failed to load image";

    /// Short text shown to the player.
    #[must_use]
    pub(crate) fn user_message(&self) -> &'static str {
        match self {
            LoadError::MissingInput => "Please select an image first",
            LoadError::Setup(GameError::Picture(PictureError::TooSmall { .. })) => {
                "Image is too small for this many pieces"
            }
            _ => Self::GENERIC_MESSAGE,
        }
    }
}

/// A puzzle ready to be shown on the puzzle screen.
#[derive(Debug)]
pub(crate) struct PreparedPuzzle {
    pub(crate) game: Game,
    pub(crate) picture: Arc<Picture>,
}

/// Reads and decodes the image at `path`.
pub(crate) fn load_picture(path: &Path) -> Result<Picture, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::MissingInput);
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    Picture::decode(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_owned(),
        source,
    })
}

/// Writes `picture` as PNG into `cache_dir`, replacing any previous copy.
pub(crate) fn write_cache(picture: &Picture, cache_dir: &Path) -> Result<PathBuf, LoadError> {
    fs::create_dir_all(cache_dir).map_err(|source| LoadError::Io {
        path: cache_dir.to_owned(),
        source,
    })?;
    let path = cache_dir.join(CACHE_FILE_NAME);
    picture
        .as_rgba()
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| LoadError::CacheWrite {
            path: path.clone(),
            source,
        })?;
    log::debug!("wrote puzzle cache to {}", path.display());
    Ok(path)
}

/// Caches `picture`, reloads it from the cache, and builds a shuffled game.
pub(crate) fn prepare_puzzle(
    picture: &Picture,
    grid: GridSize,
    cache_dir: &Path,
    seed: ShuffleSeed,
) -> Result<PreparedPuzzle, LoadError> {
    let cache_path = write_cache(picture, cache_dir)?;
    let cached = load_picture(&cache_path)?;
    let game = Game::new(&cached, grid, seed).map_err(LoadError::Setup)?;
    Ok(PreparedPuzzle {
        game,
        picture: Arc::new(cached),
    })
}
