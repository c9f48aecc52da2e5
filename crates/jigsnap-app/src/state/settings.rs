use std::{env, path::PathBuf};

use jigsnap_core::GridSize;
use jigsnap_game::ShuffleSeed;

/// Directory name used under the system temp dir when no cache dir is configured.
const DEFAULT_CACHE_DIR_NAME: &str = "jigsnap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) piece_count: GridSize,
    pub(crate) cache_dir: PathBuf,
    /// Fixed seed for every shuffle; a fresh random seed is drawn per puzzle when unset.
    pub(crate) seed: Option<ShuffleSeed>,
}

impl Settings {
    #[must_use]
    pub(crate) fn default_cache_dir() -> PathBuf {
        env::temp_dir().join(DEFAULT_CACHE_DIR_NAME)
    }

    #[must_use]
    pub(crate) fn shuffle_seed(&self) -> ShuffleSeed {
        self.seed.unwrap_or_else(ShuffleSeed::random)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            piece_count: GridSize::DEFAULT,
            cache_dir: Self::default_cache_dir(),
            seed: None,
        }
    }
}
