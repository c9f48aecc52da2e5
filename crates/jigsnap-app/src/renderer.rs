//! Turning pictures and tiles into displayable surfaces.
//!
//! [`TileRenderer`] is the seam between puzzle data and the GUI: the egui
//! implementation uploads textures, tests use a renderer that hands out ids.
//! [`TextureCache`] keeps the surfaces for the current preview and puzzle session so
//! each picture and tile is uploaded once.

use std::{fmt, sync::Arc};

use eframe::egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions, Vec2};
use image::RgbaImage;
use jigsnap_core::{Picture, Tile, TileLayout, reassemble};

use crate::state::{PuzzleState, SessionId};

/// Something that can be drawn as an image.
pub(crate) trait Surface {
    fn texture_id(&self) -> TextureId;
    /// Size in source pixels.
    fn pixel_size(&self) -> Vec2;
}

/// Produces a displayable surface from pixels.
pub(crate) trait TileRenderer {
    type Surface: Surface;

    fn render(&mut self, name: &str, pixels: &RgbaImage) -> Self::Surface;

    fn render_tile(&mut self, tile: &Tile) -> Self::Surface {
        let name = format!("tile-{}", tile.original_index());
        self.render(&name, tile.pixels())
    }
}

impl Surface for TextureHandle {
    fn texture_id(&self) -> TextureId {
        self.id()
    }

    fn pixel_size(&self) -> Vec2 {
        self.size_vec2()
    }
}

/// Uploads pixels as egui textures.
#[derive(Debug, Clone)]
pub(crate) struct EguiRenderer {
    ctx: Context,
}

impl EguiRenderer {
    #[must_use]
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl TileRenderer for EguiRenderer {
    type Surface = TextureHandle;

    fn render(&mut self, name: &str, pixels: &RgbaImage) -> TextureHandle {
        let size = [pixels.width() as usize, pixels.height() as usize];
        let image = ColorImage::from_rgba_unmultiplied(size, pixels.as_raw());
        self.ctx.load_texture(name, image, TextureOptions::LINEAR)
    }
}

/// Surfaces for one puzzle session.
pub(crate) struct SessionSurfaces<S> {
    session: SessionId,
    original: S,
    /// Indexed by each tile's original slot.
    tiles: Vec<S>,
}

impl<S: Surface> SessionSurfaces<S> {
    fn build<R>(renderer: &mut R, puzzle: &PuzzleState) -> Self
    where
        R: TileRenderer<Surface = S>,
    {
        let arrangement = puzzle.game.arrangement();
        let layout = TileLayout::for_picture(&puzzle.picture, puzzle.game.grid());

        let mut tiles: Vec<&Tile> = arrangement.tiles().map(|(_, tile)| tile).collect();
        tiles.sort_by_key(|tile| tile.original_index());
        let original = renderer.render("original", &reassemble(tiles.iter().copied(), &layout));
        let tiles = tiles
            .into_iter()
            .map(|tile| renderer.render_tile(tile))
            .collect();

        log::debug!("uploaded surfaces for session {}", puzzle.session);
        Self {
            session: puzzle.session,
            original,
            tiles,
        }
    }

    /// The cropped source picture, rebuilt from the tiles.
    #[must_use]
    pub(crate) fn original(&self) -> &S {
        &self.original
    }

    /// Returns the surface for a tile of this session.
    #[must_use]
    pub(crate) fn tile(&self, tile: &Tile) -> &S {
        &self.tiles[tile.original_index().index()]
    }
}

/// Caches the home screen preview and the current session's surfaces.
pub(crate) struct TextureCache<S> {
    preview: Option<(Arc<Picture>, S)>,
    session: Option<SessionSurfaces<S>>,
}

impl<S> fmt::Debug for SessionSurfaces<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSurfaces")
            .field("session", &self.session)
            .field("tiles", &self.tiles.len())
            .finish_non_exhaustive()
    }
}

// Surfaces such as `TextureHandle` are not `Debug`, so only the cache shape is printed.
impl<S> fmt::Debug for TextureCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureCache")
            .field("has_preview", &self.preview.is_some())
            .field("session", &self.session)
            .finish()
    }
}

impl<S> Default for TextureCache<S> {
    fn default() -> Self {
        Self {
            preview: None,
            session: None,
        }
    }
}

impl<S: Surface> TextureCache<S> {
    /// Returns the surface for `picture`, rendering it if the picture changed.
    pub(crate) fn preview<R>(&mut self, renderer: &mut R, picture: &Arc<Picture>) -> &S
    where
        R: TileRenderer<Surface = S>,
    {
        if self
            .preview
            .as_ref()
            .is_some_and(|(cached, _)| !Arc::ptr_eq(cached, picture))
        {
            self.preview = None;
        }
        let (_, surface) = self.preview.get_or_insert_with(|| {
            (
                Arc::clone(picture),
                renderer.render("preview", picture.as_rgba()),
            )
        });
        surface
    }

    /// Returns the surfaces for `puzzle`, rendering them on the first call for a session.
    pub(crate) fn session<R>(
        &mut self,
        renderer: &mut R,
        puzzle: &PuzzleState,
    ) -> &SessionSurfaces<S>
    where
        R: TileRenderer<Surface = S>,
    {
        if self
            .session
            .as_ref()
            .is_some_and(|surfaces| surfaces.session != puzzle.session)
        {
            self.session = None;
        }
        self.session
            .get_or_insert_with(|| SessionSurfaces::build(renderer, puzzle))
    }

    /// Drops every cached surface.
    pub(crate) fn clear(&mut self) {
        self.preview = None;
        self.session = None;
    }
}
