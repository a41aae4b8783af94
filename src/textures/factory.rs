//! Texture creation and registration.
//!
//! A [`TextureFactory`] allocates a blank surface, runs a painter over it and
//! turns the result into a texture. [`register_world_textures`] feeds every
//! scene texture through a factory into the
//! [`TextureCache`](crate::resources::texturestore::TextureCache), skipping
//! names that are already cached.

use log::info;
use raylib::prelude::*;

use super::character::{SHEET_HEIGHT, SHEET_WIDTH, paint_character_sheet};
use super::surface::{DrawSurface, RecordingSurface};
use super::terrain::{GRASS, PATH, TILE_TEXTURE_SIZE, TREE_TEXTURE_SIZE, paint_speckled_tile, paint_tree};
use crate::resources::texturestore::TextureCache;

pub const PLAYER_TEXTURE: &str = "player";
pub const GRASS_TEXTURE: &str = "grass";
pub const PATH_TEXTURE: &str = "path";
pub const TREE_TEXTURE: &str = "tree";

/// Painter callback handed to [`TextureFactory::create`].
pub type Painter<'p> = &'p mut dyn FnMut(&mut dyn DrawSurface);

/// Turns painted surfaces into textures.
pub trait TextureFactory {
    type Texture: Send + Sync + 'static;

    /// Create a `width` x `height` transparent surface, paint it and convert
    /// it into a texture named `name`.
    fn create(
        &mut self,
        name: &str,
        width: i32,
        height: i32,
        paint: Painter<'_>,
    ) -> Result<Self::Texture, String>;
}

/// Factory uploading raylib images to the GPU.
pub struct RaylibTextureFactory<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
}

impl<'a> RaylibTextureFactory<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self { rl, thread }
    }
}

impl TextureFactory for RaylibTextureFactory<'_> {
    type Texture = Texture2D;

    fn create(
        &mut self,
        name: &str,
        width: i32,
        height: i32,
        paint: Painter<'_>,
    ) -> Result<Texture2D, String> {
        if width <= 0 || height <= 0 {
            return Err(format!(
                "Invalid size {}x{} for texture '{}'",
                width, height, name
            ));
        }
        let mut image = Image::gen_image_color(width, height, Color::BLANK);
        paint(&mut image);
        self.rl
            .load_texture_from_image(self.thread, &image)
            .map_err(|e| format!("Failed to upload texture '{}': {:?}", name, e))
    }
}

/// Headless factory: the "texture" is the recorded draw list.
#[derive(Debug, Default)]
pub struct RecordingTextureFactory {
    /// Names passed to `create`, in call order.
    pub created: Vec<String>,
}

impl TextureFactory for RecordingTextureFactory {
    type Texture = RecordingSurface;

    fn create(
        &mut self,
        name: &str,
        width: i32,
        height: i32,
        paint: Painter<'_>,
    ) -> Result<RecordingSurface, String> {
        if width <= 0 || height <= 0 {
            return Err(format!(
                "Invalid size {}x{} for texture '{}'",
                width, height, name
            ));
        }
        let mut surface = RecordingSurface::new(width, height);
        paint(&mut surface);
        self.created.push(name.to_string());
        Ok(surface)
    }
}

/// Generate the player sheet, both ground tiles and the tree, each only if
/// its name is not yet in `cache`.
pub fn register_world_textures<F: TextureFactory>(
    cache: &mut TextureCache<F::Texture>,
    factory: &mut F,
    rng: &mut fastrand::Rng,
) -> Result<(), String> {
    let before = cache.len();

    cache.get_or_try_insert_with(PLAYER_TEXTURE, || {
        factory.create(PLAYER_TEXTURE, SHEET_WIDTH, SHEET_HEIGHT, &mut |s: &mut dyn DrawSurface| {
            paint_character_sheet(s)
        })
    })?;
    for (name, style) in [(GRASS_TEXTURE, &GRASS), (PATH_TEXTURE, &PATH)] {
        cache.get_or_try_insert_with(name, || {
            factory.create(
                name,
                TILE_TEXTURE_SIZE,
                TILE_TEXTURE_SIZE,
                &mut |s: &mut dyn DrawSurface| paint_speckled_tile(s, style, rng),
            )
        })?;
    }
    cache.get_or_try_insert_with(TREE_TEXTURE, || {
        factory.create(TREE_TEXTURE, TREE_TEXTURE_SIZE, TREE_TEXTURE_SIZE, &mut |s: &mut dyn DrawSurface| {
            paint_tree(s)
        })
    })?;

    let generated = cache.len() - before;
    if generated > 0 {
        info!("Generated {} world textures", generated);
    }
    Ok(())
}
