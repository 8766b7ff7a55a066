use std::borrow::Cow;

use macroquad::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct TextureKey(pub &'static str);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct FontKey(pub &'static str);

/// Draws a texture stretched over `rect`.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub texture: TextureKey,
    pub rect: Rect,
    /// Rotation around the center of `rect`, in radians.
    pub rotation: f32,
    pub flip_y: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct RectShape {
    pub rect: Rect,
    /// Rotation around the center of `rect`, in radians.
    pub rotation: f32,
    pub color: Color,
}

/// An ellipse inscribed into `rect`.
#[derive(Clone, Copy, Debug)]
pub struct EllipseShape {
    pub rect: Rect,
    pub color: Color,
}

/// Anything that goes into the world layer. Drawn in the order
/// it was put into the [super::Render].
#[derive(Clone, Copy, Debug)]
pub enum Drawable {
    Sprite(Sprite),
    Rect(RectShape),
    Ellipse(EllipseShape),
}

impl From<Sprite> for Drawable {
    fn from(value: Sprite) -> Self {
        Drawable::Sprite(value)
    }
}

impl From<RectShape> for Drawable {
    fn from(value: RectShape) -> Self {
        Drawable::Rect(value)
    }
}

impl From<EllipseShape> for Drawable {
    fn from(value: EllipseShape) -> Self {
        Drawable::Ellipse(value)
    }
}

/// Draws some text with glyphs. `pos` is the top-left corner of the text.
///
/// If the font is missing, macroquad's built-in one is used.
#[derive(Clone, Debug)]
pub struct GlyphText {
    pub font: FontKey,
    pub string: Cow<'static, str>,
    pub pos: Vec2,
    pub font_size: u16,
    pub color: Color,
}

/// Renders an announcement text with a background.
#[derive(Clone, Copy, Debug)]
pub struct AnnouncementText {
    pub heading: &'static str,
    pub heading_color: Color,
    pub body: Option<&'static str>,
}
