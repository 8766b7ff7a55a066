mod components;

use anyhow::Context;
use hashbrown::HashMap;
use log::warn;

pub use components::*;
use macroquad::prelude::*;

const FONT_SCALE: f32 = 1.0;
const MAIN_FONT_SIZE: u16 = 50;
const HINT_FONT_SIZE: u16 = 30;
const ANNOUNCEMENT_SPACING: f32 = 30.0;

/// Render does rendering stuff. Every frame the game exports what it
/// wants to see into the render buffers, which get drawn and cleared
/// on the next frame.
///
/// It also provides a simple asset storage for quick access
/// for the rendering code callers.
pub struct Render {
    pub ui_font: FontKey,
    pub clear_color: Color,
    view: Rect,

    drawables: Vec<Drawable>,
    texts: Vec<GlyphText>,
    announcement: Option<AnnouncementText>,

    textures: HashMap<TextureKey, Texture2D>,
    fonts: HashMap<FontKey, Font>,
}

impl Render {
    /// Creates a render which maps `view` onto the whole window.
    pub fn new(view: Rect) -> Self {
        Self {
            ui_font: FontKey("undefined"),
            clear_color: BLACK,
            view,
            drawables: Vec::new(),
            texts: Vec::new(),
            announcement: None,
            textures: HashMap::new(),
            fonts: HashMap::new(),
        }
    }

    pub fn view(&self) -> Rect {
        self.view
    }

    pub fn add_texture(&mut self, key: TextureKey, texture: &Texture2D) {
        self.textures.insert(key, texture.clone());
    }

    pub fn add_font(&mut self, key: FontKey, font: &Font) {
        self.fonts.insert(key, font.clone());
    }

    /// Loads an image into the texture store. Missing files and broken
    /// images are both reported as errors.
    pub async fn load_texture(&mut self, key: TextureKey, path: &str) -> anyhow::Result<()> {
        let bytes = load_file(path)
            .await
            .with_context(|| format!("Loading texture {path:?}"))?;
        let image = decode_image(&bytes).with_context(|| format!("Loading texture {path:?}"))?;
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Linear);
        self.add_texture(key, &texture);

        Ok(())
    }

    pub async fn load_font(&mut self, key: FontKey, path: &str) -> anyhow::Result<()> {
        let font = load_ttf_font(path)
            .await
            .with_context(|| format!("Loading font {path:?}"))?;
        self.add_font(key, &font);

        Ok(())
    }

    /// Size of the texture in pixels, if it is loaded.
    pub fn texture_size(&self, key: TextureKey) -> Option<Vec2> {
        self.textures.get(&key).map(|x| x.size())
    }

    pub fn get_font(&self, key: FontKey) -> Option<&Font> {
        self.fonts.get(&key)
    }

    pub fn new_frame(&mut self) {
        self.drawables.clear();
        self.texts.clear();
        self.announcement = None;
    }

    pub fn draw(&mut self, drawable: impl Into<Drawable>) {
        self.drawables.push(drawable.into());
    }

    pub fn put_text(&mut self, text: GlyphText) {
        self.texts.push(text);
    }

    pub fn announce(&mut self, announcement: AnnouncementText) {
        self.announcement = Some(announcement);
    }

    pub fn render(&mut self) {
        clear_background(self.clear_color);

        set_camera(&self.world_camera());
        self.draw_world();
        self.draw_texts();
        self.draw_announcement_text();

        set_default_camera();
    }

    fn draw_world(&self) {
        for drawable in &self.drawables {
            match drawable {
                Drawable::Sprite(sprite) => self.draw_sprite(sprite),
                Drawable::Rect(rect) => Self::draw_rect(rect),
                Drawable::Ellipse(ellipse) => Self::draw_ellipse(ellipse),
            }
        }
    }

    fn draw_sprite(&self, sprite: &Sprite) {
        let Some(texture) = self.textures.get(&sprite.texture) else {
            warn!("No texture {:?}", sprite.texture.0);
            return;
        };

        draw_texture_ex(
            texture,
            sprite.rect.x,
            sprite.rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(sprite.rect.size()),
                rotation: sprite.rotation,
                flip_y: sprite.flip_y,
                ..Default::default()
            },
        );
    }

    fn draw_rect(shape: &RectShape) {
        let center = shape.rect.center();

        draw_rectangle_ex(
            center.x,
            center.y,
            shape.rect.w,
            shape.rect.h,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: shape.rotation,
                color: shape.color,
            },
        );
    }

    fn draw_ellipse(shape: &EllipseShape) {
        let center = shape.rect.center();

        draw_ellipse(
            center.x,
            center.y,
            shape.rect.w / 2.0,
            shape.rect.h / 2.0,
            0.0,
            shape.color,
        );
    }

    fn draw_texts(&self) {
        for text in &self.texts {
            let font = self.fonts.get(&text.font);
            let measure = measure_text(&text.string, font, text.font_size, FONT_SCALE);

            draw_text_ex(
                &text.string,
                text.pos.x,
                text.pos.y + measure.offset_y,
                TextParams {
                    font,
                    font_size: text.font_size,
                    font_scale: FONT_SCALE,
                    color: text.color,
                    ..Default::default()
                },
            );
        }
    }

    fn draw_announcement_text(&self) {
        let Some(announce) = self.announcement else {
            return;
        };
        let font = self.fonts.get(&self.ui_font);
        let view_rect = self.view;
        let view_center = view_rect.center();

        draw_rectangle(
            view_rect.x,
            view_rect.y,
            view_rect.w,
            view_rect.h,
            Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.5,
            },
        );

        let center = get_text_center(announce.heading, font, MAIN_FONT_SIZE, FONT_SCALE, 0.0);
        draw_text_ex(
            announce.heading,
            view_center.x - center.x,
            view_center.y - ANNOUNCEMENT_SPACING - center.y,
            TextParams {
                font,
                font_size: MAIN_FONT_SIZE,
                color: announce.heading_color,
                font_scale: FONT_SCALE,
                ..Default::default()
            },
        );

        let Some(hint) = announce.body else {
            return;
        };
        let center = get_text_center(hint, font, HINT_FONT_SIZE, FONT_SCALE, 0.0);
        draw_text_ex(
            hint,
            view_center.x - center.x,
            view_center.y + ANNOUNCEMENT_SPACING - center.y,
            TextParams {
                font,
                font_size: HINT_FONT_SIZE,
                color: WHITE,
                font_scale: FONT_SCALE,
                ..Default::default()
            },
        );
    }

    fn world_camera(&self) -> Camera2D {
        let mut cam = Camera2D::from_display_rect(self.view);
        cam.zoom.y *= -1.0;

        cam
    }
}

fn decode_image(bytes: &[u8]) -> anyhow::Result<Image> {
    let image = Image::from_file_with_format(bytes, None).context("Decoding image")?;
    Ok(image)
}
