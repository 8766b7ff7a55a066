use lib_game::{
    AnnouncementText, EllipseShape, FontKey, GlyphText, RectShape, Render, Sprite, TextureKey,
};
use lib_sim::{Aabb, Avatar, Decoration, GameWorld, HighScoreStore, Obstacle, Phase};
use macroquad::prelude::*;

pub const AVATAR_TEXTURE: TextureKey = TextureKey("avatar");
pub const OBSTACLE_TEXTURE: TextureKey = TextureKey("obstacle");
pub const CLOUD_TEXTURE: TextureKey = TextureKey("cloud");
pub const UI_FONT: FontKey = FontKey("ui");

pub const SKY_COLOR: Color = macroquad::color_u8!(135, 206, 235, 255);
const AVATAR_COLOR: Color = macroquad::color_u8!(255, 0, 0, 255);
const OBSTACLE_COLOR: Color = macroquad::color_u8!(0, 200, 50, 255);
const CLOUD_COLOR: Color = macroquad::color_u8!(255, 255, 255, 180);
const GAME_OVER_COLOR: Color = macroquad::color_u8!(255, 50, 50, 255);

const HUD_POS: Vec2 = vec2(10.0, 10.0);
const HUD_FONT_SIZE: u16 = 36;

static GAME_OVER_TEXT: &str = "GAME OVER";
static RESTART_HINT: &str = "Press SPACE to play again";

pub fn export<S: HighScoreStore>(world: &GameWorld<S>, render: &mut Render) {
    for decoration in world.decorations() {
        export_decoration(decoration, render);
    }
    for obstacle in world.obstacles() {
        export_obstacle(obstacle, render);
    }
    export_avatar(world.avatar(), render);

    render.put_text(GlyphText {
        font: UI_FONT,
        string: format!(
            "Score: {} | High Score: {}",
            world.score(),
            world.high_score()
        )
        .into(),
        pos: HUD_POS,
        font_size: HUD_FONT_SIZE,
        color: WHITE,
    });

    if world.phase() == Phase::GameOver {
        render.announce(AnnouncementText {
            heading: GAME_OVER_TEXT,
            heading_color: GAME_OVER_COLOR,
            body: Some(RESTART_HINT),
        });
    }
}

fn export_decoration(decoration: &Decoration, render: &mut Render) {
    let pos = decoration.pos();

    match render.texture_size(CLOUD_TEXTURE) {
        Some(size) => {
            let size = size * decoration.scale();
            render.draw(Sprite {
                texture: CLOUD_TEXTURE,
                rect: Rect::new(pos.x, pos.y, size.x, size.y),
                rotation: 0.0,
                flip_y: false,
            });
        }
        None => {
            let size = decoration.size();
            render.draw(EllipseShape {
                rect: Rect::new(pos.x, pos.y, size.x, size.y),
                color: CLOUD_COLOR,
            });
        }
    }
}

fn export_obstacle(obstacle: &Obstacle, render: &mut Render) {
    let segments = [(obstacle.top_segment(), true), (obstacle.bottom_segment(), false)];
    let has_texture = render.texture_size(OBSTACLE_TEXTURE).is_some();

    for (segment, flip_y) in segments {
        let rect = aabb_rect(segment);
        if has_texture {
            render.draw(Sprite {
                texture: OBSTACLE_TEXTURE,
                rect,
                rotation: 0.0,
                flip_y,
            });
        } else {
            render.draw(RectShape {
                rect,
                rotation: 0.0,
                color: OBSTACLE_COLOR,
            });
        }
    }
}

fn export_avatar(avatar: &Avatar, render: &mut Render) {
    let rect = aabb_rect(avatar.bounds());
    // Positive tilt is nose up, which is a counter-clockwise turn on screen
    let rotation = -avatar.angle().to_radians();

    if render.texture_size(AVATAR_TEXTURE).is_some() {
        render.draw(Sprite {
            texture: AVATAR_TEXTURE,
            rect,
            rotation,
            flip_y: false,
        });
    } else {
        render.draw(RectShape {
            rect,
            rotation,
            color: AVATAR_COLOR,
        });
    }
}

fn aabb_rect(aabb: Aabb) -> Rect {
    let size = aabb.size();
    Rect::new(aabb.min.x, aabb.min.y, size.x, size.y)
}
