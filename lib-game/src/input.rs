use macroquad::prelude::*;

/// Discrete gameplay inputs. Window management inputs are handled
/// by the [crate::App] itself and never reach the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Action,
    Restart,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputModel {
    pub quit_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub action_pressed: bool,
    pub restart_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        // NOTE: macroquad turns touches into left mouse button presses
        let action_pressed = is_key_pressed(KeyCode::Space)
            || is_key_pressed(KeyCode::Up)
            || is_mouse_button_pressed(MouseButton::Left);
        let restart_requested = is_key_pressed(KeyCode::R);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let quit_requested = is_quit_requested();

        Self {
            quit_requested,
            fullscreen_toggle_requested,
            action_pressed,
            restart_requested,
        }
    }

    /// The gameplay events of this frame, in the order the game should see them.
    pub fn events(&self) -> impl Iterator<Item = InputEvent> {
        let action = self.action_pressed.then_some(InputEvent::Action);
        let restart = self.restart_requested.then_some(InputEvent::Restart);

        action.into_iter().chain(restart)
    }
}
