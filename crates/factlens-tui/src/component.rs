//! Component trait: the interface every UI pane implements.
//!
//! - Components own their view state (scroll, cursor) and render themselves.
//! - Components read `AppState` and never mutate the session directly.
//! - Components produce `Vec<Action>`; the App dispatches them.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;

pub trait Component {
    fn id(&self) -> ComponentId;

    /// Handle a key event. Only called when this component has focus.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Handle a mouse event inside `area`.
    fn handle_mouse(&mut self, _event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Called each UI tick. For time-based updates.
    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Receive an action dispatched by the App, focused or not.
    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}
