/// Rendering trait implemented once per game: draws a session's state into a
/// region of the frame.
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    Frame,
};

pub trait GameRenderer<State> {
    fn render(frame: &mut Frame, area: Rect, state: &State);
}

/// A `width x height` rectangle centred in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
