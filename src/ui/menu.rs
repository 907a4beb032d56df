use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::registry::GameInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Game(GameInfo),
    Scores,
    Settings,
    Exit,
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::Game(info) => format!("{} : {}", info.name, info.description),
            MenuItem::Scores => "View Scores".to_string(),
            MenuItem::Settings => "Settings".to_string(),
            MenuItem::Exit => "Exit".to_string(),
        }
    }
}

/// Game list followed by the fixed shell entries. Selection wraps.
#[derive(Debug, Clone)]
pub struct MainMenu {
    items: Vec<MenuItem>,
    selected: usize,
    total_games: usize,
}

impl MainMenu {
    pub fn new(games: Vec<GameInfo>, total_games: usize) -> Self {
        let mut items: Vec<MenuItem> = games.into_iter().map(MenuItem::Game).collect();
        items.extend([MenuItem::Scores, MenuItem::Settings, MenuItem::Exit]);
        Self {
            items,
            selected: 0,
            total_games,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> &MenuItem {
        &self.items[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [title, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .margin(2)
        .areas(area);

        frame.render_widget(
            Paragraph::new(" PUZZLE STUDIO ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            title,
        );

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {}", item.label())).style(style)
            })
            .collect();
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .title(format!(" MAIN MENU · {} games played ", self.total_games))
                    .borders(Borders::ALL),
            ),
            list,
        );

        frame.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Select  [Esc/Q] Quit")
                .alignment(Alignment::Center),
            footer,
        );
    }
}
