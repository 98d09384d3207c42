// src/tui/ui.rs

//! Pane rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::layout::LayoutState;

/// Titles of the three panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneTitles {
    pub narration: String,
    pub history: String,
    pub graph: String,
}

impl Default for PaneTitles {
    fn default() -> Self {
        Self {
            narration: "Command Overview".to_string(),
            history: "Previous Commands".to_string(),
            graph: "Git Log Graph".to_string(),
        }
    }
}

/// Draw one layout snapshot.
///
/// Left column: narration on top, graph below. Right column: history.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, layout: &LayoutState, titles: &PaneTitles) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(f.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    f.render_widget(pane(layout.narration_pane(), &titles.narration), left[0]);
    f.render_widget(pane(layout.graph_pane().to_string(), &titles.graph), left[1]);
    f.render_widget(pane(layout.history_pane(), &titles.history), columns[1]);
}

fn pane(text: String, title: &str) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
    )
}
