//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let paragraph = Paragraph::new(build_help_content()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_key = |lines: &mut Vec<Line<'static>>, key: &str, desc: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {:<10}", key),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(desc.to_string()),
        ]));
    };

    add_section(&mut lines, "Navigation");
    add_key(&mut lines, "j / ↓", "Next row");
    add_key(&mut lines, "k / ↑", "Previous row");
    add_key(&mut lines, "g / Home", "First row");
    add_key(&mut lines, "G / End", "Last row");

    add_section(&mut lines, "Filtering");
    add_key(&mut lines, "f", "Open status filter");
    add_key(&mut lines, "a", "Show all rows");

    add_section(&mut lines, "Table");
    add_key(&mut lines, "r", "Reload table from file");

    add_section(&mut lines, "General");
    add_key(&mut lines, "?", "Toggle this help");
    add_key(&mut lines, "q", "Quit");
    add_key(&mut lines, "Ctrl+c", "Force quit");

    lines
}
