//! Quit confirmation dialog component
//!
//! Reminds the user which table is open and whether a status filter is still
//! active before quitting.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::filter::FilterValue;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Default)]
pub struct QuitDialog {
    /// Id of the open table, shown in the prompt
    pub table_id: Option<String>,
    /// Filter active at the time the dialog opened
    pub filter: FilterValue,
}

impl QuitDialog {
    /// Capture what the prompt should mention
    pub fn set_context(&mut self, table_id: Option<&str>, filter: &FilterValue) {
        self.table_id = table_id.map(|id| id.to_string());
        self.filter = filter.clone();
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 46, 8);

        frame.render_widget(Clear, popup_area);

        let prompt = match &self.table_id {
            Some(id) => format!("Close table '{}' and quit?", id),
            None => "Quit tablesift?".to_string(),
        };

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                prompt,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        // The filter is remembered in config, so leaving with one active is
        // worth a note
        if let FilterValue::Status(status) = &self.filter {
            content.push(Line::from(Span::styled(
                format!("Filter status:{} stays active for next time", status),
                Style::default().fg(Color::Yellow),
            )));
        } else {
            content.push(Line::from(""));
        }

        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " y/Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Stay"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_captures_table_and_filter() {
        let mut dialog = QuitDialog::default();
        dialog.set_context(Some("issues"), &FilterValue::parse("open"));

        assert_eq!(dialog.table_id.as_deref(), Some("issues"));
        assert_eq!(dialog.filter, FilterValue::parse("open"));
    }

    #[test]
    fn test_context_without_table() {
        let mut dialog = QuitDialog::default();
        dialog.set_context(None, &FilterValue::All);

        assert!(dialog.table_id.is_none());
        assert!(dialog.filter.is_all());
    }
}
