//! Status filter dialog component
//!
//! Allows selecting a status value to filter rows by. The first entry is the
//! `all` sentinel, which shows every row.

use crate::action::Action;
use crate::component::Component;
use crate::model::filter::{FilterValue, FILTER_ALL};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Status filter dialog
pub struct StatusFilterDialog {
    /// Available status values
    pub statuses: Vec<String>,
    /// Selected entry index (0 is the "all" entry)
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Current filter (to show which entry is active)
    pub current_filter: FilterValue,
}

impl Default for StatusFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            statuses: Vec::new(),
            selected_index: 0,
            list_state,
            current_filter: FilterValue::All,
        }
    }

    /// Set available statuses and preselect the active filter
    pub fn set_statuses(&mut self, statuses: Vec<String>, current_filter: &FilterValue) {
        self.statuses = statuses;
        self.current_filter = current_filter.clone();

        self.selected_index = match current_filter {
            FilterValue::All => 0,
            FilterValue::Status(s) => self
                .statuses
                .iter()
                .position(|status| status == s)
                .map(|idx| idx + 1) // +1 because of the "all" entry
                .unwrap_or(0),
        };
        self.list_state.select(Some(self.selected_index));
    }

    /// Get the selected status (None means the "all" entry)
    pub fn selected_status(&self) -> Option<&str> {
        if self.selected_index == 0 {
            None
        } else {
            self.statuses
                .get(self.selected_index - 1)
                .map(|s| s.as_str())
        }
    }

    fn select_next(&mut self) {
        // "all" entry plus one entry per status
        if self.selected_index < self.statuses.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for StatusFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => {
                if let Some(status) = self.selected_status() {
                    Some(Action::SetStatusFilter(status.to_string()))
                } else {
                    Some(Action::ClearStatusFilter)
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 40u16.min(area.width.saturating_sub(4));
        let content_height = self.statuses.len() as u16 + 3;
        let popup_height = (content_height + 6).min(area.height.saturating_sub(4)).max(12);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Status list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header_text = match &self.current_filter {
            FilterValue::All => "Showing all rows".to_string(),
            FilterValue::Status(s) => format!("Current: status:{}", s),
        };

        let header = Paragraph::new(Line::from(vec![Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Status ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        // Status list, with the "all" sentinel on top
        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
            Span::styled(
                if self.current_filter.is_all() {
                    "● "
                } else {
                    "  "
                },
                Style::default().fg(Color::Green),
            ),
            Span::styled(FILTER_ALL, Style::default().fg(Color::DarkGray)),
        ]))];

        for status in &self.statuses {
            let is_current = self.current_filter == FilterValue::Status(status.clone());
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    if is_current { "● " } else { "  " },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("status:{}", status),
                    if is_current {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);

        // Help bar
        let help_text = vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ];

        let help = Paragraph::new(Line::from(help_text))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}
