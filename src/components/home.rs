//! Home component - Main application screen
//!
//! Renders the active table (header row plus the currently visible data rows)
//! and owns cursor navigation over the visible rows.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::domain::TableInfo;
use crate::model::filter::FilterValue;
use crate::model::row::{Row, Table};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Maximum rendered width of a single column
const MAX_COLUMN_WIDTH: usize = 50;

/// Home component for the main application view
/// Owns cursor state over the visible data rows
pub struct HomeComponent {
    /// Cursor position, as an index into the visible data rows
    pub cursor: usize,

    /// Viewport scroll offset (in visible data rows)
    pub scroll: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll: 0,
        }
    }

    /// Data rows of the table that are currently visible, in table order
    pub fn visible_rows<'a>(table: &'a Table) -> Vec<&'a Row> {
        table
            .rows
            .iter()
            .filter(|r| !r.is_header() && r.is_visible())
            .collect()
    }

    pub fn select_next(&mut self, table: &Table) {
        let count = table.visible_row_count();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn select_last(&mut self, table: &Table) {
        self.cursor = table.visible_row_count().saturating_sub(1);
    }

    /// Keep the cursor inside the visible row range after a re-filter
    pub fn clamp_cursor(&mut self, table: &Table) {
        let count = table.visible_row_count();
        if count == 0 {
            self.cursor = 0;
            self.scroll = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs domain state; see draw_home_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Read-only state the home screen needs for rendering
pub struct HomeRenderContext<'a> {
    pub table: Option<&'a Table>,
    pub table_info: Option<&'a TableInfo>,
    pub filter: &'a FilterValue,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_info_box(frame, layout.info, ctx);

    if let Some(error) = ctx.error {
        render_error(frame, layout.table, error);
    } else if let Some(table) = ctx.table {
        render_table(frame, layout.table, home, table, ctx.filter);
    } else {
        render_error(frame, layout.table, "No table loaded");
    }

    render_help_bar(frame, layout.help, ctx.status_message);
    Ok(())
}

fn render_info_box(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let lines = match ctx.table_info {
        Some(info) => vec![
            Line::from(vec![
                Span::styled("Table: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    info.table_id.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", info.source_path),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![
                Span::styled("Rows: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{}", info.data_rows)),
                Span::styled("  Statuses: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{}", info.statuses)),
            ]),
            Line::from(vec![
                Span::styled("Loaded: ", Style::default().fg(Color::DarkGray)),
                Span::raw(info.loaded_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "No table loaded",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Info ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(info, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    table: &Table,
    filter: &FilterValue,
) {
    let header = table.rows.iter().find(|r| r.is_header());
    let visible = HomeComponent::visible_rows(table);

    let widths = column_widths(header, &visible);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(header) = header {
        lines.push(format_row(
            header,
            &widths,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let separator: String = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the cursor row inside the viewport
    let header_lines = lines.len();
    let viewport = (area.height.saturating_sub(2) as usize).saturating_sub(header_lines);
    if viewport > 0 {
        if home.cursor < home.scroll {
            home.scroll = home.cursor;
        } else if home.cursor >= home.scroll + viewport {
            home.scroll = home.cursor + 1 - viewport;
        }
    }

    for (idx, row) in visible.iter().enumerate().skip(home.scroll) {
        let style = if idx == home.cursor {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(format_row(row, &widths, style));
    }

    if visible.is_empty() {
        let message = if filter.is_all() {
            "Table has no data rows".to_string()
        } else {
            format!("No rows match status '{}'", filter)
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow),
        )));
    }

    let mut title = format!(" {} ", table.id);
    if !filter.is_all() {
        title = format!("{}[status:{}] ", title, filter);
    }
    title = format!(
        "{}{} of {} rows ",
        title,
        table.visible_row_count(),
        table.data_row_count()
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines: Vec<Line> = error
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red))))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, status_message: Option<&str>) {
    let spans = match status_message {
        Some(msg) => vec![Span::styled(
            format!(" {} ", msg),
            Style::default().fg(Color::Green),
        )],
        None => vec![
            Span::styled(" f ", Style::default().fg(Color::Yellow)),
            Span::raw("Filter  "),
            Span::styled(" a ", Style::default().fg(Color::Yellow)),
            Span::raw("Show all  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" r ", Style::default().fg(Color::Cyan)),
            Span::raw("Reload  "),
            Span::styled(" ? ", Style::default().fg(Color::Cyan)),
            Span::raw("Help  "),
            Span::styled(" q ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ],
    };

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Column widths over the header and the visible rows, capped per column
fn column_widths(header: Option<&Row>, visible: &[&Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    let mut measure = |row: &Row| {
        for (i, cell) in row.cells().iter().enumerate() {
            let w = cell.text.width();
            if i >= widths.len() {
                widths.push(w);
            } else if w > widths[i] {
                widths[i] = w;
            }
        }
    };

    if let Some(header) = header {
        measure(header);
    }
    for row in visible {
        measure(*row);
    }

    for w in &mut widths {
        *w = (*w).min(MAX_COLUMN_WIDTH);
    }
    widths
}

fn format_row(row: &Row, widths: &[usize], style: Style) -> Line<'static> {
    let spans: Vec<Span> = row
        .cells()
        .iter()
        .enumerate()
        .flat_map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(10);
            let truncated = if cell.text.width() > width {
                let mut s = String::new();
                for c in cell.text.chars() {
                    if s.width() + 4 > width {
                        break;
                    }
                    s.push(c);
                }
                format!("{}...", s)
            } else {
                cell.text.clone()
            };
            let pad = width.saturating_sub(truncated.width());
            vec![
                Span::styled(format!("{}{}", truncated, " ".repeat(pad)), style),
                Span::raw(" │ "),
            ]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues_table() -> Table {
        Table::new(
            "issues",
            vec![
                Row::header(["id", "status", "summary"]),
                Row::data(["#1", "open", "first"]),
                Row::data(["#2", "closed", "second"]),
                Row::data(["#3", "open", "third"]),
            ],
        )
    }

    #[test]
    fn test_visible_rows_excludes_header_and_hidden() {
        let mut table = issues_table();
        table.rows[2].set_visible(false);

        let visible = HomeComponent::visible_rows(&table);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].status(), Some("open"));
        assert_eq!(visible[1].status(), Some("open"));
    }

    #[test]
    fn test_cursor_navigation_stays_in_bounds() {
        let table = issues_table();
        let mut home = HomeComponent::new();

        home.select_prev();
        assert_eq!(home.cursor, 0);

        home.select_next(&table);
        home.select_next(&table);
        home.select_next(&table);
        assert_eq!(home.cursor, 2);

        home.select_last(&table);
        assert_eq!(home.cursor, 2);

        home.select_first();
        assert_eq!(home.cursor, 0);
    }

    #[test]
    fn test_clamp_cursor_after_refilter() {
        let mut table = issues_table();
        let mut home = HomeComponent::new();
        home.select_last(&table);
        assert_eq!(home.cursor, 2);

        // Hiding rows shrinks the visible range
        table.rows[1].set_visible(false);
        table.rows[3].set_visible(false);
        home.clamp_cursor(&table);
        assert_eq!(home.cursor, 0);
    }

    #[test]
    fn test_column_widths_capped() {
        let long = "x".repeat(80);
        let table = Table::new(
            "wide",
            vec![
                Row::header(["id", "status"]),
                Row::data(vec!["#1".to_string(), long]),
            ],
        );
        let visible = HomeComponent::visible_rows(&table);
        let widths = column_widths(table.rows.first(), &visible);
        assert_eq!(widths[1], MAX_COLUMN_WIDTH);
    }
}
