//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog, StatusFilterDialog,
};
use crate::config::Config;
use crate::model::domain::{DomainState, TableInfo};
use crate::model::filter::FilterValue;
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::{Path, PathBuf};

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (tables and filter)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display in the help bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub status_filter_dialog: StatusFilterDialog,
    pub help_dialog: HelpDialog,

    /// Current config (for saving filter changes)
    pub config: Option<Config>,
}

impl App {
    /// Create a new App instance
    ///
    /// The table path comes from the CLI argument if given, otherwise from
    /// the saved config. The last applied filter is restored from config.
    pub fn new(source_arg: Option<PathBuf>) -> App {
        let mut app = Self::create_app();

        let config = Config::load();
        if let Some(cfg) = &config {
            app.domain.filter = FilterValue::parse(&cfg.filter);
        }

        let path = source_arg.or_else(|| {
            config.as_ref().and_then(|cfg| {
                if cfg.table_path.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(&cfg.table_path))
                }
            })
        });

        let mut cfg = config.unwrap_or_default();
        if let Some(p) = &path {
            cfg.table_path = p.display().to_string();
            if let Err(e) = cfg.save() {
                app.status_message = Some(format!("Failed to save config: {}", e));
            }
        }
        app.config = Some(cfg);

        match path {
            Some(p) => app.load_table_from(&p),
            None => {
                app.error = Some(
                    "No table file given.\n\nUsage: tablesift <table.csv>\n\n\
                     The first CSV record is the header row; the second column\n\
                     of every following record is the status used for filtering."
                        .to_string(),
                );
            }
        }

        app
    }

    fn create_app() -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog::default(),
            status_filter_dialog: StatusFilterDialog::new(),
            help_dialog: HelpDialog,
            config: None,
        }
    }

    /// Load (or reload) the active table from a file
    fn load_table_from(&mut self, path: &Path) {
        match services::load_table(path) {
            Ok(table) => {
                let statuses = table.distinct_statuses();
                self.domain.table_info = Some(TableInfo {
                    table_id: table.id.clone(),
                    source_path: path.display().to_string(),
                    data_rows: table.data_row_count(),
                    statuses: statuses.len(),
                    loaded_at: Local::now(),
                });
                self.domain.active_table_id = Some(table.id.clone());
                self.domain.statuses = statuses;
                self.domain.source_path = Some(path.to_path_buf());
                self.domain.document.insert(table);
                self.error = None;
                self.home.select_first();

                if let Err(e) = self.apply_current_filter() {
                    self.error = Some(format!("{:#}", e));
                }
            }
            Err(e) => {
                self.error = Some(format!("{:#}", e));
            }
        }
    }

    /// Re-run the filter pass on the active table
    fn apply_current_filter(&mut self) -> Result<()> {
        let table_id = match &self.domain.active_table_id {
            Some(id) => id.clone(),
            None => return Ok(()),
        };
        let filter = self.domain.filter.clone();
        self.domain.document.apply_filter(&table_id, &filter)?;

        if let Some(table) = self.domain.active_table() {
            self.home.clamp_cursor(table);
        }
        Ok(())
    }

    /// Change the filter, re-run the pass, and persist the choice
    fn set_filter(&mut self, filter: FilterValue) -> Result<()> {
        self.domain.filter = filter;
        self.apply_current_filter()?;

        self.status_message = Some(match &self.domain.filter {
            FilterValue::All => "Showing all rows".to_string(),
            FilterValue::Status(s) => format!("Filtering by status:{}", s),
        });

        if let Some(cfg) = &mut self.config {
            cfg.filter = self.domain.filter.to_string();
            if let Err(e) = cfg.save() {
                self.status_message = Some(format!("Failed to save config: {}", e));
            }
        }
        Ok(())
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.status_message = None;

        // Force quit works everywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        // The top modal takes all input
        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::StatusFilter => self.status_filter_dialog.handle_key_event(key),
                Modal::Help => self.help_dialog.handle_key_event(key),
            };
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('f') => Some(Action::OpenStatusFilter),
            KeyCode::Char('a') => Some(Action::ClearStatusFilter),
            KeyCode::Char('r') => Some(Action::ReloadTable),
            _ => return self.home.handle_key_event(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) | Action::ModalUp | Action::ModalDown => {}
            Action::ForceQuit => self.should_quit = true,

            // Navigation
            Action::NextRow => {
                if let Some(table) = self.domain.active_table() {
                    self.home.select_next(table);
                }
            }
            Action::PrevRow => self.home.select_prev(),
            Action::FirstRow => self.home.select_first(),
            Action::LastRow => {
                if let Some(table) = self.domain.active_table() {
                    self.home.select_last(table);
                }
            }

            // Modals
            Action::OpenQuitDialog => {
                self.quit_dialog
                    .set_context(self.domain.active_table_id.as_deref(), &self.domain.filter);
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }

            // Status filter
            Action::OpenStatusFilter => {
                self.status_filter_dialog
                    .set_statuses(self.domain.statuses.clone(), &self.domain.filter);
                self.modals.push(Modal::StatusFilter);
            }
            Action::SetStatusFilter(status) => {
                if self.modals.top() == Some(&Modal::StatusFilter) {
                    self.modals.pop();
                }
                self.set_filter(FilterValue::parse(&status))?;
            }
            Action::ClearStatusFilter => {
                if self.modals.top() == Some(&Modal::StatusFilter) {
                    self.modals.pop();
                }
                self.set_filter(FilterValue::All)?;
            }

            // Table management
            Action::ReloadTable => {
                if let Some(path) = self.domain.source_path.clone() {
                    self.load_table_from(&path);
                    if self.error.is_none() {
                        if let Some(info) = &self.domain.table_info {
                            self.status_message =
                                Some(format!("Reloaded {} rows", info.data_rows));
                        }
                    }
                } else {
                    self.status_message = Some("No source file to reload".to_string());
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            table: self.domain.active_table(),
            table_info: self.domain.table_info.as_ref(),
            filter: &self.domain.filter,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        // Only the top modal is drawn
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::StatusFilter) => self.status_filter_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::{Row, Table};

    fn app_with_table() -> App {
        let mut app = App::create_app();
        let table = Table::new(
            "issues",
            vec![
                Row::header(["id", "status", "summary"]),
                Row::data(["#1", "open", "first"]),
                Row::data(["#2", "closed", "second"]),
                Row::data(["#3", "open", "third"]),
            ],
        );
        app.domain.statuses = table.distinct_statuses();
        app.domain.active_table_id = Some(table.id.clone());
        app.domain.document.insert(table);
        app
    }

    #[test]
    fn test_set_status_filter_hides_other_rows() {
        let mut app = app_with_table();
        app.update(Action::SetStatusFilter("open".to_string()))
            .unwrap();

        let table = app.domain.active_table().unwrap();
        assert_eq!(table.visible_row_count(), 2);
        assert_eq!(app.domain.filter, FilterValue::parse("open"));
    }

    #[test]
    fn test_clear_status_filter_shows_all_rows() {
        let mut app = app_with_table();
        app.update(Action::SetStatusFilter("closed".to_string()))
            .unwrap();
        app.update(Action::ClearStatusFilter).unwrap();

        let table = app.domain.active_table().unwrap();
        assert_eq!(table.visible_row_count(), 3);
        assert!(app.domain.filter.is_all());
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut app = app_with_table();
        app.update(Action::LastRow).unwrap();
        assert_eq!(app.home.cursor, 2);

        app.update(Action::SetStatusFilter("closed".to_string()))
            .unwrap();
        assert_eq!(app.home.cursor, 0);
    }

    #[test]
    fn test_open_status_filter_populates_dialog() {
        let mut app = app_with_table();
        app.update(Action::OpenStatusFilter).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::StatusFilter));
        assert_eq!(app.status_filter_dialog.statuses, vec!["closed", "open"]);
    }

    #[test]
    fn test_set_filter_closes_the_dialog() {
        let mut app = app_with_table();
        app.update(Action::OpenStatusFilter).unwrap();
        app.update(Action::SetStatusFilter("open".to_string()))
            .unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_force_quit_sets_flag() {
        let mut app = app_with_table();
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_dialog_opens_and_closes() {
        let mut app = app_with_table();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_dialog_knows_table_and_filter() {
        let mut app = app_with_table();
        app.update(Action::SetStatusFilter("open".to_string()))
            .unwrap();
        app.update(Action::OpenQuitDialog).unwrap();

        assert_eq!(app.quit_dialog.table_id.as_deref(), Some("issues"));
        assert_eq!(app.quit_dialog.filter, FilterValue::parse("open"));
    }

    #[test]
    fn test_reload_without_source_reports_status() {
        // Table installed directly, so there is no file to re-read
        let mut app = app_with_table();
        app.update(Action::ReloadTable).unwrap();

        assert_eq!(
            app.status_message.as_deref(),
            Some("No source file to reload")
        );
        assert_eq!(app.domain.active_table().unwrap().data_row_count(), 3);
    }
}
