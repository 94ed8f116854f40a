use std::mem;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::actions::{add_book, clear_books, delete_book};
use crate::config::OverflowPolicy;
use crate::error::LibraryError;
use crate::store::BookStore;

use super::forms::{BookField, BookForm, ConfirmClear, LABEL_WIDTH};
use super::helpers::{centered_rect, offset_selection};

/// Window title carried over from the desktop version.
const APP_TITLE: &str = "Library Management System";
/// Borders plus one row per form field.
const FORM_HEIGHT: u16 = 5;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp / PageDown in the list panel.
const PAGE_STEP: isize = 5;

/// Modes layered over the main form.
enum Mode {
    Normal,
    ConfirmClear(ConfirmClear),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state: the owned book store plus everything the form and list
/// panel need between frames.
pub struct App {
    store: BookStore,
    overflow: OverflowPolicy,
    form: BookForm,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: BookStore, overflow: OverflowPolicy) -> Self {
        Self {
            store,
            overflow,
            form: BookForm::default(),
            selected: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Dispatch a plain key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::ConfirmClear(confirm) => self.handle_confirm_clear(code, confirm),
        };

        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.previous_field(),
            KeyCode::Enter => self.submit_add(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.store.len().saturating_sub(1),
            _ => {}
        }
        Mode::Normal
    }

    fn handle_confirm_clear(&mut self, code: KeyCode, confirm: ConfirmClear) -> Mode {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let removed = clear_books(&mut self.store);
                self.selected = 0;
                self.set_status(format!("Removed {removed} book(s)."), StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.clear_status();
                Mode::Normal
            }
            _ => Mode::ConfirmClear(confirm),
        }
    }

    /// "Delete Book": remove the newest book matching the ID field, then
    /// empty the ID field.
    pub(crate) fn handle_ctrl_d(&mut self) {
        if !matches!(self.mode, Mode::Normal) {
            return;
        }

        match delete_book(&mut self.store, &self.form.id) {
            Ok(book) => self.set_status(format!("Deleted {book}."), StatusKind::Info),
            Err(err @ LibraryError::NotFound(_)) => {
                self.set_status(err.to_string(), StatusKind::Info)
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
        self.form.clear_id();
        self.clamp_selection();
    }

    /// Ask before clearing the whole list.
    pub(crate) fn handle_ctrl_x(&mut self) {
        if !matches!(self.mode, Mode::Normal) {
            return;
        }
        if self.store.is_empty() {
            self.set_status("The list is already empty.", StatusKind::Info);
            return;
        }
        self.clear_status();
        self.mode = Mode::ConfirmClear(ConfirmClear {
            count: self.store.len(),
        });
    }

    /// "Add Book": validate the form and prepend the new book.
    fn submit_add(&mut self) {
        let result = add_book(
            &mut self.store,
            self.overflow,
            &self.form.id,
            &self.form.title,
            &self.form.author,
        );

        match result {
            Ok(book) => {
                self.form.reset();
                self.selected = 0;
                self.set_status(format!("Added {book}."), StatusKind::Info);
            }
            Err(err @ LibraryError::InvalidId { .. }) => {
                self.form.active = BookField::Id;
                self.set_status(err.to_string(), StatusKind::Error);
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn move_selection(&mut self, offset: isize) {
        self.selected = offset_selection(self.selected, offset, self.store.len());
        debug!(selected = self.selected, "moved list selection");
    }

    fn clamp_selection(&mut self) {
        self.selected = offset_selection(self.selected, 0, self.store.len());
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_book_list(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Mode::ConfirmClear(confirm) = &self.mode {
            self.draw_confirm_clear(frame, area, confirm);
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                APP_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);

        let lines: Vec<Line> = BookField::ALL
            .iter()
            .map(|field| self.form.build_line(*field))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if matches!(self.mode, Mode::Normal) && inner.width > 0 && inner.height > 0 {
            let field = self.form.active;
            let offset = (LABEL_WIDTH + self.form.value_len(field)) as u16;
            let cursor_x = inner.x + offset.min(inner.width.saturating_sub(1));
            let cursor_y = inner.y + field.row().min(inner.height.saturating_sub(1));
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }

    /// Rebuild the list from the store on every frame so it always reflects
    /// the latest mutation.
    fn draw_book_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Books ({})", self.store.len()))
            .borders(Borders::ALL);

        if self.store.is_empty() {
            let message = Paragraph::new("No books yet. Fill in the form and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = self
            .store
            .enumerate()
            .map(|book| ListItem::new(book.to_string()))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::ConfirmClear(_) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Clear all   "),
                Span::styled("[N/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Add Book   "),
                Span::styled("[Ctrl+D]", key_style),
                Span::raw(" Delete Book   "),
                Span::styled("[Ctrl+X]", key_style),
                Span::raw(" Clear list   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_confirm_clear(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmClear) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Clear List").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Remove all {} book(s)?", confirm.count)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
