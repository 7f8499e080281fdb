//! Application state for the listing viewer.
//!
//! One `Viewer` is created per launch. It issues a single fetch against the
//! listing endpoint, folds the outcome into the tree and overlay, and renders
//! one level of entries until the user quits.

use std::sync::mpsc::{Receiver, TryRecvError};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::listing::{spawn_fetch, FetchOutcome};
use crate::tree::ListingTree;
use crate::view::{OverlayRenderer, OverlayState, Theme, TreeViewRenderer};

/// Rows jumped by PageUp/PageDown
const PAGE_JUMP: usize = 10;

pub struct Viewer {
    /// Listing entries under the synthetic root
    tree: ListingTree,
    /// Status overlay; transitions at most once per launch
    overlay: OverlayState,
    /// Channel from the fetch thread; dropped once an outcome arrives
    fetch_rx: Option<Receiver<FetchOutcome>>,
    /// First visible row of the tree view
    scroll_offset: usize,
    endpoint: String,
    /// When the listing finished loading, shown in the status bar
    loaded_at: Option<DateTime<Local>>,
    theme: Theme,
    should_quit: bool,
}

impl Viewer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            tree: ListingTree::new(),
            overlay: OverlayState::Pending,
            fetch_rx: None,
            scroll_offset: 0,
            endpoint: endpoint.into(),
            loaded_at: None,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Kick off the one-shot fetch against the configured endpoint.
    pub fn start_fetch(&mut self) {
        tracing::info!("Fetching listing from {}", self.endpoint);
        self.attach_fetch_channel(spawn_fetch(self.endpoint.clone()));
    }

    /// Attach a channel that will deliver the fetch outcome.
    pub fn attach_fetch_channel(&mut self, rx: Receiver<FetchOutcome>) {
        self.fetch_rx = Some(rx);
    }

    /// Drain the fetch channel without blocking.
    ///
    /// Returns true when state changed and a render is needed.
    pub fn process_async_messages(&mut self) -> bool {
        let Some(rx) = &self.fetch_rx else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.fetch_rx = None;
                self.apply_fetch_outcome(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("Fetch thread exited without delivering an outcome");
                self.fetch_rx = None;
                self.overlay = OverlayState::Error;
                true
            }
        }
    }

    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(entries) => {
                self.tree.populate(entries);
                self.overlay = OverlayState::Hidden;
                self.loaded_at = Some(Local::now());
            }
            FetchOutcome::Unavailable { status } => {
                // Non-2xx renders an empty listing; the overlay keeps its
                // pending state rather than switching to an error
                tracing::warn!("Listing unavailable (status {}), rendering empty", status);
            }
            FetchOutcome::Failed(message) => {
                tracing::error!("Listing fetch failed: {}", message);
                self.overlay = OverlayState::Error;
            }
        }
    }

    /// Handle a key press. Returns true when a render is needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_JUMP as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_JUMP as isize),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => false,
        }
    }

    fn scroll_by(&mut self, delta: isize) -> bool {
        let next = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_to(next)
    }

    fn scroll_to(&mut self, target: usize) -> bool {
        let max = self.tree.root_children().len().saturating_sub(1);
        let next = target.min(max);
        if next == self.scroll_offset {
            return false;
        }
        self.scroll_offset = next;
        true
    }

    /// Render the whole frame: tree view, status overlay, status bar.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        TreeViewRenderer::render(&self.tree, frame, chunks[0], self.scroll_offset, &self.theme);
        OverlayRenderer::render(self.overlay, frame, chunks[0], &self.theme);
        self.render_status_bar(frame, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let base_style = Style::default()
            .fg(self.theme.status_bar_fg)
            .bg(self.theme.status_bar_bg);

        let loaded = match &self.loaded_at {
            Some(at) => format!(" | loaded {}", at.format("%H:%M:%S")),
            None => String::new(),
        };
        let left = format!(
            " {} | {} entries{}",
            self.endpoint,
            self.tree.root_children().len(),
            loaded
        );
        let right = " q quit ";

        let available = area.width as usize;
        let left_width = left.width();
        let mut spans = vec![Span::styled(left, base_style)];
        if left_width + right.width() < available {
            spans.push(Span::styled(
                " ".repeat(available - left_width - right.width()),
                base_style,
            ));
            spans.push(Span::styled(
                right,
                base_style.add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn tree(&self) -> &ListingTree {
        &self.tree
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// True while the fetch outcome has not yet been received
    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_rx.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
