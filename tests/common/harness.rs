//! Test harness for driving the viewer against an in-memory terminal

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use perch::app::Viewer;
use perch::listing::FetchOutcome;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// How long [`ViewerTestHarness::wait_until`] keeps polling before failing
const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ViewerTestHarness {
    viewer: Viewer,
    terminal: Terminal<TestBackend>,
}

impl ViewerTestHarness {
    /// Create a harness with the given terminal size, pointed at `endpoint`.
    ///
    /// The fetch is not started automatically; call `start_fetch` on the
    /// viewer or attach a channel by hand.
    pub fn new(width: u16, height: u16, endpoint: &str) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            viewer: Viewer::new(endpoint),
            terminal,
        })
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    pub fn attach_fetch_channel(&mut self, rx: Receiver<FetchOutcome>) {
        self.viewer.attach_fetch_channel(rx);
    }

    pub fn render(&mut self) -> Result<()> {
        self.terminal.draw(|frame| self.viewer.render(frame))?;
        Ok(())
    }

    pub fn process_async_and_render(&mut self) -> Result<()> {
        self.viewer.process_async_messages();
        self.render()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        self.viewer.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    /// Current screen contents as a newline-joined string
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "Screen should contain {:?}\n--- screen ---\n{}",
            needle,
            screen
        );
    }

    /// Poll the fetch channel and re-render until `predicate` holds.
    pub fn wait_until<F>(&mut self, mut predicate: F) -> Result<()>
    where
        F: FnMut(&Self) -> bool,
    {
        let deadline = Instant::now() + WAIT_TIMEOUT;
        loop {
            self.process_async_and_render()?;
            if predicate(self) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                anyhow::bail!(
                    "Timed out waiting for condition\n--- screen ---\n{}",
                    self.screen_to_string()
                );
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    pub fn should_quit(&self) -> bool {
        self.viewer.should_quit()
    }
}
