use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use perch::app::Viewer;
use perch::config::Config;
use perch::services::terminal_modes::{self, TerminalModes};
use perch::services::{log_dirs, tracing_setup};

#[derive(Parser, Debug)]
#[command(name = "perch")]
#[command(about = "A terminal viewer for remote directory listings", long_about = None)]
#[command(version)]
struct Args {
    /// Listing endpoint URL (overrides the config file)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Directory to load config.json from
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Path to log file for diagnostics (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

struct SetupState {
    endpoint: String,
    terminal: Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    terminal_modes: TerminalModes,
}

fn initialize_app(args: &Args) -> AnyhowResult<SetupState> {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }

    // Clean up stale log files from previous runs on startup
    log_dirs::cleanup_stale_logs();

    tracing::info!("Viewer starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let config = match &args.config_dir {
        Some(dir) => Config::load(dir),
        None => Config::default_dir()
            .map(|dir| Config::load(&dir))
            .unwrap_or_default(),
    };
    let endpoint = args.url.clone().unwrap_or(config.endpoint);

    let terminal_modes = TerminalModes::enable()?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    Ok(SetupState {
        endpoint,
        terminal,
        terminal_modes,
    })
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let SetupState {
        endpoint,
        mut terminal,
        mut terminal_modes,
    } = initialize_app(&args).context("Failed to initialize application")?;

    let mut viewer = Viewer::new(endpoint);
    viewer.start_fetch();

    let result = run_event_loop(&mut viewer, &mut terminal);

    terminal_modes.undo();

    tracing::info!("Viewer exiting");
    result
}

fn run_event_loop(
    viewer: &mut Viewer,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        // Fold in the fetch outcome when it arrives
        if viewer.process_async_messages() {
            needs_render = true;
        }

        if viewer.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| viewer.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(50)
        };

        if !event_poll(timeout)? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press && viewer.handle_key(key_event) {
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
