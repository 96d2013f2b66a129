use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_appender::non_blocking::WorkerGuard;

use vimdrill::config::Config;
use vimdrill::session::Session;
use vimdrill::ui::{self, View};

#[derive(Parser)]
#[command(name = "vimdrill", about = "Practice Vim motions on a lesson text")]
struct Cli {
    /// Lesson file to practice on (built-in lesson if omitted)
    file: Option<PathBuf>,

    /// Comma-separated keys to enable, e.g. "h,j,k,l,i,Escape"
    #[arg(long)]
    motions: Option<String>,

    /// Where to write the trace log (filter with RUST_LOG)
    #[arg(long, default_value = "vimdrill.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli.log_file)?;

    let config = Config::load(cli.file.as_deref(), cli.motions.as_deref())?;
    let mut session = Session::new(config.text.clone(), config.registry());
    let mut view = View::new(config.lesson_name.clone());

    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut session, &mut view);

    // Teardown runs even if the loop errored
    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

/// The terminal is owned by the UI, so logs go to a file.
fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("--log-file must name a file"))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(guard)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session,
    view: &mut View,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, session, view))?;

        if let Event::Key(key) = event::read()? {
            if is_quit(&key) {
                tracing::info!(text_len = session.text().len(), "session ended");
                return Ok(());
            }
            session.handle_key(&key);
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}
