//! A small demonstration binary embedding the editor behind a toy REPL
//! loop, the way `oxidized`'s own binary wires its core crates to a real
//! terminal. Key decoding here is intentionally minimal — history,
//! persistence, and completion logic are out of scope; this binary only
//! forwards raw key events to the editor's public edit/navigation API.

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing_subscriber::EnvFilter;

use edit_core::{Editor, EditorConfig};
use edit_terminal::{CrosstermSizeProvider, CrosstermTerminal, RawModeGuard};

#[derive(Parser, Debug)]
#[command(about = "Demonstration REPL front-end for the editing core")]
struct Args {
    /// Path to a TOML config file overriding width/height/color/indent.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "edit-cli.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    guard
}

fn prompt_fn(line_index: usize, _colored: bool) -> String {
    if line_index == 0 {
        "expr> ".to_string()
    } else {
        "  ... ".to_string()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();
    tracing::info!("starting edit-cli");

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let _raw_mode = RawModeGuard::enter()?;
    let terminal = Box::new(CrosstermTerminal::new(stdout()));
    let size_provider = Box::new(CrosstermSizeProvider);

    let mut editor = Editor::with_defaults(config, terminal, size_provider, Box::new(prompt_fn));

    loop {
        editor.prompt_next()?;
        let expression = loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        tracing::info!("received Ctrl+C, exiting");
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Char(c) => {
                            editor.push_char(c)?;
                        }
                        KeyCode::Enter => {
                            if editor.cursor_on_last_line() {
                                break editor.expression();
                            }
                            editor.insert_new_line(0)?;
                        }
                        KeyCode::Backspace => {
                            editor.back()?;
                        }
                        KeyCode::Delete => {
                            editor.delete()?;
                        }
                        KeyCode::Left => {
                            editor.move_left()?;
                        }
                        KeyCode::Right => {
                            editor.move_right()?;
                        }
                        KeyCode::Up => {
                            editor.move_up()?;
                        }
                        KeyCode::Down => {
                            editor.move_down()?;
                        }
                        KeyCode::Home => {
                            editor.move_to_begin()?;
                        }
                        KeyCode::End => {
                            editor.move_to_end()?;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        };

        editor.end_editing(None)?;
        println!("=> {expression}\r");
    }
}
