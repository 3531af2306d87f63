use anyhow::Result;
use futures::StreamExt;
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::EventStream;

use pickbox::app::App;
use pickbox::config::Config;
use pickbox::error::PickboxError;
use pickbox::events::{Action, EventHandler};
use pickbox::log;
use pickbox::tui::terminal::TerminalGuard;
use pickbox::tui::ui;

const USAGE: &str = "\
Usage: pickbox [OPTIONS] [LABEL]...

Pick from LABELs (or the configured options) with a single and a multiple select.

Options:
  -c, --config <PATH>  Read configuration from PATH
  -j, --json           Print the final selections as JSON on exit
  -h, --help           Show this help";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    json: bool,
    labels: Vec<String>,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            "--json" | "-j" => parsed.json = true,
            "--help" | "-h" => return None,
            arg if !arg.starts_with('-') => parsed.labels.push(arg.to_string()),
            arg => eprintln!("Warning: ignoring unknown flag '{}'", arg),
        }
        i += 1;
    }

    Some(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let Some(args) = parse_args() else {
        println!("{}", USAGE);
        return Ok(());
    };

    // Precedence: CLI > env var > config file > defaults
    let config = match &args.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    }
    .with_overrides(args.labels);

    if let Ok(log_path) = log::init(&config.log_dir()) {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let mut app = App::new(&config);

    {
        let mut guard = TerminalGuard::new()?;
        run_app(guard.terminal(), &mut app).await?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&app.summary())?);
    }

    log::log("=== pickbox exited ===");
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> pickbox::error::Result<()>
where
    B::Error: std::fmt::Display,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PickboxError::Terminal(e.to_string()))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if action != Action::None {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            // Redraw periodically so resizes settle even without input
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
    }
}
