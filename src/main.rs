mod app;
mod config;
mod error;
mod events;
mod icons;
mod log;
mod picker;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use config::{CliOverrides, Config};
use error::IconPickError;
use events::{EventHandler, EventResult};
use icons::Icon;
use picker::IconPicker;

const USAGE: &str = "\
Usage: iconpick [OPTIONS]

Options:
  -r, --rows <N>           Icon rows per page
  -c, --columns <N>        Icon columns per page
      --icon-width <N>     Width of one icon cell
      --icon-height <N>    Height of one icon cell
      --picker-width <N>   Popup width (clamped to the terminal)
      --picker-height <N>  Popup height (clamped to the terminal)
      --json               Print the selection as JSON on exit
  -h, --help               Show this help";

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    overrides: CliOverrides,
    json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let slot = match flag {
            "--rows" | "-r" => Some(&mut cli.overrides.rows_in_one_page),
            "--columns" | "-c" => Some(&mut cli.overrides.columns_in_one_page),
            "--icon-width" => Some(&mut cli.overrides.icon_width),
            "--icon-height" => Some(&mut cli.overrides.icon_height),
            "--picker-width" => Some(&mut cli.overrides.picker_width),
            "--picker-height" => Some(&mut cli.overrides.picker_height),
            "--json" => {
                cli.json = true;
                None
            }
            "--help" | "-h" => {
                cli.help = true;
                None
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
                None
            }
        };

        if let Some(slot) = slot {
            match args.get(i + 1).map(|v| v.parse::<u16>()) {
                Some(Ok(value)) => {
                    *slot = Some(value);
                    i += 1;
                }
                Some(Err(_)) => {
                    eprintln!("Warning: {} expects a non-negative number, got '{}'", flag, args[i + 1]);
                    i += 1;
                }
                None => eprintln!("Warning: {} requires a value", flag),
            }
        }
        i += 1;
    }

    cli
}

/// Text printed on exit: `glyph name`, or a `{"selected": ...}` object with `--json`.
/// Plain output is empty when nothing was picked.
fn format_selection(icon: Option<&Icon>, json: bool) -> Result<Option<String>> {
    if json {
        return Ok(Some(serde_json::to_string(&serde_json::json!({ "selected": icon }))?));
    }
    Ok(icon.map(|icon| format!("{} {}", icon.glyph, icon.name)))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > default
    let picker_config = Config::load()
        .with_process_env()
        .with_overrides(&cli.overrides)
        .picker_config();
    log::log(&format!("Picker config: {:?}", picker_config));

    let picker = IconPicker::with_builtin_icons(picker_config)
        .map_err(IconPickError::from)?
        .on_select(|icon| log::log(&format!("Selection changed: {}", icon.name)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(picker);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let Some(output) = format_selection(app.picker.selected(), cli.json)? {
        println!("{}", output);
    }
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        terminal
            .draw(|frame| tui::ui::render(frame, app))
            .map_err(|e| IconPickError::Terminal(e.to_string()))?;

        let Some(event) = event_stream.next().await else {
            break;
        };
        let event = event?;

        let action = EventHandler::handle_event(app, &event);
        if let EventResult::Selected(id) = app.dispatch(action) {
            log::log(&format!("Picked {}", id));
        }
    }

    log::log("=== iconpick exiting ===");
    Ok(())
}
