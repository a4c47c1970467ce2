mod app;
mod catalog;
mod error;
mod infra;
mod presenters;
mod resources;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use app::controller::GalleryController;
use error::AppError;
use infra::config::AppConfig;
use presenters::{present_artwork_detail, present_artwork_row};
use resources::{AssetIndex, StringTable};

fn main() -> ExitCode {
    infra::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let command = parse_command(&args);
    match run_command(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui { start_index: Option<usize> },
    List,
    Show { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::IndexOutOfRange { .. } | AppError::Config(_) => {
                Self::Usage(error.to_string())
            }
            other => Self::Runtime(other.to_string()),
        }
    }
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui { start_index: None });
    }

    match args[1].as_str() {
        "ui" => {
            let start_index = args.get(2).map(|raw| parse_index(raw)).transpose()?;
            Ok(Command::Ui { start_index })
        }
        "list" => Ok(Command::List),
        "show" => {
            let raw = args
                .get(2)
                .ok_or_else(|| CommandError::Usage("missing artwork index".to_string()))?;
            Ok(Command::Show {
                index: parse_index(raw)?,
            })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse::<usize>()
        .map_err(|_| CommandError::Usage(format!("invalid artwork index: {raw}")))
}

fn run_command(command: Result<Command, CommandError>) -> Result<(), CommandError> {
    let command = command?;
    let config = config_for(&command, AppConfig::from_env()?);

    let catalog = catalog::load_catalog(&config)?;
    let strings = resources::load_strings(&config)?;
    let assets = AssetIndex::scan(Path::new(&config.assets_dir));
    let mut controller = GalleryController::new(config, catalog)?;

    match command {
        Command::Ui { .. } => ui::app_shell::launch_window(controller, strings, assets)
            .map_err(CommandError::from),
        Command::List => {
            print_catalog(&controller, &strings, &assets);
            Ok(())
        }
        Command::Show { index } => {
            controller.jump_to(index)?;
            let navigator = controller.navigator();
            println!(
                "{}",
                present_artwork_detail(
                    &controller.current(),
                    navigator.peek_previous(),
                    navigator.peek_next(),
                    &strings
                )
            );
            Ok(())
        }
    }
}

/// Only the window has a starting artwork; other commands ignore the setting.
fn config_for(command: &Command, mut config: AppConfig) -> AppConfig {
    match command {
        Command::Ui {
            start_index: Some(index),
        } => config.start_index = *index,
        Command::Ui { start_index: None } => {}
        Command::List | Command::Show { .. } => config.start_index = 0,
    }
    config
}

fn print_catalog(controller: &GalleryController, strings: &StringTable, assets: &AssetIndex) {
    for view in controller.views() {
        println!("{}", present_artwork_row(&view, strings, assets));
    }
}

fn print_usage() {
    println!("usage:");
    println!("  art-space [ui [index]]");
    println!("  art-space list");
    println!("  art-space show <index>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_the_window() {
        let command = parse_command(&args(&["art-space"])).expect("default should parse");
        assert_eq!(command, Command::Ui { start_index: None });
    }

    #[test]
    fn parse_ui_with_start_index() {
        let command = parse_command(&args(&["art-space", "ui", "3"])).expect("ui should parse");
        assert_eq!(
            command,
            Command::Ui {
                start_index: Some(3)
            }
        );
    }

    #[test]
    fn parse_show_command() {
        let command = parse_command(&args(&["art-space", "show", "4"])).expect("show should parse");
        assert_eq!(command, Command::Show { index: 4 });
    }

    #[test]
    fn parse_show_rejects_missing_or_invalid_index() {
        assert!(matches!(
            parse_command(&args(&["art-space", "show"])),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            parse_command(&args(&["art-space", "show", "-1"])),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        assert!(matches!(
            parse_command(&args(&["art-space", "import"])),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn start_index_only_applies_to_the_window() {
        let configured = AppConfig {
            start_index: 9,
            ..AppConfig::default()
        };

        let list = config_for(&Command::List, configured.clone());
        assert_eq!(list.start_index, 0);
        assert!(GalleryController::new(list, catalog::Catalog::builtin()).is_ok());

        let show = config_for(&Command::Show { index: 2 }, configured.clone());
        assert_eq!(show.start_index, 0);

        let ui = config_for(&Command::Ui { start_index: None }, configured.clone());
        assert_eq!(ui.start_index, 9);

        let ui = config_for(
            &Command::Ui {
                start_index: Some(1),
            },
            configured,
        );
        assert_eq!(ui.start_index, 1);
    }

    #[test]
    fn out_of_range_index_maps_to_usage_error() {
        let error = CommandError::from(AppError::IndexOutOfRange { index: 9, len: 5 });
        assert!(matches!(error, CommandError::Usage(_)));

        let error = CommandError::from(AppError::Io("disk".to_string()));
        assert_eq!(error, CommandError::Runtime("io error: disk".to_string()));
    }
}
