// src/main.rs

mod app_logic;
mod core;
mod platform_layer;

use crate::app_logic::{SearchAppLogic, ui_constants};
use crate::core::{
    CATEGORY_SLOT_COUNT, CATEGORY_SLOTS, ConfigManagerOperations, CoreCatalogScanner,
    CoreConfigManager, CoreFileOpener, FragmentList, Settings, SlotSelection,
};
use crate::platform_layer::{AppEvent, ConsolePlatform};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "order_code_finder")]
#[command(about = "Find a document by composing its order code from category codes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to config.json in the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Optional log file path for debug logging
    #[arg(short, long, global = true)]
    log: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the matching documents
    Search(SearchArgs),

    /// Prompt for codes repeatedly, list matches and open them
    Interactive,

    /// List the category slots and their codes
    Categories,

    /// Show the configuration file location and its effective settings
    Config,
}

#[derive(Args)]
struct SearchArgs {
    /// Engine Type code
    #[arg(long, value_parser = slot_value_parser(0))]
    engine_type: Option<String>,

    /// Engine Size code
    #[arg(long, value_parser = slot_value_parser(1))]
    engine_size: Option<String>,

    /// Engine Size cont. code
    #[arg(long, value_parser = slot_value_parser(2))]
    engine_size_cont: Option<String>,

    /// Execution Type code
    #[arg(long, value_parser = slot_value_parser(3))]
    execution_type: Option<String>,

    /// Cooling Type code
    #[arg(long, value_parser = slot_value_parser(4))]
    cooling_type: Option<String>,

    /// Free-text fragment (e.g. scanned barcode), matched after the category codes
    text: Option<String>,

    /// Open the Nth listed result (1-based) after asking for confirmation
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    open: Option<u32>,

    /// Answer yes to the open confirmation
    #[arg(short, long, requires = "open")]
    yes: bool,
}

impl SearchArgs {
    fn slot_selection(&self) -> SlotSelection {
        let slots: [String; CATEGORY_SLOT_COUNT] = [
            &self.engine_type,
            &self.engine_size,
            &self.engine_size_cont,
            &self.execution_type,
            &self.cooling_type,
        ]
        .map(|value| value.clone().unwrap_or_default());
        SlotSelection::new(slots, self.text.clone().unwrap_or_default())
    }
}

fn slot_value_parser(slot_index: usize) -> PossibleValuesParser {
    PossibleValuesParser::new(CATEGORY_SLOTS[slot_index].codes.iter().copied())
}

fn init_logging(log_path: Option<&Path>, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_path {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            config,
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn resolve_config_path(cli_path: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match cli_path {
        Some(path) => Ok(path),
        None => Ok(CoreConfigManager::default_config_path(
            ui_constants::APP_NAME,
        )?),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings, Box<dyn std::error::Error>> {
    let config_manager = CoreConfigManager::new();
    if config_manager.ensure_defaults(config_path)? {
        log::info!("Main: Created default configuration at {config_path:?}");
    }
    Ok(config_manager.load_settings(config_path)?)
}

fn build_app_logic(settings: Settings) -> SearchAppLogic {
    SearchAppLogic::new(
        settings,
        Arc::new(CoreCatalogScanner::new()),
        Arc::new(CoreFileOpener::new()),
    )
}

fn run_search<R: BufRead, W: Write>(
    platform: &mut ConsolePlatform<R, W>,
    app_logic: &mut SearchAppLogic,
    args: &SearchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let fragments = FragmentList::from_selection(&args.slot_selection());
    platform.dispatch(app_logic, AppEvent::SearchRequested { fragments })?;

    if let Some(row) = args.open {
        let index = usize::try_from(row)? - 1;
        platform.dispatch(app_logic, AppEvent::ResultActivated { index })?;
    }
    Ok(())
}

fn print_categories<W: Write>(output: &mut W) -> io::Result<()> {
    for (i, slot) in CATEGORY_SLOTS.iter().enumerate() {
        writeln!(output, "{}. {}: {}", i + 1, slot.label, slot.codes.join(", "))?;
    }
    writeln!(output, "{}. Barcode Input: free text", CATEGORY_SLOT_COUNT + 1)?;
    Ok(())
}

fn print_config<W: Write>(output: &mut W, config_path: &Path, settings: &Settings) -> io::Result<()> {
    writeln!(output, "Configuration file: {}", config_path.display())?;
    writeln!(output, "folder_path: {}", settings.folder_path.display())?;
    writeln!(output, "file_extension: {}", settings.file_extension)?;
    writeln!(
        output,
        "use_strict_match: {}",
        if settings.strict_match { "yes" } else { "no" }
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref(), cli.verbose)?;
    log::debug!("Main: Starting {}", ui_constants::APP_NAME);

    let stdout = io::stdout();
    match cli.command {
        Commands::Categories => {
            print_categories(&mut stdout.lock())?;
        }
        Commands::Config => {
            let config_path = resolve_config_path(cli.config)?;
            let settings = load_settings(&config_path)?;
            print_config(&mut stdout.lock(), &config_path, &settings)?;
        }
        Commands::Search(args) => {
            let config_path = resolve_config_path(cli.config)?;
            let mut app_logic = build_app_logic(load_settings(&config_path)?);
            let mut platform = ConsolePlatform::new(io::stdin().lock(), stdout.lock())
                .with_auto_confirm(args.yes);
            run_search(&mut platform, &mut app_logic, &args)?;
        }
        Commands::Interactive => {
            let config_path = resolve_config_path(cli.config)?;
            let mut app_logic = build_app_logic(load_settings(&config_path)?);
            let mut platform = ConsolePlatform::new(io::stdin().lock(), stdout.lock());
            platform.run_interactive(&mut app_logic)?;
        }
    }
    log::debug!("Main: Exiting.");
    Ok(())
}
