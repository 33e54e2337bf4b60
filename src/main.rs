use clap::Parser;
use persist_kit::cli::dispatcher::Dispatcher;
use persist_kit::cli::main_types::Cli;
use persist_kit::error::{AppError, CliError};
use persist_kit::storage::settings::Settings;
use persist_kit::utils::logging::{LogFacade, log_error, log_hint, print_verbose};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log_error(&format!("[{}] {}", e.severity().label(), e));
        if let Some(hint) = e.troubleshooting_hint() {
            log_hint(&hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    // Load Settings
    let settings_path = Settings::resolve_path(cli.config_dir.as_deref())?;
    let mut settings = Settings::load(Some(settings_path.clone()))?;

    if let Some(level) = cli.log_level.clone() {
        settings.log_level = level;
        settings.validate()?;
    }
    let verbose = cli.verbose || settings.verbose;

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(settings.level_filter());
    env_builder.format_timestamp_secs();
    env_builder.try_init().map_err(|e| {
        CliError::InvalidArguments(format!("failed to initialise logging: {}", e))
    })?;

    print_verbose(verbose, &format!("Log level: {}", settings.log_level));
    if let Some(config_dir) = &cli.config_dir {
        print_verbose(verbose, &format!("Using config directory: {}", config_dir.display()));
    }

    let dispatcher = Dispatcher::new(Box::new(LogFacade), verbose, settings, settings_path);
    dispatcher.dispatch(cli.command)
}
