use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use circle_area::cli::args::{Commands, ConfigCommands};
use circle_area::cli::commands::execute_command;
use circle_area::cli::{output, Cli, CliError};
use circle_area::config::Settings;
use circle_area::exitcode;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        output::disable_colors();
    }

    let settings = match Settings::load_default() {
        Ok(settings) => settings,
        Err(e) if !shows_config(&cli) => {
            output::warning(&format!("{e}; using default settings"));
            Settings::default()
        }
        Err(e) => {
            let e = CliError::from(e);
            output::error(&e);
            process::exit(e.exit_code());
        }
    };
    if !settings.color {
        output::disable_colors();
    }

    setup_logging(cli.debug.max(settings.verbosity));

    let code = match execute_command(&cli, &settings) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    process::exit(code);
}

/// Only `config show` needs the settings to load; everything else runs on defaults.
fn shows_config(cli: &Cli) -> bool {
    matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    )
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = ["config::"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // stdout carries the report, logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_area::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["circle-area", "-dd"]).unwrap();
        assert_eq!(cli.debug, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn given_config_show_when_parsing_then_settings_are_required() {
        let show = Cli::try_parse_from(["circle-area", "config", "show"]).unwrap();
        let path = Cli::try_parse_from(["circle-area", "config", "path"]).unwrap();
        let report = Cli::try_parse_from(["circle-area"]).unwrap();

        assert!(shows_config(&show));
        assert!(!shows_config(&path));
        assert!(!shows_config(&report));
    }

    #[test]
    fn given_no_args_when_parsing_then_runs_report() {
        let cli = Cli::try_parse_from(["circle-area"]).unwrap();
        assert_eq!(cli.debug, 0);
        assert!(!cli.no_color);
        assert!(cli.command.is_none());
    }
}
