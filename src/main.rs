//  ____                     ____               _
// |  _ \   __ _  ___  ___  / ___|  ___  _ __  | | __
// | |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \ | |/ /
// |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | ||   <
// |_|     \__,_||___/|___/ \____| \___||_| |_||_|\_\
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-06
// Version : 0.1.0
// License : Mulan PSL v2
//
// Command line front end

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

use commands::password_gen::{self, GenOutput};
use commands::{config, testpass};
use passgenk::configtool::{config_path, load_config};
use passgenk::passgen::GenerationConfig;

#[derive(Debug, Parser)]
#[command(name = "passgenk")]
#[command(about = "Password generator with a built-in strength estimator", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate passwords and rate their strength
    Gen(GenArgs),

    /// Rate the strength of an existing password
    Check(CheckArgs),

    /// Manage stored generation defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password (6-32)
    #[arg(short, long)]
    length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase", default_value_t = false)]
    uppercase: bool,

    /// Exclude uppercase letters
    #[arg(long, overrides_with = "uppercase", default_value_t = false)]
    no_uppercase: bool,

    /// Include digits
    #[arg(long, overrides_with = "no_digits", default_value_t = false)]
    digits: bool,

    /// Exclude digits
    #[arg(long, overrides_with = "digits", default_value_t = false)]
    no_digits: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols", default_value_t = false)]
    symbols: bool,

    /// Exclude symbols
    #[arg(long, overrides_with = "symbols", default_value_t = false)]
    no_symbols: bool,

    /// Leave out I, l, 1, O, 0 and o
    #[arg(short = 'x', long, default_value_t = false)]
    exclude_similar: bool,

    /// Only use URL-safe symbols (-._~)
    #[arg(short = 's', long, default_value_t = false)]
    url_safe: bool,

    /// Clamp an out-of-range length instead of rejecting it
    #[arg(long, default_value_t = false)]
    clamp: bool,

    /// Number of passwords to generate (1-1000)
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
    count: u16,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show improvement suggestions
    #[arg(long, default_value_t = false)]
    feedback: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Password to test
    password: String,

    /// Check if password is URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    check_url_safe: bool,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,

    /// Print JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show improvement suggestions
    #[arg(long, default_value_t = false)]
    feedback: bool,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        default
    }
}

impl GenArgs {
    fn resolve(&self, defaults: GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: toggle(self.uppercase, self.no_uppercase, defaults.include_uppercase),
            include_digits: toggle(self.digits, self.no_digits, defaults.include_digits),
            include_symbols: toggle(self.symbols, self.no_symbols, defaults.include_symbols),
            exclude_similar: self.exclude_similar || defaults.exclude_similar,
            url_safe: self.url_safe || defaults.url_safe,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Gen(args) => {
            let stored = load_config(&config_path()?)?;
            let config = args.resolve(stored.defaults);
            let output = GenOutput {
                count: usize::from(args.count),
                seed: args.seed,
                json: args.json,
                feedback: args.feedback || stored.show_feedback,
            };
            password_gen::generate_random(config, args.clamp, &output)
        },
        Commands::Check(args) => {
            testpass::test_password(
                &args.password,
                args.check_url_safe,
                args.check_confusion,
                args.json,
                args.feedback,
            )
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => config::show(),
            ConfigAction::Init { force } => config::init(force),
            ConfigAction::Path => config::path(),
        },
    }
}
