use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use memoicon::{generate, Error, GeneratorConfig};

/// Generate the Gmail Reply Memo extension icons into ./icons
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence diagnostic logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = GeneratorConfig::default();

    println!("Generating Gmail Reply Memo icons...");
    println!();

    generate(&config, |icon| println!("✓ Created: {}", icon.path.display()))
        .context("icon generation failed")?;

    println!();
    println!("✓ Icon generation complete!");
    println!("You can now load the extension in Chrome at chrome://extensions/");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if let Err(e) = TermLogger::init(
        cli.log_level(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger setup failed: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err
                .downcast_ref::<Error>()
                .is_some_and(Error::is_missing_capability)
            {
                eprintln!(
                    "Error: PNG support is not available in this build ({})",
                    err.root_cause()
                );
                eprintln!("Install it with: cargo install memoicon --features png");
                eprintln!();
                eprintln!("Alternative: Use create_icons.sh if you have ImageMagick installed");
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
