//! BoyPCReader speech CLI
//!
//! Command-line client for the BoyPCReader screen reader via its BoyCtrl
//! control library

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boy-say")]
#[command(about = "Speak through the BoyPCReader screen reader")]
#[command(version)]
struct Cli {
    /// Behavior-switch file (defaults to boyctrl.json in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak text through the reader
    Speak {
        /// Text to speak
        text: String,

        /// Queue behind current speech instead of cutting in
        #[arg(long)]
        no_interrupt: bool,

        /// Block until the engine reports completion
        #[arg(long)]
        wait: bool,

        /// Give up waiting after this many seconds
        #[arg(long, default_value = "30", requires = "wait")]
        timeout: u64,
    },

    /// Report reader and speech status
    Status,

    /// Stop any speech in progress
    Stop,
}

#[cfg(windows)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::{Duration, Instant};

    use boyctrl::{last_completion, BoyConfig, BoyDriver, ScreenReaderDriver};

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = match cli.config {
        Some(ref path) => BoyConfig::load(path),
        None => BoyConfig::load_default(),
    };
    let mut driver = BoyDriver::with_config(config);

    match cli.command {
        Commands::Speak {
            text,
            no_interrupt,
            wait,
            timeout,
        } => {
            if !driver.speak(&text, !no_interrupt) {
                return Err("BoyPCReader is not available".into());
            }

            if wait {
                // The engine reports completion through its callback;
                // poll the driver until it does or the deadline passes.
                let deadline = Duration::from_secs(timeout);
                let start = Instant::now();
                while driver.is_speaking() && start.elapsed() < deadline {
                    std::thread::sleep(Duration::from_millis(50));
                }

                if driver.is_speaking() {
                    eprintln!("Gave up after {}s.", timeout);
                } else if let Some(reason) = last_completion() {
                    tracing::debug!("speech ended: {:?}", reason);
                }
            }
        }

        Commands::Status => {
            let active = driver.is_active();
            println!("reader active: {}", if active { "yes" } else { "no" });
            println!(
                "speech in progress: {}",
                if driver.is_speaking() { "yes" } else { "no" }
            );
        }

        Commands::Stop => {
            if !driver.silence() {
                return Err("BoyPCReader is not available".into());
            }
            eprintln!("Stopped.");
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("This program requires Windows with BoyPCReader installed.");
    std::process::exit(1);
}
