use std::io::Write;
use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug};

use callflow::{Config, DEFAULT_SCREEN_WIDTH, Diagram, layout, loader};

#[derive(Parser, Debug)]
#[command(name = "callflow", about = "Render call flows between components as ASCII sequence diagrams")]
struct Cli {
    /// JSON flow file (renders the built-in example if not provided)
    file: Option<std::path::PathBuf>,

    /// Screen width in columns
    #[arg(long, short = 's', default_value_t = DEFAULT_SCREEN_WIDTH)]
    size: usize,

    /// Which entry of the file's `flow` array to render
    #[arg(long, default_value_t = 0)]
    flow: usize,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();
    debug!(cli:?; "parsed arguments");

    let diagram = match &cli.file {
        Some(path) => loader::load_file(path, cli.flow).unwrap_or_else(|e| fail(e)),
        None => callflow::demo::diagram(),
    };

    if let Err(e) = print_diagram(&diagram, &Config::with_screen_width(cli.size)) {
        fail(e);
    }
}

fn print_diagram(diagram: &Diagram, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout::compute(diagram, config)?;
    let mut out = std::io::stdout().lock();
    for line in layout.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {e}");
    std::process::exit(1);
}
