use clap::Parser;

use enumgen::generator::generator::Generator;
use enumgen::generator::invocation::{header_args, Invocation};
use enumgen::utils::config::Config;
use enumgen::GeneratorError;
use tracing::{error, info};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// (json) Configuration with the header app name and defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Accept the empty string as the zero value when parsing
    #[arg(long)]
    pub empty: bool,

    /// Root directory receiving the <enum>/<enum>.gen.go file
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// <KIND> <ENUM_NAME> <VALUE>... where KIND is string, int or int:<type>
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // we setup logging
    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(tracing_level)
        .init();

    if let Err(err) = run(cli) {
        error!("Generation failed: {}", err);
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), GeneratorError> {
    let invocation = Invocation::new(cli.dir, cli.empty, &cli.args)?;

    let config = match cli.config {
        Some(config_file) => Config::from(config_file.as_path())?,
        None => Config::new(),
    };

    let args = header_args(std::env::args_os().skip(1));
    let generator = Generator::new(config, invocation, args);
    let output_file = generator.generate()?;
    info!("Generation completed: {}", output_file.display());
    Ok(())
}
