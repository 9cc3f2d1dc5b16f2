use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use phantom_gen::{save_all, check_outdir, Error, PhantomBuilder, PhantomConfig, PhantomKind, PlotOptions, Point, Shape};

/// Digital phantom generation
#[derive(Parser, Debug)]
#[command(name = "phantom-gen", version, about = "Digital phantom generation")]
struct Cli {
    /// Phantom type: derenzo, contrast, dot or disk
    #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_kind)]
    ptype: PhantomKind,

    /// Phantom shape
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [100, 100], allow_negative_numbers = true)]
    shape: Vec<i64>,

    /// Disk center position or dot position
    #[arg(short, long, num_args = 2, value_names = ["POSX", "POSY"], default_values_t = [50, 50], allow_negative_numbers = true)]
    position: Vec<i64>,

    /// Disk phantom radius
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    radius: i64,

    /// Output directory, must exist
    #[arg(short, long, default_value = "output")]
    outdir: PathBuf,

    /// TOML file overriding the generation constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixels per phantom cell in the plot
    #[arg(long, default_value_t = 4)]
    plot_scale: u32,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log sector layout details
    #[arg(long)]
    debug: bool,
}

fn parse_kind(s: &str) -> Result<PhantomKind, String> {
    s.parse().map_err(|e: Error| {
        let names: Vec<_> = PhantomKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("{} (available: {})", e, names.join(", "))
    })
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => PhantomConfig::from_file(path)?,
        None => PhantomConfig::default(),
    };
    // Checked before generation; a failed run writes nothing
    check_outdir(&cli.outdir)?;

    let shape = Shape::new(cli.shape[0], cli.shape[1])?;
    let position = Point::new(cli.position[0], cli.position[1]);
    let phantom = PhantomBuilder::with_config(config)?
        .build(cli.ptype, shape, Some(position), Some(cli.radius))?;
    tracing::info!("Generated {}", phantom);

    let opts = PlotOptions { scale: cli.plot_scale, ..PlotOptions::default() };
    for path in save_all(&phantom, &cli.outdir, &opts)? {
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            match e.downcast_ref::<Error>() {
                Some(Error::NotImplemented(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
