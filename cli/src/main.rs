mod logging;
mod report;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser};
use rewards_core::repository::data_dir;
use rewards_core::surface::SvgSurface;
use rewards_core::{
    AppConfig, ConfigRepository, FileConfigRepository, OverlayController, RandomSource, RangeSelector, Rgba, SeededRandom,
    ThreadRandom,
};
use tracing::info;

const LOG_FILE_NAME: &str = "rewards.log";
const SVG_BACKGROUND: Rgba = Rgba::new(17, 17, 17, 1.0);

#[derive(Parser)]
#[command(name = "rewards")]
#[command(about = "Reviewer rewards balance and analytics dashboard", long_about = None)]
struct Cli {
    /// Directory holding config.json and the log file (default: ~/.reviewer-rewards)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct RangeArgs {
    /// Days to cover (7, 30, 90d, ...) or "lifetime"
    #[arg(short, long)]
    range: Option<RangeSelector>,
    /// Last day of the window, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Seed the generator to get the same figures on every run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the balance summary and KPI changes
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Print the generated activity day by day
    Daily {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Render the reward chart to an SVG file
    Chart {
        #[command(flatten)]
        range: RangeArgs,
        /// Container width in pixels
        #[arg(short, long, default_value_t = 640.0)]
        width: f64,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show the configuration file, or reset it with --init
    Config {
        #[arg(long)]
        init: bool,
    },
    /// Open the interactive dashboard
    Tui,
}

/// Builds a controller for one-shot commands, with CLI flags over config.
fn build_controller(config: &AppConfig, args: RangeArgs) -> (OverlayController<Box<dyn RandomSource>>, NaiveDate) {
    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    let mut controller = OverlayController::new(config, rng);
    if let Some(range) = args.range {
        controller.set_range(range);
    }
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    (controller, today)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileConfigRepository::new(cli.config_dir.clone())?;

    match cli.command {
        Some(Commands::Summary { range }) => {
            logging::init_stderr()?;
            let config = repo.load()?;
            let (mut controller, today) = build_controller(&config, range);
            report::show_summary(controller.refresh(today));
        }
        Some(Commands::Daily { range }) => {
            logging::init_stderr()?;
            let config = repo.load()?;
            let (mut controller, today) = build_controller(&config, range);
            report::show_daily(&controller.refresh(today).series);
        }
        Some(Commands::Chart { range, width, output }) => {
            logging::init_stderr()?;
            let config = repo.load()?;
            let (mut controller, today) = build_controller(&config, range);
            let mut surface = SvgSurface::new(width).with_background(SVG_BACKGROUND);
            let snapshot = controller.render(today, Some(&mut surface));
            let days = snapshot.series.len();
            fs::write(&output, surface.to_svg())
                .with_context(|| format!("Could not write {}", output.display()))?;
            info!(path = %output.display(), days, "chart written");
            println!("Chart written: {} ({} days)", output.display(), days);
        }
        Some(Commands::Config { init }) => {
            logging::init_stderr()?;
            let config = if init {
                let config = AppConfig::default();
                repo.save(&config)?;
                println!("Default configuration written.");
                config
            } else {
                repo.load()?
            };
            println!("{}", repo.path().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(Commands::Tui) | None => {
            let log_path = data_dir(cli.config_dir)?.join(LOG_FILE_NAME);
            logging::init_file(&log_path)?;
            let config = repo.load()?;
            tui::run(&config, Local::now().date_naive())?;
        }
    }
    Ok(())
}
