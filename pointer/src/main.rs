//! handpointer - replay recorded hand keypoint frames through the gesture
//! engine and print the resulting pointer commands.
//!
//! Reads one frame s-expression per line from a file or stdin and writes
//! one command s-expression per line to stdout.  Logs go to stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use handpointer::gesture::{EngineConfig, GestureEngine};
use handpointer::replay::{replay_sexp, ReplayOptions};

#[derive(Parser, Debug)]
#[command(name = "handpointer", about = "Hand keypoint gesture engine replay")]
struct Cli {
    /// Frame file, one s-expression per line (default: stdin)
    input: Option<PathBuf>,

    /// Screen width in pixels
    #[arg(long, default_value_t = 1920.0)]
    screen_width: f64,

    /// Screen height in pixels
    #[arg(long, default_value_t = 1080.0)]
    screen_height: f64,

    /// Cursor smoothing divisor (1 = no smoothing)
    #[arg(long, default_value_t = 5.0)]
    smooth_factor: f64,

    /// Start the cursor at the first observed position instead of (0, 0)
    #[arg(long)]
    seed_on_first: bool,

    /// Pinch distance in camera pixels for click, right/middle click and scroll
    #[arg(long, default_value_t = 40.0)]
    pinch_threshold: f64,

    /// Double-click window in milliseconds
    #[arg(long, default_value_t = 300.0)]
    double_click_ms: f64,

    /// Pinch hold in milliseconds before a drag begins
    #[arg(long, default_value_t = 100.0)]
    drag_delay_ms: f64,

    /// Camera pixels of vertical travel per scroll step
    #[arg(long, default_value_t = 10.0)]
    scroll_divisor: f64,

    /// Flip landmark x coordinates about the camera width
    #[arg(long)]
    mirror: bool,

    /// Print the final engine status after the last frame
    #[arg(long)]
    status: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            ..Default::default()
        };
        config.smoother.smooth_factor = self.smooth_factor;
        config.smoother.seed_on_first = self.seed_on_first;
        config.click_drag.threshold_px = self.pinch_threshold;
        config.click_drag.double_click_window_s = self.double_click_ms / 1000.0;
        config.click_drag.drag_delay_s = self.drag_delay_ms / 1000.0;
        config.right_click.threshold_px = self.pinch_threshold;
        config.middle_click.threshold_px = self.pinch_threshold;
        config.scroll.threshold_px = self.pinch_threshold;
        config.scroll.divisor_px = self.scroll_divisor;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handpointer=info".into()),
        )
        .init();

    let config = cli.engine_config();
    info!("config: {}", config.config_sexp());
    let mut engine = GestureEngine::new(config)?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let options = ReplayOptions {
        mirror: cli.mirror,
        status: cli.status,
    };
    let stdout = io::stdout();
    replay_sexp(reader, stdout.lock(), &mut engine, &options)?;
    Ok(())
}
