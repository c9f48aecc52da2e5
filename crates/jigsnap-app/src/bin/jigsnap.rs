//! Jigsnap desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Jigsnap application.

use std::path::PathBuf;

use clap::Parser;
use jigsnap_app::{JigsnapApp, LaunchOptions};
use jigsnap_core::GridSize;
use jigsnap_game::ShuffleSeed;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Image to open on start.
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Pieces per side of the puzzle grid.
    #[arg(
        short = 'n',
        long = "pieces",
        value_name = "N",
        default_value_t = GridSize::DEFAULT.side(),
        value_parser = clap::value_parser!(u32).range(
            i64::from(GridSize::MIN_SELECTABLE.side())..=i64::from(GridSize::MAX_SELECTABLE.side())
        ),
    )]
    pieces: u32,

    /// Directory for the transient puzzle image [default: <temp dir>/jigsnap].
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Fixed shuffle seed (64 hex digits) for reproducible layouts.
    #[arg(long, value_name = "HEX")]
    seed: Option<ShuffleSeed>,
}

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.jigsnap";

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!(
        "Starting Jigsnap, version={}",
        jigsnap_app::version::build_version()
    );

    let launch = LaunchOptions {
        image: args.image,
        piece_count: Some(GridSize::clamped(args.pieces)),
        cache_dir: args.cache_dir,
        seed: args.seed,
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Jigsnap",
        options,
        Box::new(move |cc| Ok(Box::new(JigsnapApp::new(cc, launch)))),
    )
}
