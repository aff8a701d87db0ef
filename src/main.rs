#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::logging::init_tracing;

/// Options fixed at launch, read by the root component
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub seed: Option<u64>,
}

static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Launch options (set from command line or defaults)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| {
        let data_dir = default_data_dir();
        LaunchOptions {
            config_path: data_dir.join("config.json"),
            data_dir,
            seed: None,
        }
    })
}

/// Portfolio - interactive developer portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Developer portfolio with themed, animated sections")]
struct Args {
    /// Data directory for the theme preference and config
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed so effects replay identically
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let config_path = args
        .config
        .unwrap_or_else(|| data_dir.join("config.json"));

    tracing::info!("Starting portfolio with data dir: {:?}", data_dir);

    let _ = LAUNCH.set(LaunchOptions {
        data_dir,
        config_path,
        seed: args.seed,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Poovarasu | Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
