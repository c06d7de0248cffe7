#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Atelier - portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "atelier-desktop")]
#[command(about = "Atelier - portfolio viewer with gallery, reveals and contact form")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 850.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(width = args.width, height = args.height, "Starting Atelier");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Atelier")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
