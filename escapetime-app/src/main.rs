mod app;

use eframe::egui;
use tracing::info;

use escapetime_core::{Complex, FractalKind, RenderParams};

use app::EscapetimeApp;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Which set this run renders. One set per run; switch to
/// `FractalKind::Julia(JULIA_C)` to explore the Julia set instead.
const FRACTAL_KIND: FractalKind = FractalKind::Mandelbrot;

/// Julia parameter used when `FRACTAL_KIND` is the Julia variant.
#[allow(dead_code)]
const JULIA_C: Complex = FractalKind::DEFAULT_JULIA_C;

/// Iteration bound before a point is declared interior.
const MAX_ITERATIONS: u32 = 100;

const INITIAL_WIDTH: f32 = 1024.0;
const INITIAL_HEIGHT: f32 = 786.0;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let params = RenderParams::new(MAX_ITERATIONS, FRACTAL_KIND).unwrap_or_default();
    info!(
        mode = params.kind.label(),
        max_iterations = params.max_iterations,
        "Starting Escapetime"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Escapetime")
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Escapetime",
        options,
        Box::new(move |_cc| Ok(Box::new(EscapetimeApp::new(params)))),
    )
}
