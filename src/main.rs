//! Inqlusiv Admin - Desktop console for the Inqlusiv HR platform.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use inqlusiv_admin as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop administration console for the Inqlusiv HR platform.
#[derive(Parser)]
#[command(name = "inqlusiv-admin")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Override the backend server URL for this session
    #[arg(long)]
    server: Option<String>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to a rolling file; the guard must outlive the app
    let _log_guard = init_logging();

    tracing::info!("Inqlusiv admin console starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let (mut config, initial_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            (AppConfig::default(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            (AppConfig::default(), Some(format!("Config invalid, using defaults: {e}")))
        }
    };

    if let Some(server) = cli.server {
        tracing::info!("Server override: {}", server);
        config.server.base_url = server;
    }

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inqlusiv Admin Console")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inqlusiv Admin Console",
        options,
        Box::new(move |cc| {
            // Icon font and image loaders
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut app = App::new(config, config_path, rt);
            if let Some(error) = initial_error {
                app.error_message = Some(error);
            }
            Ok(Box::new(app))
        }),
    )
}

/// Set up file logging under the platform data directory.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = directories::ProjectDirs::from("com", "Inqlusiv", "inqlusiv-admin")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    let file_appender = tracing_appender::rolling::daily(log_dir, "inqlusiv-admin.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    guard
}
