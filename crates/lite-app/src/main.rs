mod app_state;
mod cli;

use lite_config::LiteConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Lite crashed ---");
        eprintln!("Run with --log-level debug and include the log when reporting.");
        eprintln!("--------------------\n");

        default_hook(info);
    }));
}

fn load_config(args: &cli::Args) -> Result<LiteConfig, lite_common::ConfigError> {
    match &args.config {
        Some(path) => lite_config::load_config_from(path),
        None => lite_config::load_config(),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read first so its log level can seed the filter.
    let loaded = load_config(&args);
    let directive = args.log_directive().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.level.directive())
            .unwrap_or("lite=info")
            .to_string()
    });
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Lite v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LiteConfig::default()
    });
    // Loading never validates; this is the only check.
    if let Err(e) = lite_config::validation::validate(&config) {
        tracing::warn!(error = %e, "config has invalid values, using them anyway");
    }

    let profile_dir = match lite_platform::ensure_dirs() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!("Failed to create profile directory: {e}");
            None
        }
    };

    let registry = lite_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::LiteApp::new(config, registry, profile_dir, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
