//! MediSearch Desktop: Dioxus search view over the medicine search service.

use std::process::ExitCode;

use dioxus::prelude::*;
use medisearch_core::{load_medisearch_config, SearchClient};

mod app;
mod search;
mod state;

use app::App;
use state::CLIENT;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medisearch=info".parse().expect("static directive")),
        )
        .with_target(false)
        .init();

    // Build the client before Dioxus launches; the view only reads it.
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = load_medisearch_config(&cwd);
    let client = match SearchClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Could not create HTTP client");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(endpoint = %client.endpoint(), top_k = client.top_k(), "Search client ready");
    let _ = CLIENT.set(client);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((17, 24, 39, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("MediSearch")
                            .with_inner_size(LogicalSize::new(1100.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }

    ExitCode::SUCCESS
}
