mod backend;
mod frontend;
mod utils;

use crate::backend::api::ApiClient;
use crate::backend::utils::config::{ApiConfig, AppConfig};
use crate::frontend::app::Route;
use crate::frontend::assets::MAIN_CSS;
use crate::frontend::services::{Session, SessionState};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_router::Router;

fn main() -> utils::Result<()> {
    utils::logging::init();

    let config = AppConfig::load();

    let api = match ApiClient::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            log::error!("{e}, falling back to the default API");
            ApiClient::new(&ApiConfig::default())?
        }
    };
    log::info!("Starting {} against {}", config.app_name, api.base_url());

    launch(config, api);
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch(config: AppConfig, api: ApiClient) {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(config.window.width, config.window.height);
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.app_name.clone())
                .with_inner_size(size)
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .with_context(api)
        .launch(AppRoot);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: AppConfig, api: ApiClient) {
    LaunchBuilder::new()
        .with_context(config)
        .with_context(api)
        .launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let session = use_signal(Session::anonymous);
    use_context_provider(|| SessionState::new(session));

    rsx! {
        style { dangerous_inner_html: MAIN_CSS }
        Router::<Route> {}
    }
}
