//! Runtime configuration of the explorer.
//!
//! The host serves `/api/config`; when the frontend is served some other way
//! (e.g. `trunk serve`) the request fails and the defaults apply.

use common::model::config::ExplorerConfig;
use gloo_console::warn;
use gloo_net::http::Request;

const CONFIG_PATH: &str = "/api/config";

pub async fn load_config() -> ExplorerConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => match response.json::<ExplorerConfig>().await {
            Ok(config) => config,
            Err(e) => {
                warn!(format!("Invalid explorer config, using defaults: {}", e));
                ExplorerConfig::default()
            }
        },
        Ok(response) => {
            warn!(format!(
                "Explorer config unavailable ({}), using defaults",
                response.status()
            ));
            ExplorerConfig::default()
        }
        Err(e) => {
            warn!(format!("Explorer config unavailable, using defaults: {}", e));
            ExplorerConfig::default()
        }
    }
}
