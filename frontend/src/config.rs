use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Shape of the optional `./config.json` served next to the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn get_from_env_js() -> Option<String> {
        // Optional global object: window.__PORTAL_ENV = { API_BASE_URL: "..." }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__PORTAL_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        // Try upper and lower case keys
        let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
        val.and_then(|v| v.as_string())
    }

    fn get_from_window_config() -> Option<String> {
        // Optional global object: window.__PORTAL_CONFIG = { api_base_url: "..." }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__PORTAL_CONFIG".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
        val.and_then(|v| v.as_string())
    }

    pub fn snapshot_from_globals() -> Option<String> {
        get_from_env_js().or_else(get_from_window_config)
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let url = match &cfg.api_base_url {
            Some(url) => url,
            None => return,
        };
        let w = match web_sys::window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__PORTAL_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    // Outside the browser there are no window globals and no
    // bundle-relative config.json to fetch.
    pub fn snapshot_from_globals() -> Option<String> {
        None
    }

    pub fn write_window_config(_cfg: &RuntimeConfig) {}

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Resolve the API base URL, preferring (in order) the cached value, the
/// window globals set by env.js, `./config.json`, and finally the local
/// development default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        browser::write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
