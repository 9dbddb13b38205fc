use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Backend origin; the API lives under `<backend_url>/api`.
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl RuntimeConfig {
    /// Explicit API base first, then the backend origin with `/api` appended.
    pub fn api_base(&self) -> Option<String> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        if let Some(api) = non_empty(&self.api_base_url) {
            return Some(normalize_base_url(&api));
        }
        non_empty(&self.backend_url).map(|backend| api_base_from_backend(&backend))
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub fn api_base_from_backend(backend_url: &str) -> String {
    format!("{}/api", normalize_base_url(backend_url))
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let lookup = |keys: &[&str]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    };
    Some(RuntimeConfig {
        api_base_url: lookup(&["API_BASE_URL", "api_base_url"]),
        backend_url: lookup(&["BACKEND_URL", "backend_url"]),
    })
}

/// `window.__HRMS_ENV` (env.js) takes precedence over `window.__HRMS_CONFIG`.
fn snapshot_from_globals() -> Option<String> {
    ["__HRMS_ENV", "__HRMS_CONFIG"]
        .iter()
        .filter_map(|name| read_global(name))
        .find_map(|cfg| cfg.api_base())
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let origin = page_origin().ok_or_else(|| anyhow!("no window origin"))?;
    let url = reqwest::Url::parse(&format!("{}/", origin))
        .and_then(|base| base.join("config.json"))
        .context("invalid config.json url")?;
    let resp = reqwest::get(url)
        .await
        .context("failed to request config.json")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json returned {}", resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("failed to parse config.json")
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = cfg.api_base() {
                return cache_base_url(url);
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    let fallback = page_origin()
        .map(|origin| api_base_from_backend(&origin))
        .unwrap_or_else(|| "http://localhost:8000/api".to_string());
    cache_base_url(fallback)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
