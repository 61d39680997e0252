use web_sys::window;

/// `<meta name="activity-board:api-base" content="https://...">` in index.html.
pub const API_BASE_META: &str = "activity-board:api-base";

/// How long a signup message stays on screen.
pub const MESSAGE_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Empty means same-origin relative paths.
    pub api_base: String,
    pub message_hide_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_hide_ms: MESSAGE_HIDE_MS,
        }
    }
}

impl BoardConfig {
    pub fn with_api_base(raw: Option<&str>) -> Self {
        let api_base = raw
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        Self {
            api_base,
            ..Self::default()
        }
    }

    /// Reads the mount page; a missing tag keeps the defaults.
    pub fn from_dom() -> Self {
        match read_meta(API_BASE_META) {
            Ok(base) => Self::with_api_base(base.as_deref()),
            Err(e) => {
                gloo::console::log!(format!("Using default config: {e}"));
                Self::default()
            }
        }
    }
}

fn read_meta(name: &str) -> Result<Option<String>, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .map_err(|_| "bad meta selector".to_string())?;
    Ok(el.and_then(|el| el.get_attribute("content")))
}
