//! Shareable links that reopen a customization.
//!
//! A link carries the icon id, the color as six hex digits and the pixel
//! size: `{base}/app?icon=fa-flask&color=3B82F6&size=256`.

use crate::color::HexColor;
use crate::customizer::{MAX_SIZE, MIN_SIZE};

/// A complete selection to encode into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub icon: String,
    pub color: HexColor,
    pub size: u32,
}

impl ShareLink {
    pub fn new(icon: impl Into<String>, color: HexColor, size: u32) -> Self {
        Self {
            icon: icon.into(),
            color,
            size,
        }
    }

    /// The query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        format!(
            "icon={}&color={}&size={}",
            urlencoding::encode(&self.icon),
            self.color.to_hex_digits(),
            self.size
        )
    }

    /// A full link below `base`, e.g. `https://icony.app`.
    pub fn to_url(&self, base: &str) -> String {
        format!("{}/app?{}", base.trim_end_matches('/'), self.to_query())
    }
}

/// Selection fields recovered from a link.
///
/// Each field is independent: a missing or unreadable value is `None` and
/// leaves the corresponding part of the selection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareParams {
    pub icon: Option<String>,
    pub color: Option<HexColor>,
    /// Already clamped into the valid size range.
    pub size: Option<u32>,
}

impl ShareParams {
    /// Reads parameters from a full URL or a bare query string.
    ///
    /// Unknown keys are skipped. Later duplicates win.
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut params = Self::default();
        for pair in query.split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let raw = raw.replace('+', " ");
            let Ok(value) = urlencoding::decode(&raw) else {
                continue;
            };
            let value = value.trim();
            match key {
                "icon" if !value.is_empty() => params.icon = Some(value.to_string()),
                "color" => {
                    if let Ok(color) = value.parse() {
                        params.color = Some(color);
                    }
                }
                "size" => {
                    if let Ok(size) = value.parse::<i64>() {
                        params.size = Some(size.clamp(MIN_SIZE.into(), MAX_SIZE.into()) as u32);
                    }
                }
                _ => {}
            }
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.color.is_none() && self.size.is_none()
    }
}

impl From<&ShareLink> for ShareParams {
    fn from(link: &ShareLink) -> Self {
        Self {
            icon: Some(link.icon.clone()),
            color: Some(link.color),
            size: Some(link.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> HexColor {
        "#3B82F6".parse().unwrap()
    }

    #[test]
    fn link_format() {
        let link = ShareLink::new("fa-flask", blue(), 256);
        assert_eq!(link.to_query(), "icon=fa-flask&color=3B82F6&size=256");
        assert_eq!(
            link.to_url("https://icony.app/"),
            "https://icony.app/app?icon=fa-flask&color=3B82F6&size=256"
        );
    }

    #[test]
    fn parse_reverses_link() {
        let link = ShareLink::new("lucide-circle-check", HexColor::new(0xEC, 0x48, 0x99), 64);
        let params = ShareParams::parse(&link.to_url("http://localhost:5173"));
        assert_eq!(params, ShareParams::from(&link));
    }

    #[test]
    fn parse_accepts_bare_query() {
        let params = ShareParams::parse("size=32&icon=tabler-home");
        assert_eq!(params.icon.as_deref(), Some("tabler-home"));
        assert_eq!(params.size, Some(32));
        assert_eq!(params.color, None);
    }

    #[test]
    fn parse_clamps_size_and_skips_garbage() {
        let params = ShareParams::parse("/app?icon=&color=nothex&size=9000&theme=dark#top");
        assert_eq!(params.icon, None);
        assert_eq!(params.color, None);
        assert_eq!(params.size, Some(512));

        assert_eq!(ShareParams::parse("size=-4").size, Some(16));
        assert_eq!(ShareParams::parse("size=big").size, None);
        assert!(ShareParams::parse("").is_empty());
    }

    #[test]
    fn parse_decodes_escapes() {
        let params = ShareParams::parse("icon=fa%2Dheart&color=%23ef4444");
        assert_eq!(params.icon.as_deref(), Some("fa-heart"));
        assert_eq!(params.color.map(|c| c.to_string()).as_deref(), Some("#EF4444"));
    }
}
