//! Light/dark palettes.
//!
//! The theme is an injected value: build one [`Theme`] at startup and hand
//! it to whatever renders, then pick the palette for the viewer's mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ApiError::InvalidInput(format!("unknown theme mode: {}", other))),
        }
    }
}

/// Named colors used by every screen. Values are `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub primary: String,
    pub accent: String,
    pub border: String,
    pub danger: String,
    pub success: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            surface: "#f4f5f7".into(),
            text: "#1c1c1e".into(),
            text_secondary: "#6b6b70".into(),
            primary: "#2f6fed".into(),
            accent: "#f5a623".into(),
            border: "#dcdde1".into(),
            danger: "#d93025".into(),
            success: "#1e8e3e".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#121212".into(),
            surface: "#1e1e1e".into(),
            text: "#f2f2f7".into(),
            text_secondary: "#a1a1a6".into(),
            primary: "#5b8def".into(),
            accent: "#ffb84d".into(),
            border: "#2c2c2e".into(),
            danger: "#ff6b5e".into(),
            success: "#4cc26b".into(),
        }
    }

    /// `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_secondary", self.text_secondary.as_str()),
            ("primary", self.primary.as_str()),
            ("accent", self.accent.as_str()),
            ("border", self.border.as_str()),
            ("danger", self.danger.as_str()),
            ("success", self.success.as_str()),
        ]
    }
}

/// The `{ light, dark }` palette pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl Theme {
    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
