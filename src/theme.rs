//! Theme State and Persistence
//!
//! Light/dark selection, persisted to `localStorage` and mirrored onto the
//! root element's `data-theme` attribute for the stylesheet.

const THEME_STORAGE_KEY: &str = "theme";
const THEME_ATTRIBUTE: &str = "data-theme";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored value; anything unrecognized falls back to light
    fn from_storage_value(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the persisted theme, defaulting to light
pub fn load() -> Theme {
    let stored = local_storage().and_then(|storage| {
        storage.get_item(THEME_STORAGE_KEY).ok().flatten()
    });
    Theme::from_storage_value(stored.as_deref())
}

/// Persist `theme` for the next session
pub fn save(theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!(theme = theme.as_str(), "failed persisting theme");
            }
        }
        None => tracing::warn!("local storage unavailable, theme not persisted"),
    }
}

/// Mirror `theme` onto the document root for CSS selection
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    match root {
        Some(root) => {
            if root.set_attribute(THEME_ATTRIBUTE, theme.as_str()).is_err() {
                tracing::warn!(theme = theme.as_str(), "failed setting theme attribute");
            }
        }
        None => tracing::warn!("document root unavailable, theme attribute not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_storage_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage_value(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn test_unknown_storage_value_falls_back_to_light() {
        assert_eq!(Theme::from_storage_value(None), Theme::Light);
        assert_eq!(Theme::from_storage_value(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_storage_value(Some("")), Theme::Light);
    }
}
