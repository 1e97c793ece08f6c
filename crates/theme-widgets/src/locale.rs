//! Locale-prefixed path rewriting for the language picker.

/// Locale prefixes the theme serves.
pub const KNOWN_LOCALES: [&str; 2] = ["de", "en"];

/// Storage key for the picked country.
pub const COUNTRY_STORAGE_KEY: &str = "selectedCountry";

/// Rewrite the current path under a new locale prefix.
///
/// An existing known-locale prefix is stripped first; the match is segment
/// aware, so `/delta` keeps its `de` and only `/de` or `/de/...` is
/// stripped. The root collapses to just the locale prefix.
pub fn locale_path(current_path: &str, locale: &str) -> String {
    let stripped = strip_locale(current_path);
    if stripped.is_empty() || stripped == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{stripped}")
    }
}

fn strip_locale(path: &str) -> &str {
    for known in KNOWN_LOCALES {
        if let Some(rest) = path.strip_prefix('/').and_then(|p| p.strip_prefix(known)) {
            if rest.is_empty() || rest.starts_with('/') {
                return rest;
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_becomes_locale() {
        assert_eq!(locale_path("/", "en"), "/en");
        assert_eq!(locale_path("", "de"), "/de");
    }

    #[test]
    fn test_unprefixed_path_gains_locale() {
        assert_eq!(locale_path("/pricing", "en"), "/en/pricing");
    }

    #[test]
    fn test_existing_locale_is_replaced() {
        assert_eq!(locale_path("/de/pricing", "en"), "/en/pricing");
        assert_eq!(locale_path("/en", "de"), "/de");
    }

    #[test]
    fn test_locale_match_is_segment_aware() {
        assert_eq!(locale_path("/delta", "en"), "/en/delta");
        assert_eq!(locale_path("/entry/x", "de"), "/de/entry/x");
    }
}
