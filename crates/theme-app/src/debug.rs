//! Debug-mode detection from the query string.

/// True when the location search carries `debug=1`.
pub fn debug_flag(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "debug=1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_present() {
        assert!(debug_flag("?debug=1"));
        assert!(debug_flag("?utm=x&debug=1"));
    }

    #[test]
    fn test_flag_absent() {
        assert!(!debug_flag(""));
        assert!(!debug_flag("?debug=0"));
        assert!(!debug_flag("?nodebug=1"));
    }
}
