//! Semantic role of a button.

/// Visual status (emphasis) of a button.
///
/// - `Primary`: filled, high emphasis call to action
/// - `Secondary`: outlined, medium emphasis
/// - `Default`: standard appearance
/// - `Muted`: minimal chrome for subtle actions
/// - `Highlighted`: fixed highlight palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ButtonStatus {
    #[default]
    Primary,
    Secondary,
    Default,
    Muted,
    Highlighted,
}

token_enum!(ButtonStatus, "status", {
    Primary => "primary",
    Secondary => "secondary",
    Default => "default",
    Muted => "muted",
    Highlighted => "highlighted",
});

/// Check whether `value` names a button status.
pub fn is_valid_status(value: &str) -> bool {
    ButtonStatus::from_token(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens() {
        assert!(is_valid_status("primary"));
        assert!(is_valid_status("highlighted"));
        assert!(!is_valid_status("bogus"));
        assert!(!is_valid_status("Primary"));
        assert!(!is_valid_status(""));
    }

    #[test]
    fn status_parse_reports_unknown_token() {
        assert_eq!("muted".parse::<ButtonStatus>().unwrap(), ButtonStatus::Muted);

        let err = "loud".parse::<ButtonStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown status 'loud'");
    }
}
