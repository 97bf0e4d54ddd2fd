use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("palette file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("palette parse error: {0}")]
    ParseError(String),

    #[error("palette validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_palette_names_the_path() {
        let err = ConfigError::FileNotFound(PathBuf::from("themes/night.toml"));
        assert_eq!(err.to_string(), "palette file not found: themes/night.toml");
    }

    #[test]
    fn validation_error_keeps_every_slot_message() {
        let err = ConfigError::ValidationError(
            "accent_red = \"#12345\" is not a valid color; gradient[1] = \"bogus\" is not a valid color"
                .into(),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("palette validation error: "));
        assert!(msg.contains("accent_red"));
        assert!(msg.contains("gradient[1]"));
    }

    #[test]
    fn config_error_passes_through_unchanged() {
        let config_err = ConfigError::ParseError("failed to parse YAML: invalid type".into());
        let expected = config_err.to_string();
        let tint_err: TintError = config_err.into();
        assert!(matches!(tint_err, TintError::Config(ConfigError::ParseError(_))));
        assert_eq!(tint_err.to_string(), expected);
    }

    #[test]
    fn other_is_shown_verbatim() {
        let err = TintError::Other("failed to serialize output: recursion limit".into());
        assert_eq!(err.to_string(), "failed to serialize output: recursion limit");
    }
}
