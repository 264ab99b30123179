use std::path::PathBuf;

/// Errors that can occur when placing a piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: i64, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: -1,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "column -1 is out of range (board has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.poll_interval_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.poll_interval_ms must be > 0"
        );
    }
}
