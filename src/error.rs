/// Errors that abort a move calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("cannot calculate a move on a full board")]
    BoardFull,

    #[error("player was asked to move before init")]
    NotInitialised,
}

/// Errors that can occur when validating match configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("time per move must be positive")]
    NoTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::BoardFull.to_string(),
            "cannot calculate a move on a full board"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::EmptyBoard { rows: 0, cols: 7 };
        assert_eq!(
            err.to_string(),
            "board must have at least one row and one column, got 0x7"
        );
    }
}
