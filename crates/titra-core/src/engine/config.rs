use thiserror::Error;

pub const DEFAULT_COMMENT_MARKER: char = '#';
pub const DEFAULT_PH_KEY: &str = "pH";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Comment marker must be a visible character, got {0:?}")]
    InvalidCommentMarker(char),
    #[error("Header key token must be a single non-empty word, got {0:?}")]
    InvalidHeaderKey(String),
}

/// How runs are assigned to pH groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingStrategy {
    /// Exact equality of the parsed floating-point value.
    #[default]
    Value,
    /// Equality of the pH token text as written in the header.
    Label,
}

/// Lexical conventions of the log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    pub comment_marker: char,
    pub ph_key: String,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            ph_key: DEFAULT_PH_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    pub format: LogFormat,
    pub grouping: GroupingStrategy,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    comment_marker: Option<char>,
    ph_key: Option<String>,
    grouping: Option<GroupingStrategy>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = Some(marker);
        self
    }

    pub fn ph_key(mut self, key: impl Into<String>) -> Self {
        self.ph_key = Some(key.into());
        self
    }

    pub fn grouping(mut self, strategy: GroupingStrategy) -> Self {
        self.grouping = Some(strategy);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let comment_marker = self.comment_marker.unwrap_or(DEFAULT_COMMENT_MARKER);
        if comment_marker.is_whitespace() || comment_marker.is_control() {
            return Err(ConfigError::InvalidCommentMarker(comment_marker));
        }

        let ph_key = self.ph_key.unwrap_or_else(|| DEFAULT_PH_KEY.to_string());
        if ph_key.is_empty() || ph_key.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHeaderKey(ph_key));
        }

        Ok(AnalysisConfig {
            format: LogFormat {
                comment_marker,
                ph_key,
            },
            grouping: self.grouping.unwrap_or_default(),
        })
    }
}
