//! Controller domain: configuration errors.

/// Rejected tuning value, reported at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Field holds NaN or an infinity.
    NotFinite { field: &'static str },
    /// Duration, window, distance or speed below zero.
    Negative { field: &'static str, value: f32 },
    /// Value outside its allowed closed range.
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

impl ConfigurationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "'{}' must be a finite number", field),
            Self::Negative { field, value } => {
                write!(f, "'{}' must not be negative (got {})", field, value)
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "'{}' must lie within [{}, {}] (got {})",
                field, min, max, value
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}
