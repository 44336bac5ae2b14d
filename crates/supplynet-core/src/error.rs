use std::fmt;

/// Machine-readable error codes for pipeline-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MalformedInput,
    InvalidInput,
    InvalidRelationship,
    InputUnreadable,
    ConfigParseError,
    InvalidConfig,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MalformedInput => "E1001",
            Self::InvalidInput => "E1002",
            Self::InvalidRelationship => "E1003",
            Self::InputUnreadable => "E1004",
            Self::ConfigParseError => "E2001",
            Self::InvalidConfig => "E2002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MalformedInput => "Input is not valid JSON",
            Self::InvalidInput => "Input is not a relationship array",
            Self::InvalidRelationship => "Relationship is missing an endpoint",
            Self::InputUnreadable => "Input could not be read",
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidConfig => "Invalid risk weights",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and pipelines.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::MalformedInput => Some("Check the input for JSON syntax errors."),
            Self::InvalidInput => {
                Some("Provide a JSON array such as [{\"from\": \"A\", \"to\": \"B\"}].")
            }
            Self::InvalidRelationship => {
                Some("Give every relationship non-empty string \"from\" and \"to\" fields.")
            }
            Self::InputUnreadable => {
                Some("Check the file path, or pipe the relationship array on stdin.")
            }
            Self::ConfigParseError => Some("Fix syntax in .supplynet/config.toml and retry."),
            Self::InvalidConfig => {
                Some("Keep max_score within 1..=100 and base_score at or below max_score.")
            }
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use std::collections::HashSet;

    const ALL: [ErrorCode; 7] = [
        ErrorCode::MalformedInput,
        ErrorCode::InvalidInput,
        ErrorCode::InvalidRelationship,
        ErrorCode::InputUnreadable,
        ErrorCode::ConfigParseError,
        ErrorCode::InvalidConfig,
        ErrorCode::InternalUnexpected,
    ];

    #[test]
    fn all_codes_are_unique() {
        let mut seen = HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        for code in ALL {
            let code = code.code();
            assert_eq!(code.len(), 5);
            assert!(code.starts_with('E'));
            assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(ErrorCode::InvalidRelationship.to_string(), "E1003");
    }
}
