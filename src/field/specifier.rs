use std::fmt;

/// Opaque label identifying how a layout was produced.
///
/// Specifiers are bookkeeping for the evaluation trace and downstream
/// reports (e.g. a spacing value or template name). They never influence
/// control decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpecifier(String);

impl FieldSpecifier {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label for the single-borehole probe field.
    #[must_use]
    pub fn single() -> Self {
        Self("1X1".to_string())
    }

    /// Label for this field with `removed` boreholes pruned from it.
    #[must_use]
    pub fn with_removed(&self, removed: usize) -> Self {
        Self(format!("{}_BR{removed}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldSpecifier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(FieldSpecifier::single().as_str(), "1X1");
        assert_eq!(
            FieldSpecifier::new("5.0_7x12").with_removed(3).as_str(),
            "5.0_7x12_BR3"
        );
    }
}
