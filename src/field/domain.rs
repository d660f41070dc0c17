use thiserror::Error;

use super::{FieldSpecifier, Layout};

/// An error constructing a search domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("a search domain must contain at least one layout")]
    Empty,

    #[error("domain has {layouts} layouts but {specifiers} field specifiers")]
    LengthMismatch { layouts: usize, specifiers: usize },
}

/// An ordered sequence of candidate layouts paired 1:1 with their field
/// specifiers.
///
/// Index 0 is the smallest-capacity end of the domain (highest excess
/// temperature); the last index is the largest-capacity end. The linear
/// search relies on this ordering to bracket the feasibility boundary.
#[derive(Debug, Clone)]
pub struct SearchDomain {
    layouts: Vec<Layout>,
    specifiers: Vec<FieldSpecifier>,
}

impl SearchDomain {
    /// Constructs a domain from layouts and their specifiers.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the domain is empty or the two
    /// sequences differ in length.
    pub fn new(layouts: Vec<Layout>, specifiers: Vec<FieldSpecifier>) -> Result<Self, DomainError> {
        if layouts.is_empty() {
            return Err(DomainError::Empty);
        }
        if layouts.len() != specifiers.len() {
            return Err(DomainError::LengthMismatch {
                layouts: layouts.len(),
                specifiers: specifiers.len(),
            });
        }
        Ok(Self {
            layouts,
            specifiers,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Always false; construction rejects empty domains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.layouts.len() - 1
    }

    #[must_use]
    pub fn layout(&self, index: usize) -> &Layout {
        &self.layouts[index]
    }

    #[must_use]
    pub fn specifier(&self, index: usize) -> &FieldSpecifier {
        &self.specifiers[index]
    }
}

/// A family of search domains ordered by a secondary parameter (e.g. a
/// template ratio), searched by the nested routines.
#[derive(Debug, Clone)]
pub struct NestedDomain {
    domains: Vec<SearchDomain>,
}

impl NestedDomain {
    /// Constructs a nested domain from inner domains.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Empty`] if no inner domains are supplied.
    pub fn new(domains: Vec<SearchDomain>) -> Result<Self, DomainError> {
        if domains.is_empty() {
            return Err(DomainError::Empty);
        }
        Ok(Self { domains })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Always false; construction rejects empty families.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn domain(&self, index: usize) -> &SearchDomain {
        &self.domains[index]
    }

    /// Builds the outer search domain for the nested routines.
    ///
    /// The outer domain takes one representative boundary layout from each
    /// inner domain: the last (largest-capacity) layout of every inner
    /// domain, with the first layout of the first inner domain prepended so
    /// the small end of the outer domain starts with a high excess
    /// temperature.
    #[must_use]
    pub fn outer(&self) -> SearchDomain {
        let mut layouts = vec![self.domains[0].layout(0).clone()];
        let mut specifiers = vec![self.domains[0].specifier(0).clone()];
        for inner in &self.domains {
            let last = inner.last_index();
            layouts.push(inner.layout(last).clone());
            specifiers.push(inner.specifier(last).clone());
        }
        SearchDomain {
            layouts,
            specifiers,
        }
    }
}
