//! The caller-owned working ingredient set.
//!
//! An [`IngredientSet`] is an immutable value: every edit returns a new set
//! and the caller replaces its copy wholesale. Entries are stored already
//! normalized, in the order they were added.

use crate::error::SetError;
use crate::limits::SearchLimits;
use crate::normalize::validate_with;

/// Ordered, capped list of normalized ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `raw` normalized and appended.
    ///
    /// A full set rejects the input before it is validated. Duplicates are
    /// allowed.
    ///
    /// # Example
    /// ```
    /// use smartchef_search::{IngredientSet, SearchLimits};
    ///
    /// let limits = SearchLimits::default();
    /// let set = IngredientSet::new()
    ///     .with_added(" Tomato", &limits)?
    ///     .with_added("basil", &limits)?;
    ///
    /// assert_eq!(set.as_slice(), ["tomato", "basil"]);
    /// # Ok::<(), smartchef_search::SetError>(())
    /// ```
    pub fn with_added(&self, raw: &str, limits: &SearchLimits) -> Result<Self, SetError> {
        if self.is_full(limits) {
            return Err(SetError::Full {
                max: limits.max_ingredients,
            });
        }

        let normalized = validate_with(raw, limits)?;
        let mut items = self.items.clone();
        items.push(normalized.into_inner());
        Ok(Self { items })
    }

    /// Returns a new set without any entry equal to `name`.
    pub fn without(&self, name: &str) -> Self {
        Self {
            items: self.items.iter().filter(|i| *i != name).cloned().collect(),
        }
    }

    /// Returns an empty set.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true once the set has reached `limits.max_ingredients`.
    pub fn is_full(&self, limits: &SearchLimits) -> bool {
        self.items.len() >= limits.max_ingredients
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
