//! Composite categorical keys.

use std::fmt;

/// Ordered tuple of categorical labels identifying one group.
///
/// Parts keep the order of the group-by columns they were read from, so
/// `("Mr", "1", "male")` and `("1", "Mr", "male")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First label of the key, used as the pivot row.
    pub fn head(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Remaining labels joined with `/`, used as the pivot column.
    pub fn tail_label(&self) -> String {
        self.0.iter().skip(1).cloned().collect::<Vec<_>>().join("/")
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_parts_in_order() {
        let key = GroupKey::new(["Mr", "1", "male"]);
        assert_eq!(key.to_string(), "(Mr, 1, male)");
        assert_eq!(key.len(), 3);
    }

    #[test]
    fn head_and_tail_split_pivot_axes() {
        let key = GroupKey::new(["Miss", "3", "female"]);
        assert_eq!(key.head(), Some("Miss"));
        assert_eq!(key.tail_label(), "3/female");
        assert_eq!(GroupKey::new(["Mr"]).tail_label(), "");
    }

    #[test]
    fn ordering_follows_parts() {
        let a = GroupKey::new(["Master", "3"]);
        let b = GroupKey::new(["Mr", "1"]);
        assert!(a < b);
    }
}
