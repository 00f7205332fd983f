//! Markers: named tags that can be attached to a log call

use std::fmt;
use std::sync::Arc;

/// An opaque categorization tag.
///
/// A marker has a name and may reference other markers, so that a call tagged
/// `SECURITY` can also be considered `AUDIT` when `SECURITY` references it.
/// The facade adapter accepts markers on every call shape but does not look at
/// them; they exist so callers written against a marker-aware API keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    references: Vec<Arc<Marker>>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Arc<Marker>) -> Self {
        self.add(reference);
        self
    }

    pub fn add(&mut self, reference: Arc<Marker>) {
        if !self.references.iter().any(|r| r.name == reference.name) {
            self.references.push(reference);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }

    pub fn references(&self) -> impl Iterator<Item = &Arc<Marker>> {
        self.references.iter()
    }

    /// True if this marker is `name` or references it, directly or transitively.
    pub fn contains(&self, name: &str) -> bool {
        self.name == name || self.references.iter().any(|r| r.contains(name))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.has_references() {
            write!(f, " [ ")?;
            for (i, reference) in self.references.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", reference)?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_walks_references() {
        let audit = Arc::new(Marker::new("AUDIT"));
        let security = Arc::new(Marker::new("SECURITY").with_reference(audit));
        let login = Marker::new("LOGIN").with_reference(security);

        assert!(login.contains("LOGIN"));
        assert!(login.contains("SECURITY"));
        assert!(login.contains("AUDIT"));
        assert!(!login.contains("BILLING"));
    }

    #[test]
    fn test_duplicate_references_are_ignored() {
        let mut marker = Marker::new("A");
        marker.add(Arc::new(Marker::new("B")));
        marker.add(Arc::new(Marker::new("B")));
        assert_eq!(marker.references().count(), 1);
    }

    #[test]
    fn test_display() {
        let marker = Marker::new("A")
            .with_reference(Arc::new(Marker::new("B")))
            .with_reference(Arc::new(Marker::new("C")));
        assert_eq!(marker.to_string(), "A [ B, C ]");
        assert_eq!(Marker::new("X").to_string(), "X");
    }
}
