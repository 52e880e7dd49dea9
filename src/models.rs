/// Ordered mapping from display label to value.
///
/// Insertion order is preserved. Re-inserting an existing label keeps its
/// position and replaces the value (last write wins), matching the merge
/// semantics the aggregator relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    fields: Vec<(String, String)>,
}

impl LookupResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((label, value)),
        }
    }

    /// Insert every field of `other`, in its order, on top of `self`.
    pub fn merge(&mut self, other: LookupResult) {
        for (label, value) in other.fields {
            self.insert(label, value);
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.fields.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of merging every source's contribution for one request.
///
/// Partial success is success: `Success` holds a non-empty merge even when
/// some sources failed. `Failure` carries the joined error messages and is
/// produced only when every source failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateOutcome {
    Success(LookupResult),
    Failure(String),
}
