//! Record classification
//!
//! Splits a resolved field list into category buckets plus a residual
//! "Other" bucket for one record.

use super::{Category, FieldCatalog};
use crate::lens::record::{Record, QUERY_KEY, STATUS_KEY};
use std::collections::HashSet;
use std::fmt;

/// Label of a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLabel {
    Category(Category),
    Other,
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Category(category) => f.write_str(category.name()),
            GroupLabel::Other => f.write_str("Other"),
        }
    }
}

/// One non-empty bucket of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub label: GroupLabel,
    pub fields: Vec<String>,
}

/// Result of [`classify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Non-empty category buckets in catalog order
    pub categories: Vec<(Category, Vec<String>)>,
    /// Present fields with no known category
    pub other: Vec<String>,
}

impl Classification {
    /// All non-empty buckets in display order, Other last
    pub fn groups(&self) -> Vec<FieldGroup> {
        let mut groups: Vec<FieldGroup> = self
            .categories
            .iter()
            .map(|(category, fields)| FieldGroup {
                label: GroupLabel::Category(*category),
                fields: fields.clone(),
            })
            .collect();
        if !self.other.is_empty() {
            groups.push(FieldGroup {
                label: GroupLabel::Other,
                fields: self.other.clone(),
            });
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.other.is_empty()
    }
}

/// Partition `resolved` against `record`.
///
/// Fields absent from the record are dropped. Fields the catalog does not
/// know go to Other, except `query` and `status`. Each field is placed at
/// most once, at its first occurrence.
pub fn classify(catalog: &FieldCatalog, resolved: &[String], record: &Record) -> Classification {
    let mut placed: HashSet<&str> = HashSet::new();
    let mut categories = Vec::new();

    for (category, _) in catalog.categories() {
        let mut bucket = Vec::new();
        for field in resolved {
            if !record.contains(field) || placed.contains(field.as_str()) {
                continue;
            }
            if catalog.category_of(field) == Some(*category) {
                placed.insert(field.as_str());
                bucket.push(field.clone());
            }
        }
        if !bucket.is_empty() {
            categories.push((*category, bucket));
        }
    }

    let mut other = Vec::new();
    for field in resolved {
        let name = field.as_str();
        if !record.contains(name) || placed.contains(name) || name == QUERY_KEY || name == STATUS_KEY {
            continue;
        }
        placed.insert(name);
        other.push(field.clone());
    }

    Classification { categories, other }
}

// =============================================================================
// Tests
// =============================================================================
