//! Phonetic grouping and search over a list of names
//!
//! Groups names that share a primary code, reports overlap statistics, and
//! finds the names that sound like a query.

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::{DoubleMetaphone, PhoneticCode};
use crate::batch::PARALLEL_THRESHOLD;
use crate::compare::{match_kind, MatchKind};
use crate::name::Name;

/// A name together with its phonetic codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedName {
    pub name: Name,
    pub codes: PhoneticCode,
}

/// Names sharing the same primary code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticGroup {
    pub code: String,
    pub members: Vec<EncodedName>,
}

/// Statistics over a list of names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameStats {
    /// Number of valid names
    pub names: usize,
    /// Number of distinct primary codes
    pub unique_codes: usize,
    /// Number of primary codes shared by two or more names
    pub match_groups: usize,
    /// Names that share their primary code with an earlier name
    pub overlaps: usize,
}

/// A name that phonetically matches a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: Name,
    pub codes: PhoneticCode,
    pub kind: MatchKind,
}

/// Encode every valid name, preserving input order. Blank names are skipped.
#[must_use]
pub fn encode_names<S: AsRef<str> + Sync>(names: &[S]) -> Vec<EncodedName> {
    let encoder = DoubleMetaphone::default();
    let encode_one = |raw: &S| -> Option<EncodedName> {
        let name = Name::parse(raw.as_ref()).ok()?;
        let codes = encoder.encode(name.as_str())?;
        Some(EncodedName { name, codes })
    };

    let encoded: Vec<Option<EncodedName>> = if names.len() >= PARALLEL_THRESHOLD {
        names.par_iter().map(encode_one).collect()
    } else {
        names.iter().map(encode_one).collect()
    };

    let skipped = encoded.iter().filter(|e| e.is_none()).count();
    if skipped > 0 {
        debug!(skipped, "skipping blank names");
    }

    encoded.into_iter().flatten().collect()
}

/// Group names by primary code.
///
/// Only groups with at least two members are returned. Groups appear in the
/// order their code was first seen, members in input order.
///
/// # Examples
/// ```
/// use namesake::group_by_code;
///
/// let groups = group_by_code(&["Smith", "Jones", "Smyth"]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].code, "SM0");
/// assert_eq!(groups[0].members.len(), 2);
/// ```
#[must_use]
pub fn group_by_code<S: AsRef<str> + Sync>(names: &[S]) -> Vec<PhoneticGroup> {
    bucket_by_code(encode_names(names))
        .into_iter()
        .filter(|group| group.members.len() > 1)
        .collect()
}

/// Compute name-list statistics.
#[must_use]
pub fn name_stats<S: AsRef<str> + Sync>(names: &[S]) -> NameStats {
    let encoded = encode_names(names);
    let total = encoded.len();
    let buckets = bucket_by_code(encoded);

    NameStats {
        names: total,
        unique_codes: buckets.len(),
        match_groups: buckets.iter().filter(|g| g.members.len() > 1).count(),
        overlaps: total - buckets.len(),
    }
}

/// Find every name that phonetically matches `query`, in input order.
///
/// Returns no hits for a blank query.
#[must_use]
pub fn search<S: AsRef<str> + Sync>(query: &str, names: &[S]) -> Vec<SearchHit> {
    let Some(query_codes) = DoubleMetaphone::default().encode(query) else {
        return Vec::new();
    };

    encode_names(names)
        .into_iter()
        .filter_map(|encoded| {
            let kind = match_kind(&query_codes, &encoded.codes)?;
            Some(SearchHit {
                name: encoded.name,
                codes: encoded.codes,
                kind,
            })
        })
        .collect()
}

fn bucket_by_code(encoded: Vec<EncodedName>) -> Vec<PhoneticGroup> {
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut groups: Vec<PhoneticGroup> = Vec::new();

    for item in encoded {
        match slots.get(&item.codes.primary) {
            Some(&slot) => groups[slot].members.push(item),
            None => {
                slots.insert(item.codes.primary.clone(), groups.len());
                groups.push(PhoneticGroup {
                    code: item.codes.primary.clone(),
                    members: vec![item],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_names_skips_blank() {
        let encoded = encode_names(&["Smith", "", "  ", "Reid"]);
        let names: Vec<&str> = encoded.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Smith", "Reid"]);
    }

    #[test]
    fn test_group_by_code() {
        let groups = group_by_code(&["Reid", "Smith", "Mary", "Reed", "Smyth", "Read"]);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].code, "RT");
        let members: Vec<&str> = groups[0].members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(members, ["Reid", "Reed", "Read"]);

        assert_eq!(groups[1].code, "SM0");
    }

    #[test]
    fn test_group_by_code_no_overlap() {
        assert!(group_by_code(&["John", "Mary"]).is_empty());
        assert!(group_by_code::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_name_stats() {
        let stats = name_stats(&["Reid", "Reed", "Smith", "Smyth", "Mary", ""]);
        assert_eq!(stats.names, 5);
        assert_eq!(stats.unique_codes, 3);
        assert_eq!(stats.match_groups, 2);
        assert_eq!(stats.overlaps, 2);
    }

    #[test]
    fn test_search() {
        let names = ["Smyth", "Jones", "Schmidt", "Smith"];
        let hits = search("Smith", &names);
        let found: Vec<(&str, MatchKind)> =
            hits.iter().map(|h| (h.name.as_str(), h.kind)).collect();
        assert_eq!(
            found,
            [("Smyth", MatchKind::Exact), ("Schmidt", MatchKind::Secondary), ("Smith", MatchKind::Exact)]
        );
    }

    #[test]
    fn test_search_blank_query() {
        assert!(search("   ", &["Smith"]).is_empty());
    }

    #[test]
    fn test_large_input_keeps_order() {
        let names: Vec<String> = (0..250)
            .map(|i| if i % 2 == 0 { format!("Reid{i}") } else { format!("Mary{i}") })
            .collect();
        let encoded = encode_names(&names);
        assert_eq!(encoded.len(), 250);
        assert_eq!(encoded[0].name.as_str(), "Reid0");
        assert_eq!(encoded[249].name.as_str(), "Mary249");
    }
}
