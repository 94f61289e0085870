//! Pure renumbering plan.
//! Parses file stems into a variant + numeric key, orders each variant group,
//! and assigns contiguous target indices. Nothing here touches the filesystem.
//!
//! Ordering is variant-major (all regular files before all alternate files),
//! then key-minor. Equal keys fall back to the file name so the result never
//! depends on directory listing order.

use std::cmp::Ordering;
use std::path::PathBuf;

/// Sort key used for stems whose numeric part does not parse.
/// Unparsed names therefore sort first within their variant group.
pub const UNPARSED_KEY: u64 = 0;

/// Which numbering stream a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Regular,
    Alternate,
}

/// Result of parsing a file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedName {
    Parsed { variant: Variant, key: u64 },
    Unparsed { variant: Variant },
}

impl ParsedName {
    pub fn variant(&self) -> Variant {
        match *self {
            ParsedName::Parsed { variant, .. } | ParsedName::Unparsed { variant } => variant,
        }
    }

    /// Numeric key for ordering; `UNPARSED_KEY` when the stem had no usable number.
    pub fn sort_key(&self) -> u64 {
        match *self {
            ParsedName::Parsed { key, .. } => key,
            ParsedName::Unparsed { .. } => UNPARSED_KEY,
        }
    }
}

/// Classify a stem and extract its numeric key.
///
/// A stem containing `marker` is `Alternate`; every occurrence of the marker is
/// removed before parsing. The remainder (whitespace-trimmed) must be a
/// non-negative integer, otherwise the name is `Unparsed`. An empty marker
/// never matches.
pub fn parse_stem(stem: &str, marker: &str) -> ParsedName {
    let (variant, digits) = if !marker.is_empty() && stem.contains(marker) {
        (Variant::Alternate, stem.replace(marker, ""))
    } else {
        (Variant::Regular, stem.to_string())
    };

    match digits.trim().parse::<u64>() {
        Ok(key) => ParsedName::Parsed { variant, key },
        Err(_) => ParsedName::Unparsed { variant },
    }
}

/// A file found in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path at discovery time.
    pub path: PathBuf,
    /// Full file name including extension (lossy for non-UTF8 names).
    pub file_name: String,
    pub name: ParsedName,
}

impl Entry {
    /// Build an entry from a path, parsing its stem with `marker`.
    pub fn from_path(path: PathBuf, marker: &str) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = parse_stem(&stem, marker);
        Self {
            path,
            file_name,
            name,
        }
    }

    pub fn variant(&self) -> Variant {
        self.name.variant()
    }
}

/// One planned rename: entry -> `<index>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub entry: Entry,
    /// 1-based sequential index.
    pub index: usize,
    pub target_name: String,
}

/// Ordered assignments plus the entries left out by the cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub assignments: Vec<Assignment>,
    /// Entries past `max_count`; they keep their original names.
    pub skipped: Vec<Entry>,
    pub regular_count: usize,
    pub alternate_count: usize,
}

impl Plan {
    pub fn total_entries(&self) -> usize {
        self.regular_count + self.alternate_count
    }

    /// Plan with no assignments means there is nothing to move.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

fn by_key_then_name(a: &Entry, b: &Entry) -> Ordering {
    a.name
        .sort_key()
        .cmp(&b.name.sort_key())
        .then_with(|| a.file_name.cmp(&b.file_name))
}

/// Build the renumbering plan for `entries`.
///
/// Regular entries get indices `1..`, alternate entries continue the same
/// counter. Assignment stops once the index would exceed `max_count`.
pub fn build_plan(entries: Vec<Entry>, max_count: usize, extension: &str) -> Plan {
    let (mut regular, mut alternate): (Vec<Entry>, Vec<Entry>) = entries
        .into_iter()
        .partition(|e| e.variant() == Variant::Regular);

    regular.sort_by(by_key_then_name);
    alternate.sort_by(by_key_then_name);

    let regular_count = regular.len();
    let alternate_count = alternate.len();

    let mut assignments = Vec::with_capacity(max_count.min(regular_count + alternate_count));
    let mut skipped = Vec::new();

    for entry in regular.into_iter().chain(alternate) {
        let index = assignments.len() + 1;
        if index > max_count {
            skipped.push(entry);
            continue;
        }
        assignments.push(Assignment {
            entry,
            index,
            target_name: target_name(index, extension),
        });
    }

    Plan {
        assignments,
        skipped,
        regular_count,
        alternate_count,
    }
}

/// `<index>.<ext>`
pub fn target_name(index: usize, extension: &str) -> String {
    format!("{index}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry::from_path(PathBuf::from("/imgs").join(name), "_b2")
    }

    fn mapping(plan: &Plan) -> Vec<(String, String)> {
        plan.assignments
            .iter()
            .map(|a| (a.entry.file_name.clone(), a.target_name.clone()))
            .collect()
    }

    #[test]
    fn parse_regular_and_alternate() {
        assert_eq!(
            parse_stem("42", "_b2"),
            ParsedName::Parsed {
                variant: Variant::Regular,
                key: 42
            }
        );
        assert_eq!(
            parse_stem("42_b2", "_b2"),
            ParsedName::Parsed {
                variant: Variant::Alternate,
                key: 42
            }
        );
        assert_eq!(
            parse_stem("abc", "_b2"),
            ParsedName::Unparsed {
                variant: Variant::Regular
            }
        );
        assert_eq!(
            parse_stem("x_b2", "_b2"),
            ParsedName::Unparsed {
                variant: Variant::Alternate
            }
        );
    }

    #[test]
    fn parse_edge_cases() {
        // negative numbers are not valid keys
        assert_eq!(parse_stem("-3", "_b2").sort_key(), UNPARSED_KEY);
        assert!(matches!(parse_stem("-3", "_b2"), ParsedName::Unparsed { .. }));
        assert_eq!(parse_stem(" 7 ", "_b2").sort_key(), 7);
        assert_eq!(parse_stem("007", "_b2").sort_key(), 7);
        // every marker occurrence is stripped
        assert_eq!(parse_stem("1_b22_b2", "_b2").sort_key(), 12);
        // empty marker never classifies as alternate
        assert_eq!(parse_stem("5", "").variant(), Variant::Regular);
        assert_eq!(parse_stem("", "_b2").sort_key(), UNPARSED_KEY);
    }

    #[test]
    fn regular_before_alternate_then_by_key() {
        let plan = build_plan(
            vec![entry("5.png"), entry("3.png"), entry("5_b2.png")],
            10,
            "png",
        );
        assert_eq!(
            mapping(&plan),
            vec![
                ("3.png".into(), "1.png".into()),
                ("5.png".into(), "2.png".into()),
                ("5_b2.png".into(), "3.png".into()),
            ]
        );
        assert_eq!(plan.regular_count, 2);
        assert_eq!(plan.alternate_count, 1);
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn alternate_with_small_key_still_follows_regular() {
        let plan = build_plan(vec![entry("1_b2.png"), entry("900.png")], 10, "png");
        assert_eq!(
            mapping(&plan),
            vec![
                ("900.png".into(), "1.png".into()),
                ("1_b2.png".into(), "2.png".into()),
            ]
        );
    }

    #[test]
    fn unparsed_sorts_first_in_its_group() {
        let plan = build_plan(vec![entry("1.png"), entry("abc.png")], 10, "png");
        assert_eq!(
            mapping(&plan),
            vec![
                ("abc.png".into(), "1.png".into()),
                ("1.png".into(), "2.png".into()),
            ]
        );
    }

    #[test]
    fn ties_broken_by_file_name_regardless_of_input_order() {
        let a = build_plan(
            vec![entry("zeta.png"), entry("alpha.png"), entry("0.png")],
            10,
            "png",
        );
        let b = build_plan(
            vec![entry("0.png"), entry("alpha.png"), entry("zeta.png")],
            10,
            "png",
        );
        assert_eq!(mapping(&a), mapping(&b));
        assert_eq!(
            mapping(&a),
            vec![
                ("0.png".into(), "1.png".into()),
                ("alpha.png".into(), "2.png".into()),
                ("zeta.png".into(), "3.png".into()),
            ]
        );
    }

    #[test]
    fn cap_limits_assignments_and_records_skipped() {
        let entries = (1..=5).map(|n| entry(&format!("{n}.png"))).collect();
        let plan = build_plan(entries, 3, "png");
        assert_eq!(plan.assignments.len(), 3);
        let skipped: Vec<_> = plan.skipped.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(skipped, vec!["4.png", "5.png"]);
        assert_eq!(plan.total_entries(), 5);
    }

    #[test]
    fn indices_are_contiguous_from_one() {
        let mut entries: Vec<Entry> = (0..40)
            .map(|n| entry(&format!("{}.png", n * 7 % 53)))
            .collect();
        entries.extend((0..15).map(|n| entry(&format!("{}_b2.png", 100 - n))));
        let plan = build_plan(entries, 2000, "png");
        let indices: Vec<usize> = plan.assignments.iter().map(|a| a.index).collect();
        assert_eq!(indices, (1..=55).collect::<Vec<_>>());

        let first_alt = plan
            .assignments
            .iter()
            .position(|a| a.entry.variant() == Variant::Alternate)
            .unwrap();
        assert_eq!(first_alt, 40);
        assert!(plan.assignments[first_alt..]
            .iter()
            .all(|a| a.entry.variant() == Variant::Alternate));
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        let plan = build_plan(Vec::new(), 10, "png");
        assert!(plan.is_empty());
        assert_eq!(plan.total_entries(), 0);
    }
}
