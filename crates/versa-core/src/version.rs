//! Version string ordering
//!
//! Versions are dot-separated components compared left to right. The leading
//! digits of a component compare as an integer, so `1.10.0` sorts after
//! `1.9.0`. Anything after those digits is a pre-release suffix: with equal
//! numbers, `0-rc1` sorts before a bare `0`, and two suffixes compare
//! lexicographically. Missing trailing components count as zero. A component
//! with no leading digits sorts after every numeric one.

use std::cmp::Ordering;

/// Lower bound used when a range declares no `from`, and the comparison
/// baseline when a render is requested without a version.
pub const BASELINE_VERSION: &str = "0.0.0";

/// Version reported in a representation rendered without a version.
pub const NO_VERSION: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component<'a> {
    Num { value: u64, pre: &'a str },
    Text(&'a str),
}

impl<'a> Component<'a> {
    const ZERO: Component<'static> = Component::Num { value: 0, pre: "" };

    fn parse(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Self::ZERO;
        }
        let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
        match raw[..digits].parse::<u64>() {
            Ok(value) => Component::Num {
                value,
                pre: &raw[digits..],
            },
            Err(_) => Component::Text(raw),
        }
    }
}

impl Ord for Component<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Component::Num { value: a, pre: pa }, Component::Num { value: b, pre: pb }) => {
                a.cmp(b).then_with(|| match (pa.is_empty(), pb.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => pa.cmp(pb),
                })
            }
            (Component::Num { .. }, Component::Text(_)) => Ordering::Less,
            (Component::Text(_), Component::Num { .. }) => Ordering::Greater,
            (Component::Text(a), Component::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Component<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Three-way comparison of two version strings.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let mut lhs = left.split('.').map(Component::parse);
    let mut rhs = right.split('.').map(Component::parse);

    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let l = l.unwrap_or(Component::ZERO);
                let r = r.unwrap_or(Component::ZERO);
                match l.cmp(&r) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
        }
    }
}
