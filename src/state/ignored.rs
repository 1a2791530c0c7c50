use std::collections::HashSet;
use std::fmt;

/// A scheme or host that links were not followed into
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IgnoredScope {
    /// Non-http(s) scheme, such as `mailto`
    Scheme(String),

    /// Host (with explicit port, if any) other than the crawled one
    Host(String),
}

impl fmt::Display for IgnoredScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheme(scheme) => write!(f, "scheme:{}", scheme),
            Self::Host(host) => write!(f, "host:{}", host),
        }
    }
}

/// Ledger of ignored schemes and hosts, used to log each only once
#[derive(Debug, Default)]
pub struct IgnoredSet {
    seen: HashSet<IgnoredScope>,
}

impl IgnoredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `scope` is reported
    ///
    /// The caller logs on true and stays silent on false. This has no effect
    /// on which pages are crawled.
    pub fn report_once(&mut self, scope: IgnoredScope) -> bool {
        self.seen.insert(scope)
    }

    pub fn contains(&self, scope: &IgnoredScope) -> bool {
        self.seen.contains(scope)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// All ignored scopes, sorted for stable output
    pub fn sorted(&self) -> Vec<String> {
        let mut scopes: Vec<String> = self.seen.iter().map(ToString::to_string).collect();
        scopes.sort();
        scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_once() {
        let mut ignored = IgnoredSet::new();
        let mailto = IgnoredScope::Scheme("mailto".to_string());

        assert!(ignored.report_once(mailto.clone()));
        for _ in 0..4 {
            assert!(!ignored.report_once(mailto.clone()));
        }
        assert_eq!(ignored.len(), 1);
    }

    #[test]
    fn test_scheme_and_host_do_not_collide() {
        let mut ignored = IgnoredSet::new();

        assert!(ignored.report_once(IgnoredScope::Scheme("ftp".to_string())));
        assert!(ignored.report_once(IgnoredScope::Host("ftp".to_string())));
        assert_eq!(ignored.len(), 2);
    }

    #[test]
    fn test_sorted_display() {
        let mut ignored = IgnoredSet::new();
        ignored.report_once(IgnoredScope::Scheme("tel".to_string()));
        ignored.report_once(IgnoredScope::Host("other.com".to_string()));
        ignored.report_once(IgnoredScope::Scheme("mailto".to_string()));

        assert_eq!(
            ignored.sorted(),
            vec!["host:other.com", "scheme:mailto", "scheme:tel"]
        );
    }
}
