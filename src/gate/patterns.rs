/// Route patterns for the authorization gate: an exact path, or a trailing-`*`
/// glob that covers the prefix itself and everything below it ("/auth/*"
/// matches "/auth", "/auth/login", "/auth/login/sso").
#[derive(Debug, Clone)]
enum Pattern {
    Exact(String),
    Prefix(String),
}

impl Pattern {
    fn parse(raw: &str) -> Pattern {
        match raw.strip_suffix("/*") {
            Some(prefix) => Pattern::Prefix(prefix.to_string()),
            None => Pattern::Exact(raw.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(exact) => path == exact,
            Pattern::Prefix(prefix) => {
                path == prefix || path.strip_prefix(prefix.as_str()).is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        Self {
            patterns: raw.iter().map(|s| Pattern::parse(s.as_ref())).collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_patterns() {
        let set = PatternSet::new(&["/", "/health"]);
        assert!(set.matches("/"));
        assert!(set.matches("/health"));
        assert!(!set.matches("/healthz"));
        assert!(!set.matches("/health/db"));
    }

    #[test]
    fn prefix_patterns() {
        let set = PatternSet::new(&["/auth/*"]);
        assert!(set.matches("/auth"));
        assert!(set.matches("/auth/login"));
        assert!(set.matches("/auth/login/sso"));
        assert!(!set.matches("/authx"));
        assert!(!set.matches("/api/auth"));
    }

    #[test]
    fn admin_prefix_does_not_leak_to_siblings() {
        let set = PatternSet::new(&["/api/admin/*"]);
        assert!(set.matches("/api/admin/users"));
        assert!(!set.matches("/api/administrator"));
        assert!(!set.matches("/api/orders"));
    }
}
