//! File name patterns
//!
//! Compiles `*`/`?` wildcard patterns into reusable name predicates for the
//! recursive search operation.

use regex::Regex;

/// A compiled name pattern.
///
/// Empty patterns match every name; patterns without wildcards match by
/// string equality; wildcard patterns are translated to an anchored regex
/// where `*` matches any run of characters and `?` exactly one.
pub enum NamePattern {
    Any,
    Exact(String),
    Wildcard(Regex),
}

impl NamePattern {
    /// Compiles a pattern once; the result is reused per candidate name.
    pub fn compile(pattern: &str) -> Self {
        if pattern.is_empty() {
            return NamePattern::Any;
        }
        if !pattern.contains(['*', '?']) {
            return NamePattern::Exact(pattern.to_string());
        }
        let mut regex = String::with_capacity(pattern.len() + 8);
        regex.push('^');
        for ch in pattern.chars() {
            match ch {
                '*' => regex.push_str(".*"),
                '?' => regex.push('.'),
                // only `*` and `?` are wildcards; everything else is literal
                '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\' => {
                    regex.push('\\');
                    regex.push(ch);
                }
                ch => regex.push(ch),
            }
        }
        regex.push('$');
        // built from escaped literals and `.*`/`.` atoms only
        let regex = Regex::new(&regex).expect("wildcard translation yields a valid regex");
        NamePattern::Wildcard(regex)
    }

    /// Whether a candidate file name satisfies the pattern.
    ///
    /// An empty candidate never matches a non-empty pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Any => true,
            _ if name.is_empty() => false,
            NamePattern::Exact(expected) => name == expected,
            NamePattern::Wildcard(regex) => regex.is_match(name),
        }
    }
}
