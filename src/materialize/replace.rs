//! Replace rules: literal substitutions scoped to files matching a glob.

use glob::{MatchOptions, Pattern};

use super::render::render;
use crate::catalog::ReplaceRule;
use crate::error::{BoilerplateError, Result};
use crate::variables::Variables;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

struct CompiledRule {
    patterns: Vec<Pattern>,
    replacements: Vec<(String, String)>,
}

/// Replace rules with globs compiled and values rendered.
#[derive(Default)]
pub struct Replacer {
    rules: Vec<CompiledRule>,
}

impl Replacer {
    pub fn new(rules: &[ReplaceRule], vars: &Variables) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let origin = format!("replace rule '{}'", rule.glob);

            let patterns = expand_braces(&rule.glob)
                .iter()
                .map(|p| Pattern::new(p))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| BoilerplateError::TemplateRender {
                    origin: origin.clone(),
                    message: e.to_string(),
                })?;

            let mut replacements = Vec::with_capacity(rule.values.len());
            for (from, to) in &rule.values {
                let from = render(from, vars, &origin)?;
                if from.is_empty() {
                    continue;
                }
                replacements.push((from, render(to, vars, &origin)?));
            }

            compiled.push(CompiledRule {
                patterns,
                replacements,
            });
        }
        Ok(Self { rules: compiled })
    }

    /// Apply every rule whose glob matches `relative` (a `/`-separated path).
    ///
    /// Returns `None` when the content is unchanged.
    pub fn apply(&self, relative: &str, content: &str) -> Option<String> {
        let mut current: Option<String> = None;
        for rule in self.rules.iter().filter(|r| r.matches(relative)) {
            for (from, to) in &rule.replacements {
                let source = current.as_deref().unwrap_or(content);
                if source.contains(from.as_str()) {
                    current = Some(source.replace(from.as_str(), to));
                }
            }
        }
        current.filter(|c| c != content)
    }
}

impl CompiledRule {
    fn matches(&self, relative: &str) -> bool {
        self.patterns.iter().any(|p| {
            p.matches_with(relative, MATCH_OPTIONS)
                || p
                    .as_str()
                    .strip_prefix("**/")
                    .and_then(|rest| Pattern::new(rest).ok())
                    .is_some_and(|rest| rest.matches_with(relative, MATCH_OPTIONS))
        })
    }
}

/// Expand `{a,b}` alternations: `**/*.{py,md}` -> `**/*.py`, `**/*.md`.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(close) = pattern[open..].find('}').map(|i| open + i) else {
        return vec![pattern.to_string()];
    };

    let before = &pattern[..open];
    let after = &pattern[close + 1..];
    pattern[open + 1..close]
        .split(',')
        .flat_map(|option| expand_braces(&format!("{}{}{}", before, option.trim(), after)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rule(glob: &str, values: &[(&str, &str)]) -> ReplaceRule {
        ReplaceRule {
            glob: glob.into(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn replacer(rules: &[ReplaceRule]) -> Replacer {
        Replacer::new(rules, &Variables::new("Shop", "me")).unwrap()
    }

    #[test]
    fn expand_braces_alternation() {
        assert_eq!(expand_braces("**/*.{py,md}"), vec!["**/*.py", "**/*.md"]);
        assert_eq!(
            expand_braces("{a,b}/*.{x,y}"),
            vec!["a/*.x", "a/*.y", "b/*.x", "b/*.y"]
        );
        assert_eq!(expand_braces("plain/*.rs"), vec!["plain/*.rs"]);
    }

    #[test]
    fn replaces_in_matching_files_only() {
        let replacer = replacer(&[rule("**/*.{py,md}", &[("myproject", "{{ package_name }}")])]);

        assert_eq!(
            replacer.apply("myproject/app.py", "import myproject"),
            Some("import shop".to_string())
        );
        assert_eq!(
            replacer.apply("README.md", "# myproject"),
            Some("# shop".to_string())
        );
        assert_eq!(replacer.apply("setup.cfg", "name = myproject"), None);
    }

    #[test]
    fn single_star_does_not_cross_directories() {
        let replacer = replacer(&[rule("*.txt", &[("a", "b")])]);
        assert!(replacer.apply("top.txt", "a").is_some());
        assert!(replacer.apply("dir/nested.txt", "a").is_none());
    }

    #[test]
    fn unchanged_content_is_none() {
        let replacer = replacer(&[rule("**/*", &[("absent", "x")])]);
        assert_eq!(replacer.apply("a.txt", "nothing here"), None);
    }

    #[test]
    fn rules_apply_in_order() {
        let replacer = replacer(&[
            rule("**/*", &[("one", "two")]),
            rule("**/*", &[("two", "three")]),
        ]);
        assert_eq!(replacer.apply("f", "one"), Some("three".to_string()));
    }

    #[test]
    fn invalid_glob_is_error() {
        let result = Replacer::new(&[rule("[", &[("a", "b")])], &Variables::default());
        assert!(result.is_err());
    }
}
