//! Shared display helpers for template and registry lines.
//!
//! Used by `list`, `init`, `registry list`, `template list`, and
//! `config show` so the same entry always renders the same way.

use crate::catalog::{pin_label, CustomTemplate, Registry, Template};

/// `    - Name (id) [pin]: description #tag #tag` for a registry template.
pub fn registry_template_line(template: &Template) -> String {
    let mut line = format!(
        "    - {} ({}) [{}]: {}",
        template.name,
        template.id,
        template.pin_label(),
        template.description
    );
    for tag in &template.tags {
        line.push_str(&format!(" #{}", tag));
    }
    line
}

/// `  - Name (id) [pin]: description` for a custom template.
pub fn custom_template_line(template: &Template) -> String {
    format!(
        "  - {} ({}) [{}]: {}",
        template.name,
        template.id,
        template.pin_label(),
        template.description
    )
}

/// `  - Name (id): description` for a local template.
pub fn local_template_line(template: &Template) -> String {
    format!("  - {} ({}): {}", template.name, template.id, template.description)
}

/// Label shown in the interactive template picker.
pub fn choice_label(template: &Template) -> String {
    if template.description.is_empty() {
        format!("{} ({}) [{}]", template.name, template.id, template.source)
    } else {
        format!(
            "{} ({}) [{}] - {}",
            template.name, template.id, template.source, template.description
        )
    }
}

/// `  - id (enabled)[auth]` followed by the URL line.
pub fn registry_lines(registry: &Registry) -> [String; 2] {
    let auth = if registry.requires_auth { " [auth]" } else { "" };
    [
        format!("  - {} ({}){}", registry.id, registry.status_label(), auth),
        format!("    URL: {}", registry.url),
    ]
}

/// Header line and indented detail lines for a custom template.
pub fn custom_template_lines(template: &CustomTemplate) -> Vec<String> {
    let private = if template.private { " [private]" } else { "" };
    let mut lines = vec![
        format!("  - {} ({}){}", template.name, template.id, private),
        format!("    Repo: {}", template.repo),
    ];
    if !template.path.is_empty() {
        lines.push(format!("    Path: {}", template.path));
    }
    lines.push(format!("    Commit: {}", pin_label(template.commit.as_deref())));
    if !template.description.is_empty() {
        lines.push(format!("    Description: {}", template.description));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateSource;

    fn template() -> Template {
        Template {
            description: "Single page app".into(),
            tags: vec!["vite".into(), "ts".into()],
            commit: Some("0123456789abcdef".into()),
            source: TemplateSource::Registry {
                registry_id: "official".into(),
            },
            ..Template::new("react_spa", "React SPA")
        }
    }

    #[test]
    fn registry_line_includes_pin_and_tags() {
        assert_eq!(
            registry_template_line(&template()),
            "    - React SPA (react_spa) [0123456]: Single page app #vite #ts"
        );
    }

    #[test]
    fn custom_line_shows_latest_when_unpinned() {
        let mut t = template();
        t.commit = None;
        assert_eq!(
            custom_template_line(&t),
            "  - React SPA (react_spa) [latest]: Single page app"
        );
    }

    #[test]
    fn local_line_has_no_pin() {
        assert_eq!(
            local_template_line(&template()),
            "  - React SPA (react_spa): Single page app"
        );
    }

    #[test]
    fn choice_label_names_source() {
        assert_eq!(
            choice_label(&template()),
            "React SPA (react_spa) [registry:official] - Single page app"
        );
    }

    #[test]
    fn registry_lines_mark_auth() {
        let registry = Registry::new("team", "https://example.com/r.json").with_auth(true);
        let [head, url] = registry_lines(&registry);
        assert_eq!(head, "  - team (enabled) [auth]");
        assert_eq!(url, "    URL: https://example.com/r.json");
    }

    #[test]
    fn custom_template_lines_skip_empty_fields() {
        let mut custom = CustomTemplate::new("api", "https://github.com/acme/api");
        custom.private = true;
        let lines = custom_template_lines(&custom);
        assert_eq!(
            lines,
            vec![
                "  - api (api) [private]",
                "    Repo: https://github.com/acme/api",
                "    Commit: latest",
            ]
        );
    }
}
