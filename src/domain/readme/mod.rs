//! README link rewriting.

use crate::domain::configuration::RepositoryIdentity;

/// Demo page URL shipped in the template README.
pub const TEMPLATE_DEMO_URL: &str = "https://EDIorg.github.io/ezCatalog/public/demo.html";

/// Build workflow URL shipped in the template README.
pub const TEMPLATE_WORKFLOW_URL: &str =
    "https://github.com/EDIorg/ezCatalog/blob/master/.github/workflows/build_catalog.yml";

/// README text with template links replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    pub text: String,
    pub demo_url: String,
    pub workflow_url: String,
    pub demo_replacements: usize,
    pub workflow_replacements: usize,
}

/// Replace every template demo and workflow URL with the repository's own.
pub fn rewrite_links(text: &str, identity: &RepositoryIdentity) -> LinkRewrite {
    let demo_url = identity.demo_url();
    let workflow_url = identity.workflow_url();

    let demo_replacements = text.matches(TEMPLATE_DEMO_URL).count();
    let text = text.replace(TEMPLATE_DEMO_URL, &demo_url);
    let workflow_replacements = text.matches(TEMPLATE_WORKFLOW_URL).count();
    let text = text.replace(TEMPLATE_WORKFLOW_URL, &workflow_url);

    LinkRewrite { text, demo_url, workflow_url, demo_replacements, workflow_replacements }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> RepositoryIdentity {
        RepositoryIdentity::parse("acme/catalog").unwrap()
    }

    #[test]
    fn replaces_both_template_urls() {
        let readme = format!(
            "# Catalog\n\nSee the [demo]({TEMPLATE_DEMO_URL}).\nEdit [the workflow]({TEMPLATE_WORKFLOW_URL}).\n"
        );
        let rewrite = rewrite_links(&readme, &acme());

        assert_eq!(
            rewrite.text,
            "# Catalog\n\nSee the [demo](https://acme.github.io/catalog/public/demo.html).\n\
             Edit [the workflow](https://github.com/acme/catalog/blob/master/.github/workflows/build_catalog.yml).\n"
        );
        assert_eq!(rewrite.demo_replacements, 1);
        assert_eq!(rewrite.workflow_replacements, 1);
    }

    #[test]
    fn replaces_every_occurrence() {
        let readme = format!("{TEMPLATE_DEMO_URL}\n{TEMPLATE_DEMO_URL}\n");
        let rewrite = rewrite_links(&readme, &acme());

        assert_eq!(rewrite.demo_replacements, 2);
        assert!(!rewrite.text.contains(TEMPLATE_DEMO_URL));
    }

    #[test]
    fn text_without_templates_is_untouched() {
        let readme = "# Catalog\n\nhttps://example.org/demo.html\n";
        let rewrite = rewrite_links(readme, &acme());

        assert_eq!(rewrite.text, readme);
        assert_eq!(rewrite.demo_replacements, 0);
        assert_eq!(rewrite.workflow_replacements, 0);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let readme = format!("[demo]({TEMPLATE_DEMO_URL})");
        let once = rewrite_links(&readme, &acme());
        let twice = rewrite_links(&once.text, &acme());

        assert_eq!(once.text, twice.text);
        assert_eq!(twice.demo_replacements, 0);
    }
}
