//! Markdown rendering of result sets and the category list.
//!
//! Category icons are stored in the registry as opaque keys. They are
//! resolved here, at the presentation edge, against a fixed glyph table;
//! any key the table doesn't know renders as the default globe.

use crate::categories::CategoryDefinition;
use crate::models::{Article, ResultSet};
use crate::utils::{excerpt, format_published};
use std::fmt::Write;

/// Longest description shown in a digest entry.
const DESCRIPTION_EXCERPT_CHARS: usize = 280;

/// Icons the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Globe,
    Code,
    Brain,
    Cpu,
    BarChart,
    Link,
    Shield,
    Smartphone,
    Settings,
    Cloud,
}

impl Icon {
    /// Resolve a registry icon key; unknown keys become [`Icon::Globe`].
    pub fn resolve(key: &str) -> Self {
        match key {
            "Globe" => Icon::Globe,
            "Code" => Icon::Code,
            "Brain" => Icon::Brain,
            "Cpu" => Icon::Cpu,
            "BarChart3" => Icon::BarChart,
            "Link" => Icon::Link,
            "Shield" => Icon::Shield,
            "Smartphone" => Icon::Smartphone,
            "Settings" => Icon::Settings,
            "Cloud" => Icon::Cloud,
            _ => Icon::default(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "🌐",
            Icon::Code => "💻",
            Icon::Brain => "🧠",
            Icon::Cpu => "🖥️",
            Icon::BarChart => "📊",
            Icon::Link => "🔗",
            Icon::Shield => "🛡️",
            Icon::Smartphone => "📱",
            Icon::Settings => "⚙️",
            Icon::Cloud => "☁️",
        }
    }
}

/// Render a result set as a Markdown digest under `heading`.
///
/// An empty set renders a short empty-state line instead of a list.
pub fn result_set(heading: &str, result: &ResultSet) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {heading}\n");

    if result.is_empty() {
        md.push_str("_No articles found. Try a different category or search term._\n");
        return md;
    }

    let _ = writeln!(md, "{} articles\n", result.total_articles());
    for article in result.articles() {
        push_article(&mut md, article);
    }
    md
}

fn push_article(md: &mut String, article: &Article) {
    let _ = writeln!(md, "## [{}]({})\n", article.title, article.url);
    let _ = writeln!(
        md,
        "*[{}]({}) · {}*\n",
        article.source.name,
        article.source.url,
        format_published(&article.published_at)
    );
    let _ = writeln!(md, "![{}]({})\n", article.title, article.image);
    let _ = writeln!(md, "{}\n", excerpt(&article.description, DESCRIPTION_EXCERPT_CHARS));
    md.push_str("---\n\n");
}

/// Render the registry as a Markdown table.
pub fn categories(categories: &[CategoryDefinition]) -> String {
    let mut md = String::from("| | Id | Name | Keywords |\n|---|---|---|---|\n");
    for cat in categories {
        let _ = writeln!(
            md,
            "| {} | `{}` | {} | {} |",
            Icon::resolve(cat.icon).glyph(),
            cat.id,
            cat.name,
            cat.keywords.join(", ")
        );
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{CategoryId, list_categories};
    use crate::models::Source;

    fn article() -> Article {
        Article {
            title: "Rust in the kernel".into(),
            description: "Drivers written in Rust land upstream.".into(),
            content: "Drivers written in Rust land upstream.".into(),
            url: "https://news.example/rust-kernel".into(),
            image: "https://news.example/kernel.png".into(),
            published_at: "2025-03-01T12:00:00Z".into(),
            source: Source {
                name: "Kernel Weekly".into(),
                url: "https://news.example".into(),
            },
        }
    }

    #[test]
    fn test_unknown_icon_resolves_to_default() {
        assert_eq!(Icon::resolve("Shield"), Icon::Shield);
        assert_eq!(Icon::resolve("BarChart3"), Icon::BarChart);
        assert_eq!(Icon::resolve("Sparkles"), Icon::Globe);
        assert_eq!(Icon::resolve(""), Icon::Globe);
    }

    #[test]
    fn test_every_registry_icon_is_known() {
        for cat in list_categories() {
            let resolved = Icon::resolve(cat.icon);
            assert!(cat.id == CategoryId::All || resolved != Icon::Globe, "{}", cat.id);
        }
    }

    #[test]
    fn test_result_set_digest() {
        let md = result_set("Top technology news", &ResultSet::new(vec![article()]));
        assert!(md.starts_with("# Top technology news\n"));
        assert!(md.contains("## [Rust in the kernel](https://news.example/rust-kernel)"));
        assert!(md.contains("Kernel Weekly"));
        assert!(md.contains("Mar 1, 2025"));
    }

    #[test]
    fn test_empty_result_set_renders_empty_state() {
        let md = result_set("Search: nothing", &ResultSet::new(Vec::new()));
        assert!(md.contains("No articles found"));
        assert!(!md.contains("##"));
    }

    #[test]
    fn test_categories_table_has_one_row_per_category() {
        let md = categories(list_categories());
        assert_eq!(md.lines().count(), 2 + list_categories().len());
        assert!(md.contains("| 🛡️ | `cybersecurity` | Cybersecurity |"));
    }
}
