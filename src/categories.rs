//! Static registry of technology news categories.
//!
//! The registry drives two things: the search query sent for a category
//! request, and the keyword matching used to classify free text and to
//! filter sample articles. Order matters: [`classify`] returns the *first*
//! matching category, and `all` always comes first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of category identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    All,
    WebDevelopment,
    ArtificialIntelligence,
    MachineLearning,
    DataScience,
    Blockchain,
    Cybersecurity,
    MobileDevelopment,
    Devops,
    CloudComputing,
}

impl CategoryId {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::All => "all",
            CategoryId::WebDevelopment => "web-development",
            CategoryId::ArtificialIntelligence => "artificial-intelligence",
            CategoryId::MachineLearning => "machine-learning",
            CategoryId::DataScience => "data-science",
            CategoryId::Blockchain => "blockchain",
            CategoryId::Cybersecurity => "cybersecurity",
            CategoryId::MobileDevelopment => "mobile-development",
            CategoryId::Devops => "devops",
            CategoryId::CloudComputing => "cloud-computing",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no registered category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category id: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_id(s)
            .map(|c| c.id)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// Opaque icon key; resolved (with a default) by whoever draws it.
    pub icon: &'static str,
}

impl CategoryDefinition {
    /// Case-insensitive substring match of any keyword against `text`.
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| haystack.contains(&kw.to_lowercase()))
    }
}

static CATEGORIES: [CategoryDefinition; 10] = [
    CategoryDefinition {
        id: CategoryId::All,
        name: "All News",
        keywords: &["technology", "tech", "software", "programming"],
        icon: "Globe",
    },
    CategoryDefinition {
        id: CategoryId::WebDevelopment,
        name: "Web Development",
        keywords: &["react", "vue", "angular", "javascript", "typescript", "web development"],
        icon: "Code",
    },
    CategoryDefinition {
        id: CategoryId::ArtificialIntelligence,
        name: "AI",
        keywords: &["artificial intelligence", "AI", "GPT", "OpenAI", "ChatGPT"],
        icon: "Brain",
    },
    CategoryDefinition {
        id: CategoryId::MachineLearning,
        name: "Machine Learning",
        keywords: &["machine learning", "ML", "neural networks", "tensorflow", "pytorch"],
        icon: "Cpu",
    },
    CategoryDefinition {
        id: CategoryId::DataScience,
        name: "Data Science",
        keywords: &["data science", "analytics", "big data", "python", "data analysis"],
        icon: "BarChart3",
    },
    CategoryDefinition {
        id: CategoryId::Blockchain,
        name: "Blockchain",
        keywords: &["blockchain", "cryptocurrency", "bitcoin", "ethereum", "web3"],
        icon: "Link",
    },
    CategoryDefinition {
        id: CategoryId::Cybersecurity,
        name: "Cybersecurity",
        keywords: &["cybersecurity", "security", "hacking", "privacy", "encryption"],
        icon: "Shield",
    },
    CategoryDefinition {
        id: CategoryId::MobileDevelopment,
        name: "Mobile Dev",
        keywords: &["mobile development", "iOS", "Android", "React Native", "Flutter"],
        icon: "Smartphone",
    },
    CategoryDefinition {
        id: CategoryId::Devops,
        name: "DevOps",
        keywords: &["devops", "docker", "kubernetes", "CI/CD", "deployment"],
        icon: "Settings",
    },
    CategoryDefinition {
        id: CategoryId::CloudComputing,
        name: "Cloud",
        keywords: &["cloud computing", "AWS", "Azure", "Google Cloud", "serverless"],
        icon: "Cloud",
    },
];

/// All categories in display order, `all` first.
pub fn list_categories() -> &'static [CategoryDefinition] {
    &CATEGORIES
}

pub fn find_by_id(id: &str) -> Option<&'static CategoryDefinition> {
    CATEGORIES.iter().find(|c| c.id.as_str() == id)
}

/// Registry entry for an id. Every [`CategoryId`] is registered.
pub fn definition(id: CategoryId) -> &'static CategoryDefinition {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CATEGORIES[0])
}

/// Pick the first specific category whose keywords appear in the text.
pub fn classify(title: &str, description: &str) -> CategoryId {
    let content = format!("{title} {description}");
    CATEGORIES
        .iter()
        .skip(1)
        .find(|c| c.matches(&content))
        .map_or(CategoryId::All, |c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_first_and_unique() {
        let cats = list_categories();
        assert_eq!(cats[0].id, CategoryId::All);
        assert_eq!(cats.iter().filter(|c| c.id == CategoryId::All).count(), 1);
        assert!(cats.iter().all(|c| !c.keywords.is_empty()));
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id("devops").map(|c| c.name), Some("DevOps"));
        assert!(find_by_id("gardening").is_none());
        assert!(find_by_id("DevOps").is_none());
    }

    #[test]
    fn test_every_id_round_trips_through_registry() {
        for cat in list_categories() {
            assert_eq!(definition(cat.id), cat);
            assert_eq!(cat.id.as_str().parse::<CategoryId>(), Ok(cat.id));
        }
        assert_eq!(
            "quantum".parse::<CategoryId>(),
            Err(UnknownCategory("quantum".into()))
        );
    }

    #[test]
    fn test_classify_uses_registry_order() {
        assert_eq!(classify("New React Hooks Guide", ""), CategoryId::WebDevelopment);
        assert_eq!(
            classify("Kubernetes 2.0", "Docker support dropped"),
            CategoryId::Devops
        );
        assert_eq!(classify("Gardening tips", "Tomatoes in spring"), CategoryId::All);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("", "New BITCOIN high"), CategoryId::Blockchain);
        assert_eq!(classify("ios 19 preview", ""), CategoryId::MobileDevelopment);
    }

    #[test]
    fn test_serde_uses_kebab_ids() {
        let json = serde_json::to_string(&CategoryId::CloudComputing).unwrap();
        assert_eq!(json, "\"cloud-computing\"");
    }
}
