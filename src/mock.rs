//! Bundled sample articles served when live data is unavailable.
//!
//! Publication times are computed relative to the moment of the call (the
//! newest is "now", each following one two hours older), so the sample feed
//! always looks recent.

use crate::categories::{self, CategoryId};
use crate::models::{Article, ResultSet, Source};
use chrono::{Duration, SecondsFormat, Utc};
use tracing::debug;

/// Number of samples served when a category filter matches nothing.
const UNFILTERED_FALLBACK_COUNT: usize = 4;

struct Sample {
    title: &'static str,
    description: &'static str,
    content: &'static str,
    slug: &'static str,
    image: &'static str,
    source: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Revolutionary AI Breakthrough Changes Software Development Forever",
        description: "New artificial intelligence tools are transforming how developers write code, making programming more accessible and efficient than ever before.",
        content: "The latest developments in AI-powered coding assistants are revolutionizing the software development landscape. These tools can now generate complex code, debug applications, and even suggest architectural improvements, significantly reducing development time and improving code quality.",
        slug: "ai-breakthrough",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Tech Today",
    },
    Sample {
        title: "Web Development Trends Shaping 2025: What Developers Need to Know",
        description: "From new JavaScript frameworks to advanced CSS features, discover the technologies that will define web development in 2025.",
        content: "The web development landscape continues to evolve rapidly. New frameworks, improved performance optimization techniques, and enhanced user experience patterns are setting the stage for the next generation of web applications.",
        slug: "web-trends-2025",
        image: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Dev Weekly",
    },
    Sample {
        title: "Cybersecurity Alert: New Threats Target Cloud Infrastructure",
        description: "Security experts warn of sophisticated attacks targeting cloud-based applications and recommend immediate protective measures.",
        content: "Recent cybersecurity incidents have highlighted vulnerabilities in cloud infrastructure. Organizations are urged to implement enhanced security protocols and regular security audits to protect their digital assets.",
        slug: "cybersecurity-alert",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Security Now",
    },
    Sample {
        title: "Machine Learning Models Now 90% More Efficient with New Algorithm",
        description: "Researchers develop groundbreaking optimization technique that dramatically reduces computational requirements for ML training.",
        content: "A team of researchers has developed a new algorithm that significantly improves the efficiency of machine learning model training. This breakthrough could make advanced AI more accessible to smaller organizations and reduce the environmental impact of large-scale ML operations.",
        slug: "ml-efficiency",
        image: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "AI Research",
    },
    Sample {
        title: "Blockchain Technology Revolutionizes Supply Chain Management",
        description: "Major corporations adopt blockchain solutions to improve transparency and traceability in global supply chains.",
        content: "Leading companies are implementing blockchain technology to create more transparent and efficient supply chains. This technology enables real-time tracking of products from manufacture to delivery, reducing fraud and improving consumer confidence.",
        slug: "blockchain-supply-chain",
        image: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Blockchain Today",
    },
    Sample {
        title: "Mobile App Development: Flutter vs React Native in 2025",
        description: "Comprehensive comparison of the two leading cross-platform mobile development frameworks and their latest features.",
        content: "As mobile development continues to evolve, developers are choosing between Flutter and React Native for cross-platform applications. Both frameworks have introduced significant improvements in performance, developer experience, and platform integration.",
        slug: "flutter-vs-react-native",
        image: "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Mobile Dev",
    },
    Sample {
        title: "Cloud Computing Costs Drop 40% with New Serverless Architecture",
        description: "Companies report significant savings by migrating to advanced serverless computing platforms and optimized resource management.",
        content: "The latest generation of serverless computing platforms is delivering unprecedented cost savings for businesses. Advanced auto-scaling and resource optimization features are helping companies reduce their cloud infrastructure costs while improving performance.",
        slug: "serverless-savings",
        image: "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Cloud Weekly",
    },
    Sample {
        title: "Data Science Tools Get Major Updates: Python Libraries Enhanced",
        description: "Popular data science libraries receive significant performance improvements and new features for advanced analytics.",
        content: "The data science community celebrates major updates to essential Python libraries. These improvements include faster processing speeds, enhanced visualization capabilities, and better integration with machine learning workflows.",
        slug: "data-science-updates",
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800",
        source: "Data Science Daily",
    },
];

/// The full sample set, newest first.
pub fn sample_articles() -> Vec<Article> {
    let now = Utc::now();
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, s)| Article {
            title: s.title.to_string(),
            description: s.description.to_string(),
            content: s.content.to_string(),
            url: format!("https://example.com/{}", s.slug),
            image: s.image.to_string(),
            published_at: (now - Duration::hours(2 * i as i64))
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            source: Source {
                name: s.source.to_string(),
                url: "https://example.com".to_string(),
            },
        })
        .collect()
}

/// Sample result set for a category.
///
/// `All` returns every sample. Other categories keep the samples whose title
/// or description mentions one of the category's keywords; when none do,
/// the first four samples are returned unfiltered.
pub fn sample_result(category: CategoryId) -> ResultSet {
    let all = sample_articles();
    if category == CategoryId::All {
        return ResultSet::new(all);
    }

    let def = categories::definition(category);
    let matching: Vec<Article> = all
        .iter()
        .filter(|a| def.matches(&format!("{} {}", a.title, a.description)))
        .cloned()
        .collect();

    let articles = if matching.is_empty() {
        debug!(%category, "No sample articles match category; serving leading samples");
        all.into_iter().take(UNFILTERED_FALLBACK_COUNT).collect()
    } else {
        matching
    };
    ResultSet::new(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::list_categories;
    use chrono::DateTime;

    #[test]
    fn test_all_returns_every_sample() {
        let set = sample_result(CategoryId::All);
        assert_eq!(set.total_articles(), SAMPLES.len());
    }

    #[test]
    fn test_category_filter_only_keeps_matching_samples() {
        for cat in list_categories().iter().skip(1) {
            let set = sample_result(cat.id);
            assert_eq!(set.total_articles(), set.articles().len());
            let all_match = set
                .articles()
                .iter()
                .all(|a| cat.matches(&format!("{} {}", a.title, a.description)));
            let is_leading_four = set.total_articles() == UNFILTERED_FALLBACK_COUNT
                && set.articles()[0].url == "https://example.com/ai-breakthrough";
            assert!(all_match || is_leading_four, "category {}", cat.id);
        }
    }

    #[test]
    fn test_cybersecurity_samples() {
        let set = sample_result(CategoryId::Cybersecurity);
        assert!(!set.is_empty());
        assert!(set.articles().iter().all(|a| {
            let text = format!("{} {}", a.title, a.description).to_lowercase();
            ["cybersecurity", "security", "hacking", "privacy", "encryption"]
                .iter()
                .any(|kw| text.contains(kw))
        }));
    }

    #[test]
    fn test_samples_are_recent_and_ordered() {
        let articles = sample_articles();
        let times: Vec<_> = articles
            .iter()
            .map(|a| DateTime::parse_from_rfc3339(&a.published_at).unwrap())
            .collect();
        assert!(times.windows(2).all(|w| w[0] > w[1]));
        assert!(articles.iter().all(|a| !a.content.is_empty()));
    }
}
