use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Site categories the pipeline knows how to hint prompts for and fall back
/// to. Declaration order is the detection priority: the first archetype whose
/// keyword set matches wins, so the commercial categories outrank Blog.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    #[value(alias = "video_platform")]
    VideoPlatform,
    Ecommerce,
    Dashboard,
    Portfolio,
    Blog,
    Generic,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::VideoPlatform,
        Archetype::Ecommerce,
        Archetype::Dashboard,
        Archetype::Portfolio,
        Archetype::Blog,
        Archetype::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::VideoPlatform => "video_platform",
            Archetype::Ecommerce => "ecommerce",
            Archetype::Dashboard => "dashboard",
            Archetype::Portfolio => "portfolio",
            Archetype::Blog => "blog",
            Archetype::Generic => "generic",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown archetype '{s}'"))
    }
}

/// Keyword classifier over the lower-cased prompt. Pure: same prompt, same
/// archetype, no side effects. `Generic` is the no-match answer, never an
/// error.
pub struct ArchetypeDetector {
    rules: Vec<(Archetype, Vec<String>)>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn default_keywords(archetype: Archetype) -> Vec<String> {
    match archetype {
        Archetype::VideoPlatform => {
            words(&["video", "stream", "streaming", "watch", "youtube", "clip", "channel"])
        }
        Archetype::Ecommerce => words(&[
            "shop", "store", "cart", "product", "checkout", "ecommerce", "e-commerce", "sell",
        ]),
        Archetype::Dashboard => words(&["dashboard", "admin", "analytics", "metrics", "panel"]),
        Archetype::Portfolio => words(&["portfolio", "resume", "cv", "showcase", "freelancer"]),
        Archetype::Blog => words(&["blog", "article", "recipe", "post", "journal", "magazine", "news"]),
        Archetype::Generic => Vec::new(),
    }
}

impl Default for ArchetypeDetector {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}

impl ArchetypeDetector {
    /// Builds the rule table in priority order, taking keyword sets from
    /// `overrides` where present (keys are the snake_case archetype names)
    /// and the built-in defaults everywhere else.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let rules = Archetype::ALL
            .iter()
            .copied()
            .filter(|a| *a != Archetype::Generic)
            .map(|a| {
                let keywords = overrides
                    .get(a.as_str())
                    .cloned()
                    .unwrap_or_else(|| default_keywords(a));
                let keywords = keywords.into_iter().map(|w| w.to_lowercase()).collect();
                (a, keywords)
            })
            .collect();
        Self { rules }
    }

    pub fn detect(&self, prompt: &str) -> Archetype {
        let haystack = prompt.to_lowercase();
        for (archetype, keywords) in &self.rules {
            if keywords.iter().any(|w| haystack.contains(w.as_str())) {
                return *archetype;
            }
        }
        Archetype::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_blog_from_recipe_prompt() {
        let det = ArchetypeDetector::default();
        assert_eq!(det.detect("Build me a recipe blog with photos"), Archetype::Blog);
    }

    #[test]
    fn test_detects_video_platform() {
        let det = ArchetypeDetector::default();
        assert_eq!(det.detect("A YouTube clone for gaming clips"), Archetype::VideoPlatform);
        assert_eq!(det.detect("live STREAMING site"), Archetype::VideoPlatform);
    }

    #[test]
    fn test_no_keywords_means_generic() {
        let det = ArchetypeDetector::default();
        assert_eq!(det.detect("something nice for my grandmother"), Archetype::Generic);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let det = ArchetypeDetector::default();
        // "shop" (Ecommerce) outranks "admin" (Dashboard).
        assert_eq!(det.detect("admin page for my shop"), Archetype::Ecommerce);
        // "video" outranks everything else.
        assert_eq!(det.detect("video store with a cart"), Archetype::VideoPlatform);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let det = ArchetypeDetector::default();
        let prompt = "portfolio for a freelance photographer";
        let first = det.detect(prompt);
        for _ in 0..10 {
            assert_eq!(det.detect(prompt), first);
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        let det = ArchetypeDetector::default();
        assert_eq!(det.detect("MY PERSONAL BLOG"), Archetype::Blog);
    }

    #[test]
    fn test_keyword_overrides_replace_one_set() {
        let mut overrides = BTreeMap::new();
        overrides.insert("blog".to_string(), vec!["diary".to_string()]);
        let det = ArchetypeDetector::with_overrides(&overrides);
        assert_eq!(det.detect("an online diary"), Archetype::Blog);
        // The default blog keywords are gone once overridden.
        assert_eq!(det.detect("a recipe collection"), Archetype::Generic);
        // Other sets keep their defaults.
        assert_eq!(det.detect("a shop for plants"), Archetype::Ecommerce);
    }

    #[test]
    fn test_archetype_round_trips_through_str() {
        for a in Archetype::ALL {
            assert_eq!(a.as_str().parse::<Archetype>().unwrap(), a);
        }
        assert!("spaceship".parse::<Archetype>().is_err());
    }
}
