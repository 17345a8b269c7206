//! Brand archetypes and name fragments.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Names drawn per suggestion.
pub const NAME_IDEAS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Guardian,
    Creator,
    Healer,
    Explorer,
    Empowerer,
    Sage,
}

impl Archetype {
    #[cfg(test)]
    pub const ALL: [Archetype; 6] = [
        Archetype::Guardian,
        Archetype::Creator,
        Archetype::Healer,
        Archetype::Explorer,
        Archetype::Empowerer,
        Archetype::Sage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Guardian => "Guardian",
            Archetype::Creator => "Creator",
            Archetype::Healer => "Healer",
            Archetype::Explorer => "Explorer",
            Archetype::Empowerer => "Empowerer",
            Archetype::Sage => "Sage",
        }
    }

    /// Candidate name fragments owned by this archetype.
    pub fn fragments(&self) -> &'static [&'static str; 5] {
        match self {
            Archetype::Guardian => &["Safe", "Shield", "Haven", "Benevolent", "Guard"],
            Archetype::Creator => &["Spark", "Origin", "Flow", "Nova", "Awake"],
            Archetype::Healer => &["Calm", "Bloom", "Reclaim", "Still", "Tend"],
            Archetype::Explorer => &["Path", "Edge", "Forward", "Boundless", "Unseen"],
            Archetype::Empowerer => &["You", "Power", "Own", "Strong", "Bold"],
            Archetype::Sage => &["Wisdom", "Still", "Deep", "Clear", "Truth"],
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers an archetype from free tone or audience text.
///
/// Checks run in this order and the first hit wins:
/// Guardian, Empowerer, Healer, Explorer. Anything else is a Sage.
pub fn infer_archetype(tone: &str) -> Archetype {
    let tone = tone.trim().to_lowercase();

    if tone == "soothing" || tone == "calm" || tone.contains("safe") {
        Archetype::Guardian
    } else if tone == "empowering" || tone.contains("you") {
        Archetype::Empowerer
    } else if tone == "growth" || tone.contains("heal") {
        Archetype::Healer
    } else if tone == "urgent" || tone.contains("action") {
        Archetype::Explorer
    } else {
        Archetype::Sage
    }
}

/// Draws `NAME_IDEAS` fragments with replacement, so duplicates can appear.
pub fn generate_names<R: Rng>(archetype: Archetype, rng: &mut R) -> Vec<&'static str> {
    let options = archetype.fragments();
    (0..NAME_IDEAS)
        .map(|_| options[rng.gen_range(0..options.len())])
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingSuggestions {
    pub suggested_archetype: Archetype,
    pub name_ideas: Vec<&'static str>,
    pub insight: String,
}

/// Archetype and name ideas for a brand tone.
pub fn naming_suggestions<R: Rng>(tone: &str, rng: &mut R) -> NamingSuggestions {
    let archetype = infer_archetype(tone);
    NamingSuggestions {
        suggested_archetype: archetype,
        name_ideas: generate_names(archetype, rng),
        insight: format!(
            "The {archetype} archetype aligns with your brand's emotional tone. \
             Names should reflect safety, presence, or agency."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_safe_space_is_guardian() {
        assert_eq!(infer_archetype("soothing, safe space"), Archetype::Guardian);
        assert_eq!(infer_archetype("calm"), Archetype::Guardian);
    }

    #[test]
    fn test_unknown_is_sage() {
        assert_eq!(infer_archetype("unknown xyz"), Archetype::Sage);
        assert_eq!(infer_archetype(""), Archetype::Sage);
        assert_eq!(infer_archetype("serious"), Archetype::Sage);
    }

    #[test]
    fn test_remaining_branches() {
        assert_eq!(infer_archetype("empowering"), Archetype::Empowerer);
        assert_eq!(infer_archetype("young adults"), Archetype::Empowerer);
        assert_eq!(infer_archetype("growth"), Archetype::Healer);
        assert_eq!(infer_archetype("self-healing"), Archetype::Healer);
        assert_eq!(infer_archetype("urgent"), Archetype::Explorer);
        assert_eq!(infer_archetype("call to action"), Archetype::Explorer);
    }

    #[test]
    fn test_guardian_checked_before_empowerer() {
        // contains both "safe" and "you"
        assert_eq!(infer_archetype("you are safe"), Archetype::Guardian);
    }

    #[test]
    fn test_names_drawn_from_archetype_fragments() {
        let mut rng = StdRng::seed_from_u64(11);
        for archetype in Archetype::ALL {
            for _ in 0..100 {
                let names = generate_names(archetype, &mut rng);
                assert_eq!(names.len(), NAME_IDEAS);
                assert!(names.iter().all(|n| archetype.fragments().contains(n)));
            }
        }
    }

    #[test]
    fn test_names_can_repeat() {
        let mut rng = StdRng::seed_from_u64(5);
        let saw_duplicate = (0..200).any(|_| {
            let names = generate_names(Archetype::Sage, &mut rng);
            names[0] == names[1] || names[1] == names[2] || names[0] == names[2]
        });
        assert!(saw_duplicate, "sampling is with replacement");
    }

    #[test]
    fn test_naming_suggestions_insight_mentions_archetype() {
        let mut rng = StdRng::seed_from_u64(2);
        let suggestions = naming_suggestions("urgent", &mut rng);
        assert_eq!(suggestions.suggested_archetype, Archetype::Explorer);
        assert!(suggestions.insight.contains("Explorer"));
    }
}
