use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final classification label attached to a claim.
///
/// Serialized as the human-facing label (`"Mixed/Partially True"`, not `mixed`), since
/// presentation layers display it verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Verdict {
    Verified,
    True,
    False,
    #[serde(rename = "Mixed/Partially True")]
    MixedPartiallyTrue,
    Controversial,
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Likely False")]
    LikelyFalse,
    Unverified,
}

impl Verdict {
    pub const ALL: [Verdict; 8] = [
        Verdict::Verified,
        Verdict::True,
        Verdict::False,
        Verdict::MixedPartiallyTrue,
        Verdict::Controversial,
        Verdict::LikelyTrue,
        Verdict::LikelyFalse,
        Verdict::Unverified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Verified => "Verified",
            Verdict::True => "True",
            Verdict::False => "False",
            Verdict::MixedPartiallyTrue => "Mixed/Partially True",
            Verdict::Controversial => "Controversial",
            Verdict::LikelyTrue => "Likely True",
            Verdict::LikelyFalse => "Likely False",
            Verdict::Unverified => "Unverified",
        }
    }

    /// Case-insensitive lookup by label. Accepts `-`/`_` in place of spaces.
    pub fn from_label(label: &str) -> Option<Verdict> {
        let wanted = normalize_label(label);
        Verdict::ALL
            .into_iter()
            .find(|v| normalize_label(v.label()) == wanted)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranking claim category. Economy is always considered before area.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Economy,
    Area,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Economy => ids::CATEGORY_ECONOMY,
            Category::Area => ids::CATEGORY_AREA,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage that produced the verdict, in priority order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    KnowledgeBase,
    RankingCheck,
    FactCheck,
    EncyclopediaFallback,
}

impl StageId {
    pub fn as_str(self) -> &'static str {
        match self {
            StageId::KnowledgeBase => ids::STAGE_KNOWLEDGE_BASE,
            StageId::RankingCheck => ids::STAGE_RANKING_CHECK,
            StageId::FactCheck => ids::STAGE_FACT_CHECK,
            StageId::EncyclopediaFallback => ids::STAGE_ENCYCLOPEDIA_FALLBACK,
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
