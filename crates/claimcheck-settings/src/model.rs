use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `claimcheck.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and falls back to the
/// selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimcheckConfigV1 {
    /// Optional schema string for tooling (`claimcheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default) or `offline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Language hint sent to the fact-check provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Timeout applied to every external call, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub fact_check: FactCheckConfig,

    #[serde(default)]
    pub encyclopedia: EncyclopediaConfig,

    #[serde(default)]
    pub supplementary: SupplementaryConfig,

    /// Extra knowledge entries, appended after the built-in ones.
    #[serde(default)]
    pub knowledge: Vec<KnowledgeEntryConfig>,

    #[serde(default)]
    pub rankings: RankingsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FactCheckConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EncyclopediaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// MediaWiki action API (`.../w/api.php`), used for search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    /// REST API root (`.../api/rest_v1`), used for page summaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_endpoint: Option<String>,

    /// Candidate titles considered when resolving the fallback page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_limit: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SupplementaryConfig {
    /// References appended after a knowledge-base or ranking decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_static: Option<u32>,

    /// References appended after a fact-check or fallback decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_dynamic: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KnowledgeEntryConfig {
    pub id: String,
    /// Substrings matched case-insensitively against the claim.
    pub triggers: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SourceConfig {
    pub source: String,
    pub url: String,
    pub snippet: String,
}

/// A table given here replaces the built-in table for that category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankingsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy: Option<Vec<RankEntryConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Vec<RankEntryConfig>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankEntryConfig {
    pub entity: String,
    pub rank: u32,
}
