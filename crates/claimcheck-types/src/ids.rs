//! Stable identifiers for stages, ratings, and well-known sources.
//!
//! Stage ids are snake_case. Ratings are lower-cased free text; the two below are the
//! synthetic ratings the engine assigns itself.

// Stages
pub const STAGE_KNOWLEDGE_BASE: &str = "knowledge_base";
pub const STAGE_RANKING_CHECK: &str = "ranking_check";
pub const STAGE_FACT_CHECK: &str = "fact_check";
pub const STAGE_ENCYCLOPEDIA_FALLBACK: &str = "encyclopedia_fallback";

// Synthetic ratings
pub const RATING_REFERENCE: &str = "reference";
pub const RATING_CORRECTED: &str = "corrected";

// Sources
pub const SOURCE_ENCYCLOPEDIA: &str = "Wikipedia";
pub const SOURCE_UNKNOWN: &str = "Unknown Source";
pub const URL_UNKNOWN: &str = "#";

// Categories
pub const CATEGORY_ECONOMY: &str = "economy";
pub const CATEGORY_AREA: &str = "area";
