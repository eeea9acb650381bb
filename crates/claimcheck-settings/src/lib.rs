//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Reading the config file and the API key environment variable is the caller's job.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    ClaimcheckConfigV1, EncyclopediaConfig, FactCheckConfig, KnowledgeEntryConfig,
    RankEntryConfig, RankingsConfig, SourceConfig, SupplementaryConfig,
};
pub use presets::{DEFAULT_API_KEY_ENV, preset};
pub use resolve::{
    EncyclopediaSettings, FactCheckSettings, Overrides, ProviderSettings, ResolvedConfig,
};

/// Schema id accepted in the optional `schema` field.
pub const SCHEMA_CONFIG_V1: &str = "claimcheck.config.v1";

/// Parse `claimcheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ClaimcheckConfigV1> {
    let cfg: ClaimcheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the engine tables and provider settings (profile + file + overrides).
pub fn resolve_config(
    cfg: ClaimcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
