use crate::model::{ClaimcheckConfigV1, KnowledgeEntryConfig, RankEntryConfig};
use crate::presets::{self, table};
use anyhow::Context;
use claimcheck_domain::model::{KnowledgeEntry, RankingTable};
use claimcheck_domain::policy::EngineConfig;
use claimcheck_types::{Category, EvidenceItem};
use std::collections::BTreeSet;
use std::time::Duration;

/// Command-line overrides; these win over file values.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub language: Option<String>,
    pub timeout_ms: Option<u64>,
    /// Disable both external sources regardless of profile and file.
    pub offline: bool,
    /// Fact-check API key, when the caller already has one.
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactCheckSettings {
    pub endpoint: String,
    pub language: String,
    /// Environment variable the caller reads the key from.
    pub api_key_env: String,
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncyclopediaSettings {
    pub api_endpoint: String,
    pub rest_endpoint: String,
}

/// How to reach the external sources. `None` means the source is disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderSettings {
    pub fact_check: Option<FactCheckSettings>,
    pub encyclopedia: Option<EncyclopediaSettings>,
    pub timeout: Duration,
    pub user_agent: String,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub engine: EngineConfig,
    pub providers: ProviderSettings,
}

pub fn resolve_config(
    cfg: ClaimcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let Some(mut resolved) = presets::preset(&profile) else {
        anyhow::bail!("unknown profile: {profile} (expected 'standard' or 'offline')");
    };

    // Timeout
    if let Some(ms) = overrides.timeout_ms.or(cfg.timeout_ms) {
        if ms == 0 {
            anyhow::bail!("timeout_ms must be greater than zero");
        }
        resolved.providers.timeout = Duration::from_millis(ms);
    }

    // Fact-check provider
    let language = overrides.language.clone().or(cfg.language.clone());
    if let Some(lang) = language.as_deref()
        && lang.trim().is_empty()
    {
        anyhow::bail!("language must not be empty");
    }
    if cfg.fact_check.enabled == Some(false) {
        resolved.providers.fact_check = None;
    } else if cfg.fact_check.enabled == Some(true) && resolved.providers.fact_check.is_none() {
        resolved.providers.fact_check =
            presets::preset("standard").and_then(|p| p.providers.fact_check);
    }
    if let Some(fc) = resolved.providers.fact_check.as_mut() {
        if let Some(endpoint) = cfg.fact_check.endpoint.clone() {
            fc.endpoint = endpoint;
        }
        if let Some(env) = cfg.fact_check.api_key_env.clone() {
            fc.api_key_env = env;
        }
        if let Some(lang) = language {
            fc.language = lang.trim().to_string();
        }
        fc.api_key = overrides.api_key.clone();
    }

    // Encyclopedia provider
    if cfg.encyclopedia.enabled == Some(false) {
        resolved.providers.encyclopedia = None;
    } else if cfg.encyclopedia.enabled == Some(true) && resolved.providers.encyclopedia.is_none()
    {
        resolved.providers.encyclopedia =
            presets::preset("standard").and_then(|p| p.providers.encyclopedia);
    }
    if let Some(enc) = resolved.providers.encyclopedia.as_mut() {
        if let Some(api) = cfg.encyclopedia.api_endpoint.clone() {
            enc.api_endpoint = api;
        }
        if let Some(rest) = cfg.encyclopedia.rest_endpoint.clone() {
            enc.rest_endpoint = rest;
        }
    }
    if let Some(limit) = cfg.encyclopedia.search_limit {
        resolved.engine.references.search_results = limit as usize;
    }

    if overrides.offline {
        resolved.providers.fact_check = None;
        resolved.providers.encyclopedia = None;
    }

    // Supplementary references
    if let Some(n) = cfg.supplementary.after_static {
        resolved.engine.references.after_static = n as usize;
    }
    if let Some(n) = cfg.supplementary.after_dynamic {
        resolved.engine.references.after_dynamic = n as usize;
    }

    // Knowledge entries are appended; built-in entries keep priority.
    for entry in &cfg.knowledge {
        let entry = knowledge_entry(entry)
            .with_context(|| format!("invalid knowledge entry: {}", entry.id))?;
        resolved.engine.knowledge_base.entries.push(entry);
    }

    // Ranking tables
    for (category, replacement) in [
        (Category::Economy, cfg.rankings.economy.as_deref()),
        (Category::Area, cfg.rankings.area.as_deref()),
    ] {
        let Some(ranked) = replacement else {
            continue;
        };
        let replaced = ranking_table(category, ranked)
            .with_context(|| format!("invalid {} ranking table", category.as_str()))?;
        if let Some(rule) = resolved
            .engine
            .rankings
            .iter_mut()
            .find(|r| r.table.category == category)
        {
            rule.table = replaced;
        }
    }

    Ok(resolved)
}

fn knowledge_entry(cfg: &KnowledgeEntryConfig) -> anyhow::Result<KnowledgeEntry> {
    if cfg.triggers.is_empty() {
        anyhow::bail!("at least one trigger phrase is required");
    }
    let mut triggers = Vec::with_capacity(cfg.triggers.len());
    for trigger in &cfg.triggers {
        let trigger = trigger.trim().to_lowercase();
        if trigger.is_empty() {
            anyhow::bail!("trigger phrases must not be empty");
        }
        triggers.push(trigger);
    }
    Ok(KnowledgeEntry {
        id: cfg.id.clone(),
        triggers,
        answer: cfg.answer.clone(),
        sources: cfg
            .sources
            .iter()
            .map(|s| EvidenceItem::cited(&s.source, &s.url, &s.snippet))
            .collect(),
    })
}

fn ranking_table(category: Category, ranked: &[RankEntryConfig]) -> anyhow::Result<RankingTable> {
    let mut seen = BTreeSet::new();
    let mut lowered = Vec::with_capacity(ranked.len());
    for entry in ranked {
        let entity = entry.entity.trim().to_lowercase();
        if entity.is_empty() {
            anyhow::bail!("entity names must not be empty");
        }
        if entry.rank == 0 {
            anyhow::bail!("rank for {entity} must be at least 1");
        }
        if !seen.insert(entity.clone()) {
            anyhow::bail!("duplicate entity: {entity}");
        }
        lowered.push((entity, entry.rank));
    }
    let borrowed: Vec<(&str, u32)> = lowered.iter().map(|(e, r)| (e.as_str(), *r)).collect();
    Ok(table(category, &borrowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, overrides)
    }

    #[test]
    fn empty_config_resolves_to_standard() {
        let cfg = resolve("", Overrides::default()).expect("resolve");
        assert_eq!(cfg.engine.profile, "standard");
        assert!(cfg.providers.fact_check.is_some());
        assert!(cfg.providers.encyclopedia.is_some());
        assert_eq!(cfg.providers.timeout, Duration::from_secs(10));
        assert_eq!(cfg.engine.references.after_static, 3);
        assert_eq!(cfg.engine.references.after_dynamic, 5);
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = resolve("profile = \"strict\"", Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown profile"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let toml = r#"
profile = "offline"
language = "de"
timeout_ms = 2500
"#;
        let cfg = resolve(
            toml,
            Overrides {
                profile: Some("standard".to_string()),
                language: Some("fr".to_string()),
                api_key: Some("k".to_string()),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        let fc = cfg.providers.fact_check.expect("fact check");
        assert_eq!(fc.language, "fr");
        assert_eq!(fc.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.providers.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn offline_override_disables_sources() {
        let cfg = resolve(
            "",
            Overrides {
                offline: true,
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert!(cfg.providers.fact_check.is_none());
        assert!(cfg.providers.encyclopedia.is_none());
    }

    #[test]
    fn sections_can_disable_and_repoint_sources() {
        let toml = r#"
[fact_check]
enabled = false

[encyclopedia]
rest_endpoint = "http://localhost:9000/rest"
search_limit = 4
"#;
        let cfg = resolve(toml, Overrides::default()).expect("resolve");
        assert!(cfg.providers.fact_check.is_none());
        let enc = cfg.providers.encyclopedia.expect("encyclopedia");
        assert_eq!(enc.rest_endpoint, "http://localhost:9000/rest");
        assert_eq!(cfg.engine.references.search_results, 4);
    }

    #[test]
    fn zero_timeout_and_empty_language_are_rejected() {
        assert!(resolve("timeout_ms = 0", Overrides::default()).is_err());
        assert!(resolve("language = \" \"", Overrides::default()).is_err());
    }

    #[test]
    fn knowledge_entries_append_after_builtins() {
        let toml = r#"
[[knowledge]]
id = "boiling point"
triggers = ["Water Boils At"]
answer = "Water boils at 100 degrees Celsius at sea level."
sources = [{ source = "NIST", url = "https://www.nist.gov", snippet = "Boiling point of water." }]
"#;
        let cfg = resolve(toml, Overrides::default()).expect("resolve");
        let last = cfg.engine.knowledge_base.entries.last().expect("entry");
        assert_eq!(last.id, "boiling point");
        assert_eq!(last.triggers, vec!["water boils at".to_string()]);
        assert_eq!(last.sources[0].source, "NIST");
        assert_eq!(cfg.engine.knowledge_base.entries.len(), 6);
    }

    #[test]
    fn empty_trigger_is_rejected() {
        let toml = r#"
[[knowledge]]
id = "blank"
triggers = [""]
answer = "x"
"#;
        let err = resolve(toml, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("trigger phrases must not be empty"));
    }

    #[test]
    fn ranking_table_is_replaced() {
        let toml = r#"
[rankings]
economy = [{ entity = "Atlantis", rank = 1 }, { entity = "India", rank = 3 }]
"#;
        let cfg = resolve(toml, Overrides::default()).expect("resolve");
        let econ = &cfg.engine.rankings[0].table;
        assert_eq!(econ.category, Category::Economy);
        assert_eq!(econ.rank_of("india"), Some(3));
        assert_eq!(econ.rank_of("china"), None);
        assert_eq!(cfg.engine.rankings[1].table.rank_of("russia"), Some(1));
    }

    #[test]
    fn invalid_ranking_tables_are_rejected() {
        let zero = "[rankings]\narea = [{ entity = \"russia\", rank = 0 }]";
        assert!(resolve(zero, Overrides::default()).is_err());

        let dup = "[rankings]\narea = [{ entity = \"russia\", rank = 1 }, { entity = \"Russia\", rank = 2 }]";
        let err = resolve(dup, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate entity"));
    }
}
