use crate::resolve::{EncyclopediaSettings, FactCheckSettings, ProviderSettings, ResolvedConfig};
use claimcheck_domain::model::{KnowledgeBase, KnowledgeEntry, RankedEntity, RankingTable};
use claimcheck_domain::policy::{
    CategoryRule, EngineConfig, IndicatorWords, RatingFamilies, ReferenceLimits,
};
use claimcheck_types::{Category, EvidenceItem, ids};
use std::time::Duration;

pub const DEFAULT_API_KEY_ENV: &str = "FACTCHECK_API_KEY";
pub const DEFAULT_FACT_CHECK_ENDPOINT: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";
pub const DEFAULT_WIKI_API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_WIKI_REST_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const IMF_WEO_URL: &str = "https://www.imf.org/en/Publications/WEO/weo-database/2024/April/weo-report";
const WORLD_ATLAS_URL: &str =
    "https://www.worldatlas.com/geography/the-largest-countries-in-the-world.html";

/// Preset profiles. Both carry the same curated tables; they differ in which external
/// sources are consulted.
///
/// Returns `None` for an unknown profile name.
pub fn preset(profile: &str) -> Option<ResolvedConfig> {
    match profile {
        "standard" => Some(standard_profile()),
        "offline" => Some(offline_profile()),
        _ => None,
    }
}

fn standard_profile() -> ResolvedConfig {
    ResolvedConfig {
        engine: engine("standard"),
        providers: ProviderSettings {
            fact_check: Some(FactCheckSettings {
                endpoint: DEFAULT_FACT_CHECK_ENDPOINT.to_string(),
                language: DEFAULT_LANGUAGE.to_string(),
                api_key_env: DEFAULT_API_KEY_ENV.to_string(),
                api_key: None,
            }),
            encyclopedia: Some(EncyclopediaSettings {
                api_endpoint: DEFAULT_WIKI_API_ENDPOINT.to_string(),
                rest_endpoint: DEFAULT_WIKI_REST_ENDPOINT.to_string(),
            }),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("claimcheck/", env!("CARGO_PKG_VERSION")).to_string(),
        },
    }
}

fn offline_profile() -> ResolvedConfig {
    let mut cfg = standard_profile();
    cfg.engine.profile = "offline".to_string();
    cfg.providers.fact_check = None;
    cfg.providers.encyclopedia = None;
    cfg
}

fn engine(profile: &str) -> EngineConfig {
    EngineConfig {
        profile: profile.to_string(),
        knowledge_base: knowledge_base(),
        rankings: vec![economy_rule(), area_rule()],
        rating_families: RatingFamilies {
            true_family: words(&["true", "correct", "accurate"]),
            false_family: words(&["false", "incorrect", "inaccurate", "fake"]),
            mixed_family: words(&["mixture", "partially", "mostly", "somewhat"]),
        },
        indicators: IndicatorWords {
            false_words: words(&["myth", "false", "incorrect", "not true", "debunked", "hoax"]),
            true_words: words(&["true", "correct", "accurate", "verified", "confirmed"]),
        },
        references: ReferenceLimits {
            search_results: 10,
            after_static: 3,
            after_dynamic: 5,
            snippet_chars: 200,
        },
    }
}

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
}

fn knowledge_base() -> KnowledgeBase {
    // Declaration order is match priority.
    KnowledgeBase {
        entries: vec![
            KnowledgeEntry {
                id: "number of countries in the world".to_string(),
                triggers: words(&[
                    "how many countries",
                    "number of countries",
                    "countries in the world",
                ]),
                answer: "There are 195 countries in the world: 193 UN member states and 2 observer states (Vatican City and Palestine).".to_string(),
                sources: vec![
                    EvidenceItem::cited(
                        "United Nations",
                        "https://www.un.org/en/member-states/",
                        "There are currently 193 UN Member States.",
                    ),
                    EvidenceItem::cited(
                        "Worldometer",
                        "https://www.worldometers.info/geography/how-many-countries-are-there-in-the-world/",
                        "There are 195 countries in the world today.",
                    ),
                ],
            },
            KnowledgeEntry {
                id: "moon composition".to_string(),
                triggers: words(&["moon made of cheese", "moon is cheese", "moon composition"]),
                answer: "The Moon is made of rock and minerals, not cheese. It has a solid iron core, a molten outer core, and a mantle and crust made of silicate minerals.".to_string(),
                sources: vec![EvidenceItem::cited(
                    "NASA",
                    "https://solarsystem.nasa.gov/moons/earths-moon/in-depth/",
                    "The Moon is a rocky, solid-surface body with only about one-sixth of Earth's gravity.",
                )],
            },
            KnowledgeEntry {
                id: "earth shape".to_string(),
                triggers: words(&["earth is flat", "flat earth", "earth shape"]),
                answer: "The Earth is an oblate spheroid (slightly flattened at the poles and bulging at the equator), not flat.".to_string(),
                sources: vec![EvidenceItem::cited(
                    "NASA",
                    "https://www.nasa.gov/audience/forstudents/k-4/stories/nasa-knows/what-is-earth-k4.html",
                    "Earth is not a perfect sphere, but rather an oblate spheroid.",
                )],
            },
            // Ranking summaries trigger on plural/list phrasing so that single-entity ordinal
            // claims ("India is the 10th largest economy") reach the ranking verifier.
            KnowledgeEntry {
                id: "country size rankings".to_string(),
                triggers: words(&[
                    "largest countries",
                    "biggest countries",
                    "country size",
                    "largest by area",
                ]),
                answer: "The largest countries by area are: 1. Russia, 2. Canada, 3. China, 4. United States, 5. Brazil, 6. Australia, 7. India, 8. Argentina, 9. Kazakhstan, 10. Algeria.".to_string(),
                sources: vec![EvidenceItem::cited(
                    "World Atlas",
                    WORLD_ATLAS_URL,
                    "The top 10 largest countries occupy nearly half of the world's land area.",
                )],
            },
            KnowledgeEntry {
                id: "economy size rankings".to_string(),
                triggers: words(&[
                    "largest economies",
                    "biggest economies",
                    "economy size",
                    "gdp ranking",
                ]),
                answer: "The largest economies by nominal GDP are: 1. United States, 2. China, 3. Japan, 4. Germany, 5. India, 6. United Kingdom, 7. France, 8. Italy, 9. Brazil, 10. Canada.".to_string(),
                sources: vec![
                    EvidenceItem::cited(
                        "IMF",
                        IMF_WEO_URL,
                        "World Economic Outlook Database, April 2024: GDP, current prices (U.S. dollars).",
                    ),
                    EvidenceItem::cited(
                        "World Bank",
                        "https://data.worldbank.org/indicator/NY.GDP.MKTP.CD",
                        "GDP (current US$) - World Bank national accounts data.",
                    ),
                ],
            },
        ],
    }
}

pub(crate) fn table(category: Category, ranked: &[(&str, u32)]) -> RankingTable {
    RankingTable {
        category,
        entries: ranked
            .iter()
            .map(|(entity, rank)| RankedEntity {
                entity: entity.to_string(),
                rank: *rank,
            })
            .collect(),
    }
}

fn economy_rule() -> CategoryRule {
    CategoryRule {
        keywords: words(&["economy", "gdp", "economic"]),
        table: table(
            Category::Economy,
            &[
                ("united states", 1),
                ("china", 2),
                ("japan", 3),
                ("germany", 4),
                ("india", 5),
                ("united kingdom", 6),
                ("france", 7),
                ("italy", 8),
                ("brazil", 9),
                ("canada", 10),
            ],
        ),
        correction_source: EvidenceItem::cited(
            "IMF",
            IMF_WEO_URL,
            "According to IMF data, economies are ranked by nominal GDP in the World Economic Outlook database.",
        )
        .with_rating(ids::RATING_CORRECTED),
    }
}

fn area_rule() -> CategoryRule {
    CategoryRule {
        keywords: words(&["area", "size", "largest", "biggest"]),
        table: table(
            Category::Area,
            &[
                ("russia", 1),
                ("canada", 2),
                ("china", 3),
                ("united states", 4),
                ("brazil", 5),
                ("australia", 6),
                ("india", 7),
                ("argentina", 8),
                ("kazakhstan", 9),
                ("algeria", 10),
            ],
        ),
        correction_source: EvidenceItem::cited(
            "World Atlas",
            WORLD_ATLAS_URL,
            "According to World Atlas, countries are ranked by total area including land and water.",
        )
        .with_rating(ids::RATING_CORRECTED),
    }
}
