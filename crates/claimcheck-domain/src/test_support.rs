use crate::model::{
    ClaimReview, EncyclopediaPage, FactCheckRecord, KnowledgeBase, KnowledgeEntry, RankedEntity,
    RankingTable,
};
use crate::policy::{CategoryRule, EngineConfig, IndicatorWords, RatingFamilies, ReferenceLimits};
use claimcheck_types::{Category, EvidenceItem};

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
}

pub fn entry(id: &str, triggers: &[&str], answer: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        triggers: words(triggers),
        answer: answer.to_string(),
        sources: vec![EvidenceItem::cited(
            "Curated",
            &format!("https://example.org/{}", id.replace(' ', "-")),
            answer,
        )],
    }
}

pub fn table(category: Category, ranked: &[(&str, u32)]) -> RankingTable {
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

pub fn economy_rule() -> CategoryRule {
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
        correction_source: EvidenceItem::cited("IMF", "https://imf.example", "GDP table")
            .with_rating("corrected"),
    }
}

pub fn area_rule() -> CategoryRule {
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
        correction_source: EvidenceItem::cited("World Atlas", "https://atlas.example", "Areas")
            .with_rating("corrected"),
    }
}

pub fn config() -> EngineConfig {
    EngineConfig {
        profile: "test".to_string(),
        knowledge_base: KnowledgeBase {
            entries: vec![
                entry(
                    "number of countries in the world",
                    &["how many countries", "number of countries", "countries in the world"],
                    "There are 195 countries in the world.",
                ),
                entry(
                    "earth shape",
                    &["earth is flat", "flat earth", "earth shape"],
                    "The Earth is an oblate spheroid.",
                ),
            ],
        },
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

pub fn rated(rating: &str) -> EvidenceItem {
    EvidenceItem::cited("Checker", "https://checker.example/1", "title").with_rating(rating)
}

pub fn record(text: &str, reviews: Vec<ClaimReview>) -> FactCheckRecord {
    FactCheckRecord {
        text: Some(text.to_string()),
        reviews,
    }
}

pub fn review(publisher: Option<&str>, title: &str, rating: Option<&str>) -> ClaimReview {
    ClaimReview {
        publisher: publisher.map(|p| p.to_string()),
        url: Some("https://checker.example/review".to_string()),
        title: Some(title.to_string()),
        textual_rating: rating.map(|r| r.to_string()),
    }
}

pub fn page(title: &str, summary: &str) -> EncyclopediaPage {
    EncyclopediaPage {
        title: title.to_string(),
        url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
        summary: summary.to_string(),
    }
}
