//! Text analysis: language lexicons, regex entity extraction and sentiment.
//!
//! Every heuristic here is driven by a static [`Lexicon`] selected by
//! [`Language`], so the same pipeline runs over English or Russian text.

mod extraction;
mod sentiment;

pub use extraction::{EntityExtractor, KEYWORD_CONFIDENCE, PATTERN_CONFIDENCE};
pub use sentiment::{analyze_sentiment, NEUTRAL_SENTIMENT};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KmsError;

/// Language of the analysed text and of generated phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    pub fn lexicon(&self) -> &'static Lexicon {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = KmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            other => Err(KmsError::InvalidInput(format!(
                "unsupported language '{}', expected 'en' or 'ru'",
                other
            ))),
        }
    }
}

/// Word lists, patterns and phrasing for one language.
#[derive(Debug)]
pub struct Lexicon {
    pub language: Language,
    pub person_pattern: &'static str,
    pub organization_pattern: &'static str,
    pub location_pattern: &'static str,
    pub date_pattern: &'static str,
    /// Keywords that yield a CONCEPT entity when present anywhere in the text.
    pub concept_keywords: &'static [&'static str],
    /// Query words that ask about people.
    pub person_query_words: &'static [&'static str],
    /// Query words that ask about organizations.
    pub organization_query_words: &'static [&'static str],
    pub positive_words: &'static [&'static str],
    pub negative_words: &'static [&'static str],
    /// Canned query suggestions.
    pub suggestions: &'static [&'static str],
}

impl Lexicon {
    pub fn graph_snippet(&self, entity_count: usize) -> String {
        match self.language {
            Language::English => format!("Knowledge graph with {} entities", entity_count),
            Language::Russian => format!("Граф знаний с {} сущностями", entity_count),
        }
    }

    pub fn document_title(&self, short_id: &str) -> String {
        match self.language {
            Language::English => format!("Document {}", short_id),
            Language::Russian => format!("Документ {}", short_id),
        }
    }

    pub fn high_connectivity_hypothesis(&self) -> String {
        match self.language {
            Language::English => {
                "High data connectivity may indicate systemic dependencies".to_string()
            }
            Language::Russian => {
                "Высокая связность данных может указывать на системные зависимости".to_string()
            }
        }
    }

    pub fn central_entity_hypothesis(&self, name: &str) -> String {
        match self.language {
            Language::English => format!("Entity '{}' is central in the system", name),
            Language::Russian => format!("Сущность '{}' является центральной в системе", name),
        }
    }

    pub fn people_organizations_hypothesis(&self, people: usize, organizations: usize) -> String {
        match self.language {
            Language::English => format!(
                "Found links between {} people and {} organizations",
                people, organizations
            ),
            Language::Russian => format!(
                "Обнаружены связи между {} людьми и {} организациями",
                people, organizations
            ),
        }
    }
}

static ENGLISH: Lexicon = Lexicon {
    language: Language::English,
    person_pattern: r"\b[A-Z][a-z]+ [A-Z][a-z]+\b",
    organization_pattern: r#"\b(?:company|corporation|corp|inc|llc|ltd)\.?\s+["“«]?[A-Z][\w&-]*["”»]?"#,
    location_pattern: r"\b(?:in|at|city of)\s+[A-Z][a-z]+\b",
    date_pattern: r"\b(?:\d{1,2}[./]\d{1,2}[./]\d{4}|\d{4}\s+year)\b",
    concept_keywords: &["project", "risk", "report", "analysis", "data"],
    person_query_words: &["person", "people", "employee"],
    organization_query_words: &["company", "organization", "firm"],
    positive_words: &["success", "good", "excellent", "recommend", "effective"],
    negative_words: &["problem", "risk", "bad", "error", "negative"],
    suggestions: &[
        "Find reports on the project",
        "Show links between organizations",
        "Risk analysis",
        "Statistics for the last year",
        "Knowledge graph by topic",
    ],
};

static RUSSIAN: Lexicon = Lexicon {
    language: Language::Russian,
    person_pattern: r"\b([А-Я][а-я]+ [А-Я][а-я]+)\b",
    organization_pattern: r#"\b(ООО|АО|ЗАО|ИП)\s+[«"][^«"]+[»"]"#,
    location_pattern: r"\b(г\.|гор\.|город)\s+[А-Я][а-я]+\b",
    date_pattern: r"\b(\d{1,2}\.\d{1,2}\.\d{4}|\d{4}\s+год)\b",
    concept_keywords: &["проект", "риск", "отчет", "анализ", "данные"],
    person_query_words: &["человек", "персона", "сотрудник"],
    organization_query_words: &["компания", "организация", "фирма"],
    positive_words: &["успех", "хорошо", "отлично", "рекомендую", "эффективный"],
    negative_words: &["проблема", "риск", "плохо", "ошибка", "негативный"],
    suggestions: &[
        "Найди отчеты по проекту",
        "Показать связи между организациями",
        "Анализ рисков",
        "Статистика за последний год",
        "Граф знаний по теме",
    ],
};
