use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Advice in the template shape: exactly a title, description and savings text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Advice {
    pub title: String,
    pub description: String,
    pub potential_savings: String,
}

/// One piece of reduction advice.
///
/// Provider items are kept exactly as received. An item that matches the
/// template shape becomes [`Recommendation::Advice`]; anything else (extra
/// keys, missing keys, plain strings, numbers) is carried untouched in
/// [`Recommendation::Other`] and serializes back to the same JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Advice(Advice),
    Other(Value),
}

impl Recommendation {
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<Advice>(value.clone()) {
            Ok(advice) => Recommendation::Advice(advice),
            Err(_) => Recommendation::Other(value),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.text_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.text_field("description")
    }

    pub fn potential_savings(&self) -> Option<&str> {
        self.text_field("potential_savings")
    }

    /// Plain-text rendering for items without a title
    pub fn summary(&self) -> String {
        match self {
            Recommendation::Advice(advice) => advice.title.clone(),
            Recommendation::Other(Value::String(s)) => s.clone(),
            Recommendation::Other(other) => other.to_string(),
        }
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        match (self, key) {
            (Recommendation::Advice(a), "title") => Some(&a.title),
            (Recommendation::Advice(a), "description") => Some(&a.description),
            (Recommendation::Advice(a), "potential_savings") => Some(&a.potential_savings),
            (Recommendation::Advice(_), _) => None,
            (Recommendation::Other(value), _) => value.get(key).and_then(Value::as_str),
        }
    }
}

impl From<Advice> for Recommendation {
    fn from(advice: Advice) -> Self {
        Recommendation::Advice(advice)
    }
}

/// Where a set of recommendations came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Provider,
    Fallback,
}

/// Recommendations plus their origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub recommendations: Vec<Recommendation>,
    pub source: AdviceSource,
}

/// Failure on the primary (provider) path. Never surfaced past the selector.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("advice provider returned status {0}")]
    Status(u16),

    #[error("advice provider did not answer within {0} seconds")]
    Timeout(u64),

    #[error("advice provider reply had no message content")]
    EmptyContent,

    #[error("advice reply is not valid JSON: {0}")]
    MalformedReply(#[from] serde_json::Error),

    #[error("advice reply has no 'recommendations' array")]
    MissingRecommendations,
}
