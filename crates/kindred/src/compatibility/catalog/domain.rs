use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier for a question. Zero is reserved and rejected at catalog build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Option token, unique within its question (e.g. `"a"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub String);

impl OptionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Lifestyle,
    Values,
    Personality,
    Relationship,
    Interests,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Lifestyle,
            Self::Values,
            Self::Personality,
            Self::Relationship,
            Self::Interests,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lifestyle => "Lifestyle",
            Self::Values => "Values",
            Self::Personality => "Personality",
            Self::Relationship => "Relationship",
            Self::Interests => "Interests",
        }
    }
}

/// Fraction of the overall score attributed to each category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub lifestyle: f64,
    pub values: f64,
    pub personality: f64,
    pub relationship: f64,
    pub interests: f64,
}

impl CategoryWeights {
    pub const fn standard() -> Self {
        Self {
            lifestyle: 0.25,
            values: 0.30,
            personality: 0.20,
            relationship: 0.15,
            interests: 0.10,
        }
    }

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Lifestyle => self.lifestyle,
            Category::Values => self.values,
            Category::Personality => self.personality,
            Category::Relationship => self.relationship,
            Category::Interests => self.interests,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ordered()
            .into_iter()
            .map(|category| self.weight(category))
            .sum()
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    /// Distance between the heaviest and lightest option; zero when every option weighs the same.
    pub fn weight_spread(&self) -> i64 {
        let mut weights = self.options.iter().map(|option| i64::from(option.weight));
        let Some(first) = weights.next() else {
            return 0;
        };
        let (min, max) = weights.fold((first, first), |(min, max), weight| {
            (min.min(weight), max.max(weight))
        });
        max - min
    }
}

/// Serializable catalog source, either built in or read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub version: String,
    #[serde(default)]
    pub category_weights: CategoryWeights,
    pub questions: Vec<Question>,
}
