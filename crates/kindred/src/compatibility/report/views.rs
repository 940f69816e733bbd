use std::collections::BTreeMap;

use super::super::catalog::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub total: usize,
    pub answered: usize,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionStats {
    pub total_questions: usize,
    pub answered_questions: usize,
    pub completion_percentage: u8,
    pub per_category: BTreeMap<Category, CategoryProgress>,
}

/// Threshold band for the mean option weight within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitBand {
    Open,
    Balanced,
    Traditional,
}

impl TraitBand {
    pub const OPEN_THRESHOLD: f64 = 2.5;
    pub const BALANCED_THRESHOLD: f64 = 1.5;

    /// Both thresholds are inclusive lower bounds.
    pub fn classify(mean_weight: f64) -> Self {
        if mean_weight >= Self::OPEN_THRESHOLD {
            Self::Open
        } else if mean_weight >= Self::BALANCED_THRESHOLD {
            Self::Balanced
        } else {
            Self::Traditional
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Active/Open",
            Self::Balanced => "Balanced",
            Self::Traditional => "Cautious/Traditional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitInsight {
    pub category: Category,
    pub band: TraitBand,
    pub mean_weight: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub traits: Vec<TraitInsight>,
}

impl Insights {
    pub fn labels(&self) -> Vec<&'static str> {
        self.traits.iter().map(|insight| insight.label).collect()
    }
}
