//! Versioned question catalog shared read-only by every scoring operation.
//!
//! A catalog is validated once when it is built. Anything that would skew scores
//! (category weights that do not sum to one, questions without options, duplicate
//! identifiers) is rejected here so the engine never has to second-guess it.

pub mod domain;
mod standard;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;
use tracing::info;

pub use domain::{
    AnswerOption, CatalogDefinition, Category, CategoryWeights, OptionId, Question, QuestionId,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Immutable, validated question catalog.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    version: String,
    weights: CategoryWeights,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    pub fn new(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let CatalogDefinition {
            version,
            category_weights,
            questions,
        } = definition;

        validate_weights(&category_weights)?;

        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.id.0 == 0 {
                return Err(CatalogError::InvalidQuestionId);
            }
            if question.options.is_empty() {
                return Err(CatalogError::QuestionWithoutOptions(question.id));
            }

            let mut seen = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !seen.insert(&option.id) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id,
                        option: option.id.clone(),
                    });
                }
            }

            if index.insert(question.id, position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
        }

        Ok(Self {
            version,
            weights: category_weights,
            questions,
            index,
        })
    }

    /// The built-in questionnaire.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard::standard_definition())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_reader(reader)?;
        Self::new(definition)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            version = %catalog.version,
            questions = catalog.questions.len(),
            "question catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads the catalog at `path`, or the standard catalog when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::standard(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn category_weights(&self) -> &CategoryWeights {
        &self.weights
    }

    pub fn category_weight(&self, category: Category) -> f64 {
        self.weights.weight(category)
    }

    /// Every question in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.index
            .get(&id)
            .and_then(|position| self.questions.get(*position))
    }

    pub fn questions_by_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    /// Questions not yet answered, heaviest category first, then ascending id.
    pub fn unanswered_questions(
        &self,
        answered: &BTreeSet<QuestionId>,
        limit: i64,
    ) -> Result<Vec<&Question>, InvalidArgument> {
        if limit < 0 {
            return Err(InvalidArgument::NegativeLimit(limit));
        }

        let mut pending: Vec<&Question> = self
            .questions
            .iter()
            .filter(|question| !answered.contains(&question.id))
            .collect();

        pending.sort_by(|left, right| {
            let left_weight = self.category_weight(left.category);
            let right_weight = self.category_weight(right.category);
            right_weight
                .total_cmp(&left_weight)
                .then_with(|| left.id.cmp(&right.id))
        });
        pending.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(pending)
    }

    pub fn summary(&self) -> CatalogSummary<'_> {
        CatalogSummary {
            version: &self.version,
            category_weights: self.weights,
            questions: &self.questions,
        }
    }
}

/// Read-only view used by the HTTP catalog endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary<'a> {
    pub version: &'a str,
    pub category_weights: CategoryWeights,
    pub questions: &'a [Question],
}

fn validate_weights(weights: &CategoryWeights) -> Result<(), CatalogError> {
    for category in Category::ordered() {
        let weight = weights.weight(category);
        if !weight.is_finite() || weight < 0.0 {
            return Err(CatalogError::InvalidCategoryWeight { category, weight });
        }
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(CatalogError::CategoryWeightSum { sum });
    }

    Ok(())
}

/// Misconfiguration detected while building a catalog. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("category weights must sum to 1.0, found {sum}")]
    CategoryWeightSum { sum: f64 },
    #[error("category {category:?} has invalid weight {weight}")]
    InvalidCategoryWeight { category: Category, weight: f64 },
    #[error("catalog defines no questions")]
    Empty,
    #[error("question ids must be positive")]
    InvalidQuestionId,
    #[error("question {0} has no answer options")]
    QuestionWithoutOptions(QuestionId),
    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {question} repeats option '{option}'")]
    DuplicateOption {
        question: QuestionId,
        option: OptionId,
    },
    #[error("unable to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Caller supplied an argument outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("limit must be zero or greater, got {0}")]
    NegativeLimit(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, weight: i32) -> AnswerOption {
        AnswerOption {
            id: OptionId::new(id),
            text: format!("option {id}"),
            weight,
        }
    }

    fn question(id: u32, category: Category) -> Question {
        Question {
            id: QuestionId(id),
            category,
            prompt: format!("question {id}"),
            options: vec![option("a", 1), option("b", 3)],
        }
    }

    fn definition(questions: Vec<Question>) -> CatalogDefinition {
        CatalogDefinition {
            version: "test".to_string(),
            category_weights: CategoryWeights::standard(),
            questions,
        }
    }

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = QuestionCatalog::standard().expect("standard catalog builds");
        assert_eq!(catalog.len(), 25);
        for category in Category::ordered() {
            assert_eq!(catalog.questions_by_category(category).len(), 5);
        }
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let mut definition = definition(vec![question(1, Category::Values)]);
        definition.category_weights.interests = 0.2;

        match QuestionCatalog::new(definition) {
            Err(CatalogError::CategoryWeightSum { sum }) => assert!((sum - 1.1).abs() < 1e-9),
            other => panic!("expected weight sum error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_weights_even_when_sum_balances() {
        let mut definition = definition(vec![question(1, Category::Values)]);
        definition.category_weights.interests = -0.1;
        definition.category_weights.values = 0.5;

        assert!(matches!(
            QuestionCatalog::new(definition),
            Err(CatalogError::InvalidCategoryWeight {
                category: Category::Interests,
                ..
            })
        ));
    }

    #[test]
    fn rejects_question_without_options() {
        let mut empty = question(4, Category::Lifestyle);
        empty.options.clear();

        assert!(matches!(
            QuestionCatalog::new(definition(vec![question(1, Category::Values), empty])),
            Err(CatalogError::QuestionWithoutOptions(QuestionId(4)))
        ));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        assert!(matches!(
            QuestionCatalog::new(definition(vec![
                question(2, Category::Values),
                question(2, Category::Lifestyle),
            ])),
            Err(CatalogError::DuplicateQuestion(QuestionId(2)))
        ));

        let mut repeated = question(3, Category::Values);
        repeated.options.push(option("a", 9));
        assert!(matches!(
            QuestionCatalog::new(definition(vec![repeated])),
            Err(CatalogError::DuplicateOption { .. })
        ));

        assert!(matches!(
            QuestionCatalog::new(definition(vec![question(0, Category::Values)])),
            Err(CatalogError::InvalidQuestionId)
        ));
        assert!(matches!(
            QuestionCatalog::new(definition(Vec::new())),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn lookups_preserve_catalog_order() {
        let catalog = QuestionCatalog::new(definition(vec![
            question(9, Category::Values),
            question(3, Category::Lifestyle),
            question(5, Category::Values),
        ]))
        .expect("catalog builds");

        let values: Vec<QuestionId> = catalog
            .questions_by_category(Category::Values)
            .into_iter()
            .map(|question| question.id)
            .collect();
        assert_eq!(values, vec![QuestionId(9), QuestionId(5)]);
        assert_eq!(
            catalog.question_by_id(QuestionId(3)).map(|q| q.category),
            Some(Category::Lifestyle)
        );
        assert!(catalog.question_by_id(QuestionId(4)).is_none());
    }

    #[test]
    fn unanswered_questions_sort_by_category_weight_then_id() {
        let catalog = QuestionCatalog::new(definition(vec![
            question(1, Category::Interests),
            question(2, Category::Lifestyle),
            question(3, Category::Values),
            question(4, Category::Lifestyle),
            question(5, Category::Values),
            question(6, Category::Personality),
        ]))
        .expect("catalog builds");

        let answered = BTreeSet::from([QuestionId(3)]);
        let ids: Vec<u32> = catalog
            .unanswered_questions(&answered, 10)
            .expect("limit is valid")
            .into_iter()
            .map(|question| question.id.0)
            .collect();
        assert_eq!(ids, vec![5, 2, 4, 6, 1]);

        let truncated = catalog
            .unanswered_questions(&answered, 2)
            .expect("limit is valid");
        assert_eq!(truncated.len(), 2);
        assert!(catalog
            .unanswered_questions(&answered, 0)
            .expect("zero limit is valid")
            .is_empty());
    }

    #[test]
    fn unanswered_questions_reject_negative_limit() {
        let catalog = QuestionCatalog::standard().expect("standard catalog builds");
        assert_eq!(
            catalog.unanswered_questions(&BTreeSet::new(), -1),
            Err(InvalidArgument::NegativeLimit(-1))
        );
    }

    #[test]
    fn reads_json_definitions() {
        let json = r#"{
            "version": "pilot-2",
            "questions": [
                {
                    "id": 11,
                    "category": "interests",
                    "prompt": "Board games?",
                    "options": [
                        { "id": "a", "text": "Love them", "weight": 3 },
                        { "id": "b", "text": "Not for me", "weight": 1 }
                    ]
                }
            ]
        }"#;

        let catalog = QuestionCatalog::from_reader(json.as_bytes()).expect("json catalog loads");
        assert_eq!(catalog.version(), "pilot-2");
        assert_eq!(catalog.category_weights(), &CategoryWeights::standard());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            QuestionCatalog::from_reader("{ not json".as_bytes()),
            Err(CatalogError::Parse(_))
        ));
    }
}
