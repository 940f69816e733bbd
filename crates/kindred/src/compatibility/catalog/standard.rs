use super::domain::{
    AnswerOption, CatalogDefinition, Category, CategoryWeights, OptionId, Question, QuestionId,
};

pub(super) const STANDARD_VERSION: &str = "standard-1";

pub(super) fn standard_definition() -> CatalogDefinition {
    CatalogDefinition {
        version: STANDARD_VERSION.to_string(),
        category_weights: CategoryWeights::standard(),
        questions: standard_questions(),
    }
}

fn question(id: u32, category: Category, prompt: &str, options: &[(&str, &str, i32)]) -> Question {
    Question {
        id: QuestionId(id),
        category,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(id, text, weight)| AnswerOption {
                id: OptionId::new(*id),
                text: (*text).to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            1,
            Category::Lifestyle,
            "How do you usually spend a free weekend?",
            &[
                ("a", "Out exploring, hiking, or travelling", 3),
                ("b", "A mix of plans and downtime", 2),
                ("c", "Relaxing at home", 1),
            ],
        ),
        question(
            2,
            Category::Lifestyle,
            "When do you feel most energetic?",
            &[
                ("a", "Early morning", 1),
                ("b", "Midday", 2),
                ("c", "Late at night", 3),
            ],
        ),
        question(
            3,
            Category::Lifestyle,
            "How often do you exercise?",
            &[
                ("a", "Daily", 3),
                ("b", "A few times a week", 2),
                ("c", "Occasionally", 1),
                ("d", "Rarely or never", 0),
            ],
        ),
        question(
            4,
            Category::Lifestyle,
            "How tidy do you keep your living space?",
            &[
                ("a", "Spotless at all times", 1),
                ("b", "Generally tidy", 2),
                ("c", "Comfortably lived-in", 3),
            ],
        ),
        question(
            5,
            Category::Lifestyle,
            "Where would you like to live long term?",
            &[
                ("a", "A big city", 3),
                ("b", "The suburbs", 2),
                ("c", "The countryside", 1),
            ],
        ),
        question(
            6,
            Category::Values,
            "How important is family in your life?",
            &[
                ("a", "It comes first", 1),
                ("b", "Very important, balanced with other things", 2),
                ("c", "Important, but I value independence more", 3),
            ],
        ),
        question(
            7,
            Category::Values,
            "Do you want children?",
            &[
                ("a", "Yes, definitely", 1),
                ("b", "Maybe, I'm open to it", 2),
                ("c", "No", 3),
            ],
        ),
        question(
            8,
            Category::Values,
            "What role does faith or spirituality play for you?",
            &[
                ("a", "Central to who I am", 1),
                ("b", "Somewhat important", 2),
                ("c", "Not important", 3),
            ],
        ),
        question(
            9,
            Category::Values,
            "How do you approach money?",
            &[
                ("a", "Save first, spend carefully", 1),
                ("b", "Balance saving and enjoying", 2),
                ("c", "Enjoy it while I can", 3),
            ],
        ),
        question(
            10,
            Category::Values,
            "How much does career ambition drive you?",
            &[
                ("a", "It's a top priority", 3),
                ("b", "It matters alongside other goals", 2),
                ("c", "Work is just a means to an end", 1),
            ],
        ),
        question(
            11,
            Category::Personality,
            "At a party, you are most likely to be...",
            &[
                ("a", "Meeting everyone in the room", 3),
                ("b", "Talking with a few close friends", 2),
                ("c", "Looking for a quiet corner", 1),
            ],
        ),
        question(
            12,
            Category::Personality,
            "How do you make big decisions?",
            &[
                ("a", "Go with my gut", 3),
                ("b", "Weigh both feelings and facts", 2),
                ("c", "Research every option carefully", 1),
            ],
        ),
        question(
            13,
            Category::Personality,
            "How do you feel about spontaneous plans?",
            &[
                ("a", "Love them", 3),
                ("b", "Fine now and then", 2),
                ("c", "I prefer to plan ahead", 1),
            ],
        ),
        question(
            14,
            Category::Personality,
            "How do you handle stress?",
            &[
                ("a", "Talk it through with someone", 3),
                ("b", "Exercise or keep busy", 2),
                ("c", "Take time alone to process", 1),
            ],
        ),
        question(
            15,
            Category::Personality,
            "How comfortable are you with change?",
            &[
                ("a", "I seek it out", 3),
                ("b", "I adapt when needed", 2),
                ("c", "I prefer stability", 1),
            ],
        ),
        question(
            16,
            Category::Relationship,
            "How much time together do you want in a relationship?",
            &[
                ("a", "As much as possible", 1),
                ("b", "A healthy balance", 2),
                ("c", "Plenty of personal space", 3),
            ],
        ),
        question(
            17,
            Category::Relationship,
            "What is your love language?",
            &[
                ("a", "Words of affirmation", 2),
                ("b", "Quality time", 2),
                ("c", "Physical touch", 2),
                ("d", "Acts of service", 2),
                ("e", "Receiving gifts", 2),
            ],
        ),
        question(
            18,
            Category::Relationship,
            "How do you handle disagreements?",
            &[
                ("a", "Address them right away", 3),
                ("b", "Cool off, then talk", 2),
                ("c", "Avoid conflict when possible", 1),
            ],
        ),
        question(
            19,
            Category::Relationship,
            "How often do you like to communicate during the day?",
            &[
                ("a", "Constantly", 1),
                ("b", "A few check-ins", 2),
                ("c", "Catch up in the evening", 3),
            ],
        ),
        question(
            20,
            Category::Relationship,
            "What are you looking for right now?",
            &[
                ("a", "A long-term partnership", 1),
                ("b", "Something serious, taking it slow", 2),
                ("c", "Seeing where things go", 3),
            ],
        ),
        question(
            21,
            Category::Interests,
            "Which kind of music do you enjoy most?",
            &[
                ("a", "Pop and chart hits", 2),
                ("b", "Rock or indie", 3),
                ("c", "Classical or jazz", 1),
                ("d", "Electronic", 3),
            ],
        ),
        question(
            22,
            Category::Interests,
            "What is your ideal holiday?",
            &[
                ("a", "Adventure abroad", 3),
                ("b", "City break", 2),
                ("c", "Beach and relaxation", 1),
            ],
        ),
        question(
            23,
            Category::Interests,
            "How do you feel about cooking?",
            &[
                ("a", "I love experimenting in the kitchen", 3),
                ("b", "I cook the basics", 2),
                ("c", "Takeaway, please", 1),
            ],
        ),
        question(
            24,
            Category::Interests,
            "How much do you read?",
            &[
                ("a", "Constantly", 3),
                ("b", "A few books a year", 2),
                ("c", "Hardly at all", 1),
            ],
        ),
        question(
            25,
            Category::Interests,
            "How do you feel about pets?",
            &[
                ("a", "The more the better", 3),
                ("b", "One would be nice", 2),
                ("c", "I'd rather not", 1),
            ],
        ),
    ]
}
