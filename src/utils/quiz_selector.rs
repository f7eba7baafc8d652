//! Picks the next quiz question for a caller-tracked session.
//!
//! The server keeps no session state: every call carries the ids the player
//! has already seen, and the selector only ever draws from the rest.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::question::Question;

/// Category filter of a quiz. Id 0 on the wire means "all categories".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(i64),
}

impl QuizCategory {
    pub fn from_id(id: i64) -> Self {
        if id == 0 { QuizCategory::All } else { QuizCategory::Only(id) }
    }

    pub fn id(&self) -> i64 {
        match self {
            QuizCategory::All => 0,
            QuizCategory::Only(id) => *id,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuizCategory::All => true,
            QuizCategory::Only(id) => question.category == *id,
        }
    }
}

/// Result of a successful selection.
#[derive(Debug)]
pub enum QuizOutcome {
    /// A question was drawn. `unseen` holds every unseen question of the
    /// category (the drawn one included) for progress display.
    Active { question: Question, unseen: Vec<Question> },
    /// Every question of the category has been seen.
    Exhausted,
}

#[derive(Debug, PartialEq, Eq)]
pub enum QuizError {
    CategoryNotFound(i64),
    NoQuestionsForCategory(i64),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::CategoryNotFound(_) => write!(f, "This category doesn't exist"),
            QuizError::NoQuestionsForCategory(_) => {
                write!(f, "There are no questions for this category.")
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Draws one unseen question uniformly at random.
///
/// * `questions` - the whole question pool; filtered here by `category`.
/// * `known_categories` - ids present in the category table, used to tell
///   an unknown category apart from an empty one.
/// * `previous` - ids already served in this session.
pub fn select_question<R: Rng + ?Sized>(
    questions: Vec<Question>,
    category: QuizCategory,
    known_categories: &[i64],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Result<QuizOutcome, QuizError> {
    let in_category: Vec<Question> = questions
        .into_iter()
        .filter(|q| category.matches(q))
        .collect();

    if in_category.is_empty() {
        return match category {
            QuizCategory::Only(id) if !known_categories.contains(&id) => {
                Err(QuizError::CategoryNotFound(id))
            }
            _ => Err(QuizError::NoQuestionsForCategory(category.id())),
        };
    }

    let unseen: Vec<Question> = in_category
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => Ok(QuizOutcome::Active {
            question: question.clone(),
            unseen,
        }),
        None => Ok(QuizOutcome::Exhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: "42".to_string(),
            category,
            difficulty: 1,
        }
    }

    fn pool() -> Vec<Question> {
        let mut questions = Vec::new();
        for id in 1..=12 {
            questions.push(question(id, (id % 3) + 1));
        }
        questions
    }

    const CATEGORIES: [i64; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn growing_session_never_repeats_and_ends_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = HashSet::new();
        let expected: HashSet<i64> = pool()
            .iter()
            .filter(|q| q.category == 2)
            .map(|q| q.id)
            .collect();

        loop {
            match select_question(pool(), QuizCategory::Only(2), &CATEGORIES, &previous, &mut rng)
                .unwrap()
            {
                QuizOutcome::Active { question, unseen } => {
                    assert_eq!(question.category, 2);
                    assert!(unseen.iter().any(|q| q.id == question.id));
                    assert!(previous.insert(question.id), "id {} served twice", question.id);
                }
                QuizOutcome::Exhausted => break,
            }
        }

        assert_eq!(previous, expected);
    }

    #[test]
    fn category_zero_draws_from_every_category() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut previous = HashSet::new();
        while let QuizOutcome::Active { question, .. } =
            select_question(pool(), QuizCategory::from_id(0), &CATEGORIES, &previous, &mut rng)
                .unwrap()
        {
            previous.insert(question.id);
        }
        assert_eq!(previous.len(), pool().len());
    }

    #[test]
    fn draws_are_spread_across_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let previous = HashSet::new();
        let mut counts: HashMap<i64, usize> = HashMap::new();

        for _ in 0..4000 {
            if let QuizOutcome::Active { question, .. } =
                select_question(pool(), QuizCategory::Only(1), &CATEGORIES, &previous, &mut rng)
                    .unwrap()
            {
                *counts.entry(question.id).or_default() += 1;
            }
        }

        // four candidates, expected ~1000 each
        assert_eq!(counts.len(), 4);
        for (id, n) in counts {
            assert!((800..1200).contains(&n), "question {id} drawn {n} times");
        }
    }

    #[test]
    fn seen_everything_is_exhausted_not_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous: HashSet<i64> = pool().iter().map(|q| q.id).collect();
        let outcome =
            select_question(pool(), QuizCategory::Only(3), &CATEGORIES, &previous, &mut rng);
        assert!(matches!(outcome, Ok(QuizOutcome::Exhausted)));
    }

    #[test]
    fn unknown_category_is_distinguished_from_empty_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous = HashSet::new();

        let unknown = select_question(pool(), QuizCategory::Only(99), &CATEGORIES, &previous, &mut rng);
        assert_eq!(unknown.unwrap_err(), QuizError::CategoryNotFound(99));

        let empty = select_question(pool(), QuizCategory::Only(5), &CATEGORIES, &previous, &mut rng);
        assert_eq!(empty.unwrap_err(), QuizError::NoQuestionsForCategory(5));

        let nothing = select_question(Vec::new(), QuizCategory::All, &CATEGORIES, &previous, &mut rng);
        assert_eq!(nothing.unwrap_err(), QuizError::NoQuestionsForCategory(0));
    }
}
