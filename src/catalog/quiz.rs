use std::collections::HashSet;

use rand::Rng;

use crate::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    /// Category id 0 stands for "all categories".
    pub fn from_category_id(id: i64) -> Self {
        if id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }

    fn contains(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}

/// Drops out-of-scope and already asked questions, then picks one of the
/// rest uniformly.
pub fn select_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    scope: QuizScope,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| scope.contains(q) && !previous.contains(&q.id))
        .collect();
    if remaining.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(idx))
}
