//! Question catalog operations.
//!
//! Everything here is generic over [`TriviaStore`], so the HTTP layer and the
//! tests never touch SQL directly. Errors are reported as [`CatalogError`] and
//! translated to status codes by the server.

mod quiz;

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

pub use quiz::{select_question, QuizScope};

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Category id to category name, serialized with stringified keys.
pub type CategoryMap = BTreeMap<i64, String>;

/// Storage the catalog needs: two entities, plain reads, one insert and one
/// delete.
#[async_trait]
pub trait TriviaStore: Clone + Send + Sync + 'static {
    async fn categories(&self) -> anyhow::Result<Vec<Category>>;
    async fn category(&self, id: i64) -> anyhow::Result<Option<Category>>;
    async fn count_questions(&self) -> anyhow::Result<i64>;
    /// Questions ordered by id, `limit` rows starting at `offset`.
    async fn questions_page(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Question>>;
    async fn questions(&self) -> anyhow::Result<Vec<Question>>;
    async fn questions_in_category(&self, category: i64) -> anyhow::Result<Vec<Question>>;
    async fn question(&self, id: i64) -> anyhow::Result<Option<Question>>;
    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> anyhow::Result<Vec<Question>>;
    async fn insert_question(&self, question: NewQuestion) -> anyhow::Result<i64>;
    /// Returns `false` if no row was removed.
    async fn delete_question(&self, id: i64) -> anyhow::Result<bool>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("category {0} does not exist")]
    CategoryNotFound(i64),
    #[error("question {0} does not exist")]
    QuestionNotFound(i64),
    #[error("page {0} is out of range")]
    PageOutOfRange(u32),
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("category {0} does not exist and cannot hold questions")]
    UnknownCategory(i64),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub struct QuestionsPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

#[derive(Debug)]
pub struct CategoryQuestions {
    pub category: i64,
    pub questions: Vec<Question>,
}

/// Raw creation input, every field possibly absent.
#[derive(Debug, Default, Clone)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl QuestionDraft {
    fn validate(self) -> CatalogResult<NewQuestion> {
        fn text(value: Option<String>, field: &'static str) -> CatalogResult<String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(CatalogError::MissingField(field)),
            }
        }
        Ok(NewQuestion {
            question: text(self.question, "question")?,
            answer: text(self.answer, "answer")?,
            category: self.category.ok_or(CatalogError::MissingField("category"))?,
            difficulty: self
                .difficulty
                .ok_or(CatalogError::MissingField("difficulty"))?,
        })
    }
}

/// `LIMIT`/`OFFSET` for a 1-indexed page; page 0 has no window.
fn page_window(page: u32) -> Option<(i64, i64)> {
    let index = i64::from(page.checked_sub(1)?);
    Some((QUESTIONS_PER_PAGE, index * QUESTIONS_PER_PAGE))
}

pub async fn list_categories<S: TriviaStore>(store: &S) -> CatalogResult<CategoryMap> {
    let categories = store.categories().await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

pub async fn questions_page<S: TriviaStore>(store: &S, page: u32) -> CatalogResult<QuestionsPage> {
    let (limit, offset) = page_window(page).ok_or(CatalogError::PageOutOfRange(page))?;
    let questions = store.questions_page(limit, offset).await?;
    if questions.is_empty() {
        return Err(CatalogError::PageOutOfRange(page));
    }
    Ok(QuestionsPage {
        questions,
        total_questions: store.count_questions().await?,
        categories: list_categories(store).await?,
    })
}

pub async fn questions_in_category<S: TriviaStore>(
    store: &S,
    category: i64,
) -> CatalogResult<CategoryQuestions> {
    if store.category(category).await?.is_none() {
        return Err(CatalogError::CategoryNotFound(category));
    }
    Ok(CategoryQuestions {
        category,
        questions: store.questions_in_category(category).await?,
    })
}

pub async fn create_question<S: TriviaStore>(store: &S, draft: QuestionDraft) -> CatalogResult<i64> {
    let question = draft.validate()?;
    if store.category(question.category).await?.is_none() {
        return Err(CatalogError::UnknownCategory(question.category));
    }
    let id = store.insert_question(question).await?;
    tracing::info!(id, "Question created");
    Ok(id)
}

pub async fn delete_question<S: TriviaStore>(store: &S, id: i64) -> CatalogResult<i64> {
    if store.question(id).await?.is_none() {
        return Err(CatalogError::QuestionNotFound(id));
    }
    // a concurrent delete may have won the race
    if !store.delete_question(id).await? {
        return Err(CatalogError::QuestionNotFound(id));
    }
    tracing::info!(id, "Question deleted");
    Ok(id)
}

pub async fn search_questions<S: TriviaStore>(store: &S, term: &str) -> CatalogResult<Vec<Question>> {
    Ok(store.search_questions(term).await?)
}

/// Next quiz question, or `None` once every candidate was asked.
pub async fn next_quiz_question<S: TriviaStore>(
    store: &S,
    scope: QuizScope,
    previous: &[i64],
) -> CatalogResult<Option<Question>> {
    let candidates = match scope {
        QuizScope::All => store.questions().await?,
        QuizScope::Category(id) => {
            if store.category(id).await?.is_none() {
                return Err(CatalogError::CategoryNotFound(id));
            }
            store.questions_in_category(id).await?
        }
    };
    let previous: HashSet<i64> = previous.iter().copied().collect();
    Ok(select_question(
        candidates,
        scope,
        &previous,
        &mut rand::thread_rng(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_is_one_indexed() {
        assert_eq!(page_window(0), None);
        assert_eq!(page_window(1), Some((10, 0)));
        assert_eq!(page_window(3), Some((10, 20)));
    }

    #[test]
    fn draft_requires_every_field() {
        let full = QuestionDraft {
            question: Some("Who painted the Mona Lisa?".to_owned()),
            answer: Some("Leonardo da Vinci".to_owned()),
            category: Some(2),
            difficulty: Some(3),
        };
        assert!(full.clone().validate().is_ok());

        let blank_answer = QuestionDraft {
            answer: Some("   ".to_owned()),
            ..full.clone()
        };
        assert!(matches!(
            blank_answer.validate(),
            Err(CatalogError::MissingField("answer"))
        ));

        let no_difficulty = QuestionDraft {
            difficulty: None,
            ..full
        };
        assert!(matches!(
            no_difficulty.validate(),
            Err(CatalogError::MissingField("difficulty"))
        ));
    }
}
