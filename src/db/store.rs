use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::catalog::TriviaStore;
use crate::models::{Category, NewQuestion, Question};

use super::queries::{categories, questions};

#[async_trait]
impl TriviaStore for SqlitePool {
    async fn categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(categories::get_all_categories(self).await?)
    }

    async fn category(&self, id: i64) -> anyhow::Result<Option<Category>> {
        Ok(categories::find_category(self, id).await?)
    }

    async fn count_questions(&self) -> anyhow::Result<i64> {
        Ok(questions::count_questions(self).await?)
    }

    async fn questions_page(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Question>> {
        Ok(questions::get_questions_page(self, limit, offset).await?)
    }

    async fn questions(&self) -> anyhow::Result<Vec<Question>> {
        Ok(questions::get_all_questions(self).await?)
    }

    async fn questions_in_category(&self, category: i64) -> anyhow::Result<Vec<Question>> {
        Ok(questions::get_questions_for_category(self, category).await?)
    }

    async fn question(&self, id: i64) -> anyhow::Result<Option<Question>> {
        Ok(questions::find_question(self, id).await?)
    }

    async fn search_questions(&self, term: &str) -> anyhow::Result<Vec<Question>> {
        Ok(questions::search_questions(self, term).await?)
    }

    async fn insert_question(&self, question: NewQuestion) -> anyhow::Result<i64> {
        Ok(questions::create_question(self, &question).await?)
    }

    async fn delete_question(&self, id: i64) -> anyhow::Result<bool> {
        Ok(questions::delete_question(self, id).await?)
    }
}
