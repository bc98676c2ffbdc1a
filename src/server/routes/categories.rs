use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    catalog::{self, CategoryMap, TriviaStore},
    models::Question,
    server::{
        error::ApiResponse,
        extract::AppPath,
    },
};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories<S: TriviaStore>(
    State(store): State<S>,
) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = catalog::list_categories(&store).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn get_category_questions<S: TriviaStore>(
    State(store): State<S>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    let found = catalog::questions_in_category(&store, id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: found.questions.len(),
        questions: found.questions,
        current_category: found.category,
    }))
}

pub fn category_router<S: TriviaStore>() -> Router<S> {
    Router::new()
        .route("/categories", get(get_categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(get_category_questions::<S>),
        )
}
