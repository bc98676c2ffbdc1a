use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, CategoryMap, QuestionDraft, TriviaStore},
    models::Question,
    server::{
        deserializers::LenientI64,
        error::ApiResponse,
        extract::{AppJson, AppPath, AppQuery},
    },
};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

// POST /questions is either a search or a creation, depending on the payload
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionsBody {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Create(NewQuestionBody),
}

#[derive(Deserialize)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<LenientI64>,
    difficulty: Option<LenientI64>,
}

impl From<NewQuestionBody> for QuestionDraft {
    fn from(body: NewQuestionBody) -> Self {
        QuestionDraft {
            question: body.question,
            answer: body.answer,
            category: body.category.map(|v| v.0),
            difficulty: body.difficulty.map(|v| v.0),
        }
    }
}

#[derive(Serialize)]
struct QuestionsPageResponse {
    success: bool,
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: i64,
    categories: CategoryMap,
    current_category: Option<i64>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuestionsPostResponse {
    Created {
        success: bool,
    },
    Found {
        questions: Vec<Question>,
        total_questions: usize,
    },
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

async fn get_questions<S: TriviaStore>(
    State(store): State<S>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsPageResponse>> {
    let page = catalog::questions_page(&store, query.page.unwrap_or(1)).await?;
    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: None,
    }))
}

async fn post_questions<S: TriviaStore>(
    State(store): State<S>,
    AppJson(body): AppJson<QuestionsBody>,
) -> ApiResponse<Json<QuestionsPostResponse>> {
    match body {
        QuestionsBody::Search { search_term } => {
            let questions = catalog::search_questions(&store, &search_term).await?;
            tracing::debug!(term = %search_term, matches = questions.len(), "Search");
            Ok(Json(QuestionsPostResponse::Found {
                total_questions: questions.len(),
                questions,
            }))
        }
        QuestionsBody::Create(new_question) => {
            catalog::create_question(&store, new_question.into()).await?;
            Ok(Json(QuestionsPostResponse::Created { success: true }))
        }
    }
}

async fn delete_question<S: TriviaStore>(
    State(store): State<S>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Json<DeletedResponse>> {
    let deleted = catalog::delete_question(&store, id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

pub fn questions_router<S: TriviaStore>() -> Router<S> {
    Router::new()
        .route(
            "/questions",
            get(get_questions::<S>).post(post_questions::<S>),
        )
        .route("/questions/{id}", delete(delete_question::<S>))
}
