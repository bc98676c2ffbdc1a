use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, QuizScope, TriviaStore},
    models::Question,
    server::{
        deserializers::{deserialize_present, CategorySelector},
        error::{ApiError, ApiResponse},
        extract::AppJson,
    },
    telemetry::{QUIZ_FINISHED_CNTR, QUIZ_QUESTIONS_CNTR},
};

#[derive(Deserialize)]
struct QuizRequest {
    // null selects every category, absence is an error
    #[serde(default, deserialize_with = "deserialize_present")]
    quiz_category: Option<Option<CategorySelector>>,
    previous_questions: Option<Vec<i64>>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

fn scope_label(scope: QuizScope) -> String {
    match scope {
        QuizScope::All => "all".to_owned(),
        QuizScope::Category(id) => id.to_string(),
    }
}

async fn next_question<S: TriviaStore>(
    State(store): State<S>,
    AppJson(request): AppJson<QuizRequest>,
) -> ApiResponse<Json<QuizResponse>> {
    let Some(category) = request.quiz_category else {
        return Err(ApiError::BadRequest("quiz_category is required".to_owned()));
    };
    let Some(previous) = request.previous_questions else {
        return Err(ApiError::BadRequest(
            "previous_questions is required".to_owned(),
        ));
    };
    let scope = category
        .map(|c| QuizScope::from_category_id(c.id()))
        .unwrap_or(QuizScope::All);

    let question = catalog::next_quiz_question(&store, scope, &previous).await?;
    let label = scope_label(scope);
    match &question {
        Some(q) => {
            tracing::debug!(id = q.id, category = %label, asked = previous.len(), "Quiz question");
            QUIZ_QUESTIONS_CNTR.with_label_values(&[label.as_str()]).inc();
        }
        None => {
            tracing::debug!(category = %label, asked = previous.len(), "Quiz finished");
            QUIZ_FINISHED_CNTR.with_label_values(&[label.as_str()]).inc();
        }
    }
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router<S: TriviaStore>() -> Router<S> {
    Router::new().route("/quizzes", post(next_question::<S>))
}
