#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use trivia_api::db::{self, queries::questions::create_question, NewQuestion};

pub const TOTAL_SEEDED: i64 = 15;

// (question, answer, category, difficulty); categories 1..=6 come from the seed migration
const SEED: [(&str, &str, i64, i64); 15] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
];

/// Migrated in-memory database with only the seeded categories.
pub async fn create_test_pool() -> SqlitePool {
    // a single connection, otherwise every connection opens its own in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Inserts the sample questions and returns their ids in insertion order.
pub async fn seed_questions(pool: &SqlitePool) -> Vec<i64> {
    let mut ids = Vec::new();
    for (question, answer, category, difficulty) in SEED {
        let new_question = NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        };
        ids.push(
            create_question(pool, &new_question)
                .await
                .expect("failed to seed question"),
        );
    }
    ids
}

pub async fn create_seeded_pool() -> (SqlitePool, Vec<i64>) {
    let pool = create_test_pool().await;
    let ids = seed_questions(&pool).await;
    (pool, ids)
}
