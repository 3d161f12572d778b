#![allow(dead_code)]

use aethera_db::models::project::CreateProject;
use aethera_db::{DbPool, Store};

/// A migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = aethera_db::create_memory_pool().await.unwrap();
    aethera_db::run_migrations(&pool).await.unwrap();
    pool
}

/// A store over a fresh database, holding the seed data.
pub async fn test_store() -> Store {
    Store::open(test_pool().await).await.unwrap()
}

pub fn new_project(title: &str, goal: f64) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        summary: "Rooftop array".to_string(),
        location: "Austin, TX".to_string(),
        funding_goal: goal,
        documents: vec!["Site_Assessment.pdf".to_string()],
    }
}
