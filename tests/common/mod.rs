#![allow(dead_code)]

use axum::Router;
use jobs_api::{
    auth::create_token,
    config::{Config, DatabaseConfig},
    database::Database,
    repositories::JobRepository,
    web::{AppState, WebServer},
};

/// Seeded jobs, inserted in this order so ids ascend with the titles
pub const SEED_JOBS: [(&str, Option<i64>, Option<&str>); 4] = [
    ("j1", Some(10000), Some("0.1")),
    ("j2", Some(20000), Some("0.2")),
    ("j3", Some(30000), Some("0")),
    ("j4", None, None),
];

pub struct TestContext {
    pub config: Config,
    pub database: Database,
    pub job_ids: Vec<i64>,
}

impl TestContext {
    pub async fn new() -> Self {
        let mut config = Config::default();
        config.database = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        };
        config.auth.secret_key = "test-secret".to_string();

        let database = Database::new(&config.database).await.unwrap();
        database.migrate().await.unwrap();
        let job_ids = seed(&database).await;

        Self {
            config,
            database,
            job_ids,
        }
    }

    pub fn repository(&self) -> JobRepository {
        JobRepository::new(self.database.pool())
    }

    pub fn router(&self) -> Router {
        WebServer::create_router(AppState::new(self.config.clone(), self.database.clone()))
    }

    pub fn admin_token(&self) -> String {
        create_token("admin", true, &self.config.auth).unwrap()
    }

    pub fn user_token(&self) -> String {
        create_token("u1", false, &self.config.auth).unwrap()
    }
}

async fn seed(database: &Database) -> Vec<i64> {
    let pool = database.pool();

    for handle in ["c1", "c2", "c3"] {
        sqlx::query(
            "INSERT INTO companies (handle, name, num_employees, description, logo_url)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(handle)
        .bind(handle.to_uppercase())
        .bind(1_i64)
        .bind(format!("Desc {handle}"))
        .bind(format!("http://{handle}.img"))
        .execute(&pool)
        .await
        .unwrap();
    }

    let mut ids = Vec::new();
    for (title, salary, equity) in SEED_JOBS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO jobs (title, salary, equity, company_handle)
             VALUES ($1, $2, $3, 'c1')
             RETURNING id",
        )
        .bind(title)
        .bind(salary)
        .bind(equity)
        .fetch_one(&pool)
        .await
        .unwrap();
        ids.push(id);
    }
    ids
}
