mod common;

use common::TestContext;
use jobs_api::{
    errors::AppError,
    models::{Job, JobFilter, JobUpdate, NewJob},
    repositories::Repository,
};

fn new_job() -> NewJob {
    NewJob {
        title: "new".to_string(),
        salary: Some(100000),
        equity: Some("0.1".to_string()),
        company_handle: "c1".to_string(),
    }
}

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.title.as_str()).collect()
}

#[tokio::test]
async fn test_create_job() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    let job = repo.create(new_job()).await.unwrap();
    assert_eq!(job.title, "new");
    assert_eq!(job.salary, Some(100000));
    assert_eq!(job.equity.as_deref(), Some("0.1"));
    assert_eq!(job.company_handle, "c1");
    assert!(!ctx.job_ids.contains(&job.id));

    let row: (String, Option<i64>, Option<String>, String) = sqlx::query_as(
        "SELECT title, salary, equity, company_handle FROM jobs WHERE title = 'new'",
    )
    .fetch_one(&ctx.database.pool())
    .await
    .unwrap();
    assert_eq!(
        row,
        (
            "new".to_string(),
            Some(100000),
            Some("0.1".to_string()),
            "c1".to_string()
        )
    );
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    repo.create(new_job()).await.unwrap();
    let err = repo.create(new_job()).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_create_for_unknown_company_is_bad_request() {
    let ctx = TestContext::new().await;
    let job = NewJob {
        company_handle: "nope".to_string(),
        ..new_job()
    };

    let err = ctx.repository().create(job).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_find_all_without_filter() {
    let ctx = TestContext::new().await;
    let jobs = ctx.repository().find_all(JobFilter::new()).await.unwrap();

    assert_eq!(titles(&jobs), vec!["j1", "j2", "j3", "j4"]);
    assert_eq!(jobs[2].equity.as_deref(), Some("0"));
    assert_eq!(jobs[3].salary, None);
    assert_eq!(jobs[3].equity, None);
    assert!(jobs.iter().all(|job| job.company_handle == "c1"));
}

#[tokio::test]
async fn test_find_all_by_title() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    let jobs = repo.find_all(JobFilter::new().title("j1")).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1"]);

    // case-insensitive substring
    let jobs = repo.find_all(JobFilter::new().title("J")).await.unwrap();
    assert_eq!(jobs.len(), 4);

    let jobs = repo.find_all(JobFilter::new().title("zzz")).await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_find_all_by_title_non_ascii() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();
    let job = NewJob {
        title: "ÉCOLE Teacher".to_string(),
        ..new_job()
    };
    repo.create(job).await.unwrap();

    for needle in ["ÉCOLE", "école", "École teacher", "ÉCOLE Teacher"] {
        let jobs = repo.find_all(JobFilter::new().title(needle)).await.unwrap();
        assert_eq!(titles(&jobs), vec!["ÉCOLE Teacher"], "search {needle:?}");
    }

    let jobs = repo
        .find_all(JobFilter::new().title("école").min_salary(200000))
        .await
        .unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_find_all_by_min_salary() {
    let ctx = TestContext::new().await;
    let jobs = ctx
        .repository()
        .find_all(JobFilter::new().min_salary(20000))
        .await
        .unwrap();

    assert_eq!(titles(&jobs), vec!["j2", "j3"]);
}

#[tokio::test]
async fn test_find_all_with_equity() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    let jobs = repo.find_all(JobFilter::new().has_equity(true)).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1", "j2"]);

    let jobs = repo.find_all(JobFilter::new().has_equity(false)).await.unwrap();
    assert_eq!(jobs.len(), 4);
}

#[tokio::test]
async fn test_find_all_with_combined_filters() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    let all = JobFilter::new().title("j1").min_salary(10000).has_equity(true);
    assert_eq!(titles(&repo.find_all(all).await.unwrap()), vec!["j1"]);

    let some = JobFilter::new().title("j1").has_equity(true);
    assert_eq!(titles(&repo.find_all(some).await.unwrap()), vec!["j1"]);

    let none = JobFilter::new().title("j3").has_equity(true);
    assert!(repo.find_all(none).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_job() {
    let ctx = TestContext::new().await;
    let job = ctx.repository().get(ctx.job_ids[0]).await.unwrap();

    assert_eq!(
        job,
        Job {
            id: ctx.job_ids[0],
            title: "j1".to_string(),
            salary: Some(10000),
            equity: Some("0.1".to_string()),
            company_handle: "c1".to_string(),
        }
    );
}

#[tokio::test]
async fn test_get_missing_job_is_not_found() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();

    let err = repo.get(0).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
    assert!(repo.find_by_id(0).await.unwrap().is_none());
    assert!(!repo.exists(0).await.unwrap());
}

#[tokio::test]
async fn test_update_job() {
    let ctx = TestContext::new().await;
    let id = ctx.job_ids[0];
    let update = JobUpdate {
        title: Some("New".to_string()),
        salary: Some(Some(100000)),
        equity: Some(Some("0.1".to_string())),
    };

    let job = ctx.repository().update(id, update).await.unwrap();
    let expected = Job {
        id,
        title: "New".to_string(),
        salary: Some(100000),
        equity: Some("0.1".to_string()),
        company_handle: "c1".to_string(),
    };
    assert_eq!(job, expected);
    assert_eq!(ctx.repository().get(id).await.unwrap(), expected);
}

#[tokio::test]
async fn test_update_sets_nulls() {
    let ctx = TestContext::new().await;
    let id = ctx.job_ids[0];
    let update = JobUpdate {
        title: Some("New".to_string()),
        salary: Some(None),
        equity: Some(None),
    };

    let job = ctx.repository().update(id, update).await.unwrap();
    assert_eq!(job.title, "New");
    assert_eq!(job.salary, None);
    assert_eq!(job.equity, None);
    assert_eq!(job.company_handle, "c1");
}

#[tokio::test]
async fn test_update_leaves_absent_fields_untouched() {
    let ctx = TestContext::new().await;
    let id = ctx.job_ids[1];
    let update = JobUpdate {
        salary: Some(Some(25000)),
        ..JobUpdate::default()
    };

    let job = ctx.repository().update(id, update).await.unwrap();
    assert_eq!(job.title, "j2");
    assert_eq!(job.salary, Some(25000));
    assert_eq!(job.equity.as_deref(), Some("0.2"));
}

#[tokio::test]
async fn test_update_missing_job_is_not_found() {
    let ctx = TestContext::new().await;
    let update = JobUpdate {
        title: Some("New".to_string()),
        ..JobUpdate::default()
    };

    let err = ctx.repository().update(0, update).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_without_data_is_bad_request() {
    let ctx = TestContext::new().await;
    let err = ctx
        .repository()
        .update(ctx.job_ids[0], JobUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest { .. }));
}

#[tokio::test]
async fn test_delete_job() {
    let ctx = TestContext::new().await;
    let repo = ctx.repository();
    let id = ctx.job_ids[0];

    repo.delete(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    let err = repo.delete(id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_deleting_company_removes_its_jobs() {
    let ctx = TestContext::new().await;
    sqlx::query("DELETE FROM companies WHERE handle = 'c1'")
        .execute(&ctx.database.pool())
        .await
        .unwrap();

    let jobs = ctx.repository().find_all(JobFilter::new()).await.unwrap();
    assert!(jobs.is_empty());
}
