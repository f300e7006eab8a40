use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use core_types::Student;
use database::{Dao, DbError, StudentRecord};
use serde_json::Value;
use std::sync::Mutex;
use tower::ServiceExt;
use web_server::{create_router, AppState};

/// Keeps rows in memory and hands out sequential ids, like a SERIAL column.
#[derive(Default)]
struct MemoryStudents {
    rows: Mutex<Vec<StudentRecord>>,
}

#[async_trait]
impl Dao<Student> for MemoryStudents {
    type Record = StudentRecord;

    async fn create(&self, student: &Student) -> Result<(), DbError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(StudentRecord {
            id,
            nom: student.nom.clone(),
            prenom: student.prenom.clone(),
            ville: student.ville.clone(),
            sexe: student.sexe.clone(),
        });
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, DbError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Fails every call the way an unreachable database would.
struct UnreachableStudents;

#[async_trait]
impl Dao<Student> for UnreachableStudents {
    type Record = StudentRecord;

    async fn create(&self, _student: &Student) -> Result<(), DbError> {
        Err(DbError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, DbError> {
        Err(DbError::Database(sqlx::Error::PoolTimedOut))
    }
}

fn post_student(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/etudiants")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn get_students() -> Request<Body> {
    Request::builder()
        .uri("/api/etudiants")
        .body(Body::empty())
        .unwrap()
}

async fn json_body(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(AppState::new(MemoryStudents::default()));

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_on_empty_store() {
    let app = create_router(AppState::new(MemoryStudents::default()));

    let (status, body) = json_body(app, get_students()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_create_then_list() {
    let app = create_router(AppState::new(MemoryStudents::default()));

    let response = app
        .clone()
        .oneshot(post_student(
            r#"{"nom":"Diallo","prenom":"Awa","ville":"Dakar","sexe":"F"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (status, body) = json_body(app, get_students()).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nom"], "Diallo");
    assert_eq!(rows[0]["prenom"], "Awa");
    assert_eq!(rows[0]["ville"], "Dakar");
    assert_eq!(rows[0]["sexe"], "F");
    assert_eq!(rows[0]["id"], 1);
}

#[tokio::test]
async fn test_duplicate_posts_are_both_kept() {
    let app = create_router(AppState::new(MemoryStudents::default()));
    let json = r#"{"nom":"Ndiaye","prenom":"Moussa","ville":"Thiès","sexe":"M"}"#;

    for _ in 0..2 {
        let response = app.clone().oneshot(post_student(json)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let (_, body) = json_body(app, get_students()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_body_never_reaches_the_store() {
    let app = create_router(AppState::new(MemoryStudents::default()));

    let response = app
        .clone()
        .oneshot(post_student(r#"{"nom":"Diallo"}"#))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let (_, body) = json_body(app, get_students()).await;
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_database_failure_is_internal_error() {
    let app = create_router(AppState::new(UnreachableStudents));

    let (status, body) = json_body(app.clone(), get_students()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal database error occurred");

    let response = app
        .oneshot(post_student(
            r#"{"nom":"Diallo","prenom":"Awa","ville":"Dakar","sexe":"F"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
