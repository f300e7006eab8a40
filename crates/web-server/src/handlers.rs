use crate::{error::AppError, AppState};
use axum::{extract::State, http::StatusCode, Json};
use core_types::Student;
use database::StudentRecord;
use std::sync::Arc;

/// # GET /api/etudiants
/// Every stored student, in database order.
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentRecord>>, AppError> {
    let students = state.students.find_all().await?;
    Ok(Json(students))
}

/// # POST /api/etudiants
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(student): Json<Student>,
) -> Result<StatusCode, AppError> {
    state.students.create(&student).await?;
    tracing::info!(nom = %student.nom, prenom = %student.prenom, "Student created.");
    Ok(StatusCode::CREATED)
}
