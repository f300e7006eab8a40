use crate::connection::connect;
use crate::dao::Dao;
use crate::error::DbError;
use async_trait::async_trait;
use configuration::DatabaseSettings;
use core_types::Student;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

const INSERT_STUDENT: &str =
    "INSERT INTO Etudiant (nom, prenom, ville, sexe) VALUES ($1, $2, $3, $4)";

const SELECT_ALL_STUDENTS: &str = "SELECT * FROM Etudiant";

/// Represents a row fetched from the `Etudiant` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub ville: String,
    pub sexe: String,
}

impl StudentRecord {
    /// True when the four student fields match `student` exactly.
    pub fn matches(&self, student: &Student) -> bool {
        self.nom == student.nom
            && self.prenom == student.prenom
            && self.ville == student.ville
            && self.sexe == student.sexe
    }
}

/// Data access for the `Etudiant` table.
///
/// Holds a single connection handle, established when the service is built
/// and reused by every call. Driver failures are returned untouched as
/// [`DbError::Database`].
#[derive(Debug, Clone)]
pub struct StudentService {
    pool: PgPool,
}

impl StudentService {
    /// Creates a new `StudentService` on top of an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a fresh connection pool from `settings` and wraps it.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbError> {
        let pool = connect(settings).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Dao<Student> for StudentService {
    type Record = StudentRecord;

    async fn create(&self, student: &Student) -> Result<(), DbError> {
        sqlx::query(INSERT_STUDENT)
            .bind(student.nom())
            .bind(student.prenom())
            .bind(student.ville())
            .bind(student.sexe())
            .execute(&self.pool)
            .await?;

        tracing::debug!(nom = %student.nom, prenom = %student.prenom, "Student inserted.");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, DbError> {
        let students = sqlx::query_as::<_, StudentRecord>(SELECT_ALL_STUDENTS)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = students.len(), "Fetched all students.");
        Ok(students)
    }
}
