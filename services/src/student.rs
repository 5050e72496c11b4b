use chrono::Utc;
use db::models::student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::error::StudentError;
use crate::normalize::{normalize, FieldKind};
use crate::photo;

/// Fields of a registration request, already validated at the boundary.
#[derive(Debug, Clone)]
pub struct RegisterStudent {
    pub matricula: String,
    pub name: String,
    pub photo: String,
    pub attendance: i32,
}

/// Optional search filters. `attendance` is accepted for compatibility with
/// existing clients but is not used as a predicate.
#[derive(Debug, Clone, Default)]
pub struct SearchStudents {
    pub matricula: Option<String>,
    pub name: Option<String>,
    pub attendance: Option<i32>,
}

/// Partial update keyed by matricula; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub matricula: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub attendance: Option<i32>,
}

/// Business operations over student records: canonicalizes input, ingests
/// photos by URL and talks to the store. Handlers reach it through the
/// shared application state.
#[derive(Clone)]
pub struct StudentService {
    db: DatabaseConnection,
    http: reqwest::Client,
}

impl StudentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            http: reqwest::Client::new(),
        }
    }

    /// Registers a new student. The photo is fetched and stored as base64;
    /// a duplicate matricula surfaces as `AlreadyRegistered`.
    pub async fn register(
        &self,
        data: RegisterStudent,
    ) -> Result<student::Model, StudentError> {
        let matricula = normalize(&data.matricula, FieldKind::Matricula);
        let name = normalize(&data.name, FieldKind::Name);
        let photo = photo::fetch_and_encode(&self.http, &data.photo).await?;

        let now = Utc::now();
        let row = student::ActiveModel {
            matricula: Set(matricula.clone()),
            name: Set(name),
            photo: Set(photo),
            attendance: Set(data.attendance),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match row.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(StudentError::AlreadyRegistered { matricula })
                }
                _ => Err(StudentError::Db(err)),
            },
        }
    }

    /// Returns the first record matching every present filter, or `None`.
    /// Text filters are normalized and matched as substrings.
    pub async fn search(
        &self,
        filters: SearchStudents,
    ) -> Result<Option<student::Model>, StudentError> {
        let mut condition = Condition::all();
        if let Some(matricula) = &filters.matricula {
            condition = condition.add(
                student::Column::Matricula.contains(normalize(matricula, FieldKind::Matricula)),
            );
        }
        if let Some(name) = &filters.name {
            condition =
                condition.add(student::Column::Name.contains(normalize(name, FieldKind::Name)));
        }

        student::Entity::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(StudentError::Db)
    }

    /// Applies the present fields to the record with the given matricula.
    /// The photo is fetched first, so a bad photo URL is reported even when
    /// the record does not exist.
    pub async fn update(&self, data: UpdateStudent) -> Result<student::Model, StudentError> {
        let matricula = normalize(&data.matricula, FieldKind::Matricula);

        let photo = match &data.photo {
            Some(url) => Some(photo::fetch_and_encode(&self.http, url).await?),
            None => None,
        };

        let existing = student::Model::find_by_matricula(&self.db, &matricula)
            .await?
            .ok_or_else(|| StudentError::NotFound { matricula })?;

        let mut row: student::ActiveModel = existing.into();
        if let Some(name) = data.name {
            row.name = Set(normalize(&name, FieldKind::Name));
        }
        if let Some(photo) = photo {
            row.photo = Set(photo);
        }
        if let Some(attendance) = data.attendance {
            row.attendance = Set(attendance);
        }
        row.updated_at = Set(Utc::now());

        row.update(&self.db).await.map_err(StudentError::Db)
    }

    /// Deletes the record with the given matricula, returning its last
    /// stored state.
    pub async fn remove(&self, matricula: &str) -> Result<student::Model, StudentError> {
        let matricula = normalize(matricula, FieldKind::Matricula);

        let existing = student::Model::find_by_matricula(&self.db, &matricula)
            .await?
            .ok_or_else(|| StudentError::NotFound { matricula })?;

        student::Entity::delete_by_id(existing.id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
