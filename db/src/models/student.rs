use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents a student of the Information Systems programme in the
/// `students` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Auto-incremented surrogate key.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Institutional identifier in canonical uppercase form. Unique.
    #[sea_orm(unique)]
    pub matricula: String,
    /// Display name in canonical title-cased form.
    pub name: String,
    /// Profile photo, base64 of the fetched image bytes.
    #[sea_orm(column_type = "Text")]
    pub photo: String,
    /// Attendance counter.
    pub attendance: i32,
    /// Timestamp when the record was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Students relate to nothing else in the schema.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("students table has no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Looks up a student by canonical matricula.
    pub async fn find_by_matricula(
        db: &DbConn,
        matricula: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Matricula.eq(matricula))
            .one(db)
            .await
    }
}
