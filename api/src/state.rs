use sea_orm::DatabaseConnection;
use services::StudentService;

/// Shared handles available to every handler: the database connection and
/// the student service built on top of it. Cloning is cheap, both members
/// are reference counted internally.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    students: StudentService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let students = StudentService::new(db.clone());
        Self { db, students }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }
}
