pub mod error;
pub mod normalize;
pub mod photo;
pub mod student;

pub use error::StudentError;
pub use student::StudentService;
