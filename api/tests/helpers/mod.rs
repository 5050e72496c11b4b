pub mod app;
pub mod photos;

pub use app::{get_json_body, make_test_app};
pub use photos::spawn_photo_server;
