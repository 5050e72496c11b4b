pub mod m202309180001_create_students;
