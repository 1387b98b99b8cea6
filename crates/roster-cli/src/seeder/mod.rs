//! Fake data generation for local databases.

mod students;

pub use students::{
    clear_students, generate_students, insert_students_batch, list_students, seed_students,
};

pub type SeedResult<T> = Result<T, Box<dyn std::error::Error>>;
