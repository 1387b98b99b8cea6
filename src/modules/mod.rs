//! Feature modules.
//!
//! - [`greetings`]: `GET /{name}`
//! - [`pages`]: Server-rendered HTML pages
//! - [`students`]: Student CRUD and the `StudentStore` port

pub mod greetings;
pub mod pages;
pub mod students;
