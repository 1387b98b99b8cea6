//! # Roster CLI
//!
//! Database seeding utilities for Roster testing and development.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_cli::seeder::seed_students;
//!
//! seed_students(&pool, 100).await?;
//! ```

pub mod seeder;
