use std::time::Instant;

use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;
use rayon::prelude::*;
use roster_models::{Student, StudentInput};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use super::SeedResult;

const BATCH_SIZE: usize = 500;

fn random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Generates valid student records in parallel using Rayon
pub fn generate_students(count: usize) -> Vec<StudentInput> {
    (0..count)
        .into_par_iter()
        .map(|_| StudentInput::new(Name().fake::<String>(), random_digits(11), random_digits(9)))
        .collect()
}

/// Seeds `count` fake students in a single transaction
pub async fn seed_students(db: &PgPool, count: usize) -> SeedResult<Vec<i64>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);
    let ids = insert_students_batch(db, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    info!(count = ids.len(), "Seeded students");

    Ok(ids)
}

/// Inserts students with multi-value INSERT statements
pub async fn insert_students_batch(db: &PgPool, students: &[StudentInput]) -> SeedResult<Vec<i64>> {
    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(students.len());

    for chunk in students.chunks(BATCH_SIZE) {
        all_ids.extend(insert_students_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentInput],
) -> SeedResult<Vec<i64>> {
    if students.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO students (name, cpf, rg) VALUES ");
    for i in 0..students.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 3;
        query.push_str(&format!("(${}, ${}, ${})", base + 1, base + 2, base + 3));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for student in students {
        q = q.bind(&student.name).bind(&student.cpf).bind(&student.rg);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

/// Soft-deletes every live student
pub async fn clear_students(db: &PgPool) -> SeedResult<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing students...");

    let affected = sqlx::query(
        "UPDATE students SET deleted_at = NOW(), updated_at = NOW() WHERE deleted_at IS NULL",
    )
    .execute(db)
    .await?
    .rows_affected();

    println!(
        "   ✓ Deleted {} students in {:?}",
        affected,
        start_time.elapsed()
    );

    Ok(affected)
}

pub async fn list_students(db: &PgPool) -> SeedResult<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>(
        "SELECT id, created_at, updated_at, deleted_at, name, cpf, rg
         FROM students
         WHERE deleted_at IS NULL
         ORDER BY id",
    )
    .fetch_all(db)
    .await?;

    Ok(students)
}
