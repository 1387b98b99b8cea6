//! In-memory student store.
//!
//! Mirrors the PostgreSQL store's semantics (sequential ids starting at 1,
//! soft deletion, lowest-id CPF match) without any I/O, which makes it the
//! backing store for router tests and `STORE_BACKEND=memory` runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use roster_models::{Student, StudentInput};
use tokio::sync::RwLock;

use super::{StoreResult, StudentStore};

#[derive(Clone, Default)]
pub struct MemoryStudentStore {
    data: Arc<RwLock<MemoryData>>,
}

#[derive(Default)]
struct MemoryData {
    students: BTreeMap<i64, Student>,
    last_id: i64,
}

impl MemoryData {
    fn live(&self, id: i64) -> Option<&Student> {
        self.students.get(&id).filter(|s| s.deleted_at.is_none())
    }
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> StoreResult<Vec<Student>> {
        let data = self.data.read().await;
        Ok(data
            .students
            .values()
            .filter(|s| s.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, input: &StudentInput) -> StoreResult<Student> {
        let mut data = self.data.write().await;
        data.last_id += 1;

        let now = Utc::now();
        let student = Student {
            id: data.last_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            name: input.name.clone(),
            cpf: input.cpf.clone(),
            rg: input.rg.clone(),
        };
        data.students.insert(student.id, student.clone());

        Ok(student)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>> {
        let data = self.data.read().await;
        Ok(data.live(id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Student>> {
        let data = self.data.read().await;
        Ok(data
            .students
            .values()
            .find(|s| s.deleted_at.is_none() && s.cpf == cpf)
            .cloned())
    }

    async fn update(&self, id: i64, input: &StudentInput) -> StoreResult<Option<Student>> {
        let mut data = self.data.write().await;
        if data.live(id).is_none() {
            return Ok(None);
        }

        let updated = data.students.get_mut(&id).map(|student| {
            student.name = input.name.clone();
            student.cpf = input.cpf.clone();
            student.rg = input.rg.clone();
            student.updated_at = Utc::now();
            student.clone()
        });

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        match data.students.get_mut(&id) {
            Some(student) if student.deleted_at.is_none() => {
                student.deleted_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn migrate(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bogus() -> StudentInput {
        StudentInput::new("Bogus", "00100200309", "050060075")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStudentStore::new();
        let first = store.create(&bogus()).await.unwrap();
        let second = store.create(&bogus()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let store = MemoryStudentStore::new();
        let student = store.create(&bogus()).await.unwrap();

        assert!(store.delete(student.id).await.unwrap());
        assert!(!store.delete(student.id).await.unwrap());
        assert!(store.find_by_id(student.id).await.unwrap().is_none());
        assert!(store.find_by_cpf("00100200309").await.unwrap().is_none());
        assert!(store.update(student.id, &bogus()).await.unwrap().is_none());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStudentStore::new();
        let first = store.create(&bogus()).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(&bogus()).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_find_by_cpf_returns_lowest_id() {
        let store = MemoryStudentStore::new();
        let first = store.create(&bogus()).await.unwrap();
        store.create(&bogus()).await.unwrap();

        let found = store.find_by_cpf("00100200309").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.find_by_cpf("001.002.003-09").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = MemoryStudentStore::new();
        let student = store.create(&bogus()).await.unwrap();

        let input = StudentInput::new("Bogus Junior", "00100200309", "050060075");
        let updated = store.update(student.id, &input).await.unwrap().unwrap();

        assert_eq!(updated.id, student.id);
        assert_eq!(updated.created_at, student.created_at);
        assert_eq!(updated.name, "Bogus Junior");
        assert!(updated.updated_at >= student.updated_at);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let store = MemoryStudentStore::new();
        for name in ["C", "A", "B"] {
            store
                .create(&StudentInput::new(name, "00100200309", "050060075"))
                .await
                .unwrap();
        }
        let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
