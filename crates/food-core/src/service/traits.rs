//! Service Layer - Core Trait
//!
//! CRUD over food records. `?Send` because browser futures are not `Send`.

use async_trait::async_trait;

use crate::domain::{FoodId, FoodRecord, NewFood, ServiceResult};

#[async_trait(?Send)]
pub trait FoodService {
    /// GET /foods
    async fn list(&self) -> ServiceResult<Vec<FoodRecord>>;

    /// POST /foods, returns the record with its assigned ID
    async fn create(&self, food: &NewFood) -> ServiceResult<FoodRecord>;

    /// PUT /foods/{id} with the full record
    async fn update(&self, food: &FoodRecord) -> ServiceResult<FoodRecord>;

    /// DELETE /foods/{id}
    async fn delete(&self, id: FoodId) -> ServiceResult<()>;
}

#[async_trait(?Send)]
impl<S: FoodService + ?Sized> FoodService for std::rc::Rc<S> {
    async fn list(&self) -> ServiceResult<Vec<FoodRecord>> {
        (**self).list().await
    }

    async fn create(&self, food: &NewFood) -> ServiceResult<FoodRecord> {
        (**self).create(food).await
    }

    async fn update(&self, food: &FoodRecord) -> ServiceResult<FoodRecord> {
        (**self).update(food).await
    }

    async fn delete(&self, id: FoodId) -> ServiceResult<()> {
        (**self).delete(id).await
    }
}
