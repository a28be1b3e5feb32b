//! HTTP Food Service
//!
//! reqwest client for the `/foods` REST resource.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::traits::FoodService;
use crate::config::ClientConfig;
use crate::domain::{FoodId, FoodRecord, NewFood, ServiceError, ServiceResult};

#[derive(Debug, Clone)]
pub struct HttpFoodService {
    client: Client,
    api_base: String,
}

impl HttpFoodService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
        }
    }

    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.api_base)
    }

    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}/foods/{}", self.api_base, id)
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

/// Turn non-2xx responses into `ServiceError::Status`, keeping the body
async fn check_status(response: Response) -> ServiceResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status { status: status.as_u16(), body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl FoodService for HttpFoodService {
    async fn list(&self) -> ServiceResult<Vec<FoodRecord>> {
        let response = self.client.get(self.foods_url()).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, food: &NewFood) -> ServiceResult<FoodRecord> {
        let response = self
            .client
            .post(self.foods_url())
            .json(food)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn update(&self, food: &FoodRecord) -> ServiceResult<FoodRecord> {
        let response = self
            .client
            .put(self.food_url(food.id))
            .json(food)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: FoodId) -> ServiceResult<()> {
        let response = self
            .client
            .delete(self.food_url(id))
            .send()
            .await
            .map_err(transport)?;
        // Body is ignored
        check_status(response).await.map(|_| ())
    }
}
