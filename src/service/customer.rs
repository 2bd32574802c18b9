//! Customer record operations over the persistence gateway.

use crate::error::AppError;
use crate::model::{CreateCustomer, CustomerDto, NewCustomer, UpdateCustomer};
use crate::store::CustomerStore;
use chrono::Utc;
use uuid::Uuid;

pub struct CustomerService;

impl CustomerService {
    /// All customers in transfer shape. Empty vec when the table is empty.
    pub async fn list_all(store: &dyn CustomerStore) -> Result<Vec<CustomerDto>, AppError> {
        let rows = store.list_all().await?;
        Ok(rows.into_iter().map(CustomerDto::from).collect())
    }

    /// One customer by id, or None when absent.
    pub async fn get_by_id(
        store: &dyn CustomerStore,
        id: i32,
    ) -> Result<Option<CustomerDto>, AppError> {
        let row = store.find_by_id(id).await?;
        Ok(row.map(CustomerDto::from))
    }

    /// Persist a new customer: fresh row_guid, modified_date = now, id
    /// assigned by the store. Returns the created record.
    pub async fn create(
        store: &dyn CustomerStore,
        input: CreateCustomer,
    ) -> Result<CustomerDto, AppError> {
        let new = NewCustomer::from_input(input, Uuid::new_v4(), Utc::now());
        let created = store.insert(&new).await?;
        Ok(created.into())
    }

    /// Read-modify-write update. Fetches the current row, applies the
    /// payload (empty password fields keep the stored values), writes the
    /// new row once. None when the id does not exist.
    pub async fn update(
        store: &dyn CustomerStore,
        id: i32,
        input: UpdateCustomer,
    ) -> Result<Option<CustomerDto>, AppError> {
        let current = match store.find_by_id(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };
        let next = current.with_update(&input, Utc::now());
        let updated = store.update(&next).await?;
        Ok(updated.map(CustomerDto::from))
    }

    /// Hard delete. False when the id does not exist.
    pub async fn delete(store: &dyn CustomerStore, id: i32) -> Result<bool, AppError> {
        store.delete(id).await
    }

    /// Existence probe; never fetches the full row.
    pub async fn exists(store: &dyn CustomerStore, id: i32) -> Result<bool, AppError> {
        store.exists(id).await
    }
}
