//! Customer table DDL and the PostgreSQL-backed store. The table lives in a
//! schema named from `CUSTOMER_SCHEMA` env (default `saleslt`).

use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Schema name for the customer table. From env `CUSTOMER_SCHEMA`, default
/// `saleslt`. Must be a valid PostgreSQL identifier.
pub fn customer_schema() -> String {
    std::env::var("CUSTOMER_SCHEMA").unwrap_or_else(|_| "saleslt".into())
}

/// Schema-qualified customer table name (e.g. "saleslt.customer").
pub fn qualified_customer_table() -> String {
    format!("{}.customer", customer_schema())
}

const COLUMNS: &str = "customer_id, name_style, title, first_name, middle_name, last_name, \
     suffix, company_name, sales_person, email_address, phone, \
     password_hash, password_salt, row_guid, modified_date";

/// Persistence gateway for customer rows. Every mutation is a single-row,
/// single-statement write.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError>;
    /// None (not an error) when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError>;
    /// Returns the created row with the store-generated id populated.
    async fn insert(&self, new: &NewCustomer) -> Result<Customer, AppError>;
    /// Full-row write keyed by customer_id. None when the row is gone.
    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, AppError>;
    /// True iff a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
    /// Existence check only; does not fetch the row.
    async fn exists(&self, id: i32) -> Result<bool, AppError>;
}

pub struct PgCustomerStore {
    pool: PgPool,
    table: String,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerStore {
            pool,
            table: qualified_customer_table(),
        }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY customer_id", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("list_all", None, e))?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE customer_id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("find_by_id", Some(id), e))?;
        Ok(row)
    }

    async fn insert(&self, new: &NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {} (name_style, title, first_name, middle_name, last_name, \
             suffix, company_name, sales_person, email_address, phone, \
             password_hash, password_salt, row_guid, modified_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(new.name_style)
            .bind(&new.title)
            .bind(&new.first_name)
            .bind(&new.middle_name)
            .bind(&new.last_name)
            .bind(&new.suffix)
            .bind(&new.company_name)
            .bind(&new.sales_person)
            .bind(&new.email_address)
            .bind(&new.phone)
            .bind(&new.password_hash)
            .bind(&new.password_salt)
            .bind(new.row_guid)
            .bind(new.modified_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("insert", None, e))?;
        Ok(row)
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, AppError> {
        let sql = format!(
            "UPDATE {} SET name_style = $1, title = $2, first_name = $3, \
             middle_name = $4, last_name = $5, suffix = $6, company_name = $7, \
             sales_person = $8, email_address = $9, phone = $10, \
             password_hash = $11, password_salt = $12, modified_date = $13 \
             WHERE customer_id = $14 RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, id = customer.customer_id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(customer.name_style)
            .bind(&customer.title)
            .bind(&customer.first_name)
            .bind(&customer.middle_name)
            .bind(&customer.last_name)
            .bind(&customer.suffix)
            .bind(&customer.company_name)
            .bind(&customer.sales_person)
            .bind(&customer.email_address)
            .bind(&customer.phone)
            .bind(&customer.password_hash)
            .bind(&customer.password_salt)
            .bind(customer.modified_date)
            .bind(customer.customer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("update", Some(customer.customer_id), e))?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE customer_id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("delete", Some(id), e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE customer_id = $1)",
            self.table
        );
        tracing::debug!(sql = %sql, id, "query");
        let exists: (bool,) = sqlx::query_as(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("exists", Some(id), e))?;
        Ok(exists.0)
    }
}

/// Error-log a failed query with its operation name (and id when the
/// operation targets one row) before handing the error up.
fn query_failed(operation: &'static str, id: Option<i32>, e: sqlx::Error) -> AppError {
    match id {
        Some(id) => tracing::error!(operation, id, error = %e, "query failed"),
        None => tracing::error!(operation, error = %e, "query failed"),
    }
    AppError::Db(e)
}

/// Create the schema from `CUSTOMER_SCHEMA` env if not exists, then the
/// customer table. row_guid uniqueness is enforced here.
pub async fn ensure_customer_table(pool: &PgPool) -> Result<(), AppError> {
    let schema = customer_schema();
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema))
        .execute(pool)
        .await?;

    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            customer_id SERIAL PRIMARY KEY,
            name_style BOOLEAN NOT NULL DEFAULT FALSE,
            title VARCHAR(8),
            first_name VARCHAR(50) NOT NULL,
            middle_name VARCHAR(50),
            last_name VARCHAR(50) NOT NULL,
            suffix VARCHAR(10),
            company_name VARCHAR(128),
            sales_person VARCHAR(256),
            email_address VARCHAR(50),
            phone VARCHAR(25),
            password_hash VARCHAR(128) NOT NULL,
            password_salt VARCHAR(10) NOT NULL,
            row_guid UUID NOT NULL UNIQUE,
            modified_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        qualified_customer_table()
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Db(sqlx::Error::Configuration("DATABASE_URL: no path".into())))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
