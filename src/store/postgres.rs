//! PostgreSQL-backed stores. Table DDL is applied at startup; atomicity and
//! isolation are delegated to PostgreSQL.

use crate::error::AppError;
use crate::model::{Beer, BeerStyle, Customer};
use crate::store::{BeerFilter, BeerStore, CustomerFilter, CustomerStore};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, PgPool, Postgres, QueryBuilder, Row};
use std::str::FromStr;
use uuid::Uuid;

const DEFAULT_LIMIT: u32 = 25;
const MAX_LIMIT: u32 = 1000;

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let path_start = database_url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no database path".into()))?
        + 1;
    let db_name = database_url[path_start..].split('?').next().unwrap_or("").trim();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let admin_url = format!("{}postgres", &database_url[..path_start]);
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {e}")))?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        let quoted = format!("\"{}\"", db_name.replace('"', "\"\""));
        sqlx::query(&format!("CREATE DATABASE {quoted}"))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Create the `beers` and `customers` tables if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS beers (
            id UUID PRIMARY KEY,
            version INTEGER NOT NULL,
            beer_name VARCHAR(50) NOT NULL,
            beer_style TEXT,
            upc TEXT,
            price DOUBLE PRECISION,
            quantity_on_hand INTEGER,
            created_date TIMESTAMPTZ NOT NULL,
            update_date TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY,
            version INTEGER NOT NULL,
            customer_name VARCHAR(100) NOT NULL,
            created_date TIMESTAMPTZ NOT NULL,
            last_modified_date TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub struct PostgresBeerStore {
    pool: PgPool,
}

impl PostgresBeerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn beer_from_row(row: &PgRow) -> Result<Beer, AppError> {
    let style: Option<String> = row.try_get("beer_style")?;
    Ok(Beer {
        id: row.try_get("id")?,
        version: row.try_get("version")?,
        beer_name: row.try_get("beer_name")?,
        beer_style: style.as_deref().and_then(|s| s.parse().ok()),
        upc: row.try_get("upc")?,
        price: row.try_get("price")?,
        quantity_on_hand: row.try_get("quantity_on_hand")?,
        created_date: row.try_get("created_date")?,
        update_date: row.try_get("update_date")?,
    })
}

#[async_trait]
impl BeerStore for PostgresBeerStore {
    async fn get(&self, id: Uuid) -> Result<Option<Beer>, AppError> {
        let row = sqlx::query(
            "SELECT id, version, beer_name, beer_style, upc, price, quantity_on_hand, \
             created_date, update_date FROM beers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(beer_from_row).transpose()
    }

    async fn put(&self, beer: Beer) -> Result<(), AppError> {
        // created_date is written once; conflicts keep the original value.
        sqlx::query(
            r#"
            INSERT INTO beers
                (id, version, beer_name, beer_style, upc, price, quantity_on_hand,
                 created_date, update_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                version = EXCLUDED.version,
                beer_name = EXCLUDED.beer_name,
                beer_style = EXCLUDED.beer_style,
                upc = EXCLUDED.upc,
                price = EXCLUDED.price,
                quantity_on_hand = EXCLUDED.quantity_on_hand,
                update_date = EXCLUDED.update_date
            "#,
        )
        .bind(beer.id)
        .bind(beer.version)
        .bind(beer.beer_name.as_str())
        .bind(beer.beer_style.map(BeerStyle::as_str))
        .bind(beer.upc.as_deref())
        .bind(beer.price)
        .bind(beer.quantity_on_hand)
        .bind(beer.created_date)
        .bind(beer.update_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM beers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &BeerFilter) -> Result<Vec<Beer>, AppError> {
        let limit = i64::from(filter.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT));
        let offset = i64::from(filter.offset.unwrap_or(0));
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, version, beer_name, beer_style, upc, price, quantity_on_hand, \
             created_date, update_date FROM beers WHERE 1=1",
        );
        if let Some(name) = &filter.beer_name {
            qb.push(" AND beer_name ILIKE ");
            qb.push_bind(format!("%{name}%"));
        }
        if let Some(style) = filter.beer_style {
            qb.push(" AND beer_style = ");
            qb.push_bind(style.as_str());
        }
        qb.push(" LIMIT ");
        qb.push_bind(limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);
        tracing::debug!(sql = %qb.sql(), "list beers");
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(beer_from_row).collect()
    }

    async fn count(&self) -> Result<u64, AppError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beers")
            .fetch_one(&self.pool)
            .await?;
        Ok(n as u64)
    }
}

pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn customer_from_row(row: &PgRow) -> Result<Customer, AppError> {
    Ok(Customer {
        id: row.try_get("id")?,
        version: row.try_get("version")?,
        customer_name: row.try_get("customer_name")?,
        created_date: row.try_get("created_date")?,
        last_modified_date: row.try_get("last_modified_date")?,
    })
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query(
            "SELECT id, version, customer_name, created_date, last_modified_date \
             FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(customer_from_row).transpose()
    }

    async fn put(&self, customer: Customer) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO customers
                (id, version, customer_name, created_date, last_modified_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                version = EXCLUDED.version,
                customer_name = EXCLUDED.customer_name,
                last_modified_date = EXCLUDED.last_modified_date
            "#,
        )
        .bind(customer.id)
        .bind(customer.version)
        .bind(customer.customer_name.as_str())
        .bind(customer.created_date)
        .bind(customer.last_modified_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, AppError> {
        let limit = i64::from(filter.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT));
        let offset = i64::from(filter.offset.unwrap_or(0));
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, version, customer_name, created_date, last_modified_date \
             FROM customers WHERE 1=1",
        );
        if let Some(name) = &filter.customer_name {
            qb.push(" AND customer_name ILIKE ");
            qb.push_bind(format!("%{name}%"));
        }
        qb.push(" LIMIT ");
        qb.push_bind(limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);
        tracing::debug!(sql = %qb.sql(), "list customers");
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(customer_from_row).collect()
    }

    async fn count(&self) -> Result<u64, AppError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(n as u64)
    }
}
