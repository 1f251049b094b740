use std::time::Duration;

use crate::models::Account;
use sqlx::{postgres::PgPoolOptions, PgPool, Result};

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> sqlx::PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
        .expect("Could not connect to the database")
}

pub struct PostgresDatabase {
    sqlx_db: PgPool,
}

impl PostgresDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgresDatabase { sqlx_db }
    }

    /// Ensure the account table exists. The table is created by the running
    /// process, so queries use the runtime API rather than compile-time
    /// checked macros.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id SERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                balance BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.sqlx_db)
        .await?;
        Ok(())
    }

    /// Fetch all accounts, in no particular order
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, balance, created_at, updated_at
            FROM accounts
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;
        Ok(rows)
    }

    /// Get an account by ID
    pub async fn get_account_by_id(&self, id: i32) -> Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, balance, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// Create a new account; timestamps are stamped by the database
    pub async fn create_account(&self, new_account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, balance)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, balance, created_at, updated_at
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(new_account.balance)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// Overwrite an account wholesale, restamping `updated_at`
    pub async fn update_account(&self, account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET first_name = $1,
                last_name = $2,
                balance = $3,
                updated_at = now()
            WHERE id = $4
            RETURNING id, first_name, last_name, balance, created_at, updated_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.balance)
        .bind(account.id)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// Delete an account row, returning the number of rows removed
    pub async fn delete_account(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        Ok(result.rows_affected())
    }
}
