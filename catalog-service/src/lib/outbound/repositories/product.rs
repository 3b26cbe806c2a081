use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;

/// Postgres-backed product repository.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: PgRow) -> Result<Product, ProductError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let quantity: i32 = row
        .try_get("quantity")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let price: f64 = row
        .try_get("price")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let image: Option<String> = row
        .try_get("image")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

    Ok(Product {
        id: ProductId(id),
        name,
        quantity,
        price,
        image,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, quantity, price, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, quantity, price, image, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

        row.map(row_to_product).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, quantity, price, image, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, quantity = $3, price = $4, image = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Persistence(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
