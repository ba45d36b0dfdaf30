use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::query::{ProductPage, ProductQuery, StatusFilter};
use business::domain::product::repository::{ExportClaim, ProductRepository};
use business::domain::product::value_objects::AbcClass;
use business::domain::shared::value_objects::Sku;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};

/// ABC rank first, then estimated daily loss, highest first.
fn listing_order() -> String {
    let ranks: String = [AbcClass::A, AbcClass::B, AbcClass::C]
        .iter()
        .map(|class| format!(" WHEN '{}' THEN {}", class, class.rank()))
        .collect();
    format!(
        " ORDER BY CASE abc_margin{} ELSE {} END, current_price * 0.05 * (sales_qty / 365.0) DESC, sku",
        ranks,
        AbcClass::N.rank()
    )
}

const UPSERT_PRODUCT: &str = r#"INSERT INTO products (sku, name, stock, cost_price, current_price, sales_qty, abc_margin, margin_total, source_status, new_price, status, batch_id, manual_flag, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
    ON CONFLICT (sku) DO UPDATE SET
        name = EXCLUDED.name,
        stock = EXCLUDED.stock,
        cost_price = EXCLUDED.cost_price,
        current_price = EXCLUDED.current_price,
        sales_qty = EXCLUDED.sales_qty,
        abc_margin = EXCLUDED.abc_margin,
        margin_total = EXCLUDED.margin_total,
        source_status = EXCLUDED.source_status,
        new_price = EXCLUDED.new_price,
        status = EXCLUDED.status,
        batch_id = EXCLUDED.batch_id,
        manual_flag = EXCLUDED.manual_flag,
        updated_at = EXCLUDED.updated_at"#;

fn claim_statement() -> String {
    format!(
        "UPDATE products SET status = 'exported', batch_id = $1, updated_at = NOW() WHERE status = 'approved' RETURNING {}",
        PRODUCT_COLUMNS
    )
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {}", e);
    RepositoryError::DatabaseError
}

/// Escapes LIKE wildcards so search terms match literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ProductQuery) {
    builder.push(" WHERE 1=1");

    if let StatusFilter::Only(status) = query.status {
        builder.push(" AND status = ");
        builder.push_bind(status.to_string());
    }

    for term in query.terms() {
        let pattern = format!("%{}%", escape_like(&term));
        builder.push(" AND (LOWER(sku) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR LOWER(name) LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

fn upsert<'q>(
    product: &'q Product,
) -> sqlx::query::Query<'q, Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(UPSERT_PRODUCT)
        .bind(product.sku.as_str())
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.cost_price)
        .bind(product.current_price)
        .bind(product.sales_qty)
        .bind(product.abc_margin.to_string())
        .bind(product.margin_total)
        .bind(&product.source_status)
        .bind(product.new_price)
        .bind(product.status.to_string())
        .bind(product.batch_id)
        .bind(product.manual_flag)
        .bind(product.updated_at)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count, query);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM products",
            PRODUCT_COLUMNS
        ));
        push_filters(&mut select, query);
        select.push(listing_order());
        select.push(" LIMIT ");
        select.push_bind(i64::from(query.limit));
        select.push(" OFFSET ");
        select.push_bind(query.offset() as i64);

        let entities = select
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(ProductPage {
            products: entities.into_iter().map(|e| e.into_domain()).collect(),
            total: total.max(0) as u64,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY sku",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_sku(&self, sku: &Sku) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE sku = $1",
            PRODUCT_COLUMNS
        ))
        .bind(sku.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        upsert(product)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query("DELETE FROM products")
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        for product in products {
            upsert(product)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;
        Ok(())
    }

    async fn claim_approved(&self, batch_id: i64) -> Result<Box<dyn ExportClaim>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let entities = sqlx::query_as::<_, ProductEntity>(&claim_statement())
            .bind(batch_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(database_error)?;

        let mut products: Vec<Product> = entities.into_iter().map(|e| e.into_domain()).collect();
        products.sort_by(|a, b| a.sku.as_str().cmp(b.sku.as_str()));

        Ok(Box::new(PostgresExportClaim { tx, products }))
    }
}

/// Rows updated by [`claim_statement`], held in an open transaction.
/// Concurrent claims wait on the row locks and then skip the rows.
struct PostgresExportClaim {
    tx: Transaction<'static, Postgres>,
    products: Vec<Product>,
}

#[async_trait]
impl ExportClaim for PostgresExportClaim {
    fn products(&self) -> &[Product] {
        &self.products
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let Self { tx, .. } = *self;
        tx.commit().await.map_err(database_error)
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        let Self { tx, .. } = *self;
        tx.rollback().await.map_err(database_error)
    }
}
