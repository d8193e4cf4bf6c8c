use diesel::prelude::*;

use crate::db::connection::{DbConnection, DbPool};
use crate::db::models::{NewProduct, ProductRow};
use crate::db::schema::products;
use crate::errors::Result;

/// Storage seam for the seeder and the catalog reader.
///
/// Calls are blocking; async callers should run them through `web::block`.
pub trait ProductStore: Send + Sync {
    fn insert_product(&self, product: &NewProduct) -> Result<()>;

    /// Returns up to `limit` rows starting at `offset`, in whatever order the
    /// store yields them.
    fn product_window(&self, limit: i64, offset: i64) -> Result<Vec<ProductRow>>;

    fn count_products(&self) -> Result<i64>;
}

#[derive(Clone)]
pub struct SqliteProductStore {
    pool: DbPool,
}

impl SqliteProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }
}

impl ProductStore for SqliteProductStore {
    fn insert_product(&self, product: &NewProduct) -> Result<()> {
        let conn = &mut self.conn()?;
        diesel::insert_into(products::table)
            .values(product)
            .execute(conn)?;
        Ok(())
    }

    fn product_window(&self, limit: i64, offset: i64) -> Result<Vec<ProductRow>> {
        let conn = &mut self.conn()?;
        // No ORDER BY: the listing follows the store's natural order.
        let rows = products::table
            .select(ProductRow::as_select())
            .limit(limit)
            .offset(offset)
            .load(conn)?;
        Ok(rows)
    }

    fn count_products(&self) -> Result<i64> {
        let conn = &mut self.conn()?;
        Ok(products::table.count().get_result(conn)?)
    }
}
