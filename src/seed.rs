use fake::faker::name::en::FirstName;
use fake::Fake;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::db::models::NewProduct;
use crate::db::repository::ProductStore;
use crate::errors::Result;
use crate::models::Category;

pub const MIN_PRICE: f64 = 100.0;
pub const PRICE_SPAN: f64 = 900.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SeedProduct {
    pub category: Category,
    pub product: NewProduct,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub requested: u32,
    pub inserted: u32,
    pub failed: u32,
}

pub fn describe(category: Category) -> String {
    format!(
        "Discover our premium-quality {} for all your needs.",
        category
    )
}

pub fn image_url(category: Category) -> String {
    format!("https://source.unsplash.com/200x200/?{}", category)
}

/// Builds one synthetic product; the price lands in `[100, 1000)`.
pub fn generate_product<R: Rng + ?Sized>(rng: &mut R) -> SeedProduct {
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let first_name: String = FirstName().fake_with_rng(rng);

    SeedProduct {
        category,
        product: NewProduct {
            name: format!("{} {}", category, first_name),
            description: describe(category),
            price: rng.gen::<f64>() * PRICE_SPAN + MIN_PRICE,
            image_url: image_url(category),
        },
    }
}

/// Inserts `count` synthetic products one row at a time.
///
/// Seeding is best effort: a failed insert is logged and skipped. The only
/// error returned is a store that cannot be reached before the first insert.
/// Nothing prevents a second call from appending another `count` rows.
#[instrument(name = "seed::products", skip(store, rng))]
pub fn seed<S, R>(store: &S, count: u32, rng: &mut R) -> Result<SeedReport>
where
    S: ProductStore + ?Sized,
    R: Rng + ?Sized,
{
    let rows_before = store.count_products()?;
    let mut report = SeedReport {
        requested: count,
        ..SeedReport::default()
    };

    for i in 1..=count {
        let SeedProduct { product, .. } = generate_product(rng);
        match store.insert_product(&product) {
            Ok(()) => {
                report.inserted += 1;
                debug!(index = i, name = %product.name, "Inserted product");
            }
            Err(e) => {
                report.failed += 1;
                warn!(index = i, error = %e, "Error inserting product");
            }
        }
    }

    info!(
        rows_before,
        inserted = report.inserted,
        failed = report.failed,
        "Seeding completed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::init_pool;
    use crate::db::models::ProductRow;
    use crate::db::repository::SqliteProductStore;
    use crate::errors::AppError;
    use crate::settings::DatabaseSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn memory_store() -> SqliteProductStore {
        let pool = init_pool(&DatabaseSettings {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout_seconds: 5,
        })
        .unwrap();
        SqliteProductStore::new(pool)
    }

    // Fails every `every`-th insert and forwards the rest.
    struct FlakyStore {
        inner: SqliteProductStore,
        every: u32,
        calls: AtomicU32,
    }

    impl ProductStore for FlakyStore {
        fn insert_product(&self, product: &NewProduct) -> Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call % self.every == 0 {
                return Err(AppError::Database(diesel::result::Error::RollbackTransaction));
            }
            self.inner.insert_product(product)
        }

        fn product_window(&self, limit: i64, offset: i64) -> Result<Vec<ProductRow>> {
            self.inner.product_window(limit, offset)
        }

        fn count_products(&self) -> Result<i64> {
            self.inner.count_products()
        }
    }

    struct UnreachableStore;

    impl ProductStore for UnreachableStore {
        fn insert_product(&self, _: &NewProduct) -> Result<()> {
            unreachable!("insert must not be attempted")
        }

        fn product_window(&self, _: i64, _: i64) -> Result<Vec<ProductRow>> {
            Ok(Vec::new())
        }

        fn count_products(&self) -> Result<i64> {
            Err(AppError::Database(diesel::result::Error::BrokenTransactionManager))
        }
    }

    #[test]
    fn test_generated_products_follow_templates() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let SeedProduct { category, product } = generate_product(&mut rng);
            assert!(Category::ALL.contains(&category));
            assert!(product.name.starts_with(&format!("{} ", category)));
            assert!(product.name.len() > category.label().len() + 1);
            assert!(product.description.contains(category.label()));
            assert!(product.image_url.ends_with(&format!("?{}", category)));
            assert!(product.price >= 100.0 && product.price < 1000.0);
        }
    }

    #[test]
    fn test_every_category_is_drawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let drawn: std::collections::HashSet<Category> =
            (0..300).map(|_| generate_product(&mut rng).category).collect();
        assert_eq!(drawn.len(), Category::ALL.len());
    }

    #[test]
    fn test_seed_adds_exactly_count_rows() {
        let store = memory_store();
        let mut rng = StdRng::seed_from_u64(1);

        let report = seed(&store, 60, &mut rng).unwrap();
        assert_eq!(report, SeedReport { requested: 60, inserted: 60, failed: 0 });
        assert_eq!(store.count_products().unwrap(), 60);
    }

    #[test]
    fn test_seed_is_not_idempotent() {
        let store = memory_store();
        let mut rng = StdRng::seed_from_u64(2);

        seed(&store, 10, &mut rng).unwrap();
        seed(&store, 10, &mut rng).unwrap();
        assert_eq!(store.count_products().unwrap(), 20);
    }

    #[test]
    fn test_failed_inserts_are_skipped() {
        let store = FlakyStore {
            inner: memory_store(),
            every: 4,
            calls: AtomicU32::new(0),
        };
        let mut rng = StdRng::seed_from_u64(3);

        let report = seed(&store, 20, &mut rng).unwrap();
        assert_eq!(report.failed, 5);
        assert_eq!(report.inserted, 15);
        assert_eq!(store.count_products().unwrap(), 15);
    }

    #[test]
    fn test_unreachable_store_aborts_before_inserting() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(seed(&UnreachableStore, 5, &mut rng).is_err());
    }
}
