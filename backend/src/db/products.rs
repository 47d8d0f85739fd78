//! # Product Store
//!
//! Owns the `products` table: schema creation, first-start seeding, the
//! filtered read queries and the per-category aggregate served by
//! `GET /api/categories`.

use super::criteria::{provided, Predicate};
use super::{Database, StoreError};
use common::model::product::{Product, ProductCategory};
use log::info;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_PRODUCTS: &str = "SELECT id, name, description, price, original_price, rating, \
     reviews, image, category, in_stock FROM products";

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: f64,
    original_price: Option<f64>,
    rating: f64,
    reviews: u32,
    image: &'static str,
    category: &'static str,
    in_stock: bool,
}

const SEED: [SeedProduct; 8] = [
    SeedProduct {
        name: "Ashwagandha Capsules",
        description: "Organic ashwagandha root extract for stress relief and vitality",
        price: 24.99,
        original_price: Some(29.99),
        rating: 4.8,
        reviews: 342,
        image: "https://images.pexels.com/photos/3683074/pexels-photo-3683074.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Supplements",
        in_stock: true,
    },
    SeedProduct {
        name: "Triphala Powder",
        description: "Traditional three-fruit blend that supports gentle digestion",
        price: 18.5,
        original_price: None,
        rating: 4.7,
        reviews: 218,
        image: "https://images.pexels.com/photos/4198015/pexels-photo-4198015.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Herbal Powders",
        in_stock: true,
    },
    SeedProduct {
        name: "Neem Oil",
        description: "Cold-pressed neem oil for skin and scalp care",
        price: 15.99,
        original_price: None,
        rating: 4.5,
        reviews: 156,
        image: "https://images.pexels.com/photos/4041392/pexels-photo-4041392.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Oils",
        in_stock: false,
    },
    SeedProduct {
        name: "Sesame Oil",
        description: "Warming massage oil used for daily abhyanga self-massage",
        price: 12.99,
        original_price: Some(16.99),
        rating: 4.6,
        reviews: 189,
        image: "https://images.pexels.com/photos/4465831/pexels-photo-4465831.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Oils",
        in_stock: true,
    },
    SeedProduct {
        name: "Chyawanprash",
        description: "Herbal jam with amla to strengthen immunity",
        price: 21.0,
        original_price: None,
        rating: 4.9,
        reviews: 412,
        image: "https://images.pexels.com/photos/5946720/pexels-photo-5946720.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Supplements",
        in_stock: true,
    },
    SeedProduct {
        name: "Turmeric Golden Milk",
        description: "Turmeric, ginger and black pepper blend for a soothing evening drink",
        price: 14.25,
        original_price: None,
        rating: 4.4,
        reviews: 97,
        image: "https://images.pexels.com/photos/6545420/pexels-photo-6545420.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Teas",
        in_stock: true,
    },
    SeedProduct {
        name: "Brahmi Tablets",
        description: "Brahmi leaf tablets that support memory and focus",
        price: 19.75,
        original_price: Some(22.5),
        rating: 4.3,
        reviews: 64,
        image: "https://images.pexels.com/photos/3873146/pexels-photo-3873146.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Supplements",
        in_stock: false,
    },
    SeedProduct {
        name: "Tulsi Green Tea",
        description: "Holy basil and green tea leaves, caffeine light",
        price: 9.99,
        original_price: None,
        rating: 4.6,
        reviews: 131,
        image: "https://images.pexels.com/photos/1417945/pexels-photo-1417945.jpeg?auto=compress&cs=tinysrgb&w=400",
        category: "Teas",
        in_stock: true,
    },
];

/// Optional filters for `ProductStore::search`.
///
/// `query` matches either the name or the description. Absent or empty text
/// fields match everything; `in_stock_only` drops out-of-stock products when set.
#[derive(Debug, Clone, Default)]
pub struct ProductCriteria {
    pub category: Option<String>,
    pub query: Option<String>,
    pub in_stock_only: bool,
}

impl ProductCriteria {
    /// True when no criterion would narrow the result.
    pub fn is_empty(&self) -> bool {
        provided(self.category.as_deref()).is_none()
            && provided(self.query.as_deref()).is_none()
            && !self.in_stock_only
    }
}

#[derive(Debug, Clone)]
pub struct ProductStore {
    db: Database,
}

impl ProductStore {
    pub fn new(db: Database) -> Self {
        ProductStore { db }
    }

    /// Creates the table if needed and seeds it when empty. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let mut conn = self.db.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                original_price REAL,
                rating REAL NOT NULL,
                reviews INTEGER NOT NULL DEFAULT 0,
                image TEXT NOT NULL,
                category TEXT NOT NULL,
                in_stock INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }

        let tx = conn.transaction()?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO products
                    (name, description, price, original_price, rating, reviews, image,
                     category, in_stock)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for p in &SEED {
                insert.execute(params![
                    p.name,
                    p.description,
                    p.price,
                    p.original_price,
                    p.rating,
                    p.reviews,
                    p.image,
                    p.category,
                    p.in_stock,
                ])?;
            }
        }
        tx.commit()?;
        info!("Seeded {} products", SEED.len());
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.query(Predicate::new())
    }

    /// `Ok(None)` when no product has this id.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let conn = self.db.connect()?;
        let product = conn
            .query_row(
                &format!("{SELECT_PRODUCTS} WHERE id = ?1"),
                params![id],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }

    /// Products matching every provided criterion, case-insensitively.
    pub fn search(&self, criteria: &ProductCriteria) -> Result<Vec<Product>, StoreError> {
        self.query(
            Predicate::new()
                .contains("category", criteria.category.as_deref())
                .contains_any(&["name", "description"], criteria.query.as_deref())
                .is_true("in_stock", criteria.in_stock_only),
        )
    }

    /// One entry per distinct category, ordered by name.
    pub fn category_counts(&self) -> Result<Vec<ProductCategory>, StoreError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) FROM products GROUP BY category ORDER BY category ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ProductCategory {
                name: row.get(0)?,
                count: row.get(1)?,
            })
        })?;
        let categories = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn query(&self, predicate: Predicate) -> Result<Vec<Product>, StoreError> {
        let conn = self.db.connect()?;
        let sql = format!("{SELECT_PRODUCTS}{} ORDER BY id", predicate.where_clause());
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(predicate.params().as_slice(), product_from_row)?;
        let products = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        original_price: row.get(4)?,
        rating: row.get(5)?,
        reviews: row.get(6)?,
        image: row.get(7)?,
        category: row.get(8)?,
        in_stock: row.get(9)?,
    })
}
