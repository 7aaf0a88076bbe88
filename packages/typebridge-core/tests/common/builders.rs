//! Builders for test entities

use super::fixtures::{Category, Item};
use chrono::NaiveDate;

pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            item: Item {
                name: name.to_string(),
                price: 0,
                category: None,
                released: None,
            },
        }
    }

    pub fn price(mut self, price: i64) -> Self {
        self.item.price = price;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.item.category = Some(category);
        self
    }

    pub fn released(mut self, released: NaiveDate) -> Self {
        self.item.released = Some(released);
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

pub fn item(name: &str, price: i64) -> Item {
    ItemBuilder::new(name).price(price).build()
}

/// One item per category, priced 100 * code
pub fn catalogue() -> Vec<Item> {
    [Category::Opera, Category::Oratorio, Category::Symphonic, Category::Chamber]
        .into_iter()
        .map(|c| {
            ItemBuilder::new(&format!("{c:?}").to_lowercase())
                .price(100 * i64::from(c.code()))
                .category(c)
                .build()
        })
        .collect()
}
