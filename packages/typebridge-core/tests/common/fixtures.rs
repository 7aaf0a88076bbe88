//! Test fixtures

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use typebridge_core::{enumerated, Entity, Enumerated, IdentifierRegistry, PropertyAccess, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Opera,
    Oratorio,
    Symphonic,
    Chamber,
}

enumerated!(Category {
    Opera => "OPERA",
    Oratorio => "ORATORIO",
    Symphonic => "SYMPHONIC",
    Chamber => "CHAMBER",
});

impl Category {
    pub fn code(&self) -> i32 {
        match self {
            Category::Opera => 1,
            Category::Oratorio => 2,
            Category::Symphonic => 3,
            Category::Chamber => 4,
        }
    }
}

/// Registry keyed by storage code
pub static BY_CODE: Lazy<IdentifierRegistry<Category, i32>> = Lazy::new(|| {
    IdentifierRegistry::with_fallback(Category::values(), Category::code, Some(Category::Opera))
        .expect("category codes are unique")
});

/// Registry keyed by declared name
pub static BY_NAME: Lazy<IdentifierRegistry<Category, String>> =
    Lazy::new(|| IdentifierRegistry::by_name().expect("category names are unique"));

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: i64,
    pub category: Option<Category>,
    pub released: Option<NaiveDate>,
}

impl PropertyAccess for Item {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::from(self.name.as_str())),
            "price" => Some(Value::from(self.price)),
            "category" => Some(Value::from(BY_CODE.to_id(self.category.as_ref()))),
            "released" => Some(Value::from(self.released)),
            _ => None,
        }
    }
}

impl Entity for Item {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDto {
    pub name: String,
    pub price: i64,
}

pub fn copy_item(item: &Item, dto: &mut ItemDto) {
    dto.name = item.name.clone();
    dto.price = item.price;
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
