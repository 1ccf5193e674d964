use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf of the pricing tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub retail_price: u32,
}

/// Composite node. Children are owned, so a box can never end up inside itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBox {
    #[serde(default)]
    pub(crate) items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Product(Product),
    Box(ItemBox),
}

impl From<Product> for Item {
    fn from(product: Product) -> Self {
        Item::Product(product)
    }
}

impl From<ItemBox> for Item {
    fn from(item_box: ItemBox) -> Self {
        Item::Box(item_box)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Veg,
    NonVeg,
}

impl MenuKind {
    pub fn header(&self) -> &'static str {
        match self {
            MenuKind::Veg => "----VEG MENU----",
            MenuKind::NonVeg => "----NON-VEG MENU----",
        }
    }
}

/// Serializable summary of one priced item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub label: String,
    pub names: Vec<String>,
    pub selling_price: u64,
}
