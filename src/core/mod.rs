pub mod composite;
pub mod facade;
pub mod pricing;

pub use crate::domain::model::{Item, ItemBox, ItemReport, Meal, MenuKind, Product};
pub use crate::domain::ports::{HostelMess, HostelWarden, Sellable};
pub use crate::utils::error::Result;
