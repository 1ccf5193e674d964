pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{DemoKind, DemoRunner};
pub use config::toml_config::TomlConfig;
pub use crate::core::facade::{Catalog, HostelWardenService};
pub use crate::core::pricing::{PricingPolicy, Rounding};
pub use crate::core::{HostelMess, HostelWarden, Item, ItemBox, Product, Sellable};
pub use utils::error::{DemoError, Result};
