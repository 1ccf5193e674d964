use crate::core::facade::{Catalog, HostelWardenService};
use crate::core::pricing::{PricingPolicy, MAX_MARKUP_PERCENT};
use crate::domain::model::{Item, ItemBox, Meal, Product};
use crate::domain::ports::HostelMess;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_required_field,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub pricing: PricingPolicy,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default = "default_showcases")]
    pub showcase: Vec<ShowcaseConfig>,
}

/// Either catalog may be omitted, in which case the built-in one is served.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub veg: Option<Catalog>,
    pub non_veg: Option<Catalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    pub label: String,
    pub item: Option<Item>,
}

impl ShowcaseConfig {
    pub fn new(label: impl Into<String>, item: impl Into<Item>) -> Self {
        Self {
            label: label.into(),
            item: Some(item.into()),
        }
    }
}

/// soap on its own, the toiletries box, then that box packed with a watch.
fn default_showcases() -> Vec<ShowcaseConfig> {
    let soap = Product::new("soap", 60);

    let mut toiletries = ItemBox::new();
    toiletries.add_item(soap.clone());
    toiletries.add_item(Product::new("handwash", 100));
    toiletries.add_item(Product::new("perfume", 250));

    let mut hamper = ItemBox::new();
    hamper.add_item(toiletries.clone());
    hamper.add_item(Product::new("watch", 2500));

    vec![
        ShowcaseConfig::new("soap", soap),
        ShowcaseConfig::new("toiletries", toiletries),
        ShowcaseConfig::new("hamper", hamper),
    ]
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            pricing: PricingPolicy::default(),
            menu: MenuConfig::default(),
            showcase: default_showcases(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn veg_catalog(&self) -> Catalog {
        self.menu.veg.clone().unwrap_or_else(Catalog::veg)
    }

    pub fn non_veg_catalog(&self) -> Catalog {
        self.menu.non_veg.clone().unwrap_or_else(Catalog::non_veg)
    }

    pub fn warden(&self) -> HostelWardenService {
        HostelWardenService::with_catalogs(self.veg_catalog(), self.non_veg_catalog())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "pricing.markup_percent",
            self.pricing.markup_percent,
            0,
            MAX_MARKUP_PERCENT,
        )?;

        for (name, catalog) in [("veg", &self.menu.veg), ("non_veg", &self.menu.non_veg)] {
            if let Some(catalog) = catalog {
                validate_catalog(&format!("menu.{}", name), catalog)?;
            }
        }

        for (index, showcase) in self.showcase.iter().enumerate() {
            let field = format!("showcase[{}]", index);
            validate_non_empty_string(&format!("{}.label", field), &showcase.label)?;
            let item = validate_required_field(&format!("{}.item", field), &showcase.item)?;
            validate_item(&format!("{}.item", field), item)?;
        }

        Ok(())
    }
}

fn validate_catalog(field: &str, catalog: &Catalog) -> Result<()> {
    for meal in Meal::ALL {
        let meal_field = format!("{}.{}", field, meal.to_string().to_lowercase());
        validate_non_empty_list(&meal_field, catalog.dishes(meal))?;
    }
    Ok(())
}

fn validate_item(field: &str, item: &Item) -> Result<()> {
    match item {
        Item::Product(product) => validate_non_empty_string(&format!("{}.name", field), &product.name),
        Item::Box(item_box) => item_box
            .items()
            .iter()
            .enumerate()
            .try_for_each(|(index, child)| validate_item(&format!("{}.items[{}]", field, index), child)),
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
