use crate::core::pricing::PricingPolicy;
use crate::domain::model::{Meal, MenuKind};
use crate::utils::error::Result;
use std::io::Write;

/// Uniform query surface shared by leaves and composites.
///
/// Only the policy-aware price and the name list are required; everything
/// else is derived from them.
pub trait Sellable {
    fn selling_price_with(&self, policy: &PricingPolicy) -> u64;

    fn name_list(&self) -> Vec<String>;

    fn selling_price(&self) -> u64 {
        self.selling_price_with(&PricingPolicy::default())
    }

    fn describe_with(&self, policy: &PricingPolicy) -> String {
        format!(
            "Price for item list: [{}] is Rs.{}",
            self.name_list().join(", "),
            self.selling_price_with(policy)
        )
    }

    fn describe(&self) -> String {
        self.describe_with(&PricingPolicy::default())
    }

    fn show_item_details_with(&self, out: &mut dyn Write, policy: &PricingPolicy) -> Result<()> {
        writeln!(out, "{}", self.describe_with(policy))?;
        Ok(())
    }

    fn show_item_details(&self, out: &mut dyn Write) -> Result<()> {
        self.show_item_details_with(out, &PricingPolicy::default())
    }
}

/// One meal catalog behind the facade.
pub trait HostelMess {
    fn dishes(&self, meal: Meal) -> &[String];

    fn menu(&self, meal: Meal) -> String {
        self.dishes(meal).join(", ")
    }

    fn breakfast_menu(&self) -> String {
        self.menu(Meal::Breakfast)
    }

    fn lunch_menu(&self) -> String {
        self.menu(Meal::Lunch)
    }

    fn dinner_menu(&self) -> String {
        self.menu(Meal::Dinner)
    }
}

/// Simplified entry point over both catalogs.
pub trait HostelWarden {
    fn menu_lines(&self, kind: MenuKind) -> Vec<String>;

    fn veg_menu(&self, out: &mut dyn Write) -> Result<()> {
        write_block(out, &self.menu_lines(MenuKind::Veg))
    }

    fn non_veg_menu(&self, out: &mut dyn Write) -> Result<()> {
        write_block(out, &self.menu_lines(MenuKind::NonVeg))
    }
}

fn write_block(out: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
