use crate::domain::model::{Meal, MenuKind};
use crate::domain::ports::{HostelMess, HostelWarden};
use serde::{Deserialize, Serialize};

/// Fixed dish lists for one mess. Order is the order given at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    breakfast: Vec<String>,
    lunch: Vec<String>,
    dinner: Vec<String>,
}

fn owned(dishes: &[&str]) -> Vec<String> {
    dishes.iter().map(|dish| dish.to_string()).collect()
}

impl Catalog {
    pub fn new(breakfast: Vec<String>, lunch: Vec<String>, dinner: Vec<String>) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    pub fn veg() -> Self {
        Self::new(
            owned(&["Tea", "Samosa", "Sandwich"]),
            owned(&["PaneerThali", "VegThali", "Dosa"]),
            owned(&["Pizza", "Pasta", "Khichdi"]),
        )
    }

    pub fn non_veg() -> Self {
        Self::new(
            owned(&["BoiledEggs", "omelette", "EggSandwich"]),
            owned(&["ChickenThali", "NonVegThali", "ChickenBurger"]),
            owned(&["NonVegPizza", "MuttonThali", "NonVegLasgna"]),
        )
    }
}

impl HostelMess for Catalog {
    fn dishes(&self, meal: Meal) -> &[String] {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }
}

pub struct HostelWardenService {
    veg_mess: Box<dyn HostelMess>,
    non_veg_mess: Box<dyn HostelMess>,
}

impl HostelWardenService {
    pub fn new() -> Self {
        Self::with_catalogs(Catalog::veg(), Catalog::non_veg())
    }

    pub fn with_catalogs(
        veg_mess: impl HostelMess + 'static,
        non_veg_mess: impl HostelMess + 'static,
    ) -> Self {
        Self {
            veg_mess: Box::new(veg_mess),
            non_veg_mess: Box::new(non_veg_mess),
        }
    }

    fn mess(&self, kind: MenuKind) -> &dyn HostelMess {
        match kind {
            MenuKind::Veg => self.veg_mess.as_ref(),
            MenuKind::NonVeg => self.non_veg_mess.as_ref(),
        }
    }
}

impl Default for HostelWardenService {
    fn default() -> Self {
        Self::new()
    }
}

impl HostelWarden for HostelWardenService {
    fn menu_lines(&self, kind: MenuKind) -> Vec<String> {
        tracing::debug!("Collecting {:?} menu", kind);
        let mess = self.mess(kind);

        let mut lines = Vec::with_capacity(4);
        lines.push(kind.header().to_string());
        lines.extend(
            Meal::ALL
                .iter()
                .map(|meal| format!("{} - {}", meal, mess.menu(*meal))),
        );
        lines
    }
}
