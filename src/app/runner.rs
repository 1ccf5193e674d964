use crate::config::toml_config::TomlConfig;
use crate::domain::model::ItemReport;
use crate::domain::ports::{HostelWarden, Sellable};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DemoKind {
    Composite,
    Facade,
    All,
}

/// Drives both demos against one output stream.
pub struct DemoRunner<W: Write> {
    config: TomlConfig,
    out: W,
}

impl<W: Write> DemoRunner<W> {
    pub fn new(config: TomlConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn run(&mut self, kind: DemoKind) -> Result<()> {
        match kind {
            DemoKind::Composite => self.run_composite(),
            DemoKind::Facade => self.run_facade(),
            DemoKind::All => {
                self.run_composite()?;
                self.run_facade()
            }
        }
    }

    pub fn run_composite(&mut self) -> Result<()> {
        tracing::info!(
            "Pricing {} showcase item(s) at {}% markup",
            self.config.showcase.len(),
            self.config.pricing.markup_percent
        );

        let policy = self.config.pricing;
        for showcase in &self.config.showcase {
            if let Some(item) = &showcase.item {
                item.show_item_details_with(&mut self.out, &policy)?;
            }
        }
        Ok(())
    }

    pub fn run_facade(&mut self) -> Result<()> {
        tracing::info!("Asking the warden for both menus");
        let warden = self.config.warden();
        warden.veg_menu(&mut self.out)?;
        warden.non_veg_menu(&mut self.out)?;
        Ok(())
    }

    pub fn composite_report(&self) -> Vec<ItemReport> {
        let policy = self.config.pricing;
        self.config
            .showcase
            .iter()
            .filter_map(|showcase| {
                showcase.item.as_ref().map(|item| ItemReport {
                    label: showcase.label.clone(),
                    names: item.name_list(),
                    selling_price: item.selling_price_with(&policy),
                })
            })
            .collect()
    }

    pub fn write_json_report(&mut self) -> Result<()> {
        let report = self.composite_report();
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
