//! Interactive menu loop.
//!
//! Reads one command per line, prompts for its arguments, and calls into the
//! inventory. Any failure inside a command is printed and the loop carries on;
//! only end of input or the exit command stop it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use shelfwise_core::Entity;
use shelfwise_infra::{JsonFileStore, StorageConfig};
use shelfwise_inventory::Inventory;
use shelfwise_products::{Product, ProductType};

use crate::command::Command;
use crate::errors::error_code;

pub struct Menu<R, W> {
    inventory: Inventory,
    config: StorageConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: StorageConfig, input: R, output: W) -> Self {
        Self::with_inventory(Inventory::new(), config, input, output)
    }

    pub fn with_inventory(inventory: Inventory, config: StorageConfig, input: R, output: W) -> Self {
        Self {
            inventory,
            config,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run until the exit command or end of input.
    ///
    /// Only failures to write to `output` end the loop with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("Enter choice: ")? else {
                tracing::debug!("input closed; leaving menu");
                break;
            };

            let Some(command) = Command::parse(&choice) else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            if command == Command::Exit {
                writeln!(self.output, "Exiting. Bye!")?;
                break;
            }

            if let Err(err) = self.dispatch(command) {
                tracing::warn!(command = ?command, code = error_code(&err), "command failed: {err:#}");
                writeln!(self.output, "Error: {err:#}")?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Add => self.add_product(),
            Command::Sell => self.sell_product(),
            Command::SearchByName => self.search_by_name(),
            Command::SearchByType => self.search_by_type(),
            Command::ListAll => self.list_all(),
            Command::Restock => self.restock_product(),
            Command::Remove => self.remove_product(),
            Command::RemoveExpired => self.remove_expired(),
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::TotalValue => self.total_value(),
            Command::Exit => Ok(()),
        }
    }

    fn add_product(&mut self) -> anyhow::Result<()> {
        let product_type: ProductType = self
            .ask("Product type (Electronics/Grocery/Clothing): ")?
            .parse()?;
        let id = self.ask("Product ID: ")?;
        let name = self.ask("Name: ")?;
        let price = parse_price(&self.ask("Price: ")?)?;
        let quantity = parse_quantity(&self.ask("Quantity: ")?)?;

        let product = match product_type {
            ProductType::Electronics => {
                let warranty_years = self
                    .ask("Warranty years: ")?
                    .parse::<u32>()
                    .context("invalid warranty years")?;
                let brand = self.ask("Brand: ")?;
                Product::electronics(id, name, price, quantity, warranty_years, brand)?
            }
            ProductType::Grocery => {
                let expiry_date = parse_date(&self.ask("Expiry date (YYYY-MM-DD): ")?)?;
                Product::grocery(id, name, price, quantity, expiry_date)?
            }
            ProductType::Clothing => {
                let size = self.ask("Size: ")?;
                let material = self.ask("Material: ")?;
                Product::clothing(id, name, price, quantity, size, material)?
            }
        };

        let product_id = product.id().clone();
        self.inventory.add(product)?;
        tracing::info!(product_id = %product_id, product_type = %product_type, "product added");
        writeln!(self.output, "Product added.")?;
        Ok(())
    }

    fn sell_product(&mut self) -> anyhow::Result<()> {
        let id = self.ask("Product ID: ")?;
        let quantity = parse_quantity(&self.ask("Quantity to sell: ")?)?;
        self.inventory.sell(&id, quantity)?;
        tracing::info!(product_id = %id, quantity, "product sold");
        writeln!(self.output, "Product sold.")?;
        Ok(())
    }

    fn search_by_name(&mut self) -> anyhow::Result<()> {
        let needle = self.ask("Name to search for: ")?;
        let lines = render_all(self.inventory.search_by_name(&needle));
        self.print_results(&lines, "No products found.")
    }

    fn search_by_type(&mut self) -> anyhow::Result<()> {
        let type_name = self.ask("Product type to search for: ")?;
        let lines = render_all(self.inventory.search_by_type(&type_name));
        self.print_results(&lines, "No products found.")
    }

    fn list_all(&mut self) -> anyhow::Result<()> {
        let lines = render_all(self.inventory.list_all());
        self.print_results(&lines, "Inventory is empty.")
    }

    fn restock_product(&mut self) -> anyhow::Result<()> {
        let id = self.ask("Product ID: ")?;
        let quantity = parse_quantity(&self.ask("Restock quantity: ")?)?;
        self.inventory.restock(&id, quantity)?;
        tracing::info!(product_id = %id, quantity, "product restocked");
        writeln!(self.output, "Product restocked.")?;
        Ok(())
    }

    fn remove_product(&mut self) -> anyhow::Result<()> {
        let id = self.ask("Product ID: ")?;
        match self.inventory.remove(&id) {
            Some(product) => {
                tracing::info!(product_id = %id, "product removed");
                writeln!(self.output, "Removed {}.", product.name())?;
            }
            None => writeln!(self.output, "No product with ID {id}.")?,
        }
        Ok(())
    }

    fn remove_expired(&mut self) -> anyhow::Result<()> {
        let removed = self.inventory.remove_expired();
        tracing::info!(removed = removed.len(), "expired products pruned");
        writeln!(self.output, "Removed {} expired product(s).", removed.len())?;
        for product in &removed {
            writeln!(self.output, "  - {} ({})", product.name(), product.id())?;
        }
        Ok(())
    }

    fn save(&mut self) -> anyhow::Result<()> {
        let store = JsonFileStore::new(self.ask_path("File to save to")?);
        store.save(&self.inventory)?;
        writeln!(self.output, "Inventory saved to {}.", store.path().display())?;
        Ok(())
    }

    fn load(&mut self) -> anyhow::Result<()> {
        let store = JsonFileStore::new(self.ask_path("File to load from")?);
        self.inventory = store.load()?;
        writeln!(
            self.output,
            "Loaded {} product(s) from {}.",
            self.inventory.len(),
            store.path().display()
        )?;
        Ok(())
    }

    fn total_value(&mut self) -> anyhow::Result<()> {
        let total = self.inventory.total_value()?;
        writeln!(self.output, "Total inventory value: ${total:.2}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Inventory menu:")?;
        for command in Command::MENU {
            writeln!(self.output, "{:>2}. {}", command.key(), command.label())?;
        }
        Ok(())
    }

    fn print_results(&mut self, lines: &[String], empty_message: &str) -> anyhow::Result<()> {
        if lines.is_empty() {
            writeln!(self.output, "{empty_message}")?;
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Prompt for a path, falling back to the configured data file.
    fn ask_path(&mut self, prompt: &str) -> anyhow::Result<PathBuf> {
        let default = self.config.data_file.clone();
        let answer = self.ask(&format!("{prompt} [{}]: ", default.display()))?;
        if answer.is_empty() {
            Ok(default)
        } else {
            Ok(PathBuf::from(answer))
        }
    }

    /// Prompt for a required answer; end of input is an error.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| anyhow!("unexpected end of input"))
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn render_all(products: Vec<&Product>) -> Vec<String> {
    products.into_iter().map(ToString::to_string).collect()
}

fn parse_price(input: &str) -> anyhow::Result<Decimal> {
    input
        .parse::<Decimal>()
        .with_context(|| format!("invalid price: {input}"))
}

fn parse_quantity(input: &str) -> anyhow::Result<u32> {
    input
        .parse::<u32>()
        .with_context(|| format!("invalid quantity: {input}"))
}

fn parse_date(input: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn run_script(menu_input: &str) -> (Inventory, String) {
        run_script_with(StorageConfig::default(), menu_input)
    }

    fn run_script_with(config: StorageConfig, menu_input: &str) -> (Inventory, String) {
        let mut output = Vec::new();
        let mut menu = Menu::new(config, menu_input.as_bytes(), &mut output);
        menu.run().unwrap();
        let inventory = menu.inventory().clone();
        (inventory, String::from_utf8(output).unwrap())
    }

    const ADD_PHONE: &str = "1\nElectronics\nE001\nPhone\n999.99\n10\n2\nApple\n";

    #[test]
    fn add_sell_and_value_scenario() {
        let script = format!("{ADD_PHONE}2\nE001\n2\n5\n11\n0\n");
        let (inventory, output) = run_script(&script);

        assert_eq!(inventory.get("E001").unwrap().quantity_in_stock(), 8);
        assert!(output.contains("Product added."));
        assert!(output.contains("Product sold."));
        assert!(output.contains("[Electronics] Phone (Brand: Apple, Warranty: 2 yrs) - $999.99, Qty: 8"));
        assert!(output.contains("Total inventory value: $7999.92"));
        assert!(output.contains("Exiting. Bye!"));
    }

    #[test]
    fn core_errors_are_reported_and_loop_continues() {
        let script = format!("{ADD_PHONE}2\nUNKNOWN\n1\n2\nE001\n100\n{ADD_PHONE}5\n0\n");
        let (inventory, output) = run_script(&script);

        assert!(output.contains("Error: product not found: UNKNOWN"));
        assert!(output.contains("Error: not enough stock for product E001"));
        assert!(output.contains("Error: product id already exists: E001"));
        assert_eq!(inventory.get("E001").unwrap().quantity_in_stock(), 10);
        assert!(output.contains("Exiting. Bye!"));
    }

    #[test]
    fn bad_input_is_reported_and_loop_continues() {
        let script = "42\n6\nE001\n-5\n1\nFurniture\n0\n";
        let (inventory, output) = run_script(script);

        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Error: invalid quantity: -5"));
        assert!(output.contains("Error: validation failed: unknown product type: Furniture"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (inventory, output) = run_script("1\nClothing\nC001\n");
        assert!(output.contains("Error: unexpected end of input"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn search_by_name_and_type() {
        let script = format!(
            "{ADD_PHONE}1\nclothing\nC001\nShirt\n29.99\n15\nM\nCotton\n3\nSHIRT\n4\nelectronics\n3\nlaptop\n0\n"
        );
        let (_, output) = run_script(&script);

        assert!(output.contains("[Clothing] Shirt (Size: M, Material: Cotton) - $29.99, Qty: 15"));
        assert!(output.contains("[Electronics] Phone"));
        assert!(output.contains("No products found."));
    }

    #[test]
    fn remove_product_and_remove_expired() {
        let yesterday = (Local::now().date_naive() - Duration::days(1)).format("%Y-%m-%d");
        let next_week = (Local::now().date_naive() + Duration::days(7)).format("%Y-%m-%d");
        let script = format!(
            "1\nGrocery\nG001\nYogurt\n2.5\n10\n{yesterday}\n\
             1\nGrocery\nG002\nMilk\n3.5\n20\n{next_week}\n\
             {ADD_PHONE}8\n7\nE001\n7\nE001\n0\n"
        );
        let (inventory, output) = run_script(&script);

        assert!(output.contains("Removed 1 expired product(s)."));
        assert!(output.contains("  - Yogurt (G001)"));
        assert!(output.contains("Removed Phone."));
        assert!(output.contains("No product with ID E001."));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains("G002"));
    }

    #[test]
    fn save_and_load_through_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_file: dir.path().join("inventory.json"),
        };

        let script = format!("{ADD_PHONE}9\n\n7\nE001\n10\n\n5\n0\n");
        let (inventory, output) = run_script_with(config.clone(), &script);

        let shown = config.data_file.display();
        assert!(output.contains(&format!("Inventory saved to {shown}.")));
        assert!(output.contains(&format!("Loaded 1 product(s) from {shown}.")));
        assert_eq!(inventory.get("E001").unwrap().quantity_in_stock(), 10);
        assert!(config.data_file.exists());
    }

    #[test]
    fn loading_a_missing_file_keeps_current_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let script = format!("{ADD_PHONE}10\n{}\n0\n", missing.display());
        let (inventory, output) = run_script(&script);

        assert!(output.contains("Error: invalid product data: failed to read"));
        assert!(inventory.contains("E001"));
    }

    #[test]
    fn total_value_of_empty_inventory() {
        let (_, output) = run_script("11\n5\n0\n");
        assert!(output.contains("Total inventory value: $0.00"));
        assert!(output.contains("Inventory is empty."));
    }

    #[test]
    fn oversized_price_is_rejected_and_value_still_reported() {
        let script = format!(
            "1\nClothing\nC1\nHat\n100000000000000000000\n1000000000\nL\nFelt\n{ADD_PHONE}11\n0\n"
        );
        let (inventory, output) = run_script(&script);

        assert!(output.contains("Error: validation failed: price 100000000000000000000 has more than 15"));
        assert!(!inventory.contains("C1"));
        assert!(output.contains("Total inventory value: $9999.90"));
        assert!(output.contains("Exiting. Bye!"));
    }
}
