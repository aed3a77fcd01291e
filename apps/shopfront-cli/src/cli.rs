//! Command-line argument structures.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::CliError;

/// Price carts and place orders against a configured catalog
#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "shopfront - price carts and place orders against a product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a shopfront.toml configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog with current stock
    Catalog,

    /// Price a cart without placing an order
    Quote {
        /// Item to add, as PRODUCT_ID or PRODUCT_ID=QUANTITY (repeatable)
        #[arg(short = 'i', long = "item", value_name = "ITEM", required = true)]
        items: Vec<ItemSpec>,
    },

    /// Price a cart and place an order
    Checkout {
        /// Customer email for the order
        #[arg(short = 'e', long)]
        email: String,

        /// Item to add, as PRODUCT_ID or PRODUCT_ID=QUANTITY (repeatable)
        #[arg(short = 'i', long = "item", value_name = "ITEM", required = true)]
        items: Vec<ItemSpec>,
    },
}

/// One `--item` argument. A bare id means quantity 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: String,
    pub quantity: i64,
}

impl FromStr for ItemSpec {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidItem(s.to_string());

        let (id, quantity) = match s.split_once('=') {
            Some((id, qty)) => (id.trim(), qty.trim().parse::<i64>().map_err(|_| invalid())?),
            None => (s.trim(), 1),
        };

        if id.is_empty() {
            return Err(invalid());
        }

        Ok(ItemSpec {
            product_id: id.to_string(),
            quantity,
        })
    }
}
