//! # Shop Configuration
//!
//! Store settings, the product catalog and the promotion list.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  File (first one found):                                               │
//! │    1. --config <PATH>                                                  │
//! │    2. SHOPFRONT_CONFIG=<PATH>                                          │
//! │    3. ~/.config/shopfront/shopfront.toml (Linux)                       │
//! │       ~/Library/Application Support/com.shopfront.shopfront/... (macOS)│
//! │    4. Built-in demo catalog                                            │
//! │                                                                         │
//! │  Then environment overrides:                                           │
//! │    SHOPFRONT_STORE_NAME, SHOPFRONT_CURRENCY                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Shop"
//! currency = "USD"
//!
//! [[products]]
//! id = "p1"
//! name = "Widget"
//! price_cents = 1000
//! category = "tools"
//! stock = 5
//!
//! [[promotions]]
//! name = "10%off"
//! discount_type = "percentage"   # or "fixed"
//! value = 10.0                   # percent, or cents for "fixed"
//! min_spend_cents = 0
//!
//! [bulk_discount]
//! threshold = 10
//! percent = 5.0
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shopfront_core::utils::text::format_currency;
use shopfront_core::{Inventory, Money, Product, Promotion};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SHOPFRONT_CONFIG";

/// Overrides `store.name`.
pub const STORE_NAME_ENV: &str = "SHOPFRONT_STORE_NAME";

/// Overrides `store.currency`.
pub const CURRENCY_ENV: &str = "SHOPFRONT_CURRENCY";

// =============================================================================
// Store Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO 4217 code shown in front of formatted amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "Shopfront Demo Store".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

impl StoreSettings {
    /// Formats money as `"USD 1,234.50"`.
    pub fn format_money(&self, amount: Money) -> String {
        format_currency(amount.cents() as f64 / 100.0, &self.currency)
    }
}

// =============================================================================
// Catalog Entries
// =============================================================================

/// A product as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: i64,
}

impl ProductEntry {
    fn to_product(&self) -> CliResult<Product> {
        Product::new(
            self.id.clone(),
            self.name.clone(),
            Money::from_cents(self.price_cents),
            self.category.clone(),
            self.stock,
        )
        .map_err(|e| CliError::InvalidConfig(format!("product '{}': {}", self.id, e)))
    }
}

/// A promotion as written in the config file.
///
/// `discount_type` stays a string so that unknown types survive to the
/// core, which treats them as no-discount promotions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionEntry {
    pub name: String,
    pub discount_type: String,
    pub value: f64,
    #[serde(default)]
    pub min_spend_cents: i64,
}

impl PromotionEntry {
    fn to_promotion(&self) -> Promotion {
        Promotion::from_parts(
            self.name.clone(),
            &self.discount_type,
            self.value,
            Money::from_cents(self.min_spend_cents),
        )
    }
}

/// Volume discount applied to every cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDiscountSettings {
    pub threshold: i64,
    pub percent: f64,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub products: Vec<ProductEntry>,

    #[serde(default)]
    pub promotions: Vec<PromotionEntry>,

    #[serde(default)]
    pub bulk_discount: Option<BulkDiscountSettings>,
}

impl ShopConfig {
    /// Loads configuration following the priority order in the module docs.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    /// [`ShopConfig::load`] with environment variables read through `lookup`.
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| Self::default_path().filter(|p| p.exists()));

        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)?
            }
            None => {
                info!("No configuration file found, using built-in demo catalog");
                Self::demo()
            }
        };

        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Platform config location of `shopfront.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("shopfront.toml"))
    }

    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `SHOPFRONT_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(STORE_NAME_ENV) {
            debug!(name = %name, "Store name overridden");
            self.store.name = name;
        }

        if let Some(currency) = lookup(CURRENCY_ENV) {
            debug!(currency = %currency, "Currency overridden");
            self.store.currency = currency;
        }
    }

    /// Checks rules the TOML schema cannot express.
    pub fn validate(&self) -> CliResult<()> {
        if self.store.currency.trim().is_empty() {
            return Err(CliError::InvalidConfig("store.currency is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            if product.id.trim().is_empty() {
                return Err(CliError::InvalidConfig("product id is empty".to_string()));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CliError::InvalidConfig(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }

        if let Some(bulk) = &self.bulk_discount {
            if bulk.threshold <= 0 {
                return Err(CliError::InvalidConfig(
                    "bulk_discount.threshold must be positive".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Builds a fresh inventory from the catalog.
    pub fn inventory(&self) -> CliResult<Inventory> {
        let products = self
            .products
            .iter()
            .map(ProductEntry::to_product)
            .collect::<CliResult<Vec<_>>>()?;

        Ok(Inventory::from_products(products))
    }

    pub fn promotions(&self) -> Vec<Promotion> {
        self.promotions.iter().map(PromotionEntry::to_promotion).collect()
    }

    /// Small catalog used when no config file exists.
    pub fn demo() -> Self {
        let product = |id: &str, name: &str, price_cents: i64, category: &str, stock: i64| {
            ProductEntry {
                id: id.to_string(),
                name: name.to_string(),
                price_cents,
                category: category.to_string(),
                stock,
            }
        };

        ShopConfig {
            store: StoreSettings::default(),
            products: vec![
                product("p1", "Laptop", 99_999, "electronics", 10),
                product("p2", "Mouse", 2_550, "electronics", 50),
                product("p3", "Coffee Mug", 1_200, "home", 100),
                product("p4", "Notebook", 500, "stationery", 200),
            ],
            promotions: vec![
                PromotionEntry {
                    name: "10%off".to_string(),
                    discount_type: "percentage".to_string(),
                    value: 10.0,
                    min_spend_cents: 0,
                },
                PromotionEntry {
                    name: "$50 off $500".to_string(),
                    discount_type: "fixed".to_string(),
                    value: 5_000.0,
                    min_spend_cents: 50_000,
                },
            ],
            bulk_discount: Some(BulkDiscountSettings {
                threshold: 10,
                percent: 15.0,
            }),
        }
    }
}
