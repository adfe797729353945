//! Sale record types.
//!
//! A [`Sale`] is the sole persisted entity. Clients submit a [`SaleDraft`]
//! to create one and a [`SaleUpdate`] to patch one; both reject unknown JSON
//! fields so that arbitrary request bodies are never merged into stored
//! records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::SaleId;

/// A single sale transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Store-assigned identifier, immutable after insert.
    pub id: SaleId,

    /// Product sold.
    pub product: String,

    /// Gross revenue of the sale, in currency units.
    pub amount: f64,

    /// Geographic region label (open set).
    pub region: String,

    /// Purchasing customer.
    pub customer: String,

    /// Responsible sales representative.
    #[serde(rename = "salesRep")]
    pub sales_rep: String,

    /// When the sale happened. Defaults to insert time when not supplied.
    pub date: DateTime<Utc>,

    /// Product category label (open set).
    pub category: String,

    /// Profit in currency units. Independent of `amount` and `cost`.
    pub profit: f64,

    /// Cost in currency units. Independent of `amount` and `profit`.
    pub cost: f64,
}

/// Request body for creating a sale.
///
/// Identical to [`Sale`] minus the identifier; `date` is optional and
/// resolved to the insert time by the store when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaleDraft {
    /// Product sold.
    pub product: String,
    /// Gross revenue in currency units.
    pub amount: f64,
    /// Geographic region label.
    pub region: String,
    /// Purchasing customer.
    pub customer: String,
    /// Responsible sales representative.
    #[serde(rename = "salesRep")]
    pub sales_rep: String,
    /// Sale date; insert time when omitted.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Product category label.
    pub category: String,
    /// Profit in currency units.
    pub profit: f64,
    /// Cost in currency units.
    pub cost: f64,
}

impl SaleDraft {
    /// Validate the draft before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first offending field: empty
    /// text fields and non-finite monetary values are rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("product", &self.product)?;
        require_finite("amount", self.amount)?;
        require_text("region", &self.region)?;
        require_text("customer", &self.customer)?;
        require_text("salesRep", &self.sales_rep)?;
        require_text("category", &self.category)?;
        require_finite("profit", self.profit)?;
        require_finite("cost", self.cost)?;
        Ok(())
    }

    /// Materialize the draft into a [`Sale`] with the given identifier.
    ///
    /// `fallback_date` is used when the draft carries no date.
    #[must_use]
    pub fn into_sale(self, id: SaleId, fallback_date: DateTime<Utc>) -> Sale {
        Sale {
            id,
            product: self.product,
            amount: self.amount,
            region: self.region,
            customer: self.customer,
            sales_rep: self.sales_rep,
            date: self.date.unwrap_or(fallback_date),
            category: self.category,
            profit: self.profit,
            cost: self.cost,
        }
    }
}

/// Partial update of a sale.
///
/// Fields omitted from the request body are left unchanged; the identifier
/// is never patchable. Unknown fields are rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SaleUpdate {
    /// New product, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// New amount, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// New region, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// New customer, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// New sales representative, if supplied.
    #[serde(rename = "salesRep", skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    /// New date, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// New category, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New profit, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    /// New cost, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl SaleUpdate {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for empty replacement text or non-finite
    /// replacement numbers. Absent fields are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(product) = &self.product {
            require_text("product", product)?;
        }
        if let Some(amount) = self.amount {
            require_finite("amount", amount)?;
        }
        if let Some(region) = &self.region {
            require_text("region", region)?;
        }
        if let Some(customer) = &self.customer {
            require_text("customer", customer)?;
        }
        if let Some(sales_rep) = &self.sales_rep {
            require_text("salesRep", sales_rep)?;
        }
        if let Some(category) = &self.category {
            require_text("category", category)?;
        }
        if let Some(profit) = self.profit {
            require_finite("profit", profit)?;
        }
        if let Some(cost) = self.cost {
            require_finite("cost", cost)?;
        }
        Ok(())
    }

    /// Merge the supplied fields into an existing record.
    pub fn apply_to(self, sale: &mut Sale) {
        if let Some(product) = self.product {
            sale.product = product;
        }
        if let Some(amount) = self.amount {
            sale.amount = amount;
        }
        if let Some(region) = self.region {
            sale.region = region;
        }
        if let Some(customer) = self.customer {
            sale.customer = customer;
        }
        if let Some(sales_rep) = self.sales_rep {
            sale.sales_rep = sales_rep;
        }
        if let Some(date) = self.date {
            sale.date = date;
        }
        if let Some(category) = self.category {
            sale.category = category;
        }
        if let Some(profit) = self.profit {
            sale.profit = profit;
        }
        if let Some(cost) = self.cost {
            sale.cost = cost;
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteNumber { field });
    }
    Ok(())
}
