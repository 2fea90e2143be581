use tracing::info;

use super::category::Category;
use crate::{config::ReportSettings, errors::LedgerError, report::SpendChart};

/// An ordered collection of uniquely named categories.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) -> Result<(), LedgerError> {
        if self.position(category.name()).is_some() {
            return Err(LedgerError::DuplicateCategory(category.name().to_string()));
        }
        info!(category = %category.name(), "category added");
        self.categories.push(category);
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Result<&Category, LedgerError> {
        self.position(name)
            .map(|idx| &self.categories[idx])
            .ok_or_else(|| LedgerError::CategoryNotFound(name.to_string()))
    }

    pub fn category_mut(&mut self, name: &str) -> Result<&mut Category, LedgerError> {
        let idx = self
            .position(name)
            .ok_or_else(|| LedgerError::CategoryNotFound(name.to_string()))?;
        Ok(&mut self.categories[idx])
    }

    /// Transfers between two member categories. `Ok(false)` means the source
    /// lacked funds and neither ledger changed.
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<bool, LedgerError> {
        let source = self
            .position(from)
            .ok_or_else(|| LedgerError::CategoryNotFound(from.to_string()))?;
        let target = self
            .position(to)
            .ok_or_else(|| LedgerError::CategoryNotFound(to.to_string()))?;
        if source == target {
            return Err(LedgerError::InvalidOperation(format!(
                "cannot transfer `{}` into itself",
                from
            )));
        }

        let (low, high) = (source.min(target), source.max(target));
        let (head, tail) = self.categories.split_at_mut(high);
        let (low_ref, high_ref) = (&mut head[low], &mut tail[0]);
        let moved = if source < target {
            low_ref.transfer(amount, high_ref)
        } else {
            high_ref.transfer(amount, low_ref)
        };
        Ok(moved)
    }

    /// Charts every category in insertion order.
    pub fn spend_chart(&self, settings: &ReportSettings) -> Result<String, LedgerError> {
        Ok(SpendChart::from_categories(&self.categories)?.render(settings))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
    }
}
