use serde::{Deserialize, Serialize};

use crate::shared::criteria::{distinct_values, rating_at_least, search_matches, FilterCriteria};
use crate::shared::list_view::ListView;
use contracts::domain::a002_supplier::aggregate::Supplier;

/// Фильтры списка поставщиков
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierFilters {
    pub search: Option<String>,
    pub supplier_type: Option<String>,
    pub country: Option<String>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria<Supplier> for SupplierFilters {
    fn matches(&self, supplier: &Supplier) -> bool {
        // Search filter (name, company, contact person, email)
        if let Some(search) = self.search.as_deref() {
            if !search_matches(
                search,
                &[
                    Some(supplier.supplier_name.as_str()),
                    supplier.company_name.as_deref(),
                    supplier.contact_person.as_deref(),
                    supplier.email.as_deref(),
                ],
            ) {
                return false;
            }
        }

        // Type filter (точное совпадение — значения берутся из данных)
        if let Some(supplier_type) = self.supplier_type.as_deref() {
            if supplier.supplier_type.as_deref() != Some(supplier_type) {
                return false;
            }
        }

        // Country filter
        if let Some(country) = self.country.as_deref() {
            if supplier.country.as_deref() != Some(country) {
                return false;
            }
        }

        // Rating filter
        if let Some(min_rating) = self.min_rating {
            if !rating_at_least(supplier.rating, min_rating) {
                return false;
            }
        }

        true
    }
}

pub type SupplierList = ListView<Supplier, SupplierFilters>;

/// Страны для выпадающего списка фильтра — из текущей коллекции
pub fn country_options(suppliers: &[Supplier]) -> Vec<String> {
    distinct_values(suppliers, |s| s.country.as_deref())
}

/// Категории поставщиков — из текущей коллекции
pub fn type_options(suppliers: &[Supplier]) -> Vec<String> {
    distinct_values(suppliers, |s| s.supplier_type.as_deref())
}
