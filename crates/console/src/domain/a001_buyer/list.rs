use serde::{Deserialize, Serialize};

use crate::shared::criteria::{distinct_values, rating_at_least, search_matches, FilterCriteria};
use crate::shared::list_view::ListView;
use contracts::domain::a001_buyer::aggregate::Buyer;

/// Фильтры списка байеров
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerFilters {
    pub search: Option<String>,
    pub country: Option<String>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria<Buyer> for BuyerFilters {
    fn matches(&self, buyer: &Buyer) -> bool {
        // Search filter (buyer name, brand, company, email)
        if let Some(search) = self.search.as_deref() {
            if !search_matches(
                search,
                &[
                    Some(buyer.buyer_name.as_str()),
                    buyer.brand_name.as_deref(),
                    buyer.company_name.as_deref(),
                    buyer.email.as_deref(),
                ],
            ) {
                return false;
            }
        }

        // Country filter
        if let Some(country) = self.country.as_deref() {
            if buyer.head_office_country.as_deref() != Some(country) {
                return false;
            }
        }

        // Rating filter
        if let Some(min_rating) = self.min_rating {
            if !rating_at_least(buyer.rating, min_rating) {
                return false;
            }
        }

        true
    }
}

pub type BuyerList = ListView<Buyer, BuyerFilters>;

/// Страны для выпадающего списка фильтра — из текущей коллекции
pub fn country_options(buyers: &[Buyer]) -> Vec<String> {
    distinct_values(buyers, |b| b.head_office_country.as_deref())
}
