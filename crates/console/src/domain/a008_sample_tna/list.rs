use serde::{Deserialize, Serialize};

use crate::shared::criteria::{distinct_values, search_matches, FilterCriteria};
use crate::shared::list_view::ListView;
use contracts::domain::a008_sample_tna::aggregate::SampleTna;

/// Фильтры списка записей TNA
///
/// Экран TNA показывает все отфильтрованные строки — лимита здесь нет,
/// список конструируется с `RowLimit::All`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TnaFilters {
    pub search: Option<String>,
    pub buyer: Option<String>,
}

impl FilterCriteria<SampleTna> for TnaFilters {
    fn matches(&self, tna: &SampleTna) -> bool {
        // Search filter (sample ID, buyer, style, color)
        if let Some(search) = self.search.as_deref() {
            if !search_matches(
                search,
                &[
                    Some(tna.sample_id.as_str()),
                    Some(tna.buyer_name.as_str()),
                    Some(tna.style_name.as_str()),
                    tna.color.as_deref(),
                ],
            ) {
                return false;
            }
        }

        // Buyer filter
        if let Some(buyer) = self.buyer.as_deref() {
            if tna.buyer_name != buyer {
                return false;
            }
        }

        true
    }
}

pub type TnaList = ListView<SampleTna, TnaFilters>;

/// Байеры для выпадающего списка фильтра — из текущей коллекции
pub fn buyer_options(records: &[SampleTna]) -> Vec<String> {
    distinct_values(records, |t| Some(t.buyer_name.as_str()))
}
