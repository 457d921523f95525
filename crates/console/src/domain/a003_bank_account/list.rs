use serde::{Deserialize, Serialize};

use crate::shared::criteria::{distinct_values, search_matches, FilterCriteria};
use crate::shared::list_view::ListView;
use contracts::domain::a003_bank_account::aggregate::BankAccount;

/// Фильтры списка банковских реквизитов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountFilters {
    pub search: Option<String>,
    pub country: Option<String>,
}

impl FilterCriteria<BankAccount> for BankAccountFilters {
    fn matches(&self, account: &BankAccount) -> bool {
        // Search filter (client, bank, country, account number)
        if let Some(search) = self.search.as_deref() {
            if !search_matches(
                search,
                &[
                    Some(account.client_name.as_str()),
                    account.bank_name.as_deref(),
                    account.country.as_deref(),
                    account.account_number.as_deref(),
                ],
            ) {
                return false;
            }
        }

        // Country filter
        if let Some(country) = self.country.as_deref() {
            if account.country.as_deref() != Some(country) {
                return false;
            }
        }

        true
    }
}

pub type BankAccountList = ListView<BankAccount, BankAccountFilters>;

/// Страны для выпадающего списка фильтра — из текущей коллекции
pub fn country_options(accounts: &[BankAccount]) -> Vec<String> {
    distinct_values(accounts, |a| a.country.as_deref())
}
