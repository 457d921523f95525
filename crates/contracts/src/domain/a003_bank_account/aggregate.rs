use crate::domain::common::{EntityRecord, RecordId};
use crate::enums::ClientType;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор банковских реквизитов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankAccountId(pub i64);

impl BankAccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for BankAccountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(BankAccountId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Банковские реквизиты клиента (байера или поставщика)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,
    pub client_type: ClientType,
    /// ID клиента в коллекции байеров или поставщиков (по client_type)
    pub client_id: i64,
    /// Отображаемое имя клиента — снимок на момент выбора
    pub client_name: String,
    pub country: Option<String>,
    pub bank_name: Option<String>,
    pub sort_code: Option<String>,
    pub account_number: Option<String>,
}

impl EntityRecord for BankAccount {
    type Id = BankAccountId;
    type Dto = BankAccountDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "banking"
    }

    fn element_name() -> &'static str {
        "Банковские реквизиты"
    }

    fn list_name() -> &'static str {
        "Банковские реквизиты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления банковских реквизитов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDto {
    pub client_type: ClientType,
    pub client_id: Option<i64>,
    pub client_name: String,
    pub country: Option<String>,
    pub bank_name: Option<String>,
    pub sort_code: Option<String>,
    pub account_number: Option<String>,
}

impl BankAccountDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_none() {
            return Err("Клиент не выбран".into());
        }
        if self.client_name.trim().is_empty() {
            return Err("Имя клиента не может быть пустым".into());
        }
        Ok(())
    }
}

impl From<&BankAccount> for BankAccountDto {
    fn from(b: &BankAccount) -> Self {
        Self {
            client_type: b.client_type,
            client_id: Some(b.client_id),
            client_name: b.client_name.clone(),
            country: b.country.clone(),
            bank_name: b.bank_name.clone(),
            sort_code: b.sort_code.clone(),
            account_number: b.account_number.clone(),
        }
    }
}
