use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор байера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyerId(pub i64);

impl BuyerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for BuyerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(BuyerId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Байер (заказчик): бренд или торговая компания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: BuyerId,
    pub buyer_name: String,
    pub brand_name: Option<String>,
    pub company_name: Option<String>,
    pub head_office_country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
    /// Рейтинг 0..=5
    pub rating: Option<f64>,
}

impl EntityRecord for Buyer {
    type Id = BuyerId;
    type Dto = BuyerDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "buyers"
    }

    fn element_name() -> &'static str {
        "Байер"
    }

    fn list_name() -> &'static str {
        "Байеры"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления байера
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerDto {
    pub buyer_name: String,
    pub brand_name: Option<String>,
    pub company_name: Option<String>,
    pub head_office_country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
    pub rating: Option<f64>,
}

impl BuyerDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.buyer_name.trim().is_empty() {
            return Err("Имя байера не может быть пустым".into());
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err("Рейтинг должен быть в диапазоне от 0 до 5".into());
            }
        }
        Ok(())
    }
}

impl From<&Buyer> for BuyerDto {
    fn from(b: &Buyer) -> Self {
        Self {
            buyer_name: b.buyer_name.clone(),
            brand_name: b.brand_name.clone(),
            company_name: b.company_name.clone(),
            head_office_country: b.head_office_country.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            website: b.website.clone(),
            tax_id: b.tax_id.clone(),
            rating: b.rating,
        }
    }
}
