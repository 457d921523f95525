use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub i64);

impl SupplierId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Поставщик материалов и услуг
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub supplier_name: String,
    pub company_name: Option<String>,
    /// Категория поставщика (Fabric, Yarn, Trims, ...) — значения приходят из данных
    pub supplier_type: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    /// Рейтинг 0..=5
    pub rating: Option<f64>,
}

impl EntityRecord for Supplier {
    type Id = SupplierId;
    type Dto = SupplierDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Поставщик"
    }

    fn list_name() -> &'static str {
        "Поставщики"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления поставщика
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub supplier_name: String,
    pub company_name: Option<String>,
    pub supplier_type: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
}

impl SupplierDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.supplier_name.trim().is_empty() {
            return Err("Имя поставщика не может быть пустым".into());
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err("Рейтинг должен быть в диапазоне от 0 до 5".into());
            }
        }
        Ok(())
    }
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            supplier_name: s.supplier_name.clone(),
            company_name: s.company_name.clone(),
            supplier_type: s.supplier_type.clone(),
            contact_person: s.contact_person.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            country: s.country.clone(),
            rating: s.rating,
        }
    }
}
