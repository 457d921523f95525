use crate::domain::common::{EntityRecord, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор образца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleId(pub i64);

impl SampleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for SampleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(SampleId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Образец (Sample Primary Info)
///
/// Помимо суррогатного id несёт бизнес-ключ sample_id
/// (например, "BUY_2025_11_001"), по которому на него ссылается TNA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<NaiveDate>,
}

impl EntityRecord for Sample {
    type Id = SampleId;
    type Dto = SampleDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "samples"
    }

    fn element_name() -> &'static str {
        "Образец"
    }

    fn list_name() -> &'static str {
        "Образцы"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления образца
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleDto {
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<NaiveDate>,
}

impl SampleDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_id.trim().is_empty() {
            return Err("Бизнес-ключ образца не может быть пустым".into());
        }
        if self.buyer_name.trim().is_empty() {
            return Err("Байер не может быть пустым".into());
        }
        if self.style_name.trim().is_empty() {
            return Err("Стиль не может быть пустым".into());
        }
        Ok(())
    }
}
