use crate::domain::common::{EntityRecord, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор записи TNA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleTnaId(pub i64);

impl SampleTnaId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for SampleTnaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(SampleTnaId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// План Time-and-Action образца
///
/// На каждый образец существует не более одной записи TNA; связь — по
/// бизнес-ключу sample_id. Поля байера/стиля/типа — снимок полей образца
/// на момент создания записи, а не живая ссылка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTna {
    pub id: SampleTnaId,
    /// Ключ родительского образца; используется только для поиска,
    /// адресация записи при обновлении — всегда по id
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<NaiveDate>,
    // Собственные поля записи TNA (ручной ввод)
    pub yarn_rcv_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

impl EntityRecord for SampleTna {
    type Id = SampleTnaId;
    type Dto = SampleTnaDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "samples/tna"
    }

    fn element_name() -> &'static str {
        "Запись TNA"
    }

    fn list_name() -> &'static str {
        "Записи TNA"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления записи TNA
///
/// Несёт и снимок производных полей, и ручные поля: бэкенд хранит
/// снимок вместе с записью.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleTnaDto {
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<NaiveDate>,
    pub yarn_rcv_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

impl SampleTnaDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_id.trim().is_empty() {
            return Err("Образец не выбран".into());
        }
        if self.yarn_rcv_date.is_none() {
            return Err("Дата получения пряжи обязательна".into());
        }
        if self.required_date.is_none() {
            return Err("Требуемая дата обязательна".into());
        }
        match &self.color {
            Some(c) if !c.trim().is_empty() => {}
            _ => return Err("Цвет обязателен".into()),
        }
        Ok(())
    }
}

impl From<&SampleTna> for SampleTnaDto {
    fn from(t: &SampleTna) -> Self {
        Self {
            sample_id: t.sample_id.clone(),
            buyer_name: t.buyer_name.clone(),
            style_name: t.style_name.clone(),
            sample_type: t.sample_type.clone(),
            sample_description: t.sample_description.clone(),
            item: t.item.clone(),
            gauge: t.gauge.clone(),
            worksheet_rcv_date: t.worksheet_rcv_date,
            yarn_rcv_date: t.yarn_rcv_date,
            required_date: t.required_date,
            color: t.color.clone(),
            notes: t.notes.clone(),
        }
    }
}
