use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор стиля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSummaryId(pub i64);

impl StyleSummaryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for StyleSummaryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(StyleSummaryId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Стиль изделия (справочник стилей)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub id: StyleSummaryId,
    pub style_name: String,
    /// Бизнес-код стиля (например, "ST-2025-014")
    pub style_id: String,
}

impl EntityRecord for StyleSummary {
    type Id = StyleSummaryId;
    type Dto = StyleSummaryDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "styles"
    }

    fn element_name() -> &'static str {
        "Стиль"
    }

    fn list_name() -> &'static str {
        "Стили"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления стиля
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSummaryDto {
    pub style_name: String,
    pub style_id: String,
}

impl StyleSummaryDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.style_name.trim().is_empty() {
            return Err("Название стиля не может быть пустым".into());
        }
        if self.style_id.trim().is_empty() {
            return Err("Код стиля не может быть пустым".into());
        }
        Ok(())
    }
}
