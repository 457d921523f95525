use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор варианта стиля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleVariantId(pub i64);

impl StyleVariantId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for StyleVariantId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(StyleVariantId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Цветовой вариант стиля
///
/// style_name/style_id — снимок полей родительского стиля на момент создания.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub id: StyleVariantId,
    pub style_summary_id: i64,
    pub style_name: String,
    pub style_id: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
}

impl EntityRecord for StyleVariant {
    type Id = StyleVariantId;
    type Dto = StyleVariantDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "style-variants"
    }

    fn element_name() -> &'static str {
        "Вариант стиля"
    }

    fn list_name() -> &'static str {
        "Варианты стилей"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления варианта стиля
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleVariantDto {
    pub style_summary_id: Option<i64>,
    pub style_name: String,
    pub style_id: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
}

impl StyleVariantDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.style_summary_id.is_none() {
            return Err("Стиль не выбран".into());
        }
        if self.colour_name.trim().is_empty() {
            return Err("Название цвета не может быть пустым".into());
        }
        Ok(())
    }
}

impl From<&StyleVariant> for StyleVariantDto {
    fn from(v: &StyleVariant) -> Self {
        Self {
            style_summary_id: Some(v.style_summary_id),
            style_name: v.style_name.clone(),
            style_id: v.style_id.clone(),
            colour_name: v.colour_name.clone(),
            colour_code: v.colour_code.clone(),
        }
    }
}
