use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор потребности в материале
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredMaterialId(pub i64);

impl RequiredMaterialId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for RequiredMaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(RequiredMaterialId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Потребность в материале для варианта стиля
///
/// style_name/style_id — снимок полей варианта на момент создания.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredMaterial {
    pub id: RequiredMaterialId,
    pub style_variant_id: i64,
    pub style_name: String,
    pub style_id: String,
    pub material: String,
    /// Единица измерения (kg, m, pcs, ...)
    pub uom: String,
    pub consumption_per_piece: f64,
    pub remarks: Option<String>,
}

impl EntityRecord for RequiredMaterial {
    type Id = RequiredMaterialId;
    type Dto = RequiredMaterialDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "required-materials"
    }

    fn element_name() -> &'static str {
        "Материал"
    }

    fn list_name() -> &'static str {
        "Потребности в материалах"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления потребности в материале
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredMaterialDto {
    pub style_variant_id: Option<i64>,
    pub style_name: String,
    pub style_id: String,
    pub material: String,
    pub uom: String,
    pub consumption_per_piece: f64,
    pub remarks: Option<String>,
}

impl RequiredMaterialDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.style_variant_id.is_none() {
            return Err("Вариант стиля не выбран".into());
        }
        if self.material.trim().is_empty() {
            return Err("Материал не может быть пустым".into());
        }
        if self.consumption_per_piece < 0.0 {
            return Err("Расход на изделие не может быть отрицательным".into());
        }
        Ok(())
    }
}

impl From<&RequiredMaterial> for RequiredMaterialDto {
    fn from(m: &RequiredMaterial) -> Self {
        Self {
            style_variant_id: Some(m.style_variant_id),
            style_name: m.style_name.clone(),
            style_id: m.style_id.clone(),
            material: m.material.clone(),
            uom: m.uom.clone(),
            consumption_per_piece: m.consumption_per_piece,
            remarks: m.remarks.clone(),
        }
    }
}
