//! Форма потребности в материале: каскадная подстановка из вариантов стиля

use contracts::domain::a005_style_variant::aggregate::StyleVariant;
use contracts::domain::a006_required_material::aggregate::RequiredMaterialDto;

/// Подставить выбранный вариант стиля в форму материала.
///
/// Копируется снимок style_name/style_id варианта; материал, единица
/// измерения и расход не затрагиваются. Неизвестный id игнорируется.
pub fn prefill_from_variant(
    form: &mut RequiredMaterialDto,
    style_variant_id: i64,
    variants: &[StyleVariant],
) -> bool {
    match variants.iter().find(|v| v.id.value() == style_variant_id) {
        Some(variant) => {
            form.style_variant_id = Some(style_variant_id);
            form.style_name = variant.style_name.clone();
            form.style_id = variant.style_id.clone();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_style_variant::aggregate::StyleVariantId;

    fn variant(id: i64, name: &str, code: &str, colour: &str) -> StyleVariant {
        StyleVariant {
            id: StyleVariantId::new(id),
            style_summary_id: 1,
            style_name: name.to_string(),
            style_id: code.to_string(),
            colour_name: colour.to_string(),
            colour_code: None,
        }
    }

    #[test]
    fn copies_variant_snapshot_and_keeps_material_fields() {
        let mut form = RequiredMaterialDto {
            material: "Cashmere 2/28".into(),
            uom: "kg".into(),
            consumption_per_piece: 0.32,
            ..Default::default()
        };
        let applied = prefill_from_variant(
            &mut form,
            5,
            &[variant(5, "Cardigan", "ST-014", "Navy")],
        );
        assert!(applied);
        assert_eq!(form.style_variant_id, Some(5));
        assert_eq!(form.style_name, "Cardigan");
        assert_eq!(form.style_id, "ST-014");
        assert_eq!(form.material, "Cashmere 2/28");
        assert_eq!(form.consumption_per_piece, 0.32);
    }

    #[test]
    fn unknown_variant_id_is_ignored() {
        let mut form = RequiredMaterialDto::default();
        assert!(!prefill_from_variant(&mut form, 99, &[variant(1, "A", "ST-001", "Red")]));
        assert_eq!(form, RequiredMaterialDto::default());
    }
}
