//! Форма варианта стиля: каскадная подстановка из справочника стилей

use contracts::domain::a004_style_summary::aggregate::StyleSummary;
use contracts::domain::a005_style_variant::aggregate::StyleVariantDto;

/// Подставить выбранный стиль в форму варианта.
///
/// В форму копируется снимок style_name/style_id; остальные поля
/// (цвет и т.д.) не затрагиваются. Неизвестный id игнорируется.
pub fn prefill_from_summary(
    form: &mut StyleVariantDto,
    style_summary_id: i64,
    summaries: &[StyleSummary],
) -> bool {
    match summaries.iter().find(|s| s.id.value() == style_summary_id) {
        Some(summary) => {
            form.style_summary_id = Some(style_summary_id);
            form.style_name = summary.style_name.clone();
            form.style_id = summary.style_id.clone();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_style_summary::aggregate::StyleSummaryId;

    fn summary(id: i64, name: &str, code: &str) -> StyleSummary {
        StyleSummary {
            id: StyleSummaryId::new(id),
            style_name: name.to_string(),
            style_id: code.to_string(),
        }
    }

    #[test]
    fn copies_style_snapshot_and_keeps_colour() {
        let mut form = StyleVariantDto {
            colour_name: "Navy".into(),
            ..Default::default()
        };
        let applied = prefill_from_summary(
            &mut form,
            14,
            &[summary(3, "Crewneck", "ST-003"), summary(14, "Cardigan", "ST-014")],
        );
        assert!(applied);
        assert_eq!(form.style_summary_id, Some(14));
        assert_eq!(form.style_name, "Cardigan");
        assert_eq!(form.style_id, "ST-014");
        assert_eq!(form.colour_name, "Navy");
    }

    #[test]
    fn unknown_summary_id_is_ignored() {
        let mut form = StyleVariantDto::default();
        assert!(!prefill_from_summary(&mut form, 99, &[summary(1, "A", "ST-001")]));
        assert_eq!(form, StyleVariantDto::default());
    }
}
