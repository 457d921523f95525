//! Примитивы фильтрации списков
//!
//! Критерий — структура из `Option`-полей: `None` означает «без ограничения»
//! и никогда не исключает запись; `Some("")` для текстового поиска — законное
//! состояние, при котором подстрока пуста и совпадает с любой записью.

use std::collections::BTreeSet;

/// Критерии фильтрации для конкретного экрана
///
/// Активные критерии комбинируются логическим И; значение по умолчанию
/// (`Default`) не ограничивает ничего.
pub trait FilterCriteria<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Поиск подстроки без учёта регистра по фиксированному набору полей.
/// Отсутствующее поле сравнивается как пустая строка, а не как ошибка.
pub fn search_matches(needle: &str, fields: &[Option<&str>]) -> bool {
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|f| f.unwrap_or("").to_lowercase().contains(&needle))
}

/// Порог рейтинга: отсутствующий рейтинг считается нулевым
pub fn rating_at_least(rating: Option<f64>, threshold: f64) -> bool {
    rating.unwrap_or(0.0) >= threshold
}

/// Значения для выпадающего списка категорий из текущей коллекции:
/// без null и пустых строк, без дубликатов, по возрастанию.
/// Пересчитывается при каждой смене коллекции, не кэшируется.
pub fn distinct_values<T, F>(items: &[T], accessor: F) -> Vec<String>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut values = BTreeSet::new();
    for item in items {
        if let Some(v) = accessor(item) {
            if !v.is_empty() {
                values.insert(v.to_string());
            }
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(search_matches("ac", &[Some("Acme"), None]));
        assert!(search_matches("ACME", &[Some("acme ltd")]));
        assert!(!search_matches("zeta", &[Some("Acme"), Some("BD")]));
    }

    #[test]
    fn missing_field_compares_as_empty_string() {
        // Пустая подстрока совпадает с чем угодно, включая отсутствующее поле
        assert!(search_matches("", &[None]));
        assert!(!search_matches("x", &[None]));
    }

    #[test]
    fn absent_rating_counts_as_zero() {
        assert!(rating_at_least(Some(4.5), 3.0));
        assert!(!rating_at_least(Some(2.0), 3.0));
        assert!(!rating_at_least(None, 1.0));
        assert!(rating_at_least(None, 0.0));
    }

    #[test]
    fn distinct_values_sorted_deduped_non_null() {
        let rows = vec![
            Some("US".to_string()),
            None,
            Some("BD".to_string()),
            Some("US".to_string()),
            Some(String::new()),
        ];
        let values = distinct_values(&rows, |r| r.as_deref());
        assert_eq!(values, vec!["BD".to_string(), "US".to_string()]);
    }
}
