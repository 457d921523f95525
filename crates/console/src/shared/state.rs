//! Сохранение состояния фильтров между переключениями вкладок
//!
//! Снимки хранятся в памяти как JSON-значения под ключом экрана.
//! Несовместимый или отсутствующий снимок молча деградирует к значению
//! по умолчанию — восстановление фильтров никогда не ломает экран.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct FilterStateStore {
    states: HashMap<String, Value>,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Сохранить снимок состояния экрана
    pub fn save<S: Serialize>(&mut self, screen: &str, state: &S) {
        if let Ok(value) = serde_json::to_value(state) {
            self.states.insert(screen.to_string(), value);
        }
    }

    /// Восстановить снимок; при отсутствии или несовместимости — default
    pub fn restore<S: DeserializeOwned + Default>(&self, screen: &str) -> S {
        self.states
            .get(screen)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// Удалить снимок одного экрана
    pub fn remove(&mut self, screen: &str) {
        self.states.remove(screen);
    }

    /// Очистить все снимки
    pub fn clear_all(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::RowLimit;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct ScreenState {
        search: Option<String>,
        row_limit: RowLimit,
    }

    #[test]
    fn round_trips_typed_state() {
        let mut store = FilterStateStore::new();
        let state = ScreenState {
            search: Some("navy".into()),
            row_limit: RowLimit::Limit(50),
        };
        store.save("suppliers", &state);
        assert_eq!(store.restore::<ScreenState>("suppliers"), state);
    }

    #[test]
    fn missing_or_incompatible_snapshot_degrades_to_default() {
        let mut store = FilterStateStore::new();
        assert_eq!(
            store.restore::<ScreenState>("buyers"),
            ScreenState::default()
        );

        // под этим ключом лежит чужой формат
        store.save("buyers", &vec![1, 2, 3]);
        assert_eq!(
            store.restore::<ScreenState>("buyers"),
            ScreenState::default()
        );
    }

    #[test]
    fn remove_and_clear() {
        let mut store = FilterStateStore::new();
        store.save("a", &ScreenState::default());
        store.save("b", &ScreenState::default());
        store.remove("a");
        assert_eq!(store.restore::<Option<ScreenState>>("a"), None);
        store.clear_all();
        assert_eq!(store.restore::<Option<ScreenState>>("b"), None);
    }
}
