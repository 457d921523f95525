use std::hash::Hash;

/// Трейт для типизированных идентификаторов записей
///
/// Идентификаторы присваиваются бэкендом при создании записи,
/// неизменяемы и не переиспользуются после удаления.
pub trait RecordId: Copy + Eq + Hash {
    /// Представление для URL и ключей форм
    fn as_string(&self) -> String;

    /// Разбор из строкового представления (параметры маршрута)
    fn from_string(s: &str) -> Result<Self, String>;
}
