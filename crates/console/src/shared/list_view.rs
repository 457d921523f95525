//! Двухэтапный конвейер вывода списка
//!
//! (коллекция, критерии) -> отфильтрованная коллекция -> отображаемая
//! коллекция. Производная пара пересобирается целиком при любом изменении
//! входов; инкрементального слияния нет.

use serde::{Deserialize, Serialize};

use crate::shared::criteria::FilterCriteria;
use crate::shared::repository::{EntityRepository, RepositoryError};
use contracts::domain::common::EntityRecord;

/// Ограничение числа отображаемых строк
///
/// `All` — отдельный маркер, а не «очень большое число».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLimit {
    All,
    Limit(usize),
}

impl Default for RowLimit {
    fn default() -> Self {
        RowLimit::All
    }
}

/// Префикс отфильтрованной коллекции: первые N строк в исходном порядке,
/// либо вся коллекция при `All`.
pub fn project<T: Clone>(filtered: &[T], limit: RowLimit) -> Vec<T> {
    match limit {
        RowLimit::All => filtered.to_vec(),
        RowLimit::Limit(n) => filtered.iter().take(n).cloned().collect(),
    }
}

/// Состояние списка одного экрана: сырая коллекция, критерии, лимит строк
/// и производная пара (filtered, displayed).
///
/// Структура владеет всем изменяемым состоянием экрана явно, без
/// глобальных переменных, и потому тестируется изолированно.
#[derive(Debug, Clone)]
pub struct ListView<T, C> {
    items: Vec<T>,
    criteria: C,
    row_limit: RowLimit,
    filtered: Vec<T>,
    displayed: Vec<T>,
}

impl<T, C> ListView<T, C>
where
    T: Clone,
    C: FilterCriteria<T> + Default,
{
    pub fn new(row_limit: RowLimit) -> Self {
        Self {
            items: Vec::new(),
            criteria: C::default(),
            row_limit,
            filtered: Vec::new(),
            displayed: Vec::new(),
        }
    }

    /// Сырая коллекция в порядке ответа бэкенда
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn row_limit(&self) -> RowLimit {
        self.row_limit
    }

    /// Результат фильтрации — подпоследовательность items
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    /// Строки, которые видит пользователь
    pub fn displayed(&self) -> &[T] {
        &self.displayed
    }

    /// Заменить коллекцию целиком (порядок ответа сохраняется)
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.rederive();
    }

    pub fn set_criteria(&mut self, criteria: C) {
        self.criteria = criteria;
        self.rederive();
    }

    /// Сбросить все фильтры
    pub fn clear_criteria(&mut self) {
        self.criteria = C::default();
        self.rederive();
    }

    pub fn set_row_limit(&mut self, row_limit: RowLimit) {
        self.row_limit = row_limit;
        self.rederive();
    }

    // Полная пересборка производной пары. Устаревший displayed не должен
    // быть виден даже на один кадр, поэтому оба этапа пересчитываются вместе.
    fn rederive(&mut self) {
        self.filtered = self
            .items
            .iter()
            .filter(|item| self.criteria.matches(item))
            .cloned()
            .collect();
        self.displayed = project(&self.filtered, self.row_limit);
    }
}

impl<T, C> ListView<T, C>
where
    T: EntityRecord + Clone,
    C: FilterCriteria<T> + Default,
{
    /// Перечитать коллекцию из репозитория.
    ///
    /// При ошибке прежнее состояние остаётся нетронутым, ошибка возвращается
    /// вызывающему. Перекрывающиеся запросы не упорядочиваются: побеждает
    /// последний пришедший ответ.
    pub async fn refresh<R>(&mut self, repo: &R) -> Result<(), RepositoryError>
    where
        R: EntityRepository<T> + ?Sized,
    {
        match repo.list().await {
            Ok(items) => {
                tracing::debug!(
                    entity = %T::full_name(),
                    count = items.len(),
                    "collection refreshed"
                );
                self.set_items(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(entity = %T::full_name(), error = %e, "refresh failed, keeping previous collection");
                Err(e)
            }
        }
    }
}

impl<T, C> Default for ListView<T, C>
where
    T: Clone,
    C: FilterCriteria<T> + Default,
{
    fn default() -> Self {
        Self::new(RowLimit::default())
    }
}
