//! Резолвер выбора образца для формы TNA
//!
//! По выбранному sample_id решает, чем заполнить форму: полями самого
//! образца (новая запись) или уже существующей записью TNA (редактирование).
//! На образец существует не более одной записи TNA; резолвер обязан
//! сохранять эту единственность, выбирая create или update.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::shared::repository::RepositoryError;
use contracts::domain::a007_sample::aggregate::Sample;
use contracts::domain::a008_sample_tna::aggregate::{SampleTna, SampleTnaDto, SampleTnaId};

/// Поиск образца по бизнес-ключу (getByKey внешнего репозитория)
#[async_trait]
pub trait SampleLookup: Send + Sync {
    async fn get_by_sample_id(&self, sample_id: &str) -> Result<Sample, RepositoryError>;
}

/// Текущее состояние выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Образец не выбран
    Empty,
    /// Образец выбран, записи TNA для него ещё нет
    New,
    /// Образец выбран, запись TNA уже существует
    Existing(SampleTnaId),
}

/// Поля формы TNA
///
/// Верхний блок заполняется автоматически и в UI доступен только для
/// чтения; нижний — ручной ввод пользователя.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TnaForm {
    // Auto-filled (readonly)
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: String,
    pub item: String,
    pub gauge: String,
    pub worksheet_rcv_date: Option<NaiveDate>,
    // Manual entry
    pub yarn_rcv_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub color: String,
    pub notes: String,
}

impl TnaForm {
    /// Новая запись: производные поля из образца, ручные — пустые
    fn from_sample(sample: &Sample) -> Self {
        Self {
            sample_id: sample.sample_id.clone(),
            buyer_name: sample.buyer_name.clone(),
            style_name: sample.style_name.clone(),
            sample_type: sample.sample_type.clone(),
            sample_description: sample.sample_description.clone().unwrap_or_default(),
            item: sample.item.clone().unwrap_or_default(),
            gauge: sample.gauge.clone().unwrap_or_default(),
            worksheet_rcv_date: sample.worksheet_rcv_date,
            yarn_rcv_date: None,
            required_date: None,
            color: String::new(),
            notes: String::new(),
        }
    }

    /// Существующая запись: всё, включая снимок производных полей,
    /// берётся из записи, а не из образца
    fn from_record(record: &SampleTna) -> Self {
        Self {
            sample_id: record.sample_id.clone(),
            buyer_name: record.buyer_name.clone(),
            style_name: record.style_name.clone(),
            sample_type: record.sample_type.clone(),
            sample_description: record.sample_description.clone().unwrap_or_default(),
            item: record.item.clone().unwrap_or_default(),
            gauge: record.gauge.clone().unwrap_or_default(),
            worksheet_rcv_date: record.worksheet_rcv_date,
            yarn_rcv_date: record.yarn_rcv_date,
            required_date: record.required_date,
            color: record.color.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    fn to_dto(&self) -> SampleTnaDto {
        let non_empty = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        SampleTnaDto {
            sample_id: self.sample_id.clone(),
            buyer_name: self.buyer_name.clone(),
            style_name: self.style_name.clone(),
            sample_type: self.sample_type.clone(),
            sample_description: non_empty(&self.sample_description),
            item: non_empty(&self.item),
            gauge: non_empty(&self.gauge),
            worksheet_rcv_date: self.worksheet_rcv_date,
            yarn_rcv_date: self.yarn_rcv_date,
            required_date: self.required_date,
            color: non_empty(&self.color),
            notes: non_empty(&self.notes),
        }
    }
}

/// Операция сохранения, которую должен выполнить вызывающий
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    /// Создать запись; ключ родителя едет внутри DTO
    Create(SampleTnaDto),
    /// Обновить запись по её собственному id (не по sample_id)
    Update { id: SampleTnaId, dto: SampleTnaDto },
}

/// Машина состояний выбора образца
#[derive(Debug, Clone, PartialEq)]
pub struct TnaResolver {
    selection: Selection,
    form: TnaForm,
}

impl Default for TnaResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TnaResolver {
    pub fn new() -> Self {
        Self {
            selection: Selection::Empty,
            form: TnaForm::default(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn form(&self) -> &TnaForm {
        &self.form
    }

    /// Ручной ввод пользователя (даты, цвет, заметки)
    pub fn form_mut(&mut self) -> &mut TnaForm {
        &mut self.form
    }

    /// Выбрать образец по бизнес-ключу.
    ///
    /// Сначала загружается деталь образца; при ошибке загрузки состояние
    /// резолвера не меняется и частично заполненная форма не появляется.
    /// Затем в уже загруженной коллекции TNA ищется запись с тем же
    /// sample_id: найдена — Existing и форма из записи (её снимок
    /// производных полей авторитетен, свежие поля образца не применяются);
    /// не найдена — New, производные поля из образца, ручные пустые.
    /// Повторный выбор полностью заменяет форму.
    pub async fn select(
        &mut self,
        sample_id: &str,
        lookup: &dyn SampleLookup,
        records: &[SampleTna],
    ) -> Result<Selection, RepositoryError> {
        let sample = lookup.get_by_sample_id(sample_id).await?;

        match records.iter().find(|t| t.sample_id == sample_id) {
            Some(existing) => {
                self.selection = Selection::Existing(existing.id);
                self.form = TnaForm::from_record(existing);
                tracing::debug!(sample_id, tna_id = existing.id.value(), "existing TNA record loaded");
            }
            None => {
                self.selection = Selection::New;
                self.form = TnaForm::from_sample(&sample);
                tracing::debug!(sample_id, "sample information loaded for new TNA record");
            }
        }
        Ok(self.selection)
    }

    /// Прямое редактирование строки списка (кнопка Edit)
    pub fn load_for_edit(&mut self, record: &SampleTna) {
        self.selection = Selection::Existing(record.id);
        self.form = TnaForm::from_record(record);
    }

    /// Сброс к пустой форме и снятие выбора
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Собрать операцию сохранения из текущего состояния.
    ///
    /// Ошибка валидации не меняет состояние: правки пользователя
    /// сохраняются для повторной попытки.
    pub fn save(&self) -> Result<SaveAction, String> {
        let target = match self.selection {
            Selection::Empty => return Err("Образец не выбран".into()),
            Selection::New => None,
            Selection::Existing(id) => Some(id),
        };

        let dto = self.form.to_dto();
        dto.validate()?;

        match target {
            None => Ok(SaveAction::Create(dto)),
            Some(id) => Ok(SaveAction::Update { id, dto }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSamples {
        by_key: HashMap<String, Sample>,
        fail: bool,
    }

    impl FakeSamples {
        fn with(samples: Vec<Sample>) -> Self {
            Self {
                by_key: samples
                    .into_iter()
                    .map(|s| (s.sample_id.clone(), s))
                    .collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                by_key: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SampleLookup for FakeSamples {
        async fn get_by_sample_id(&self, sample_id: &str) -> Result<Sample, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Transport("connection refused".into()));
            }
            self.by_key
                .get(sample_id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound {
                    entity: "sample",
                    key: sample_id.to_string(),
                })
        }
    }

    fn sample(sample_id: &str, buyer: &str, style: &str) -> Sample {
        use contracts::domain::a007_sample::aggregate::SampleId;
        Sample {
            id: SampleId::new(1),
            sample_id: sample_id.to_string(),
            buyer_name: buyer.to_string(),
            style_name: style.to_string(),
            sample_type: "Proto".into(),
            sample_description: Some("Long sleeve".into()),
            item: Some("Sweater".into()),
            gauge: Some("12GG".into()),
            worksheet_rcv_date: NaiveDate::from_ymd_opt(2025, 10, 1),
        }
    }

    fn existing_record(id: i64, sample_id: &str, color: &str) -> SampleTna {
        SampleTna {
            id: SampleTnaId::new(id),
            sample_id: sample_id.to_string(),
            buyer_name: "Stored Buyer".into(),
            style_name: "Stored Style".into(),
            sample_type: "Fit".into(),
            sample_description: None,
            item: None,
            gauge: None,
            worksheet_rcv_date: NaiveDate::from_ymd_opt(2025, 9, 15),
            yarn_rcv_date: NaiveDate::from_ymd_opt(2025, 10, 5),
            required_date: NaiveDate::from_ymd_opt(2025, 10, 25),
            color: Some(color.to_string()),
            notes: Some("rush".into()),
        }
    }

    #[tokio::test]
    async fn selecting_without_dependent_enters_new_with_empty_manual_fields() {
        let lookup = FakeSamples::with(vec![sample("S-001", "H&M", "Crewneck")]);
        let mut resolver = TnaResolver::new();

        let state = resolver.select("S-001", &lookup, &[]).await.unwrap();
        assert_eq!(state, Selection::New);

        let form = resolver.form();
        assert_eq!(form.sample_id, "S-001");
        assert_eq!(form.buyer_name, "H&M");
        assert_eq!(form.style_name, "Crewneck");
        // ручные поля пустые
        assert_eq!(form.yarn_rcv_date, None);
        assert_eq!(form.required_date, None);
        assert_eq!(form.color, "");
        assert_eq!(form.notes, "");
    }

    #[tokio::test]
    async fn save_in_new_state_issues_create_with_parent_key() {
        let lookup = FakeSamples::with(vec![sample("S-001", "H&M", "Crewneck")]);
        let mut resolver = TnaResolver::new();
        resolver.select("S-001", &lookup, &[]).await.unwrap();

        {
            let form = resolver.form_mut();
            form.yarn_rcv_date = NaiveDate::from_ymd_opt(2025, 11, 3);
            form.required_date = NaiveDate::from_ymd_opt(2025, 11, 20);
            form.color = "Navy Blue".into();
        }

        match resolver.save().unwrap() {
            SaveAction::Create(dto) => {
                assert_eq!(dto.sample_id, "S-001");
                assert_eq!(dto.color.as_deref(), Some("Navy Blue"));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn selecting_with_dependent_enters_existing_and_prefers_stored_snapshot() {
        // образец с тех пор отредактирован: его поля расходятся со снимком
        let lookup = FakeSamples::with(vec![sample("S-001", "Fresh Buyer", "Fresh Style")]);
        let records = vec![existing_record(7, "S-001", "Navy")];
        let mut resolver = TnaResolver::new();

        let state = resolver.select("S-001", &lookup, &records).await.unwrap();
        assert_eq!(state, Selection::Existing(SampleTnaId::new(7)));

        // снимок записи авторитетен, свежие поля образца не применяются
        let form = resolver.form();
        assert_eq!(form.buyer_name, "Stored Buyer");
        assert_eq!(form.style_name, "Stored Style");
        assert_eq!(form.color, "Navy");
        assert_eq!(form.notes, "rush");
    }

    #[tokio::test]
    async fn save_in_existing_state_updates_by_record_id() {
        let lookup = FakeSamples::with(vec![sample("S-001", "H&M", "Crewneck")]);
        let records = vec![existing_record(7, "S-001", "Navy")];
        let mut resolver = TnaResolver::new();
        resolver.select("S-001", &lookup, &records).await.unwrap();

        match resolver.save().unwrap() {
            SaveAction::Update { id, dto } => {
                assert_eq!(id, SampleTnaId::new(7));
                assert_eq!(dto.color.as_deref(), Some("Navy"));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_parent_fetch_leaves_state_untouched() {
        let good = FakeSamples::with(vec![sample("S-001", "H&M", "Crewneck")]);
        let mut resolver = TnaResolver::new();
        resolver.select("S-001", &good, &[]).await.unwrap();
        let before = resolver.clone();

        let bad = FakeSamples::failing();
        let err = resolver.select("S-002", &bad, &[]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Transport(_)));
        // ни состояние, ни форма не изменились
        assert_eq!(resolver, before);
    }

    #[tokio::test]
    async fn reselecting_fully_replaces_previous_form() {
        let lookup = FakeSamples::with(vec![
            sample("S-001", "H&M", "Crewneck"),
            sample("S-002", "Zara", "Cardigan"),
        ]);
        let mut resolver = TnaResolver::new();
        resolver.select("S-001", &lookup, &[]).await.unwrap();
        resolver.form_mut().notes = "leftover note".into();

        resolver.select("S-002", &lookup, &[]).await.unwrap();
        let form = resolver.form();
        assert_eq!(form.sample_id, "S-002");
        assert_eq!(form.buyer_name, "Zara");
        // от прежнего выбора не осталось ни одного поля
        assert_eq!(form.notes, "");
    }

    #[tokio::test]
    async fn reset_returns_to_empty_defaults() {
        let lookup = FakeSamples::with(vec![sample("S-001", "H&M", "Crewneck")]);
        let mut resolver = TnaResolver::new();
        resolver.select("S-001", &lookup, &[]).await.unwrap();

        resolver.reset();
        assert_eq!(resolver.selection(), Selection::Empty);
        assert_eq!(resolver.form(), &TnaForm::default());
        assert!(resolver.save().is_err());
    }

    #[test]
    fn load_for_edit_enters_existing_directly() {
        let record = existing_record(9, "S-009", "Red");
        let mut resolver = TnaResolver::new();
        resolver.load_for_edit(&record);
        assert_eq!(resolver.selection(), Selection::Existing(SampleTnaId::new(9)));
        assert_eq!(resolver.form().color, "Red");
    }

    #[test]
    fn save_validation_error_preserves_pending_edits() {
        let mut resolver = TnaResolver::new();
        resolver.load_for_edit(&existing_record(9, "S-009", "Red"));
        resolver.form_mut().yarn_rcv_date = None; // обязательное поле очищено

        let before = resolver.clone();
        assert!(resolver.save().is_err());
        assert_eq!(resolver, before);
    }
}
