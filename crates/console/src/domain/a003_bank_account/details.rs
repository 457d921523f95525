//! Форма банковских реквизитов: каскадная подстановка клиента

use contracts::domain::a001_buyer::aggregate::Buyer;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_bank_account::aggregate::BankAccountDto;
use contracts::enums::ClientType;

/// Подставить выбранного клиента в форму.
///
/// Имя клиента копируется в форму как снимок; неизвестный id оставляет
/// форму без изменений и возвращает false.
pub fn apply_client_selection(
    form: &mut BankAccountDto,
    client_type: ClientType,
    client_id: i64,
    buyers: &[Buyer],
    suppliers: &[Supplier],
) -> bool {
    let client_name = match client_type {
        ClientType::Buyer => buyers
            .iter()
            .find(|b| b.id.value() == client_id)
            .map(|b| b.buyer_name.clone()),
        ClientType::Supplier => suppliers
            .iter()
            .find(|s| s.id.value() == client_id)
            .map(|s| s.supplier_name.clone()),
    };

    match client_name {
        Some(name) => {
            form.client_type = client_type;
            form.client_id = Some(client_id);
            form.client_name = name;
            true
        }
        None => {
            tracing::debug!(
                client_type = client_type.code(),
                client_id,
                "client selection ignored: unknown id"
            );
            false
        }
    }
}
