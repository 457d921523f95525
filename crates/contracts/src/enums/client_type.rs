use serde::{Deserialize, Serialize};

/// Типы клиентов банковских реквизитов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Buyer,
    Supplier,
}

impl ClientType {
    /// Получить код типа клиента (значение в API)
    pub fn code(&self) -> &'static str {
        match self {
            ClientType::Buyer => "buyer",
            ClientType::Supplier => "supplier",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ClientType::Buyer => "Байер",
            ClientType::Supplier => "Поставщик",
        }
    }
}

impl Default for ClientType {
    fn default() -> Self {
        ClientType::Buyer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_lowercase_code() {
        assert_eq!(
            serde_json::to_string(&ClientType::Buyer).unwrap(),
            "\"buyer\""
        );
        assert_eq!(
            serde_json::from_str::<ClientType>("\"supplier\"").unwrap(),
            ClientType::Supplier
        );
    }
}
