use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Категория клиента
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCategory {
    pub code: String,
    pub description: String,
}

impl CustomerCategory {
    /// Текст колонки «Категория»: `"<code> - <description>"`
    pub fn display(&self) -> String {
        format!("{} - {}", self.code, self.description)
            .trim()
            .to_string()
    }
}

// ============================================================================
// List row
// ============================================================================

/// Строка списка клиентов (ответ `GET /api/customers/list`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    #[serde(default)]
    pub customer_category: Option<CustomerCategory>,
}

impl Customer {
    /// Текст колонки категории; пустая строка, если категории нет
    pub fn category_display(&self) -> String {
        self.customer_category
            .as_ref()
            .map(CustomerCategory::display)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = r#"{
            "id": 3,
            "name": "Acme",
            "address": "Via Roma 1",
            "email": "info@acme.it",
            "phone": "011 123",
            "iban": "IT60X0542811101000000123456",
            "customerCategory": { "code": "GD", "description": "Grande distribuzione" }
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, 3);
        assert_eq!(customer.category_display(), "GD - Grande distribuzione");
    }

    #[test]
    fn test_missing_or_null_category() {
        let missing = r#"{"id":1,"name":"a","address":"","email":"","phone":"","iban":""}"#;
        let null = r#"{"id":1,"name":"a","address":"","email":"","phone":"","iban":"","customerCategory":null}"#;
        let a: Customer = serde_json::from_str(missing).unwrap();
        let b: Customer = serde_json::from_str(null).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.category_display(), "");
    }
}
