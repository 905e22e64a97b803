use super::aggregate::Customer;
use crate::shared::xml_export::{XmlExportable, XmlWriter};

impl XmlExportable for Customer {
    const COLLECTION_TAG: &'static str = "customers";
    const RECORD_TAG: &'static str = "customer";
    const FILE_NAME: &'static str = "customers.xml";

    fn write_fields(&self, writer: &mut XmlWriter) {
        writer.raw("id", self.id);
        writer.text("name", &self.name);
        writer.text("address", &self.address);
        writer.text("email", &self.email);
        writer.text("phone", &self.phone);
        writer.text("iban", &self.iban);
        // no placeholder element when the category is absent
        if let Some(category) = &self.customer_category {
            writer.open("customerCategory");
            writer.text("code", &category.code);
            writer.text("description", &category.description);
            writer.close("customerCategory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::CustomerCategory;
    use crate::shared::xml_export::to_xml_document;

    fn customer(category: Option<CustomerCategory>) -> Customer {
        Customer {
            id: 42,
            name: "O'Brien & Sons <Ltd>".to_string(),
            address: "1 Main St".to_string(),
            email: "ob@example.com".to_string(),
            phone: "555-0100".to_string(),
            iban: "IE29AIBK93115212345678".to_string(),
            customer_category: category,
        }
    }

    #[test]
    fn test_customer_without_category_has_no_category_element() {
        let doc = to_xml_document(&[customer(None)]);
        assert!(doc.contains("<customer>"));
        assert!(!doc.contains("customerCategory"));
        assert!(doc.contains("<name>O&apos;Brien &amp; Sons &lt;Ltd&gt;</name>"));
        assert!(doc.contains("<id>42</id>"));
    }

    #[test]
    fn test_customer_with_category() {
        let doc = to_xml_document(&[customer(Some(CustomerCategory {
            code: "R&D".to_string(),
            description: "Research".to_string(),
        }))]);
        let expected_tail = [
            "    <iban>IE29AIBK93115212345678</iban>",
            "    <customerCategory>",
            "      <code>R&amp;D</code>",
            "      <description>Research</description>",
            "    </customerCategory>",
            "  </customer>",
            "</customers>",
        ]
        .join("\n");
        assert!(doc.ends_with(&expected_tail), "{doc}");
    }
}
