use super::aggregate::Supplier;
use crate::shared::xml_export::{XmlExportable, XmlWriter};

impl XmlExportable for Supplier {
    const COLLECTION_TAG: &'static str = "suppliers";
    const RECORD_TAG: &'static str = "supplier";
    const FILE_NAME: &'static str = "suppliers.xml";

    fn write_fields(&self, writer: &mut XmlWriter) {
        writer.raw("id", self.id);
        writer.text("name", &self.name);
        writer.text("address", &self.address);
        writer.text("email", &self.email);
        writer.text("phone", &self.phone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::xml_export::to_xml_document;

    #[test]
    fn test_supplier_document_layout() {
        let doc = to_xml_document(&[Supplier {
            id: 8,
            name: "Alpi Carta & Co".to_string(),
            address: "Strada Statale 1".to_string(),
            email: "sales@alpicarta.it".to_string(),
            phone: String::new(),
        }]);
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "<suppliers>",
            "  <supplier>",
            "    <id>8</id>",
            "    <name>Alpi Carta &amp; Co</name>",
            "    <address>Strada Statale 1</address>",
            "    <email>sales@alpicarta.it</email>",
            "    <phone></phone>",
            "  </supplier>",
            "</suppliers>",
        ]
        .join("\n");
        assert_eq!(doc, expected);
    }
}
