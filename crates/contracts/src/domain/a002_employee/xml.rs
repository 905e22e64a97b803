use super::aggregate::Employee;
use crate::shared::xml_export::{XmlExportable, XmlWriter};

impl XmlExportable for Employee {
    const COLLECTION_TAG: &'static str = "employees";
    const RECORD_TAG: &'static str = "employee";
    const FILE_NAME: &'static str = "employees.xml";

    fn write_fields(&self, writer: &mut XmlWriter) {
        writer.raw("id", self.id);
        writer.text("firstName", &self.first_name);
        writer.text("lastName", &self.last_name);
        writer.text("address", &self.address);
        writer.text("email", &self.email);
        writer.text("phone", &self.phone);
    }
}
