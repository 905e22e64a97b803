//! XML rendering of list rows for the "Export XML" download.
//!
//! The document is built line by line: declaration, plural root element,
//! one singular element per record and one leaf per field, indented with two
//! spaces per level. Only the five reserved characters are escaped.

use std::fmt::Display;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const XML_MIME_TYPE: &str = "application/xml";

/// A record type that can be written to an XML export.
pub trait XmlExportable {
    /// Root element, e.g. `customers`.
    const COLLECTION_TAG: &'static str;
    /// Per-record element, e.g. `customer`.
    const RECORD_TAG: &'static str;
    /// Name offered to the browser for the download.
    const FILE_NAME: &'static str;

    /// Writes the record's children in their fixed order.
    fn write_fields(&self, writer: &mut XmlWriter);
}

/// Escapes `&`, `<`, `>`, `"` and `'`. Ampersands in the input are escaped
/// exactly once; every other character is copied unchanged.
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Line-oriented writer used by [`XmlExportable::write_fields`].
#[derive(Debug, Default)]
pub struct XmlWriter {
    lines: Vec<String>,
    depth: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }

    pub fn open(&mut self, tag: &str) {
        self.push_line(format!("<{tag}>"));
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.push_line(format!("</{tag}>"));
    }

    /// Leaf with an escaped text value.
    pub fn text(&mut self, tag: &str, value: &str) {
        self.push_line(format!("<{tag}>{}</{tag}>", escape_xml(value)));
    }

    /// Leaf written verbatim, for numbers.
    pub fn raw(&mut self, tag: &str, value: impl Display) {
        self.push_line(format!("<{tag}>{value}</{tag}>"));
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Renders a full document for `records`, keeping their order.
pub fn to_xml_document<T: XmlExportable>(records: &[T]) -> String {
    let mut writer = XmlWriter::new();
    writer.lines.push(XML_DECLARATION.to_string());
    writer.open(T::COLLECTION_TAG);
    for record in records {
        writer.open(T::RECORD_TAG);
        record.write_fields(&mut writer);
        writer.close(T::RECORD_TAG);
    }
    writer.close(T::COLLECTION_TAG);
    writer.finish()
}

/// A ready-to-download file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

pub fn export_document<T: XmlExportable>(records: &[T]) -> ExportFile {
    ExportFile {
        file_name: T::FILE_NAME,
        mime_type: XML_MIME_TYPE,
        content: to_xml_document(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag {
        id: i32,
        label: String,
    }

    impl XmlExportable for Tag {
        const COLLECTION_TAG: &'static str = "tags";
        const RECORD_TAG: &'static str = "tag";
        const FILE_NAME: &'static str = "tags.xml";

        fn write_fields(&self, writer: &mut XmlWriter) {
            writer.raw("id", self.id);
            writer.text("label", &self.label);
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("O'Brien & Sons <Ltd>"),
            "O&apos;Brien &amp; Sons &lt;Ltd&gt;"
        );
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml("tab\there"), "tab\there");
    }

    #[test]
    fn test_escape_matches_ordered_replacement() {
        let input = r#"<a href="x">Tom & 'Jerry'</a> &lt;"#;
        let chained = input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;");
        assert_eq!(escape_xml(input), chained);
    }

    #[test]
    fn test_document_layout() {
        let doc = to_xml_document(&[Tag {
            id: 7,
            label: "a<b".to_string(),
        }]);
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "<tags>",
            "  <tag>",
            "    <id>7</id>",
            "    <label>a&lt;b</label>",
            "  </tag>",
            "</tags>",
        ]
        .join("\n");
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_empty_document_has_only_root() {
        let doc = to_xml_document::<Tag>(&[]);
        assert_eq!(doc, format!("{XML_DECLARATION}\n<tags>\n</tags>"));
    }

    #[test]
    fn test_export_document_metadata() {
        let file = export_document::<Tag>(&[]);
        assert_eq!(file.file_name, "tags.xml");
        assert_eq!(file.mime_type, "application/xml");
        assert!(file.content.starts_with(XML_DECLARATION));
    }
}
