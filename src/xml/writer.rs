use std::fmt::Display;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use rust_decimal::Decimal;

use super::{WriterConfig, is_valid_name};
use crate::{
    error::{Error, Result},
    field_types::{CustomFields, DateType},
};

fn xml<E: Display>(e: E) -> Error {
    Error::Xml(e.to_string())
}

fn check_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::Xml(format!("`{name}` is not a valid xml name")))
    }
}

/// Streaming, in-memory XML writer that function objects serialize into.
///
/// Elements are opened and closed in stack order; [`XmlWriter::flush`]
/// hands back everything written so far.
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
    open: Vec<String>,
}

impl XmlWriter {
    /// An indented writer using four spaces per level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WriterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &WriterConfig) -> Self {
        let writer = if config.indent {
            Writer::new_with_indent(Vec::new(), config.indent_char, config.indent_size)
        } else {
            Writer::new(Vec::new())
        };
        Self {
            writer,
            open: Vec::new(),
        }
    }

    /// Writes the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub fn start_document(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml)
    }

    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.start_element_with_attributes(name, std::iter::empty::<(&str, &str)>())
    }

    pub fn start_element_with_attributes<'a, I>(&mut self, name: &str, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        check_name(name)?;
        let mut start = BytesStart::new(name);
        for (key, value) in attributes {
            check_name(key)?;
            start.push_attribute((key, value));
        }
        self.writer.write_event(Event::Start(start)).map_err(xml)?;
        self.open.push(name.to_string());
        Ok(())
    }

    /// Closes the most recently opened element.
    pub fn end_element(&mut self) -> Result<()> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| Error::Xml("no open element to close".to_string()))?;
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml)
    }

    /// Writes `<name>value</name>`.
    ///
    /// A `None` value is skipped entirely unless `write_null` is set, in which
    /// case an empty element is written instead.
    pub fn write_element(&mut self, name: &str, value: Option<&str>, write_null: bool) -> Result<()> {
        if value.is_none() && !write_null {
            return Ok(());
        }
        self.start_element(name)?;
        if let Some(text) = value {
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml)?;
        }
        self.end_element()
    }

    pub fn write_element_date(
        &mut self,
        name: &str,
        value: Option<&DateType>,
        write_null: bool,
    ) -> Result<()> {
        let formatted = value.map(DateType::format).transpose()?;
        self.write_element(name, formatted.as_deref(), write_null)
    }

    /// Writes a decimal without trailing zeros, e.g. `1.75` or `2`.
    pub fn write_element_decimal(
        &mut self,
        name: &str,
        value: Option<Decimal>,
        write_null: bool,
    ) -> Result<()> {
        let formatted = value.map(|number| number.normalize().to_string());
        self.write_element(name, formatted.as_deref(), write_null)
    }

    pub fn write_element_bool(&mut self, name: &str, value: Option<bool>, write_null: bool) -> Result<()> {
        let formatted = value.map(|flag| if flag { "true" } else { "false" });
        self.write_element(name, formatted, write_null)
    }

    pub fn write_element_number<N: Display>(
        &mut self,
        name: &str,
        value: Option<N>,
        write_null: bool,
    ) -> Result<()> {
        let formatted = value.map(|number| number.to_string());
        self.write_element(name, formatted.as_deref(), write_null)
    }

    /// Writes one element per custom field, named after its key.
    pub fn write_custom_fields(&mut self, fields: &CustomFields) -> Result<()> {
        for (name, value) in fields.iter() {
            self.write_element(name, Some(&value.to_string()), true)?;
        }
        Ok(())
    }

    /// Number of elements currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Closes open elements until only `depth` remain.
    pub fn end_elements_to(&mut self, depth: usize) -> Result<()> {
        while self.open.len() > depth {
            self.end_element()?;
        }
        Ok(())
    }

    /// Returns the buffered output and empties the buffer.
    pub fn flush(&mut self) -> Result<String> {
        let buffer = std::mem::take(self.writer.get_mut());
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
