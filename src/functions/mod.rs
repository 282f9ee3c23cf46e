use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    field_types::CustomFields,
    xml::{XmlWriter, is_valid_name},
};

pub mod projects;

const CONTROL_ID_MAX_LENGTH: usize = 256;

/// One operation submitted to the Intacct XML API.
///
/// Implementors validate their required fields and then write themselves as a
/// `<function controlid="...">` block into the shared writer. Validation
/// happens before anything is written, so a failed call leaves the writer
/// untouched.
pub trait Function {
    fn control_id(&self) -> &str;

    fn write_xml(&self, xml: &mut XmlWriter) -> Result<()>;
}

/// Caller supplied identifier echoed back in the API response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ControlId(String);

impl ControlId {
    /// Uses `id` when given, otherwise generates a random UUID.
    pub fn new(id: Option<&str>) -> Result<Self> {
        match id {
            Some(id) => Self::try_from(id.to_string()),
            None => Ok(Self::generate()),
        }
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::generate()
    }
}

impl TryFrom<String> for ControlId {
    type Error = Error;

    fn try_from(id: String) -> Result<Self> {
        let length = id.chars().count();
        if length == 0 || length > CONTROL_ID_MAX_LENGTH {
            return Err(Error::invalid_argument(
                "Function control ID must be between 1 and 256 characters in length.",
            ));
        }
        Ok(Self(id))
    }
}

impl From<ControlId> for String {
    fn from(id: ControlId) -> Self {
        id.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fails with an invalid argument error carrying `message` unless `condition`
/// holds.
pub(crate) fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        debug!("Function validation failed: {}", message);
        Err(Error::invalid_argument(message))
    }
}

/// Whether a required text field holds a non-empty value.
pub(crate) fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Every custom field name must be usable as an element name.
pub(crate) fn require_valid_custom_fields(fields: &CustomFields) -> Result<()> {
    for (name, _) in fields.iter() {
        require(
            is_valid_name(name),
            &format!("Custom field name `{name}` is not a valid XML element name"),
        )?;
    }
    Ok(())
}

/// Wraps `body` in the `<function controlid="...">` envelope.
///
/// If `body` fails, every element opened since the envelope started is
/// closed again before the error is returned, so the writer's element stack
/// is back where it was. Whatever `body` wrote stays in the buffer.
pub(crate) fn write_function<F>(xml: &mut XmlWriter, control_id: &ControlId, body: F) -> Result<()>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let depth = xml.depth();
    xml.start_element_with_attributes("function", [("controlid", control_id.as_str())])?;
    if let Err(e) = body(xml) {
        error!("Error writing function {}: {:?}", control_id, e);
        xml.end_elements_to(depth)?;
        return Err(e);
    }
    xml.end_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_a_uuid_when_no_id_is_given() {
        let id = ControlId::new(None).unwrap();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn keeps_a_supplied_id() {
        let id = ControlId::new(Some("unittest")).unwrap();
        assert_eq!(id.as_str(), "unittest");
    }

    #[test]
    fn rejects_empty_and_overlong_ids() {
        let expected = "Function control ID must be between 1 and 256 characters in length.";

        let err = ControlId::new(Some("")).unwrap_err();
        assert_eq!(err.to_string(), expected);

        let long = "x".repeat(257);
        let err = ControlId::new(Some(&long)).unwrap_err();
        assert_eq!(err.message(), Some(expected));

        assert!(ControlId::new(Some(&"x".repeat(256))).is_ok());
    }

    #[test]
    fn require_reports_the_given_message() {
        assert!(require(true, "unused").is_ok());
        let err = require(false, "Thing is required").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Thing is required");
    }

    #[test]
    fn rejects_custom_field_names_that_are_not_xml_names() {
        let mut fields = CustomFields::new();
        fields.set("customfield1", "ok");
        assert!(require_valid_custom_fields(&fields).is_ok());

        fields.set("a><evil/><b", "x");
        let err = require_valid_custom_fields(&fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Custom field name `a><evil/><b` is not a valid XML element name"
        );
    }

    #[test]
    fn failed_body_leaves_the_element_stack_balanced() {
        let mut xml = XmlWriter::with_config(&crate::xml::WriterConfig::compact());
        xml.start_element("request").unwrap();
        let control_id = ControlId::new(Some("unittest")).unwrap();

        let err = write_function(&mut xml, &control_id, |xml| {
            xml.start_element("create")?;
            xml.start_element("TIMESHEET")?;
            Err(Error::Xml("boom".to_string()))
        })
        .unwrap_err();

        assert!(matches!(err, Error::Xml(ref message) if message == "boom"));
        assert_eq!(xml.depth(), 1);
        xml.end_element().unwrap();
        assert_eq!(
            xml.flush().unwrap(),
            "<request><function controlid=\"unittest\"><create><TIMESHEET></TIMESHEET></create></function></request>"
        );
    }

    #[test]
    fn blank_text_is_not_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some("E1")));
    }
}
