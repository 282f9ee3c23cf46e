use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    functions::{ControlId, Function, require, write_function},
    xml::XmlWriter,
};

/// Deletes a timesheet by record number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetDelete {
    control_id: ControlId,
    record_no: Option<u64>,
}

impl TimesheetDelete {
    /// `None` generates a random control id.
    pub fn new(control_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            control_id: ControlId::new(control_id)?,
            record_no: None,
        })
    }

    #[must_use]
    pub fn record_no(&self) -> Option<u64> {
        self.record_no
    }

    pub fn set_record_no(&mut self, record_no: u64) {
        self.record_no = Some(record_no);
    }
}

impl Function for TimesheetDelete {
    fn control_id(&self) -> &str {
        self.control_id.as_str()
    }

    fn write_xml(&self, xml: &mut XmlWriter) -> Result<()> {
        debug!("Writing timesheet delete function {}", self.control_id);
        require(self.record_no.is_some(), "Record No is required for delete")?;

        write_function(xml, &self.control_id, |xml| {
            xml.start_element("delete")?;
            xml.write_element("object", Some("TIMESHEET"), true)?;
            xml.write_element_number("keys", self.record_no, true)?;
            xml.end_element()
        })
    }
}
