use serde::{Deserialize, Serialize};

use super::TimesheetEntryCreate;
use crate::{
    error::Result,
    field_types::{CustomFieldValue, CustomFields, DateType},
    functions::{
        ControlId, Function, is_present, require, require_valid_custom_fields, write_function,
    },
    xml::XmlWriter,
};

/// Creates a project timesheet.
///
/// ```
/// use intacct_rs::{DateType, XmlWriter};
/// use intacct_rs::functions::{Function, projects::{TimesheetCreate, TimesheetEntryCreate}};
/// use rust_decimal::Decimal;
///
/// let mut entry = TimesheetEntryCreate::new();
/// entry.set_entry_date(DateType::parse("2016-06-30")?);
/// entry.set_quantity(Decimal::new(175, 2));
///
/// let mut record = TimesheetCreate::new(Some("unittest"))?;
/// record.set_employee_id("E1234");
/// record.set_begin_date(DateType::parse("2016-06-30")?);
/// record.set_entries(vec![entry]);
///
/// let mut xml = XmlWriter::new();
/// record.write_xml(&mut xml)?;
/// assert!(xml.flush()?.contains("<QTY>1.75</QTY>"));
/// # Ok::<(), intacct_rs::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetCreate {
    control_id: ControlId,
    employee_id: Option<String>,
    begin_date: Option<DateType>,
    description: Option<String>,
    attachments_id: Option<String>,
    action: Option<String>,
    entries: Vec<TimesheetEntryCreate>,
    custom_fields: CustomFields,
}

impl TimesheetCreate {
    /// `None` generates a random control id.
    pub fn new(control_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            control_id: ControlId::new(control_id)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn set_employee_id(&mut self, employee_id: impl Into<String>) {
        self.employee_id = Some(employee_id.into());
    }

    #[must_use]
    pub fn begin_date(&self) -> Option<&DateType> {
        self.begin_date.as_ref()
    }

    pub fn set_begin_date(&mut self, begin_date: DateType) {
        self.begin_date = Some(begin_date);
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Supporting document id, written as `SUPDOCID`.
    #[must_use]
    pub fn attachments_id(&self) -> Option<&str> {
        self.attachments_id.as_deref()
    }

    pub fn set_attachments_id(&mut self, attachments_id: impl Into<String>) {
        self.attachments_id = Some(attachments_id.into());
    }

    /// Timesheet state such as `Draft` or `Submitted`, written as `STATE`.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = Some(action.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[TimesheetEntryCreate] {
        &self.entries
    }

    pub fn set_entries(&mut self, entries: Vec<TimesheetEntryCreate>) {
        self.entries = entries;
    }

    pub fn add_entry(&mut self, entry: TimesheetEntryCreate) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    pub fn set_custom_fields(&mut self, custom_fields: CustomFields) {
        self.custom_fields = custom_fields;
    }

    pub fn set_custom_field(&mut self, name: impl Into<String>, value: impl Into<CustomFieldValue>) {
        self.custom_fields.set(name, value);
    }

    fn validate(&self) -> Result<()> {
        require(
            is_present(self.employee_id.as_deref()),
            "Employee ID is required for create",
        )?;
        require(
            self.begin_date.is_some(),
            "Begin Date is required for create",
        )?;
        require(
            !self.entries.is_empty(),
            "Timesheet must have at least 1 entry",
        )?;
        for entry in &self.entries {
            entry.validate()?;
        }
        require_valid_custom_fields(&self.custom_fields)
    }
}

impl Function for TimesheetCreate {
    fn control_id(&self) -> &str {
        self.control_id.as_str()
    }

    fn write_xml(&self, xml: &mut XmlWriter) -> Result<()> {
        debug!("Writing timesheet create function {}", self.control_id);
        self.validate()?;

        write_function(xml, &self.control_id, |xml| {
            xml.start_element("create")?;
            xml.start_element("TIMESHEET")?;

            xml.write_element("EMPLOYEEID", self.employee_id.as_deref(), true)?;
            xml.write_element_date("BEGINDATE", self.begin_date.as_ref(), true)?;
            xml.write_element("DESCRIPTION", self.description.as_deref(), false)?;
            xml.write_element("SUPDOCID", self.attachments_id.as_deref(), false)?;
            xml.write_element("STATE", self.action.as_deref(), false)?;

            xml.start_element("TIMESHEETENTRIES")?;
            for entry in &self.entries {
                entry.write_xml(xml)?;
            }
            xml.end_element()?; // TIMESHEETENTRIES

            xml.write_custom_fields(&self.custom_fields)?;

            xml.end_element()?; // TIMESHEET
            xml.end_element() // create
        })?;

        trace!(
            "Wrote timesheet create function {} with {} entries",
            self.control_id,
            self.entries.len()
        );
        Ok(())
    }
}
