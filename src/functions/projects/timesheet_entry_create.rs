use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    field_types::{CustomFieldValue, CustomFields, DateType},
    functions::{require, require_valid_custom_fields},
    xml::XmlWriter,
};

/// One line of a timesheet being created.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetEntryCreate {
    line_no: Option<u32>,
    entry_date: Option<DateType>,
    quantity: Option<Decimal>,
    description: Option<String>,
    notes: Option<String>,
    task_record_no: Option<u64>,
    task_id: Option<String>,
    time_type: Option<String>,
    billable: Option<bool>,
    override_billing_rate: Option<Decimal>,
    override_labor_cost_rate: Option<Decimal>,
    department_id: Option<String>,
    location_id: Option<String>,
    project_id: Option<String>,
    customer_id: Option<String>,
    vendor_id: Option<String>,
    item_id: Option<String>,
    class_id: Option<String>,
    contract_id: Option<String>,
    warehouse_id: Option<String>,
    custom_fields: CustomFields,
}

impl TimesheetEntryCreate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn line_no(&self) -> Option<u32> {
        self.line_no
    }

    pub fn set_line_no(&mut self, line_no: u32) {
        self.line_no = Some(line_no);
    }

    #[must_use]
    pub fn entry_date(&self) -> Option<&DateType> {
        self.entry_date.as_ref()
    }

    pub fn set_entry_date(&mut self, entry_date: DateType) {
        self.entry_date = Some(entry_date);
    }

    #[must_use]
    pub fn quantity(&self) -> Option<Decimal> {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = Some(quantity);
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }

    #[must_use]
    pub fn task_record_no(&self) -> Option<u64> {
        self.task_record_no
    }

    pub fn set_task_record_no(&mut self, task_record_no: u64) {
        self.task_record_no = Some(task_record_no);
    }

    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn set_task_id(&mut self, task_id: impl Into<String>) {
        self.task_id = Some(task_id.into());
    }

    #[must_use]
    pub fn time_type(&self) -> Option<&str> {
        self.time_type.as_deref()
    }

    pub fn set_time_type(&mut self, time_type: impl Into<String>) {
        self.time_type = Some(time_type.into());
    }

    #[must_use]
    pub fn billable(&self) -> Option<bool> {
        self.billable
    }

    pub fn set_billable(&mut self, billable: bool) {
        self.billable = Some(billable);
    }

    #[must_use]
    pub fn override_billing_rate(&self) -> Option<Decimal> {
        self.override_billing_rate
    }

    pub fn set_override_billing_rate(&mut self, rate: Decimal) {
        self.override_billing_rate = Some(rate);
    }

    #[must_use]
    pub fn override_labor_cost_rate(&self) -> Option<Decimal> {
        self.override_labor_cost_rate
    }

    pub fn set_override_labor_cost_rate(&mut self, rate: Decimal) {
        self.override_labor_cost_rate = Some(rate);
    }

    #[must_use]
    pub fn department_id(&self) -> Option<&str> {
        self.department_id.as_deref()
    }

    pub fn set_department_id(&mut self, department_id: impl Into<String>) {
        self.department_id = Some(department_id.into());
    }

    #[must_use]
    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    pub fn set_location_id(&mut self, location_id: impl Into<String>) {
        self.location_id = Some(location_id.into());
    }

    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn set_project_id(&mut self, project_id: impl Into<String>) {
        self.project_id = Some(project_id.into());
    }

    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.customer_id = Some(customer_id.into());
    }

    #[must_use]
    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    pub fn set_vendor_id(&mut self, vendor_id: impl Into<String>) {
        self.vendor_id = Some(vendor_id.into());
    }

    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    pub fn set_item_id(&mut self, item_id: impl Into<String>) {
        self.item_id = Some(item_id.into());
    }

    #[must_use]
    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    pub fn set_class_id(&mut self, class_id: impl Into<String>) {
        self.class_id = Some(class_id.into());
    }

    #[must_use]
    pub fn contract_id(&self) -> Option<&str> {
        self.contract_id.as_deref()
    }

    pub fn set_contract_id(&mut self, contract_id: impl Into<String>) {
        self.contract_id = Some(contract_id.into());
    }

    #[must_use]
    pub fn warehouse_id(&self) -> Option<&str> {
        self.warehouse_id.as_deref()
    }

    pub fn set_warehouse_id(&mut self, warehouse_id: impl Into<String>) {
        self.warehouse_id = Some(warehouse_id.into());
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

    /// Checks the fields every entry needs.
    pub fn validate(&self) -> Result<()> {
        require(self.entry_date.is_some(), "Entry Date is required for create")?;
        require(self.quantity.is_some(), "Quantity is required for create")?;
        require_valid_custom_fields(&self.custom_fields)
    }

    /// Writes one `<TIMESHEETENTRY>` block.
    pub fn write_xml(&self, xml: &mut XmlWriter) -> Result<()> {
        self.validate()?;

        xml.start_element("TIMESHEETENTRY")?;

        xml.write_element_number("LINENO", self.line_no, false)?;
        xml.write_element_date("ENTRYDATE", self.entry_date.as_ref(), true)?;
        xml.write_element_decimal("QTY", self.quantity, true)?;
        xml.write_element("DESCRIPTION", self.description.as_deref(), false)?;
        xml.write_element("NOTES", self.notes.as_deref(), false)?;
        xml.write_element_number("TASKKEY", self.task_record_no, false)?;
        xml.write_element("TASKID", self.task_id.as_deref(), false)?;
        xml.write_element("TIMETYPE", self.time_type.as_deref(), false)?;
        xml.write_element_bool("BILLABLE", self.billable, false)?;
        xml.write_element_decimal("EXTBILLRATE", self.override_billing_rate, false)?;
        xml.write_element_decimal("EXTCOSTRATE", self.override_labor_cost_rate, false)?;
        xml.write_element("DEPARTMENTID", self.department_id.as_deref(), false)?;
        xml.write_element("LOCATIONID", self.location_id.as_deref(), false)?;
        xml.write_element("PROJECTID", self.project_id.as_deref(), false)?;
        xml.write_element("CUSTOMERID", self.customer_id.as_deref(), false)?;
        xml.write_element("VENDORID", self.vendor_id.as_deref(), false)?;
        xml.write_element("ITEMID", self.item_id.as_deref(), false)?;
        xml.write_element("CLASSID", self.class_id.as_deref(), false)?;
        xml.write_element("CONTRACTID", self.contract_id.as_deref(), false)?;
        xml.write_element("WAREHOUSEID", self.warehouse_id.as_deref(), false)?;

        xml.write_custom_fields(&self.custom_fields)?;

        xml.end_element()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{error::Error, xml::WriterConfig};

    fn entry() -> TimesheetEntryCreate {
        let mut entry = TimesheetEntryCreate::new();
        entry.set_entry_date(DateType::parse("2016-06-30").unwrap());
        entry.set_quantity(dec!(1.75));
        entry
    }

    #[test]
    fn writes_required_fields_only() {
        let mut xml = XmlWriter::with_config(&WriterConfig::compact());
        entry().write_xml(&mut xml).unwrap();

        assert_eq!(
            xml.flush().unwrap(),
            "<TIMESHEETENTRY><ENTRYDATE>06/30/2016</ENTRYDATE><QTY>1.75</QTY></TIMESHEETENTRY>"
        );
    }

    #[test]
    fn writes_optional_fields_in_schema_order() {
        // set in reverse of the schema order
        let mut entry = entry();
        entry.set_custom_field("customfield1", "customvalue1");
        entry.set_warehouse_id("W1");
        entry.set_contract_id("CN1");
        entry.set_class_id("CL1");
        entry.set_item_id("I1");
        entry.set_vendor_id("V1");
        entry.set_customer_id("C1");
        entry.set_project_id("P1");
        entry.set_location_id("L1");
        entry.set_department_id("D1");
        entry.set_override_labor_cost_rate(dec!(25.50));
        entry.set_override_billing_rate(dec!(100.00));
        entry.set_billable(true);
        entry.set_time_type("Salaried");
        entry.set_task_id("T1");
        entry.set_task_record_no(42);
        entry.set_notes("my notes");
        entry.set_description("desc");
        entry.set_line_no(1);

        let mut xml = XmlWriter::with_config(&WriterConfig::compact());
        entry.write_xml(&mut xml).unwrap();

        assert_eq!(
            xml.flush().unwrap(),
            concat!(
                "<TIMESHEETENTRY>",
                "<LINENO>1</LINENO>",
                "<ENTRYDATE>06/30/2016</ENTRYDATE>",
                "<QTY>1.75</QTY>",
                "<DESCRIPTION>desc</DESCRIPTION>",
                "<NOTES>my notes</NOTES>",
                "<TASKKEY>42</TASKKEY>",
                "<TASKID>T1</TASKID>",
                "<TIMETYPE>Salaried</TIMETYPE>",
                "<BILLABLE>true</BILLABLE>",
                "<EXTBILLRATE>100</EXTBILLRATE>",
                "<EXTCOSTRATE>25.5</EXTCOSTRATE>",
                "<DEPARTMENTID>D1</DEPARTMENTID>",
                "<LOCATIONID>L1</LOCATIONID>",
                "<PROJECTID>P1</PROJECTID>",
                "<CUSTOMERID>C1</CUSTOMERID>",
                "<VENDORID>V1</VENDORID>",
                "<ITEMID>I1</ITEMID>",
                "<CLASSID>CL1</CLASSID>",
                "<CONTRACTID>CN1</CONTRACTID>",
                "<WAREHOUSEID>W1</WAREHOUSEID>",
                "<customfield1>customvalue1</customfield1>",
                "</TIMESHEETENTRY>",
            )
        );
    }

    #[test]
    fn rejects_invalid_custom_field_names_before_writing() {
        let mut entry = entry();
        entry.set_custom_field("a><evil/><b", "x");

        let mut xml = XmlWriter::with_config(&WriterConfig::compact());
        let err = entry.write_xml(&mut xml).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(xml.flush().unwrap(), "");
    }

    #[test]
    fn requires_entry_date_then_quantity() {
        let mut entry = TimesheetEntryCreate::new();
        let err = entry.validate().unwrap_err();
        assert_eq!(err.to_string(), "Entry Date is required for create");

        entry.set_entry_date(DateType::parse("2016-06-30").unwrap());
        let mut xml = XmlWriter::new();
        let err = entry.write_xml(&mut xml).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Quantity is required for create");
        assert_eq!(xml.flush().unwrap(), "");
    }
}
