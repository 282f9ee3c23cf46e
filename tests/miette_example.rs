//! Example test showing how to use the miette integration
use intacct_rs::{
    DateType, Error,
    functions::{Function, projects::TimesheetCreate},
};
use miette::{Diagnostic, Result};


#[test]
fn miette_integration_example() -> Result<()> {
    test_utils::do_setup();

    // Validation errors carry a diagnostic code and help text
    let record = TimesheetCreate::new(Some("unittest"))?;
    let err = record
        .write_xml(&mut test_utils::document_writer())
        .unwrap_err();
    assert_eq!(
        err.code().map(|code| code.to_string()),
        Some("intacct_rs::invalid_argument".to_string())
    );
    assert!(err.help().is_some());
    assert!(err.span_trace().is_some());

    // Our Error converts into a miette report through `?`
    let parsed: std::result::Result<DateType, Error> = DateType::parse("30/06/2016");
    let report = miette::Report::new(parsed.unwrap_err());
    println!("Date error with diagnostic info: {report:?}");

    Ok(())
}
