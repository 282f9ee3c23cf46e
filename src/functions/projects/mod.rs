pub use self::timesheet_create::TimesheetCreate;
pub use self::timesheet_delete::TimesheetDelete;
pub use self::timesheet_entry_create::TimesheetEntryCreate;

mod timesheet_create;
mod timesheet_delete;
mod timesheet_entry_create;
