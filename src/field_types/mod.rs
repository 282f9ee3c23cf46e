pub use self::custom_fields::{CustomFieldValue, CustomFields};
pub use self::date_type::DateType;

mod custom_fields;
mod date_type;
