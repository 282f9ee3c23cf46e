pub use self::config::WriterConfig;
pub use self::name::is_valid_name;
pub use self::writer::XmlWriter;

mod config;
mod name;
mod writer;
