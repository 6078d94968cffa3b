mod cleaner;

pub use cleaner::{clean_json_schema, SUPPORTED_STRING_FORMATS};
