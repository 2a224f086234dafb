mod enumeration;
mod field;
mod record;
mod types;

pub(crate) use enumeration::ParsedEnumeration;
pub(crate) use record::ParsedRecord;
