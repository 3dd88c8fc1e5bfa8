// Domain layer: applicant field values, the applicant record, commands and
// the executor port. No I/O here.

pub mod command;
pub mod fields;
pub mod model;
pub mod ports;
