//! Calendar file export (RFC 5545).

mod generate;

pub use generate::generate_calendar_ics;
