//! Record and diagnostic serialization.

use clf2tab_core::{FieldFailure, ValidatedRecord};
use std::io::{self, Write};

/// Write `record` as one tab-separated line.
pub fn write_record<W: Write>(out: &mut W, record: &ValidatedRecord) -> io::Result<()> {
    let mut fields = record.iter();
    if let Some(first) = fields.next() {
        out.write_all(first.as_bytes())?;
        for field in fields {
            out.write_all(b"\t")?;
            out.write_all(field.as_bytes())?;
        }
    }
    out.write_all(b"\n")
}

/// Write the diagnostic for a rejected line: `Error "<reason>" on line: <line>`.
pub fn write_rejection<W: Write>(err: &mut W, failure: &FieldFailure, line: &str) -> io::Result<()> {
    writeln!(err, "Error \"{failure}\" on line: {line}")
}
