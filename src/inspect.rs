use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::object::Object;
use crate::output;
use crate::types::ObjectReport;

// Collect the type name and member list of an object
pub fn report(obj: &dyn Object) -> ObjectReport {
    let report = ObjectReport {
        type_name: obj.type_name().to_string(),
        members: obj.members(),
    };
    debug!(type_name = %report.type_name, members = report.members.len(), "inspected object");
    report
}

/// Print the object's type name, then the names of its members
pub fn inspect(obj: &dyn Object, out: &mut dyn Write) -> Result<()> {
    output::output_text(&report(obj), out)
}

pub fn inspect_json(obj: &dyn Object, out: &mut dyn Write) -> Result<()> {
    output::output_json(&report(obj), out)
}
