use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::inspect;
use crate::object::Object;
use crate::probe::probe;
use crate::samples::{Car, Cow, Duck};

/// Settings for one run of the demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Member to probe on every sample
    pub member: String,
    /// Print inspector reports as JSON
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            member: "sound".to_string(),
            json: false,
        }
    }
}

/// Probe the three emitters and an empty sequence, then inspect the duck and
/// the sequence.
pub fn run(opts: &RunOptions, out: &mut dyn Write) -> Result<()> {
    debug!(member = %opts.member, json = opts.json, "starting run");

    let duck = Duck;
    let cow = Cow;
    let car = Car;
    let empty: Vec<Box<dyn Object>> = Vec::new();

    probe(&duck, &opts.member, out)?;
    probe(&cow, &opts.member, out)?;
    probe(&car, &opts.member, out)?;
    probe(&empty, &opts.member, out)?;

    list_object(&duck, opts.json, out)?;
    list_object(&empty, opts.json, out)?;

    Ok(())
}

fn list_object(obj: &dyn Object, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        inspect::inspect_json(obj, out)
    } else {
        inspect::inspect(obj, out)
    }
}
