//! Duck typing without reflection: probe objects for a callable member and
//! list the members they expose.

pub mod driver;
pub mod inspect;
pub mod logger;
pub mod object;
pub mod output;
pub mod probe;
pub mod samples;
pub mod types;

pub use driver::{run, RunOptions};
pub use inspect::{inspect, report};
pub use object::{Attr, Object};
pub use probe::{probe, Outcome};
