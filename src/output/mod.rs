mod formatter;
mod record;

pub use formatter::{JsonOutput, OutputFormatter};
pub use record::FileRecord;
