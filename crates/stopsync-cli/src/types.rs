use std::path::PathBuf;

use stopsync_core::RunOutput;
use stopsync_output::OutputPaths;

/// Result of one `run` invocation, as reported to the user.
#[derive(Debug)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub output: RunOutput,
    /// Written files; `None` on a dry run.
    pub written: Option<OutputPaths>,
}
