use log::{debug, info};

use crate::adapters::process::{ProcessRunner, SystemRunner};
use crate::error::QueryError;
use crate::models::{ModelRecord, Query};
use crate::ymw16::record::parse_record;

/// Executable looked up on `PATH` when no explicit tool is given.
pub const DEFAULT_TOOL: &str = "ymw16";

/// Output mode flag and value selecting Galactic-coordinate mode.
pub const MODE_FLAG: &str = "-o";
pub const GALACTIC_MODE: &str = "Gal";

/// Trailing model sub-option. Passed through unchanged.
pub const MODEL_SUB_OPTION: &str = "1";

/// Runs the YMW16 executable once per query and parses its answer.
///
/// Each call spawns one child process and blocks until it exits. There is no
/// timeout and no retry; the invoker holds no state between calls.
#[derive(Clone, Debug)]
pub struct ModelInvoker<R = SystemRunner> {
    tool: String,
    runner: R,
}

impl ModelInvoker<SystemRunner> {
    pub fn new() -> Self {
        Self::with_tool(DEFAULT_TOOL)
    }

    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self::with_runner(tool, SystemRunner)
    }
}

impl Default for ModelInvoker<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> ModelInvoker<R> {
    pub fn with_runner(tool: impl Into<String>, runner: R) -> Self {
        Self {
            tool: tool.into(),
            runner,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Arguments following the program name: `-o Gal <gl> <gb> <dm> 1`.
    pub fn command_args(query: &Query) -> Vec<String> {
        vec![
            MODE_FLAG.to_string(),
            GALACTIC_MODE.to_string(),
            query.gl.to_string(),
            query.gb.to_string(),
            query.dm.to_string(),
            MODEL_SUB_OPTION.to_string(),
        ]
    }

    pub fn query(&self, gl: f64, gb: f64, dm: f64) -> Result<ModelRecord, QueryError> {
        self.query_with(&Query::new(gl, gb, dm))
    }

    /// Runs the tool for `query` and returns the converted record.
    ///
    /// # Errors
    /// - [`QueryError::Launch`] if the tool cannot be started
    /// - [`QueryError::Exit`] if it exits non-zero; stdout is not inspected
    /// - [`QueryError::Parse`] if stdout is not a single seven-field line
    pub fn query_with(&self, query: &Query) -> Result<ModelRecord, QueryError> {
        let args = Self::command_args(query);
        debug!("running {} {}", self.tool, args.join(" "));

        let output = self
            .runner
            .run(&self.tool, &args)
            .map_err(|source| QueryError::Launch {
                program: self.tool.clone(),
                source,
            })?;

        if !output.success {
            return Err(QueryError::Exit {
                program: self.tool.clone(),
                code: output.code,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let record = parse_record(&output.stdout)?;
        info!(
            "{}: dist {} kpc, taus {}",
            record.mode, record.dist, record.taus
        );
        Ok(record)
    }
}
