#[cfg(feature = "cli")]
pub mod cli;
pub mod process;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_logging, print_output};
    use crate::ymw16::invoker::ModelInvoker;

    let args = Args::parse();
    init_logging(&args.log_config())?;

    let invoker = ModelInvoker::with_tool(args.tool.as_str());
    let record = invoker.query(args.gl, args.gb, args.dm)?;

    print_output(&record, &args)?;

    Ok(())
}
