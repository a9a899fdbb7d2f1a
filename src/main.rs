mod cli;

use clap::Parser;
use cli::Args;
use std::path::Path;
use std::process;
use yum_deps::prelude::*;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Prints the message, then exits 0 for --help/--version and 2 for usage errors
        Err(e) => e.exit(),
    };

    let diagnostics = StderrDiagnostics::new(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(e) = run(&args, &diagnostics) {
        let mut message = e.to_string();

        // Display error chain
        for cause in e.chain().skip(1) {
            message.push_str(&format!("\n\nCaused by: {}", cause));
        }

        diagnostics.fail(&message);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: &Args, startup_diagnostics: &StderrDiagnostics) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path, startup_diagnostics)?),
        None => discover_config(Path::new("."), startup_diagnostics)?,
    };
    let options = args.resolve(config.as_ref())?;

    // The config file may have raised the verbosity
    let diagnostics = StderrDiagnostics::new(options.verbosity);

    let use_case = BuildDependencyModelUseCase::new(FileSystemReader::new(), &diagnostics);
    let model = use_case.execute(&ReportRequest::from_input_root(&options.input_root))?;

    diagnostics.debug(FormatterFactory::progress_message(options.output_format));
    let formatter = FormatterFactory::create(options.output_format);
    let output = formatter.format(&model, options.include_external)?;

    StdoutPresenter::new().present(&output)
}
