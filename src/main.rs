use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::debug;
use nscale::{
    open_mirror, ErrorKind, MirrorStatus, OutputFormat, ScaleError, ScaleOutput, ScaleRequest,
    ScaleTable, USAGE,
};

fn run(request: &ScaleRequest) -> Result<MirrorStatus, ScaleError> {
    // Open before computing so a bad path is reported ahead of the table.
    let mirror = request.output_path().and_then(open_mirror);

    let table = ScaleTable::from_request(request);
    debug!(
        "base frequency {} Hz, ratio {} over {} notes",
        table.base_frequency(),
        table.ratio(),
        table.note_count()
    );

    let output = ScaleOutput::new(io::stdout().lock(), mirror);
    output.write_table(&table, OutputFormat::from_flag(request.emit_intervals()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let request = match ScaleRequest::from_args(std::env::args_os().skip(1)) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.kind() == ErrorKind::Usage {
                eprintln!("{}", USAGE);
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&request) {
        Ok(status) => {
            debug!("mirror file: {:?}", status);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
