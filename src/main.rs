#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use std::process::ExitCode;

mod cli;
mod design;
mod log_utils;
mod process;

use design::HeaderMismatch;

fn main() -> anyhow::Result<ExitCode> {
    let cfg = cli::handle_cli()?;
    match process::reformat(&cfg) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast::<HeaderMismatch>() {
            // Header problems are reported on stdout, everything else goes through anyhow
            Ok(h) => {
                println!("{}", h);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },
    }
}
