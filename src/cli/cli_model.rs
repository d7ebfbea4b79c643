use std::path::PathBuf;

use clap::{Arg, Command, command, value_parser};

use crate::log_utils::LogLevel;

pub(super) fn cli_model() -> Command {
    command!()
        .after_help("Example usage: check_design <DESIGN_FILE_IN> <DESIGN_FILE_OUT>")
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .help("Set log level"),
        )
        .next_help_heading("Input/Output")
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .value_name("DESIGN_FILE_IN")
                .help("Input design file"),
        )
        .arg(
            Arg::new("output")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .value_name("DESIGN_FILE_OUT")
                .help("Output design file"),
        )
}
