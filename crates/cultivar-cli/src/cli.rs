use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

use cultivar_classifiers::artifact::DEFAULT_ARTIFACT_PATH;

use crate::serve::input::DEFAULT_PORT;

fn artifact_arg() -> Arg {
    Arg::new("artifact")
        .short('a')
        .long("artifact")
        .help("Path to the trained model artifact (JSON)")
        .default_value(DEFAULT_ARTIFACT_PATH)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

/// The `cultivar` command line.
pub fn cli() -> Command {
    Command::new("cultivar")
        .version(clap::crate_version!())
        .about("\u{1F377} Wine cultivar prediction from chemical measurements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Serve the prediction form over HTTP on 0.0.0.0")
                .arg(artifact_arg())
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .env("PORT")
                        .help(format!("Port to listen on [default: {DEFAULT_PORT}]"))
                        .value_parser(clap::value_parser!(u16)),
                ),
        )
        .subcommand(
            Command::new("predict")
                .about("Predict every row of a CSV/TSV file and write a TSV to stdout")
                .arg(artifact_arg())
                .arg(
                    Arg::new("samples")
                        .help("CSV or TSV file whose header names the features")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Load the artifact and print a JSON summary")
                .arg(artifact_arg()),
        )
}
