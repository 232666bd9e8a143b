use std::env::VarError;
use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, trace};

use fletcher_lib::input::Source;
use fletcher_lib::{Report, INPUT_PATH};

/// Print the Fletcher-16 checksum of GameTheory.pdf in the working directory.
///
/// A file that cannot be read is checksummed as empty input. Arguments other
/// than --help and --version are ignored.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() {
    if let Err(VarError::NotPresent) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::Builder::from_env(env_logger::Env::default())
        .try_init()
        .expect("Failed to initialize logger.");

    if let Err(err) = Cli::try_parse() {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => debug!("Ignoring command line: {:?}", err.kind()),
        }
    }

    let source = Source::File(Path::new(INPUT_PATH));
    let data = source.bytes();
    debug!("Read {} bytes from {}.", data.len(), source);

    let sum = fletcher_lib::checksum(&data);
    trace!("fletcher16 = {:#06x}", sum);

    println!("{}", Report(sum));
}
