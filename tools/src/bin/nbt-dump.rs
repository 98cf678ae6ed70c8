use std::path::Path;

use clap::{App, Arg};
use env_logger::Env;
use log::error;
use nbtree::DecodeOptions;
use nbtree_tools::{dump, load, Format, Result};

//
// Dump an NBT file, such as level.dat, as an indented tree. Gzip compressed
// and uncompressed files are both accepted.
//

fn run(input: &Path, output: Option<&Path>, format: Format, trace: bool) -> Result<()> {
    let tag = load(input, DecodeOptions::new().trace(trace))?;

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            dump(&tag, format, std::io::BufWriter::new(file))
        }
        None => dump(&tag, format, std::io::stdout().lock()),
    }
}

fn main() {
    let matches = App::new("nbt-dump")
        .about("Print the tree stored in an NBT file")
        .arg(
            Arg::with_name("input")
                .help("NBT file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("file to write the dump to, instead of stdout")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("dump as JSON rather than the text tree"),
        )
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .takes_value(false)
                .help("log every tag as it is decoded"),
        )
        .get_matches();

    let trace = matches.is_present("trace");
    let filter = if trace { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    // Required by clap, so always present.
    let input = Path::new(matches.value_of("input").unwrap_or_default());
    if !input.exists() {
        error!("input file {} doesn't exist", input.display());
        std::process::exit(1);
    }

    let output = matches.value_of("output").map(Path::new);
    let format = if matches.is_present("json") {
        Format::Json
    } else {
        Format::Text
    };

    if let Err(e) = run(input, output, format, trace) {
        error!("{}", e);
        std::process::exit(1);
    }
}
