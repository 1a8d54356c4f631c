//! Command-line configuration.

use clap::Parser;
use valuetable_runtime::{Cli, Mode, OutputFormat};

use crate::{SAMPLE_CSV, dataset};

#[test]
fn cli_configures_a_working_engine() {
    let file = dataset(SAMPLE_CSV);
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "valuetable",
        "--dataset",
        path,
        "--json",
        "--alias",
        "<:ice:1>=Frost Aura",
        "value",
        "<:ice:1>",
    ])
    .unwrap();

    let config = cli.config();
    assert_eq!(config.output, OutputFormat::Json);
    let Mode::Once(line) = cli.mode() else {
        panic!("expected a single command");
    };
    let (engine, _) = config.load_engine().unwrap();
    assert!(engine.run(&line).is_ok());
}

#[test]
fn dataset_flag_overrides_default() {
    let cli = Cli::try_parse_from(["valuetable", "-d", "other.csv", "-b"]).unwrap();
    assert_eq!(cli.mode(), Mode::Batch);
    assert_eq!(cli.config().dataset.to_str(), Some("other.csv"));
}
