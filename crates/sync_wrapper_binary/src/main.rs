use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::path::PathBuf;

use extract_bytecode::extract_bytecode;
use update_binary_constant::update_binary_constant;

// Defaults match the layout produced by the contract compilation step.
const DEFAULT_BIN_PATH: &str = "target/contracts/DocumentNotarization.bin";
const DEFAULT_JAVA_PATH: &str =
    "src/main/java/com/notarize/contracts/DocumentNotarization.java";

fn main() -> Result<()> {
    let matches = Command::new("sync_wrapper_binary")
        .version("0.1.0")
        .about("Syncs compiled contract bytecode into the generated wrapper's BINARY constant")
        .arg(
            Arg::new("bin_path")
                .long("bin-path")
                .num_args(1)
                .default_value(DEFAULT_BIN_PATH)
                .help("Path to the compiled .bin bytecode file"),
        )
        .arg(
            Arg::new("java_path")
                .long("java-path")
                .num_args(1)
                .default_value(DEFAULT_JAVA_PATH)
                .help("Path to the generated Java wrapper file to update"),
        )
        .get_matches();

    let bin_path = PathBuf::from(matches.get_one::<String>("bin_path").unwrap());
    let java_path = PathBuf::from(matches.get_one::<String>("java_path").unwrap());

    let bytecode = extract_bytecode(&bin_path)?;

    let content = fs::read_to_string(&java_path)
        .with_context(|| format!("Error reading wrapper file {}", java_path.display()))?;
    let new_content = update_binary_constant(&content, &bytecode);

    fs::write(&java_path, new_content)
        .with_context(|| format!("Error writing wrapper file {}", java_path.display()))?;

    println!("Successfully updated BINARY in {}", java_path.display());
    Ok(())
}
