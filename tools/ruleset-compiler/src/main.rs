use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use phonos_protocol::RuleSet;
use phonos_scanner::parse_rules;
use rkyv::ser::{serializers::AllocSerializer, Serializer};

#[derive(Parser)]
#[command(author, version, about = "Compiles a rule-set source (JSON or .rules) to an rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("📖 Reading rules from {:?}...", cli.input);
    // Non-UTF-8 input fails here, before any rule is interpreted.
    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {:?}", cli.input))?;

    let ruleset: RuleSet = if cli.input.extension().is_some_and(|e| e == "json") {
        let ruleset: RuleSet =
            serde_json::from_str(&input_data).context("parsing JSON rule set")?;
        ruleset.validate()?;
        ruleset
    } else {
        parse_rules(&input_data).context("parsing .rules source")?
    };

    println!(
        "⚙️  Compiling rule set version {} with {} rules...",
        ruleset.version,
        ruleset.rules.len()
    );

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&ruleset)
        .expect("Failed to rkyv serialize");
    let bytes = serializer.into_serializer().into_inner();

    fs::write(&cli.output, bytes).with_context(|| format!("writing {:?}", cli.output))?;

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}
