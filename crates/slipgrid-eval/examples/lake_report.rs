use std::path::PathBuf;

use slipgrid_eval::{EvalConfig, evaluate_report};
use slipgrid_mdp::compile_yaml;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/slipgrid-eval/examples/lake4x4.yaml"));

    let mdp = compile_yaml(&path).expect("failed to compile grid YAML");
    let config = EvalConfig::from_default_yaml().expect("failed to parse default config");
    let report = evaluate_report(&mdp, &config).expect("evaluation failed");

    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("failed to serialize report")
    );
}
