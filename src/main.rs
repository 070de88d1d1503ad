use anyhow::{Context, Result};
use iris_fixture::{build, FixtureConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = FixtureConfig::default();
    let summary = build(&config)
        .with_context(|| format!("building {}", config.output_path.display()))?;

    for (label, code, rows) in &summary.per_class {
        println!("{label} -> {code}: {rows} rows");
    }
    println!(
        "Wrote {} rows to {}",
        summary.total_rows(),
        summary.output_path.display()
    );
    Ok(())
}
