use anyhow::Context;
use clap::Parser;

mod config;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "sweep-config")]
#[command(about = "Extract benchmark sweep fields from a JSON config", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file.
    config: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("read config file {}", cli.config))?;
    let cfg: config::SweepConfig =
        serde_json::from_str(&text).with_context(|| format!("parse config file {}", cli.config))?;

    // Shell callers split on ';' then on ','; no trailing newline.
    print!("{}", cfg.render_line());

    Ok(())
}
