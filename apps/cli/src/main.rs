use awardflow_cli::{config::Config, init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?.with_args(std::env::args().skip(1));
    init_tracing(&config.log_format);

    let report = run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
