use std::env;

use recipes_etl::{run_etl, EtlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional config file name, without extension; "config" resolves to
    // config.toml in the working directory.
    let args: Vec<String> = env::args().collect();
    let config_name = args.get(1).map(String::as_str).unwrap_or("config");

    let config = EtlConfig::load(config_name)?;
    run_etl(&config)?;

    Ok(())
}
