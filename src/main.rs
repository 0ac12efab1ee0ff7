use clap::Parser;
use customer_ledger::utils::{logger, validation::Validate};
use customer_ledger::{CliConfig, ProfileProvider, Showcase, TomlProfile};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting customer-ledger CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match &config.profile {
        Some(path) => {
            let profile = match TomlProfile::from_path(path) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::error!("Failed to load profile {}: {}", path, e);
                    eprintln!("Failed to load profile {}: {}", path, e);
                    std::process::exit(2);
                }
            };
            run(profile);
        }
        None => run(config),
    }
}

fn run<P: ProfileProvider + Validate>(profile: P) {
    if let Err(e) = profile.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let showcase = Showcase::new(profile);
    for line in showcase.run() {
        println!("{}", line);
    }

    tracing::info!("Showcase completed");
}
