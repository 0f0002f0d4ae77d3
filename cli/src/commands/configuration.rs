use std::process::exit;

use delivery::config;

use crate::cli::ConfigCommand;

fn list_and_exit() {
    println!(
        "Configuration file {}:\n",
        config::configuration_file().to_string_lossy()
    );

    match config::load().map(|cfg| config::application_config_to_string(&cfg)) {
        Ok(Ok(toml_as_string)) => {
            println!("{toml_as_string}");
        }
        Ok(Err(e)) => {
            eprintln!("ERROR: Unable to format the configuration: {e}");
            exit(4);
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            exit(4);
        }
    }
    exit(0);
}

pub fn execute(config: ConfigCommand) {
    match config {
        // List current configuration
        ConfigCommand::List => {
            list_and_exit();
        }
        // Add new values to the configuration
        ConfigCommand::Update(update) => {
            let mut app_config = match config::load() {
                Ok(ac) => ac,
                Err(e) => {
                    eprintln!(
                        "ERROR: Unable to load configuration file {}, reason:{}",
                        config::configuration_file().to_string_lossy(),
                        e
                    );
                    exit(4);
                }
            };
            app_config.application_data.database = update.database.to_string_lossy().to_string();
            if let Err(e) = config::save(&app_config) {
                eprintln!(
                    "ERROR: Unable to save configuration file {}, reason:{}",
                    config::configuration_file().to_string_lossy(),
                    e
                );
                exit(4);
            }
            println!(
                "Configuration saved to {}",
                config::configuration_file().to_string_lossy()
            );
            exit(0);
        }
        ConfigCommand::Remove => match config::remove() {
            Ok(()) => {
                println!(
                    "Configuration file {} removed",
                    config::configuration_file().to_string_lossy()
                );
            }
            Err(e) => {
                eprintln!(
                    "ERROR: Unable to remove configuration file {}, reason:{}",
                    config::configuration_file().to_string_lossy(),
                    e
                );
                exit(4);
            }
        },
    }
}
