use clap::ArgMatches;

use crate::config::{load_config, save_config};

pub fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config();
        config.token = Some(token.clone());
        save_config(&config)?;
        println!("Token saved successfully!");
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.token {
            Some(token) if token.len() > 12 => {
                println!("Token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("Token: (configured)"),
            None => println!("No token configured"),
        }
    } else {
        println!("Usage: ghtriage auth --token <TOKEN> or ghtriage auth --show");
    }
    Ok(())
}
