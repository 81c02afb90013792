use std::path::PathBuf;

use crate::models::daily_challenge;

pub fn print_challenge(file: Option<PathBuf>, date: Option<String>) {
    let challenge = match super::find_challenge(file, date) {
        Ok((_, Some(challenge))) => challenge,
        Ok((date, None)) => {
            eprintln!("No challenge is scheduled for {}", date);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to load challenge: {}", e);
            std::process::exit(1);
        }
    };

    match daily_challenge::to_json(&challenge) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
