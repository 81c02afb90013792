use std::path::PathBuf;

use crate::display::{display_challenge, display_missing};

pub fn show_challenge(file: Option<PathBuf>, date: Option<String>) {
    match super::find_challenge(file, date) {
        Ok((_, Some(challenge))) => display_challenge(&challenge),
        Ok((date, None)) => display_missing(&date),
        Err(e) => {
            eprintln!("Failed to load challenge: {}", e);
            std::process::exit(1);
        }
    }
}
