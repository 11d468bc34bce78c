mod cli;

use std::env;

const DEFAULT_LOCALE: &str = "en";

fn main() {
    let default_locale = env::var("DAYPLAN_LOCALE").unwrap_or(DEFAULT_LOCALE.to_string());
    cli::cli(default_locale);
}
