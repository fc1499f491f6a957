fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml("src/script/bali.toml", include_str!("src/script/bali.toml"));
    validate_toml(
        "src/script/sunda.toml",
        include_str!("src/script/sunda.toml"),
    );
    validate_toml("src/script/jawa.toml", include_str!("src/script/jawa.toml"));
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
