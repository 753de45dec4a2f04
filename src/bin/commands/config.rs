use whatsip::WhatsipConfig;

pub fn run(config: &WhatsipConfig, path: Option<&str>) {
    let config_file = match path {
        Some(p) => p.to_string(),
        None => match WhatsipConfig::config_file_path() {
            Ok(p) => p.to_string_lossy().to_string(),
            Err(e) => format!("unavailable ({})", e),
        },
    };

    println!("Config File:        {}", config_file);
    println!("{}", config.summary());
}
