use freenas_api_client::config::Config;

#[test]
fn test_config_load() {
    // This assumes config/Default.toml exists relative to where cargo test is run
    let config = Config::load("config/Default.toml").expect("Failed to load default config");
    assert_eq!(config.freenas.hostname, "freenas.local");
    assert_eq!(config.freenas.api_resource, "api");
    let websocket = config.websocket.expect("websocket section");
    assert_eq!(websocket.connect_timeout_seconds, 10);
}
