use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name: &str| owned.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
}

#[test]
fn defaults_when_no_attributes() {
    let config = BoardConfig::from_attributes(DEFAULT_CONTAINER_ID, attrs(&[])).unwrap();
    assert_eq!(config, BoardConfig::default());
    assert_eq!(config.api_base, "");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn api_base_strips_trailing_slashes() {
    let config =
        BoardConfig::from_attributes("board", attrs(&[(API_BASE_ATTR, " https://api.example.com// ")])).unwrap();
    assert_eq!(config.api_base, "https://api.example.com");
    assert_eq!(config.container_id, "board");
}

#[test]
fn log_level_is_case_insensitive() {
    let config = BoardConfig::from_attributes("board", attrs(&[(LOG_LEVEL_ATTR, "DEBUG")])).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level(), log::Level::Debug);
}

#[test]
fn blank_log_level_uses_default() {
    let config = BoardConfig::from_attributes("board", attrs(&[(LOG_LEVEL_ATTR, "  ")])).unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = BoardConfig::from_attributes("board", attrs(&[(LOG_LEVEL_ATTR, "loud")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_owned()));
}

#[test]
fn container_id_falls_back_to_default() {
    assert_eq!(container_id_from(None), DEFAULT_CONTAINER_ID);
    assert_eq!(container_id_from(Some("   ".to_owned())), DEFAULT_CONTAINER_ID);
    assert_eq!(container_id_from(Some(" skills ".to_owned())), "skills");
}

#[test]
fn status_hides_after_five_seconds() {
    assert_eq!(STATUS_HIDE_AFTER, std::time::Duration::from_secs(5));
}
