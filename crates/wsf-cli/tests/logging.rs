use tracing::level_filters::LevelFilter;

use wsf_cli::logging::{LogConfig, LogFormat};

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(LogConfig::from_verbosity(0).level_filter, LevelFilter::WARN);
    assert_eq!(LogConfig::from_verbosity(1).level_filter, LevelFilter::INFO);
    assert_eq!(LogConfig::from_verbosity(2).level_filter, LevelFilter::DEBUG);
    assert_eq!(LogConfig::from_verbosity(7).level_filter, LevelFilter::TRACE);
}

#[test]
fn directives_cover_workspace_crates() {
    let config = LogConfig::default().with_level(LevelFilter::DEBUG);
    let directives = config.directives();
    assert!(directives.starts_with("warn,"));
    assert!(directives.contains("wsf_transform=debug"));
    assert!(directives.contains("wsf_ingest=debug"));
}

#[test]
fn builder_setters() {
    let config = LogConfig::default()
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_timestamps(true)
        .with_log_file(Some("run.log".into()));
    assert_eq!(config.format, LogFormat::Json);
    assert!(!config.with_ansi);
    assert!(config.with_timestamps);
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("run.log")));
}
