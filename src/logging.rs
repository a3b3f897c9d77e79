use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::LoggingConfig;
use tracing::info;

pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    subscriber(cfg)?.try_init()?;

    info!("Logging initialized");
    Ok(())
}

/// Stdout layer plus, when `log_dir` is set, a daily-rolling file layer.
pub fn subscriber(
    cfg: &LoggingConfig,
) -> anyhow::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let stdout_filter = cfg
        .stdout_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;
    let stdout_layer = fmt::layer().with_ansi(true).with_filter(stdout_filter);

    let file_layer = match &cfg.log_dir {
        Some(dir) => {
            let file_filter = cfg
                .file_level
                .parse::<tracing_subscriber::filter::LevelFilter>()?;
            let file_appender = tracing_appender::rolling::daily(dir, "search_query.log");
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_filter(file_filter),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer))
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("search_query=debug".parse().unwrap());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_stdout_level() {
        let cfg = LoggingConfig {
            stdout_level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        assert!(init(&cfg).is_err());
    }

    #[test]
    fn file_layer_writes_into_log_dir() {
        let dir = tempfile::tempdir().expect("create log dir");
        let cfg = LoggingConfig {
            stdout_level: "off".to_string(),
            file_level: "info".to_string(),
            log_dir: Some(dir.path().to_str().unwrap().to_string()),
        };

        let subscriber = subscriber(&cfg).expect("build subscriber");
        tracing::subscriber::with_default(subscriber, || {
            info!(target: "search_query::defaults", "file layer check");
        });

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("search_query.log"), "unexpected file {}", name);
        let contents = std::fs::read_to_string(&files[0]).unwrap();
        assert!(contents.contains("file layer check"));
    }

    #[test]
    fn file_level_is_ignored_without_log_dir() {
        let cfg = LoggingConfig {
            file_level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        assert!(subscriber(&cfg).is_ok());
    }
}
