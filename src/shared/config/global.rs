use tracing::info;

use crate::query::defaults;
use crate::query::errors::QueryResult;
use crate::shared::config::model::Settings;

/// Replaces the process-wide default options with those from `settings`.
pub fn install_defaults(settings: &Settings) -> QueryResult<()> {
    let options = settings.defaults.to_options()?;
    info!(
        target: "search_query::defaults",
        count = options.len(),
        "Installing configured default options"
    );
    defaults::set_default_options(options);
    Ok(())
}
