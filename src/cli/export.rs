//! Headless export: fetch one dataset and write it to the export directory.

use color_eyre::Result;
use std::path::PathBuf;

use crate::api::AdminApiClient;
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;
use crate::export::{CsvExport, ExportKind};
use crate::models::CrashQuery;

/// Fetch `kind` for `user` and write the CSV (and optionally HTML) file.
/// Returns the written paths.
pub async fn run_export(
    api: &AdminApiClient,
    kind: ExportKind,
    user: &str,
    html: bool,
) -> ConsoleResult<Vec<PathBuf>> {
    let export = match kind {
        ExportKind::Sessions => CsvExport::sessions(&api.sessions(user).await?),
        ExportKind::Logs => CsvExport::logs(&api.logs(user).await?),
        ExportKind::Crashes => {
            let query = CrashQuery {
                user: user.to_string(),
                ..Default::default()
            };
            CsvExport::crashes(&api.crashes(&query).await?)
        }
        ExportKind::CrashSummary => CsvExport::summary(&api.crash_summary(user).await?),
    };

    let dir = api.config().snapshot().export_dir();
    let mut written = vec![export.write_to(&dir)?];
    if html {
        written.push(export.write_html_to(&dir)?);
    }
    tracing::info!(kind = kind.cli_name(), rows = export.row_count(), "headless export");
    Ok(written)
}

/// Handle `--export`: run [`run_export`] on a fresh runtime and print the
/// written paths.
pub fn handle_export_command(
    config: ConsoleConfig,
    kind: ExportKind,
    user: &str,
    html: bool,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let api = AdminApiClient::with_reqwest(crate::config::SharedConfig::new(config));

    let written = runtime
        .block_on(run_export(&api, kind, user, html))
        .map_err(|err| {
            tracing::error!(category = ?err.category(), %err, "headless export failed");
            err
        })?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
