use awardflow_core::session::AllocationEditRequest;
use awardflow_core::AwardSession;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::provider::{load_edits, JsonFileAwardProvider};
use crate::report::{AllocationReport, EditOutcome};

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout stays a clean JSON report.
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Loads the session, replays the configured edits and builds the report.
pub fn run(config: &Config) -> anyhow::Result<AllocationReport> {
    let provider = JsonFileAwardProvider::new(&config.session_path);
    let mut session = AwardSession::load(&provider, config.settings.clone())?;
    tracing::info!("Loaded award session from {}", provider.path().display());

    if config.rerank {
        session.refresh_ranking(session.version())?;
    }

    let edits = match &config.edits_path {
        Some(path) => load_edits(path)?,
        None => Vec::new(),
    };
    let outcome = apply_edits(&mut session, &edits);
    Ok(build_report(&session, outcome))
}

/// Applies each edit against the current version. Failures are logged and
/// skipped.
pub fn apply_edits(session: &mut AwardSession, edits: &[AllocationEditRequest]) -> EditOutcome {
    let mut skipped = 0;
    for edit in edits {
        let version = session.version();
        if let Err(e) =
            session.edit_quantity(version, &edit.item_id, &edit.supplier_id, &edit.value)
        {
            tracing::warn!(
                "Skipping edit {}/{} = {:?}: {}",
                edit.item_id,
                edit.supplier_id,
                edit.value,
                e
            );
            skipped += 1;
        }
    }
    EditOutcome {
        applied: edits.len() - skipped,
        skipped,
        version: session.version(),
    }
}

pub fn build_report(session: &AwardSession, edits: EditOutcome) -> AllocationReport {
    let overview = session.overview();
    AllocationReport {
        award_id: session.data().id.clone(),
        edits,
        summary: overview.summary,
        supplier_totals: overview.supplier_totals,
        grand_totals: overview.grand_totals,
        issues: overview.issues,
        review: session.review(),
        submission: session.submission_check(),
    }
}
