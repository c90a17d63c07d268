use std::path::PathBuf;

use awardflow_core::{AllocationSettings, QuantityPolicy};

pub struct Config {
    pub session_path: PathBuf,
    pub edits_path: Option<PathBuf>,
    pub settings: AllocationSettings,
    /// Recompute supplier ranks and L1 prices before replaying edits
    pub rerank: bool,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let session_path = std::env::var("AWARD_SESSION_PATH")
            .unwrap_or_else(|_| "./award.json".into())
            .into();
        let edits_path = std::env::var("AWARD_EDITS_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let defaults = AllocationSettings::default();
        let quantity_policy: QuantityPolicy = match std::env::var("AWARD_QUANTITY_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.quantity_policy,
        };
        let vendors_per_page = parse_var("AWARD_VENDORS_PER_PAGE", defaults.vendors_per_page)?;
        let coverage_target_percent =
            parse_var("AWARD_COVERAGE_TARGET", defaults.coverage_target_percent)?;
        let require_full_allocation = parse_var(
            "AWARD_REQUIRE_FULL_ALLOCATION",
            defaults.require_full_allocation,
        )?;
        let rerank = parse_var("AWARD_RERANK", false)?;
        let log_format = std::env::var("AWARD_LOG_FORMAT").unwrap_or_else(|_| "text".into());

        let settings = AllocationSettings {
            quantity_policy,
            vendors_per_page,
            coverage_target_percent,
            require_full_allocation,
        };
        settings.validate()?;

        Ok(Self {
            session_path,
            edits_path,
            settings,
            rerank,
            log_format,
        })
    }

    /// Positional arguments override the environment: the session file
    /// first, then the edits file.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(session) = args.next() {
            self.session_path = session.into();
        }
        if let Some(edits) = args.next() {
            self.edits_path = Some(edits.into());
        }
        self
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {} ({})", key, raw, e)),
        Err(_) => Ok(default),
    }
}
