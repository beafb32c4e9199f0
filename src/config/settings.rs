pub struct ReconcilerSettings {
    pub min_match_day: u32,
    pub max_match_day: u32,
    pub metric_decimals: usize,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            // Match day 1 has no prior opponent data, so it is never filled
            min_match_day: 2,
            max_match_day: 25,
            metric_decimals: 3,
        }
    }
}

pub struct ScraperSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: "RundleAutofill/0.1",
            timeout_secs: 30,
        }
    }
}

pub struct AppConfig {
    pub reconciler: ReconcilerSettings,
    pub scraper: ScraperSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            reconciler: ReconcilerSettings::default(),
            scraper: ScraperSettings::default(),
        }
    }
}

// Config is passed explicitly (dependency injection) rather than read from
// globals, so concurrent invocations stay independent.
