use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow, bail};
use log::info;
use regex::Regex;
use scraper::Html;

use crate::config::settings::AppConfig;
use crate::domain::{FillReport, ResultRow};
use crate::errors::parse_context;
use crate::fetchers::PageFetcher;
use crate::parsers::profile::{self, SeasonData};
use crate::parsers::{results, standings};
use crate::reconciler::{self, LogObserver, ReconcileObserver};

/// One live autofill invocation: gate the URL, fetch the profile page,
/// discover both tables, fetch the rundle standings, reconcile. All state
/// is invocation-local, so concurrent runs are independent.
pub struct AutofillService {
    config: AppConfig,
    fetcher: PageFetcher,
}

impl AutofillService {
    pub fn new(config: AppConfig, cookie: Option<&str>) -> Result<Self> {
        let fetcher = PageFetcher::new(&config.scraper, cookie)?;
        Ok(Self { config, fetcher })
    }

    pub async fn run(&self, profile_url: &str) -> Result<FillReport> {
        ensure_profile_url(profile_url)?;

        info!("Fetching profile page: {}", profile_url);
        let profile_html = self.fetcher.fetch_text(profile_url).await?;

        let (rows, season) = read_profile(&profile_html)?;
        let standings_url = resolve_standings_url(profile_url, &season.standings_href)?;

        info!("Fetching rundle standings: {}", standings_url);
        let standings_html = self.fetcher.fetch_text(&standings_url).await?;

        reconcile_with(&self.config, rows, &season, &standings_html)
    }
}

/// Offline path over two already-retrieved documents; the same engine flow
/// as the live run minus gate and fetches.
pub fn reconcile_documents(
    config: &AppConfig,
    profile_html: &str,
    standings_html: &str,
) -> Result<FillReport> {
    let (rows, season) = read_profile(profile_html)?;
    reconcile_with(config, rows, &season, standings_html)
}

fn reconcile_with(
    config: &AppConfig,
    rows: Vec<ResultRow>,
    season: &SeasonData,
    standings_html: &str,
) -> Result<FillReport> {
    let index = standings::parse_standings(standings_html)?;
    let observer = LogObserver;
    observer.standings_parsed(index.len());

    let instructions = reconciler::reconcile(
        &rows,
        &index,
        &season.subject,
        &config.reconciler,
        &observer,
    );
    Ok(FillReport { rows, instructions })
}

/// Both discovery passes run against one parse of the profile document;
/// `Html` stays inside this synchronous helper and never crosses an await.
fn read_profile(profile_html: &str) -> Result<(Vec<ResultRow>, SeasonData)> {
    let doc = Html::parse_document(profile_html);

    let table =
        results::find_results_table(&doc).ok_or_else(|| anyhow!(parse_context("results table")))?;
    let rows = results::extract_result_rows(&table);
    let season = profile::extract_season_data(&doc)?;

    Ok((rows, season))
}

fn resolve_standings_url(profile_url: &str, href: &str) -> Result<String> {
    let base = reqwest::Url::parse(profile_url).context("Invalid profile URL")?;
    let resolved = base.join(href).context("Invalid standings link")?;
    Ok(resolved.to_string())
}

/// The live command runs only on profiles.php pages whose query is a bare
/// non-zero id, optionally followed by "&1".
pub fn is_profile_url(url: &str) -> bool {
    static QUERY_RE: OnceLock<Regex> = OnceLock::new();
    let re = QUERY_RE.get_or_init(|| Regex::new(r"^[1-9]\d*(&1)?$").expect("valid gate regex"));

    let Ok(parsed) = reqwest::Url::parse(url) else {
        return false;
    };
    let path_ok = parsed.path().to_ascii_lowercase().ends_with("/profiles.php");
    let query_ok = parsed.query().is_some_and(|query| re.is_match(query));
    path_ok && query_ok
}

fn ensure_profile_url(url: &str) -> Result<()> {
    if !is_profile_url(url) {
        bail!("Unsupported page for autofill: {}", url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_accepts_bare_id_and_id_and_one_queries() {
        assert!(is_profile_url("https://example.com/profiles.php?12345"));
        assert!(is_profile_url("https://example.com/profiles.php?12345&1"));
        assert!(is_profile_url("https://example.com/league/profiles.php?7"));
    }

    #[test]
    fn gate_rejects_everything_else() {
        assert!(!is_profile_url("https://example.com/profiles.php"));
        assert!(!is_profile_url("https://example.com/profiles.php?0"));
        assert!(!is_profile_url("https://example.com/profiles.php?012"));
        assert!(!is_profile_url("https://example.com/profiles.php?12345&2"));
        assert!(!is_profile_url("https://example.com/profiles.php?name=x"));
        assert!(!is_profile_url("https://example.com/standings.php?12345"));
        assert!(!is_profile_url("not a url"));
    }

    const PROFILE_PAGE: &str = r#"
        <html><body>
        <table class="std std_bord">
            <thead><tr>
                <td>Rundle</td><td>Rank</td><td>W</td><td>L</td><td>T</td>
                <td>PTS</td><td>TMP</td><td>TCA</td><td>PCAA</td>
            </tr></thead>
            <tbody>
                <tr>
                    <td><a href="/standings.php?86&B_Coastal">B Coastal</a></td>
                    <td>4</td><td>3</td><td>1</td><td>0</td>
                    <td>9</td><td>27</td><td>6</td><td>1.0</td>
                </tr>
            </tbody>
        </table>
        <table class="std">
            <thead><tr>
                <td>Match Day</td><td>Opponent</td><td>Q</td>
                <td>Result</td><td>Record</td><td>Rank</td>
            </tr></thead>
            <tbody>
                <tr><td>Match Day 1</td><td>Roe, Rick</td><td></td>
                    <td>W 6-2</td><td>1-0-0</td><td>3</td></tr>
                <tr><td>Match Day 2</td><td>Doe, Jane</td><td></td>
                    <td></td><td></td><td></td></tr>
            </tbody>
        </table>
        </body></html>
    "#;

    const STANDINGS_PAGE: &str = r#"
        <html><body>
        <table>
            <thead><tr>
                <th>Rank</th><th>Player</th><th>W</th><th>L</th><th>T</th>
                <th>TCA</th><th>PCAA</th>
            </tr></thead>
            <tbody>
                <tr><td>2</td><td>Doe, Jane</td><td>4</td><td>0</td><td>0</td>
                    <td>5</td><td>1.2</td></tr>
                <tr><td>7</td><td>Roe, Rick</td><td>1</td><td>3</td><td>0</td>
                    <td>4</td><td>2.0</td></tr>
            </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn reconciles_two_documents_end_to_end() {
        let config = AppConfig::new();
        let report = reconcile_documents(&config, PROFILE_PAGE, STANDINGS_PAGE).unwrap();

        // Match day 1 is out of range; only the blank day-2 row fills
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.filled_rows(), 1);

        let instruction = &report.instructions[0];
        assert_eq!(instruction.row, 1);
        assert_eq!(instruction.record_text.as_deref(), Some("4-0-0"));
        assert_eq!(instruction.rank_text.as_deref(), Some("2"));
        // oepaa = 5*1.0/4 = 1.25, pepaa = 6*1.2/4 = 1.8
        assert_eq!(
            instruction.result_text.as_deref(),
            Some("1.250\u{22C5}1.800")
        );
        assert!(instruction.shade.unwrap().right_green);
    }

    #[test]
    fn profile_without_results_table_is_a_discovery_failure() {
        let config = AppConfig::new();
        let page = "<html><body><p>nothing here</p></body></html>";
        assert!(reconcile_documents(&config, page, STANDINGS_PAGE).is_err());
    }
}
