use crate::domain::{StandingsEntry, SubjectStats};

/// Expected-performance figures for one subject/opponent pairing.
///
/// `pepa`/`oepa` are raw cross products (subject TCA x opponent PCAA and
/// vice versa); the `*aa` variants average them over the opponent's games
/// played. Unrounded; display rounding belongs to the reconciler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedPerformance {
    pub pepa: f64,
    pub oepa: f64,
    pub pepaa: f64,
    pub oepaa: f64,
    pub games_played: u32,
}

/// Pure metric computation. Zero games played is a defined input (a newly
/// started opponent) and yields neutral 0.0 averages, never an error.
pub fn compute(subject: &SubjectStats, opponent: &StandingsEntry) -> ExpectedPerformance {
    let games_played = opponent.games_played();
    let pepa = subject.tca * opponent.pcaa;
    let oepa = opponent.tca * subject.pcaa;

    let (pepaa, oepaa) = if games_played > 0 {
        (pepa / games_played as f64, oepa / games_played as f64)
    } else {
        (0.0, 0.0)
    };

    ExpectedPerformance {
        pepa,
        oepa,
        pepaa,
        oepaa,
        games_played,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opponent(tca: f64, pcaa: f64, wins: u32, losses: u32, ties: u32) -> StandingsEntry {
        StandingsEntry {
            display_name: "Doe, Jane".to_string(),
            record: format!("{}-{}-{}", wins, losses, ties),
            rank: "1".to_string(),
            tca,
            pcaa,
            wins,
            losses,
            ties,
        }
    }

    #[test]
    fn cross_products_and_per_game_averages() {
        let subject = SubjectStats {
            tca: 10.0,
            pcaa: 1.5,
        };
        let opp = opponent(8.0, 2.0, 3, 2, 1);

        let perf = compute(&subject, &opp);

        assert_eq!(perf.pepa, 20.0);
        assert_eq!(perf.oepa, 12.0);
        assert_eq!(perf.games_played, 6);
        assert!((perf.pepaa - 20.0 / 6.0).abs() < 1e-12);
        assert_eq!(perf.oepaa, 2.0);
        assert!(perf.pepaa > perf.oepaa);
    }

    #[test]
    fn zero_games_played_yields_neutral_averages() {
        let subject = SubjectStats {
            tca: 10.0,
            pcaa: 1.5,
        };
        let opp = opponent(8.0, 2.0, 0, 0, 0);

        let perf = compute(&subject, &opp);

        assert_eq!(perf.games_played, 0);
        assert_eq!(perf.pepaa, 0.0);
        assert_eq!(perf.oepaa, 0.0);
        // Raw products are still defined
        assert_eq!(perf.pepa, 20.0);
        assert_eq!(perf.oepa, 12.0);
    }
}
