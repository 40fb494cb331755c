use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// One historical match: the two sides, the quotes offered before kick-off, the forecast
/// score and the final score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team_a: String,
    pub team_b: String,
    pub quote_a: f64,
    pub quote_b: f64,
    pub quote_null: f64,
    pub forecast_a: i64,
    pub forecast_b: i64,
    pub goals_a: u16,
    pub goals_b: u16,
}
impl MatchRecord {
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn goals(&self, side: Side) -> u16 {
        match side {
            Side::A => self.goals_a,
            Side::B => self.goals_b,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.goals_a as u32 + self.goals_b as u32
    }

    /// The realised outcome.
    pub fn outcome(&self) -> Outcome {
        if self.goals_a > self.goals_b {
            Outcome::Win(Side::A)
        } else if self.goals_a < self.goals_b {
            Outcome::Win(Side::B)
        } else {
            Outcome::Draw
        }
    }

    /// The quote paid out on `outcome`.
    pub fn payout(&self, outcome: &Outcome) -> f64 {
        match outcome {
            Outcome::Win(Side::A) => self.quote_a,
            Outcome::Win(Side::B) => self.quote_b,
            Outcome::Draw => self.quote_null,
        }
    }

    /// The winning team's identifier, or `None` for a draw.
    pub fn resolve(&self, outcome: &Outcome) -> Option<&str> {
        match outcome {
            Outcome::Win(side) => Some(self.team(*side)),
            Outcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.goals_a == self.goals_b
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::record;

    use super::*;

    #[test]
    fn outcome_and_payout() {
        let home_win = record(("RU", "SA"), (1.5, 3.0, 4.0), (2, 0), (5, 0));
        assert_eq!(Outcome::Win(Side::A), home_win.outcome());
        assert_eq!(1.5, home_win.payout(&home_win.outcome()));
        assert_eq!(Some("RU"), home_win.resolve(&home_win.outcome()));
        assert!(!home_win.is_draw());

        let away_win = record(("EG", "UY"), (5.0, 3.2, 1.7), (0, 1), (0, 1));
        assert_eq!(Outcome::Win(Side::B), away_win.outcome());
        assert_eq!(1.7, away_win.payout(&away_win.outcome()));
        assert_eq!(Some("UY"), away_win.resolve(&away_win.outcome()));

        let draw = record(("PE", "DK"), (2.9, 3.1, 2.6), (1, 1), (1, 1));
        assert_eq!(Outcome::Draw, draw.outcome());
        assert_eq!(3.1, draw.payout(&draw.outcome()));
        assert_eq!(None, draw.resolve(&draw.outcome()));
        assert!(draw.is_draw());
    }

    #[test]
    fn sides() {
        let r = record(("MA", "IR"), (2.0, 3.0, 4.0), (1, 1), (0, 1));
        assert_eq!("MA", r.team(Side::A));
        assert_eq!("IR", r.team(Side::B));
        assert_eq!(0, r.goals(Side::A));
        assert_eq!(1, r.goals(Side::B));
        assert_eq!(1, r.total_goals());
    }

    #[test]
    fn total_goals_beyond_u16() {
        let r = record(("MA", "IR"), (2.0, 3.0, 4.0), (1, 1), (u16::MAX, u16::MAX));
        assert_eq!(2 * u16::MAX as u32, r.total_goals());
        assert!(r.is_draw());
    }
}
