//! Population of each participating country, keyed by ISO-like team code.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no population on record for team {0}")]
pub struct UnknownTeam(pub String);

pub const POPULATIONS: [(&str, u64); 32] = [
    ("NG", 190_632_261),
    ("CR", 4_947_490),
    ("IR", 81_000_000),
    ("KR", 51_446_201),
    ("PE", 32_280_640),
    ("SN", 15_084_690),
    ("EG", 99_375_741),
    ("TN", 11_304_482),
    ("MX", 124_574_795),
    ("PA", 3_753_142),
    ("MA", 35_740_000),
    ("CO", 49_755_971),
    ("UY", 3_360_148),
    ("CH", 8_401_120),
    ("JP", 126_714_000),
    ("AR", 43_431_886),
    ("AU", 24_989_700),
    ("BR", 209_129_000),
    ("GB-EN", 55_619_400),
    ("RU", 144_526_636),
    ("ES", 48_958_159),
    ("PL", 38_433_600),
    ("RS", 7_111_973),
    ("SA", 33_000_000),
    ("HR", 4_154_200),
    ("PT", 10_291_027),
    ("DE", 82_800_000),
    ("IS", 350_710),
    ("SE", 10_151_588),
    ("BE", 11_358_357),
    ("FR", 67_186_638),
    ("DK", 5_785_864),
];

pub fn of(team: &str) -> Result<u64, UnknownTeam> {
    POPULATIONS
        .iter()
        .find(|(code, _)| *code == team)
        .map(|&(_, population)| population)
        .ok_or_else(|| UnknownTeam(team.to_string()))
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn known_teams() {
        assert_eq!(Ok(190_632_261), of("NG"));
        assert_eq!(Ok(4_947_490), of("CR"));
        assert_eq!(Ok(55_619_400), of("GB-EN"));
    }

    #[test]
    fn unknown_team() {
        let err = of("XX").unwrap_err();
        assert_eq!(UnknownTeam("XX".into()), err);
        assert_eq!("no population on record for team XX", err.to_string());
    }

    #[test]
    fn codes_are_distinct() {
        let codes: FxHashSet<_> = POPULATIONS.iter().map(|(code, _)| code).collect();
        assert_eq!(POPULATIONS.len(), codes.len());
    }
}
