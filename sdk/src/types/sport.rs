//! Sport identifiers.
//!
//! BetsAPI identifies every sport by a fixed integer id. The table below is
//! the complete set of sports the API serves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sport known to BetsAPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Soccer.
    Soccer,
    /// Basketball.
    Basketball,
    /// Tennis.
    Tennis,
    /// Volleyball.
    Volleyball,
    /// Handball.
    Handball,
    /// Baseball.
    Baseball,
    /// Ice hockey.
    IceHockey,
    /// Snooker.
    Snooker,
    /// American football.
    AmericanFootball,
    /// Cricket.
    Cricket,
    /// Futsal.
    Futsal,
    /// Darts.
    Darts,
    /// Table tennis.
    TableTennis,
    /// Badminton.
    Badminton,
    /// Rugby union.
    RugbyUnion,
    /// Rugby league.
    RugbyLeague,
    /// Australian rules football.
    AustralianRules,
    /// Bowls.
    Bowls,
    /// Boxing and UFC.
    BoxingUfc,
    /// Gaelic sports.
    GaelicSports,
    /// Floorball.
    Floorball,
    /// Beach volleyball.
    BeachVolleyball,
    /// Water polo.
    WaterPolo,
    /// Squash.
    Squash,
}

impl Sport {
    /// Every sport, in the order BetsAPI documents them.
    pub const ALL: [Sport; 24] = [
        Sport::Soccer,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Volleyball,
        Sport::Handball,
        Sport::Baseball,
        Sport::IceHockey,
        Sport::Snooker,
        Sport::AmericanFootball,
        Sport::Cricket,
        Sport::Futsal,
        Sport::Darts,
        Sport::TableTennis,
        Sport::Badminton,
        Sport::RugbyUnion,
        Sport::RugbyLeague,
        Sport::AustralianRules,
        Sport::Bowls,
        Sport::BoxingUfc,
        Sport::GaelicSports,
        Sport::Floorball,
        Sport::BeachVolleyball,
        Sport::WaterPolo,
        Sport::Squash,
    ];

    /// Returns the API-assigned id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Sport::Soccer => 1,
            Sport::Basketball => 18,
            Sport::Tennis => 13,
            Sport::Volleyball => 91,
            Sport::Handball => 78,
            Sport::Baseball => 16,
            Sport::IceHockey => 17,
            Sport::Snooker => 14,
            Sport::AmericanFootball => 12,
            Sport::Cricket => 3,
            Sport::Futsal => 83,
            Sport::Darts => 15,
            Sport::TableTennis => 92,
            Sport::Badminton => 94,
            Sport::RugbyUnion => 8,
            Sport::RugbyLeague => 19,
            Sport::AustralianRules => 36,
            Sport::Bowls => 66,
            Sport::BoxingUfc => 9,
            Sport::GaelicSports => 75,
            Sport::Floorball => 90,
            Sport::BeachVolleyball => 95,
            Sport::WaterPolo => 110,
            Sport::Squash => 107,
        }
    }

    /// Returns the canonical name (e.g., "ice_hockey").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sport::Soccer => "soccer",
            Sport::Basketball => "basketball",
            Sport::Tennis => "tennis",
            Sport::Volleyball => "volleyball",
            Sport::Handball => "handball",
            Sport::Baseball => "baseball",
            Sport::IceHockey => "ice_hockey",
            Sport::Snooker => "snooker",
            Sport::AmericanFootball => "american_football",
            Sport::Cricket => "cricket",
            Sport::Futsal => "futsal",
            Sport::Darts => "darts",
            Sport::TableTennis => "table_tennis",
            Sport::Badminton => "badminton",
            Sport::RugbyUnion => "rugby_union",
            Sport::RugbyLeague => "rugby_league",
            Sport::AustralianRules => "australian_rules",
            Sport::Bowls => "bowls",
            Sport::BoxingUfc => "boxing_ufc",
            Sport::GaelicSports => "gaelic_sports",
            Sport::Floorball => "floorball",
            Sport::BeachVolleyball => "beach_volleyball",
            Sport::WaterPolo => "water_polo",
            Sport::Squash => "squash",
        }
    }

    /// Looks up a sport by its API id.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|sport| sport.id() == id)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known sport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sport: {0}")]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    /// Parses a sport name, a common alias, or a numeric API id.
    ///
    /// Names are case-insensitive and accept `-`, `_` or spaces as
    /// separators, so `"Ice Hockey"`, `"ice-hockey"` and `"17"` all resolve
    /// to [`Sport::IceHockey`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(id) = trimmed.parse::<u32>() {
            return Self::from_id(id).ok_or_else(|| UnknownSport(s.to_string()));
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        let alias = match normalized.as_str() {
            "football" => Some(Sport::Soccer),
            "hockey" => Some(Sport::IceHockey),
            "nfl" => Some(Sport::AmericanFootball),
            "boxing" | "ufc" | "mma" | "fight" => Some(Sport::BoxingUfc),
            "afl" => Some(Sport::AustralianRules),
            _ => None,
        };

        alias
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|sport| sport.name() == normalized)
            })
            .ok_or_else(|| UnknownSport(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sport_ids() {
        assert_eq!(Sport::Soccer.id(), 1);
        assert_eq!(Sport::Basketball.id(), 18);
        assert_eq!(Sport::Tennis.id(), 13);
        assert_eq!(Sport::Cricket.id(), 3);
        assert_eq!(Sport::IceHockey.id(), 17);
        assert_eq!(Sport::Baseball.id(), 16);
        assert_eq!(Sport::AmericanFootball.id(), 12);
        assert_eq!(Sport::BoxingUfc.id(), 9);
        assert_eq!(Sport::WaterPolo.id(), 110);
        assert_eq!(Sport::Squash.id(), 107);
    }

    #[test]
    fn test_sport_ids_unique() {
        let ids: HashSet<u32> = Sport::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Sport::ALL.len());
    }

    #[test]
    fn test_sport_from_id() {
        assert_eq!(Sport::from_id(92), Some(Sport::TableTennis));
        assert_eq!(Sport::from_id(2), None);
    }

    #[test]
    fn test_sport_from_str() {
        assert_eq!("soccer".parse::<Sport>(), Ok(Sport::Soccer));
        assert_eq!("Ice Hockey".parse::<Sport>(), Ok(Sport::IceHockey));
        assert_eq!("american-football".parse::<Sport>(), Ok(Sport::AmericanFootball));
        assert_eq!("ufc".parse::<Sport>(), Ok(Sport::BoxingUfc));
        assert_eq!("78".parse::<Sport>(), Ok(Sport::Handball));
    }

    #[test]
    fn test_sport_from_str_unknown() {
        let err = "quidditch".parse::<Sport>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sport: quidditch");
        assert!("4".parse::<Sport>().is_err());
    }

    #[test]
    fn test_sport_name_round_trips() {
        for sport in Sport::ALL {
            assert_eq!(sport.name().parse::<Sport>(), Ok(sport));
        }
    }
}
