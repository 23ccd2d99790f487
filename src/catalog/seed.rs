//! Season seed data: the 16 clubs and a full roster for each.
//!
//! Clubs 1-5 get their headline athletes with fixed prices. Every club is then
//! topped up with generated squad players until it carries 3 goalkeepers,
//! 8 defenders, 10 midfielders and 4 forwards.

use super::athlete::{Athlete, Position};
use super::club::Club;
use super::registry::Catalog;
use crate::core::{ClubId, Price, SimRng};
use super::athlete::Position::{Defender as DEF, Forward as FWD, Goalkeeper as GK, Midfielder as MID};

/// Roster size per position for every club.
pub const ROSTER_QUOTA: [(Position, usize); 4] = [
    (Position::Goalkeeper, 3),
    (Position::Defender, 8),
    (Position::Midfielder, 10),
    (Position::Forward, 4),
];

const CLUBS: [(u32, &str, &str, &str, &str); 16] = [
    (1, "Shanghai Port", "SHP", "#D32F2F", "#B71C1C"),
    (2, "Shanghai Shenhua", "SHS", "#1976D2", "#0D47A1"),
    (3, "Chengdu Rongcheng", "CDR", "#C62828", "#FFFFFF"),
    (4, "Beijing Guoan", "BJG", "#388E3C", "#1B5E20"),
    (5, "Shandong Taishan", "SDT", "#E64A19", "#FF5722"),
    (6, "Tianjin Jinmen Tiger", "TJT", "#1565C0", "#FFFFFF"),
    (7, "Zhejiang", "ZHP", "#2E7D32", "#81C784"),
    (8, "Henan", "HEN", "#D32F2F", "#1565C0"),
    (9, "Changchun Yatai", "CCY", "#B71C1C", "#FFCDD2"),
    (10, "Qingdao West Coast", "QWC", "#FBC02D", "#303F9F"),
    (11, "Wuhan Three Towns", "WHT", "#1E88E5", "#FFFFFF"),
    (12, "Qingdao Hainiu", "QHN", "#F57F17", "#000000"),
    (13, "Cangzhou Mighty Lions", "CZM", "#0277BD", "#FFFFFF"),
    (14, "Shenzhen Peng City", "SZP", "#00BCD4", "#FFFFFF"),
    (15, "Meizhou Hakka", "MZH", "#C2185B", "#FFFFFF"),
    // Promoted side
    (16, "Dalian Yingbo", "DLY", "#000000", "#FFFFFF"),
];

const HEADLINERS: [(u32, &str, Position, f64); 34] = [
    (1, "Wu Lei", FWD, 12.0),
    (1, "Oscar", MID, 10.5),
    (1, "Yan Junling", GK, 5.5),
    (1, "Jiang Guangtai", DEF, 6.0),
    (1, "Vargas", MID, 8.0),
    (1, "Gustavo", FWD, 9.0),
    (1, "Wang Shenchao", DEF, 5.0),
    (1, "Li Shuai", DEF, 5.5),
    (2, "Malele", FWD, 9.0),
    (2, "Teixeira", MID, 8.5),
    (2, "Zhu Chenjie", DEF, 5.5),
    (2, "Jiang Shenglong", DEF, 5.5),
    (2, "Andre Luis", FWD, 9.5),
    (2, "Bao Yaxiong", GK, 5.0),
    (2, "Amadou", MID, 6.5),
    (2, "Wu Xi", MID, 6.0),
    (3, "Wei Shihao", MID, 7.5),
    (3, "Felipe", FWD, 8.5),
    (3, "Romulo", MID, 7.5),
    (3, "Zhou Dingyang", MID, 6.5),
    (3, "Jian Tao", GK, 4.5),
    (3, "Tang Miao", DEF, 5.0),
    (4, "Fabio Abreu", FWD, 8.5),
    (4, "Zhang Yuning", FWD, 8.0),
    (4, "Zhang Xizhe", MID, 6.5),
    (4, "Ngadeu", DEF, 6.0),
    (4, "Li Lei", DEF, 5.0),
    (4, "Guga", MID, 7.0),
    (5, "Cryzan", MID, 9.0),
    (5, "Wang Dalei", GK, 5.0),
    (5, "Liu Yang", DEF, 5.5),
    (5, "Gao Zhunyi", DEF, 5.5),
    (5, "Zeca", FWD, 8.5),
    (5, "Li Yuanyi", MID, 6.0),
];

/// Base price in millions for generated squad players.
fn filler_base_price(position: Position) -> f64 {
    match position {
        Position::Goalkeeper => 4.0,
        Position::Defender => 4.5,
        Position::Midfielder => 5.0,
        Position::Forward => 5.5,
    }
}

/// The 16 league clubs.
#[must_use]
pub fn standard_clubs() -> Vec<Club> {
    CLUBS
        .iter()
        .map(|&(id, name, short, primary, secondary)| {
            Club::new(ClubId::new(id), name, short, primary, secondary)
        })
        .collect()
}

/// Randomise the popularity and form metrics of a freshly built athlete.
fn with_random_metrics(mut athlete: Athlete, rng: &mut SimRng) -> Athlete {
    athlete.selected_by_percent = rng.gen_range(0..30);
    athlete.form = 1.0 + f64::from(rng.gen_range(0..10u8)) / 10.0;
    athlete.season_points = rng.gen_range(0..40);
    athlete.injured = rng.gen_bool(0.02);
    athlete
}

impl Catalog {
    /// Build the full season catalog.
    ///
    /// Headline prices are fixed; generated prices, popularity, form, starting
    /// points and injuries are drawn from `rng`.
    #[must_use]
    pub fn seeded(rng: &mut SimRng) -> Self {
        let mut catalog = Catalog::new();

        for club in standard_clubs() {
            let club_id = club.id;
            let short_name = club.short_name.clone();
            catalog.register_club(club);

            let mut counts = [0usize; 4];
            for &(_, name, position, price) in HEADLINERS.iter().filter(|h| h.0 == club_id.raw()) {
                counts[position.order() as usize] += 1;
                let id = catalog.alloc_athlete_id();
                let athlete = Athlete::new(id, name, position, club_id, Price::from_millions(price));
                catalog.register_athlete(with_random_metrics(athlete, rng));
            }

            for (position, quota) in ROSTER_QUOTA {
                let count = &mut counts[position.order() as usize];
                while *count < quota {
                    *count += 1;
                    let millions = filler_base_price(position) + rng.gen_range(-0.5..1.0);
                    let id = catalog.alloc_athlete_id();
                    let athlete = Athlete::new(
                        id,
                        format!("{} {} {}", short_name, position.code(), count),
                        position,
                        club_id,
                        Price::from_millions(millions),
                    );
                    catalog.register_athlete(with_random_metrics(athlete, rng));
                }
            }
        }

        tracing::debug!(
            clubs = catalog.club_count(),
            athletes = catalog.athletes().len(),
            "seeded catalog"
        );
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_clubs() {
        let clubs = standard_clubs();
        assert_eq!(clubs.len(), 16);
        assert_eq!(clubs[0].short_name, "SHP");
        assert_eq!(clubs[15].short_name, "DLY");
    }

    #[test]
    fn test_every_club_meets_quota() {
        let catalog = Catalog::seeded(&mut SimRng::new(42));
        for club in catalog.clubs() {
            let roster = catalog.athletes().club_athletes(club.id);
            for (position, quota) in ROSTER_QUOTA {
                let count = roster.iter().filter(|a| a.position == position).count();
                assert_eq!(count, quota, "{} {}", club.short_name, position);
            }
        }
        assert_eq!(catalog.athletes().len(), 16 * 25);
    }

    #[test]
    fn test_headliners_keep_their_prices() {
        let catalog = Catalog::seeded(&mut SimRng::new(1));
        let wu_lei = catalog
            .athletes()
            .iter()
            .find(|a| a.web_name == "Wu Lei")
            .unwrap();
        assert_eq!(wu_lei.price, Price(120));
        assert_eq!(wu_lei.position, Position::Forward);
        assert_eq!(wu_lei.club, ClubId(1));
    }

    #[test]
    fn test_filler_names_continue_after_headliners() {
        let catalog = Catalog::seeded(&mut SimRng::new(1));
        let names: Vec<_> = catalog
            .athletes()
            .club_athletes(ClubId(1))
            .iter()
            .filter(|a| a.position == Position::Goalkeeper)
            .map(|a| a.web_name.clone())
            .collect();
        assert_eq!(names, vec!["Yan Junling", "SHP GK 2", "SHP GK 3"]);
    }

    #[test]
    fn test_filler_prices_in_range() {
        let catalog = Catalog::seeded(&mut SimRng::new(5));
        for athlete in catalog.athletes().club_athletes(ClubId(16)) {
            let base = Price::from_millions(filler_base_price(athlete.position));
            assert!(athlete.price >= base - Price(5));
            assert!(athlete.price <= base + Price(10));
        }
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let a = Catalog::seeded(&mut SimRng::new(99));
        let b = Catalog::seeded(&mut SimRng::new(99));
        assert_eq!(a, b);
    }
}
