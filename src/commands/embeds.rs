use crate::data::roster::player_record::PlayerRecord;
use crate::scoring::podium_label;

pub const GREEN: u32 = 0x2ECC71;
pub const BLUE: u32 = 0x3498DB;
pub const GOLD: u32 = 0xF1C40F;
pub const RED: u32 = 0xE74C3C;

pub fn roster_lines(team: &[(String, PlayerRecord)]) -> String {
    let mut text = String::new();
    for (_, p) in team {
        text.push_str(&format!("• **{}** - {} ({})\n", p.ign, p.role, p.rank));
    }
    text
}

pub fn leaderboard_lines(ranked: &[PlayerRecord]) -> String {
    let mut text = String::new();
    for (i, p) in ranked.iter().enumerate() {
        text.push_str(&format!("{} **{}** — {}\n", podium_label(i + 1), p.ign, p.rank));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player(ign: &str, rank: &str, role: &str) -> PlayerRecord {
        PlayerRecord {
            ign: ign.to_string(),
            uid: "1".to_string(),
            rank: rank.to_string(),
            role: role.to_string(),
            joined_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_roster_lines() {
        let team = vec![
            ("1".to_string(), player("Mortal", "Conqueror", "IGL")),
            ("2".to_string(), player("Viper", "Ace", "Sniper")),
        ];
        assert_eq!(
            roster_lines(&team),
            "• **Mortal** - IGL (Conqueror)\n• **Viper** - Sniper (Ace)\n"
        );
    }

    #[test]
    fn test_leaderboard_lines_use_medals_then_numbers() {
        let ranked: Vec<PlayerRecord> = ["a", "b", "c", "d"]
            .iter()
            .map(|n| player(n, "Crown", "Support"))
            .collect();
        let text = leaderboard_lines(&ranked);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "🥇 **a** — Crown");
        assert_eq!(lines[2], "🥉 **c** — Crown");
        assert_eq!(lines[3], "#4 **d** — Crown");
    }
}
