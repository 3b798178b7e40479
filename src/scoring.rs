use crate::data::roster::player_record::PlayerRecord;

/// Tier keywords, highest first. The first keyword found in a rank string wins,
/// so "Ace Dominator" scores as dominator.
const RANK_TIERS: &[(&str, u32)] = &[
    ("conqueror", 100),
    ("dominator", 90),
    ("master", 85),
    ("ace", 80),
    ("crown", 70),
    ("diamond", 60),
    ("platinum", 50),
];

// BGIS point system, index = place - 1
const PLACEMENT_POINTS: [u32; 8] = [10, 6, 5, 4, 3, 2, 1, 1];

pub fn rank_score(rank_tier: &str) -> u32 {
    let r = rank_tier.to_lowercase();
    RANK_TIERS
        .iter()
        .find(|(keyword, _)| r.contains(keyword))
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

pub fn placement_points(place: u32) -> u32 {
    match place {
        1..=8 => PLACEMENT_POINTS[(place - 1) as usize],
        _ => 0,
    }
}

/// `None` when the kill count is too large to add placement points to.
pub fn match_points(kills: u32, place: u32) -> Option<u32> {
    kills.checked_add(placement_points(place))
}

/// Orders players by tier, best first. `sort_by` is stable, so equal tiers keep
/// their roster order.
pub fn rank_leaderboard<I>(players: I) -> Vec<PlayerRecord>
where
    I: IntoIterator<Item = PlayerRecord>,
{
    let mut sorted: Vec<PlayerRecord> = players.into_iter().collect();
    sorted.sort_by(|a, b| rank_score(&b.rank).cmp(&rank_score(&a.rank)));
    sorted
}

pub fn podium_label(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}
