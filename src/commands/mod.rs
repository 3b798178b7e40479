pub mod competitive;
pub mod embeds;
pub mod roster;

pub fn commands() -> Vec<poise::Command<crate::Data, crate::Error>> {
    vec![
        // Player management
        roster::register::register(),
        roster::profile::profile(),
        roster::update::update(),
        roster::team::team(),
        // Competitive
        competitive::leaderboard::leaderboard(),
        competitive::matchlog::matchlog(),
    ]
}
