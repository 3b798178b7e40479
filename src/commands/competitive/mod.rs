pub mod leaderboard;
pub mod matchlog;
