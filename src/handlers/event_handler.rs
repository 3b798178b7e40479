use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::info;

use crate::CommandStatus;

fn fmt_dur(d: Duration) -> String {
    if d.as_secs() >= 1 {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }
}

/// Boxed startup summary: bot name, timings, then one row per command.
pub fn ready_banner(
    bot_name: &str,
    startup: Duration,
    commands_check: Duration,
    statuses: &[CommandStatus],
) -> Vec<String> {
    let name_w = statuses.iter().map(|s| s.name.len()).fold("Name".len(), usize::max);
    let status_w = statuses.iter().map(|s| s.status.len()).fold("Status".len(), usize::max);

    let title = format!("Bot Ready: {}", bot_name);
    let meta = [
        format!("Startup time: {}", fmt_dur(startup)),
        format!("Commands check: {}", fmt_dur(commands_check)),
        format!("Commands loaded: {}", statuses.len()),
    ];
    let meta_w = meta.iter().map(|m| m.len()).max().unwrap_or(0);

    let table_width = 2 + name_w + 3 + status_w + 2; // | name | status |
    let header_width = title.len().max(meta_w).max(table_width).max(30);
    let hline = format!("+{}+", "=".repeat(header_width));
    let sline = format!("+{}+", "-".repeat(header_width));
    let table_hline = format!("+-{}-+-{}-+", "-".repeat(name_w), "-".repeat(status_w));
    let row = |name: &str, status: &str| {
        format!("| {:<name_w$} | {:<status_w$} |", name, status, name_w = name_w, status_w = status_w)
    };

    let mut lines = vec![hline.clone(), format!("|{:<width$}|", title, width = header_width), sline.clone()];
    lines.extend(meta.iter().map(|m| format!("|{:<width$}|", m, width = header_width)));
    lines.push(sline);
    lines.push(table_hline.clone());
    lines.push(row("Name", "Status"));
    lines.push(table_hline.clone());
    if statuses.is_empty() {
        lines.push(row("(no commands)", "-"));
    } else {
        lines.extend(statuses.iter().map(|s| row(&s.name, &s.status)));
    }
    lines.push(table_hline);
    lines.push(hline);
    lines
}

pub async fn handle_event<'a>(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'a, crate::Data, crate::Error>,
    data: &crate::Data,
) -> Result<(), crate::Error> {
    if let serenity::FullEvent::Ready { data_about_bot, .. } = event {
        let banner = ready_banner(
            &data_about_bot.user.name,
            data.started_at.elapsed(),
            data.commands_check_duration,
            &data.command_statuses,
        );
        for line in banner {
            info!("{}", line);
        }
        info!("GRx Manager is online! Waiting for commands...");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(name: &str, status: &str) -> CommandStatus {
        CommandStatus {
            name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_fmt_dur() {
        assert_eq!(fmt_dur(Duration::from_millis(1500)), "1.500s");
        assert_eq!(fmt_dur(Duration::from_micros(2500)), "2.500ms");
    }

    #[test]
    fn test_banner_rows_are_aligned() {
        let lines = ready_banner(
            "GRx Manager",
            Duration::from_millis(900),
            Duration::from_millis(120),
            &[status("register", "Registered"), status("leaderboard", "Registered")],
        );
        assert!(lines.iter().any(|l| l.contains("Bot Ready: GRx Manager")));
        assert!(lines.iter().any(|l| l.contains("Commands loaded: 2")));
        assert!(lines.contains(&"| leaderboard | Registered |".to_string()));
        assert!(lines.contains(&"| register    | Registered |".to_string()));
        assert_eq!(lines.first(), lines.last());
    }

    #[test]
    fn test_banner_without_commands() {
        let lines = ready_banner("bot", Duration::ZERO, Duration::ZERO, &[]);
        assert!(lines.iter().any(|l| l.contains("(no commands)")));
    }
}
