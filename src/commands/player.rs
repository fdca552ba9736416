use anyhow::Result;

use crate::data_provider::RosterDataProvider;
use crate::projections::project_player_detail;

pub async fn run(client: &dyn RosterDataProvider, player_id: i64) -> Result<()> {
    let splits = client.single_season_stats(player_id).await?;
    let info = client.player_info(player_id).await?;
    let detail = project_player_detail(player_id, &info, &splits)?;

    println!("\n{}", detail.full_name);
    println!("{}\n", "=".repeat(detail.full_name.len()));

    println!(
        "Number: #{}  Position: {}  Hometown: {}  Age: {}",
        detail.bio.number,
        detail.bio.position,
        detail.bio.hometown.as_deref().unwrap_or("-"),
        detail.bio.age
    );

    println!("\nSeason stats");
    println!("{}", "─".repeat(40));
    println!(
        "{:>4} {:>3} {:>3} {:>4} {:>4} {:>4} {:>3}",
        "PTS", "G", "A", "SOG", "HIT", "PPP", "GP"
    );
    println!(
        "{:>4} {:>3} {:>3} {:>4} {:>4} {:>4} {:>3}",
        detail.stat_line.points,
        detail.stat_line.goals,
        detail.stat_line.assists,
        detail.stat_line.shots,
        detail.stat_line.hits,
        detail.stat_line.power_play_points,
        detail.stat_line.games
    );

    println!("\nTime on ice");
    println!("{}", "─".repeat(40));
    println!("{:>6} {:>6} {:>6} {:>6}", "TOI", "Even", "PP", "PK");
    println!(
        "{:>6} {:>6} {:>6} {:>6}",
        detail.time_on_ice.overall,
        detail.time_on_ice.even_strength,
        detail.time_on_ice.power_play,
        detail.time_on_ice.short_handed
    );

    println!();
    Ok(())
}
