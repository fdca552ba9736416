use anyhow::Result;

use crate::data_provider::RosterDataProvider;
use crate::projections::project_roster;

pub async fn run(client: &dyn RosterDataProvider, team_id: i64) -> Result<()> {
    let roster = client.team_roster(team_id).await?;
    let rows = project_roster(&roster);

    println!("\nRoster for team {}", team_id);
    println!("===================\n");

    println!("{:<28} {:>3}  Position", "Name", "#");
    println!("{}", "─".repeat(50));

    for row in rows {
        println!("{:<28} {:>3}  {}", row.name, row.number, row.position);
    }

    println!();
    Ok(())
}
