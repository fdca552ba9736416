use anyhow::Result;

use crate::data_provider::RosterDataProvider;
use crate::team_abbrev::team_id_to_abbrev;

pub async fn run(client: &dyn RosterDataProvider) -> Result<()> {
    let teams = client.teams().await?;

    println!("\nNHL Teams");
    println!("=========\n");

    println!("{:<6} {:<6} Name", "ID", "Abbr");
    println!("{}", "─".repeat(50));

    for team in teams {
        println!(
            "{:<6} {:<6} {}",
            team.id,
            team_id_to_abbrev(team.id).unwrap_or("-"),
            team.name
        );
    }

    println!();
    Ok(())
}
