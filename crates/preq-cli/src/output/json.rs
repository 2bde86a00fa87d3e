use preq_core::error::PreqError;
use preq_core::Roster;

pub fn print(roster: &Roster) -> Result<(), PreqError> {
    let json = serde_json::to_string_pretty(roster)?;
    println!("{json}");
    Ok(())
}
