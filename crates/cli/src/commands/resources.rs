use anyhow::Result;
use roster_core::{PolicyRegistry, ResourceDescriptor};

pub(crate) fn run() -> Result<()> {
    let catalog: Vec<ResourceDescriptor> =
        PolicyRegistry::from_env().iter().map(|p| p.describe()).collect();
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
