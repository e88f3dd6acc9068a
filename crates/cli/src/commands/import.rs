use std::path::Path;

use anyhow::{Context, Result};
use roster_core::Resource;
use serde_json::Value;

use crate::open_service;

pub(crate) async fn run(resource: &str, file: &Path) -> Result<()> {
    let resource: Resource = resource.parse()?;
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let rows: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} must hold a JSON array of rows", file.display()))?;

    let written = open_service()?.import(resource, rows).await?;
    println!("imported {written} rows into {resource}");
    Ok(())
}
