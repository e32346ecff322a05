use anyhow::Result;
use leadline_core::{LeadFilter, LeadStage, LeadStatus, MAX_ACTIVITIES_LIMIT, SortColumn, SortOrder};
use leadline_service::LeadService;
use leadline_storage::Storage;
use std::path::Path;
use std::sync::Arc;

fn open(db_path: &Path) -> Result<LeadService> {
    Ok(LeadService::new(Arc::new(Storage::new(db_path)?)))
}

/// Unlike the HTTP listing, an unknown status or stage here is a usage error.
pub(crate) fn build_filter(
    status: Option<&str>,
    stage: Option<&str>,
    search: Option<String>,
    sort: Option<&str>,
    order: Option<&str>,
) -> Result<LeadFilter> {
    Ok(LeadFilter {
        status: status.map(str::parse::<LeadStatus>).transpose()?,
        stage: stage.map(str::parse::<LeadStage>).transpose()?,
        search,
        sort: sort.map(SortColumn::parse_lenient).unwrap_or_default(),
        order: order.map(SortOrder::parse_lenient).unwrap_or_default(),
    })
}

pub(crate) fn run_stats(db_path: &Path) -> Result<()> {
    let stats = open(db_path)?.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) fn run_list(db_path: &Path, filter: &LeadFilter) -> Result<()> {
    let leads = open(db_path)?.list(filter)?;
    println!("{}", serde_json::to_string_pretty(&leads)?);
    Ok(())
}

pub(crate) fn run_get(db_path: &Path, id: &str) -> Result<()> {
    match open(db_path)?.get(id) {
        Ok(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
        Err(e) if e.is_not_found() => println!("Lead not found: {id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) fn run_activities(db_path: &Path, limit: usize) -> Result<()> {
    let feed = open(db_path)?.recent_activities(limit.min(MAX_ACTIVITIES_LIMIT))?;
    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
