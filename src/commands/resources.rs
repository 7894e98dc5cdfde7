//! Resources library command handlers

use crate::api::ResourceApi;
use crate::commands::{build_client, ellipsize, format_time};
use crate::config::Config;
use crate::error::{CalmaError, Result};
use crate::models::{ResourceFilters, ResourceType, SaveResourceRequest};
use colored::Colorize;
use prettytable::{row, Table};

/// List resources, optionally filtered
pub async fn list(
    config: Config,
    resource_type: Option<String>,
    tags: Option<String>,
    cultural_tags: Option<String>,
) -> Result<()> {
    let resource_type = resource_type
        .map(|s| ResourceType::parse_str(&s).map_err(CalmaError::Validation))
        .transpose()?;
    let filters = ResourceFilters {
        resource_type,
        tags,
        cultural_tags,
    };

    let api = ResourceApi::new(build_client(&config)?);
    let resources = api.list(&filters).await?;
    if resources.is_empty() {
        println!("No resources matched.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Id", "Type", "Title", "Tags"]);
    for resource in &resources {
        table.add_row(row![
            resource.id,
            resource.resource_type.as_wire(),
            ellipsize(&resource.title, 40),
            ellipsize(&resource.tags.join(", "), 32),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show one resource in detail
pub async fn show(config: Config, id: String) -> Result<()> {
    let api = ResourceApi::new(build_client(&config)?);
    let resource = api.get(&id).await?;

    println!("{}", resource.title.bold());
    println!("Type: {}", resource.resource_type.as_wire());
    println!("Link: {}", resource.link);
    if let Some(description) = &resource.description {
        println!("\n{}", description);
    }
    if !resource.tags.is_empty() {
        println!("\nTags: {}", resource.tags.join(", "));
    }
    if !resource.cultural_tags.is_empty() {
        println!("Cultural tags: {}", resource.cultural_tags.join(", "));
    }
    Ok(())
}

/// Bookmark a resource
pub async fn save(config: Config, id: String, reason: Option<String>) -> Result<()> {
    let api = ResourceApi::new(build_client(&config)?);
    let saved = api
        .save(&SaveResourceRequest {
            resource_id: id,
            recommendation_reason: reason,
            cultural_relevance: None,
        })
        .await?;
    println!("{}", format!("Saved (bookmark id {}).", saved.id).green());
    Ok(())
}

/// List bookmarked resources
pub async fn saved(config: Config) -> Result<()> {
    let api = ResourceApi::new(build_client(&config)?);
    let bookmarks = api.saved().await?;
    if bookmarks.is_empty() {
        println!("No saved resources yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Bookmark", "Resource", "Saved", "Reason"]);
    for bookmark in &bookmarks {
        let title = bookmark
            .resource
            .as_ref()
            .map(|r| ellipsize(&r.title, 40))
            .unwrap_or_else(|| bookmark.resource_id.clone());
        table.add_row(row![
            bookmark.id,
            title,
            format_time(&bookmark.saved_at),
            bookmark
                .recommendation_reason
                .as_deref()
                .map(|r| ellipsize(r, 32))
                .unwrap_or_default(),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Remove a bookmark
pub async fn unsave(config: Config, id: String) -> Result<()> {
    let api = ResourceApi::new(build_client(&config)?);
    api.unsave(&id).await?;
    println!("Removed.");
    Ok(())
}
