//! Test fixtures for building directory records.
//!
//! Records are built from camelCase JSON, the same shape as the dataset files.

#![allow(dead_code)]

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use directory_core::domains::academy::Resource;
use directory_core::domains::ecosystem::Project;
use directory_core::domains::jobs::Job;
use directory_core::domains::tag::{Tag, Taxonomy};
use serde_json::{json, Value};

/// Reference instant for job timestamps
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Create a mainnet-live project
pub fn project(id: &str, name: &str, tags: &[&str]) -> Project {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "description": format!("{} on Starknet", name),
        "tags": tags,
        "isLive": true,
    }))
    .unwrap()
}

/// Create a project with a follower count
pub fn popular_project(id: &str, name: &str, followers: Option<u64>) -> Project {
    let mut project = project(id, name, &[]);
    project.twitter_followers = followers;
    project
}

/// Create a job posted `age_minutes` before [`epoch`]
pub fn job(title: &str, project_id: &str, age_minutes: i64) -> Job {
    serde_json::from_value(json!({
        "title": title,
        "projectId": project_id,
        "createdOn": epoch() - Duration::minutes(age_minutes),
        "applyLink": format!("https://jobs.example/{}", project_id),
    }))
    .unwrap()
}

pub fn resource(name: &str, category: &str) -> Resource {
    serde_json::from_value(json!({
        "name": name,
        "description": format!("About {}", name),
        "category": category,
    }))
    .unwrap()
}

pub fn ecosystem_taxonomy() -> Taxonomy {
    Taxonomy::new(
        "ecosystem",
        vec![
            Tag::new("all", "all", "All"),
            Tag::new("wallet", "wallet", "Wallet"),
            Tag::new("defi", "defi", "DeFi"),
            Tag::new("nft", "nft", "NFT"),
        ],
    )
    .unwrap()
}

pub fn academy_taxonomy() -> Taxonomy {
    Taxonomy::new(
        "academy",
        vec![
            Tag::new("all", "all", "All"),
            Tag::new("learning", "learning", "Learning"),
            Tag::new("tools", "tools", "Tools"),
            Tag::new("wallets", "wallets", "Wallets"),
            Tag::new("contribute", "contribute", "Contribute"),
            Tag::new("news-feed", "news-feed", "News feed"),
        ],
    )
    .unwrap()
}

fn tags_json(taxonomy: &Taxonomy) -> Value {
    serde_json::to_value(taxonomy.tags()).unwrap()
}

/// Write a complete dataset directory
pub fn write_dataset(
    dir: &Path,
    projects: &[Project],
    jobs: &[Job],
    resources: &[Resource],
) -> Result<()> {
    std::fs::write(dir.join("projects.json"), serde_json::to_string(projects)?)?;
    std::fs::write(dir.join("jobs.json"), serde_json::to_string(jobs)?)?;
    std::fs::write(dir.join("academy.json"), serde_json::to_string(resources)?)?;
    std::fs::write(
        dir.join("ecosystem_tags.json"),
        tags_json(&ecosystem_taxonomy()).to_string(),
    )?;
    std::fs::write(
        dir.join("academy_tags.json"),
        tags_json(&academy_taxonomy()).to_string(),
    )?;
    Ok(())
}
