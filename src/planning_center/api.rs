//! API client for Planning Center Online requests.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::planning_center::types::{Plan, ServiceType, TeamMember};

const BASE_URL: &str = "https://api.planningcenteronline.com/services/v2/";

/// Client for accessing `Planning Center` Online API.
///
/// Requests are issued strictly one at a time.
#[derive(Clone)]
pub struct PlanningCenterClient {
    app_id: String,
    secret: String,
    client: Client,
}

impl PlanningCenterClient {
    /// Create a new `Planning Center` client from config
    pub fn new(config: &Config) -> Self {
        Self {
            app_id: config.pc_id.clone(),
            secret: config.pc_secret.clone(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make an authenticated GET request to the PCO API
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{BASE_URL}{path}");
        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.app_id, Some(&self.secret))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::pco_status(
                format!("Request to {path} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| Error::parse(format!("Invalid JSON from {path}: {e}")))
    }

    /// Fetch all service types
    pub async fn list_service_types(&self) -> Result<Vec<ServiceType>> {
        let json = self.get("service_types").await?;
        parse_service_types(&json)
    }

    /// Fetch all future plans for a service type
    pub async fn list_plans(&self, service_type_id: &str) -> Result<Vec<Plan>> {
        let path = format!("service_types/{service_type_id}/plans?filter=future");
        let json = self.get(&path).await?;
        parse_plans(&json, service_type_id)
    }

    /// Fetch the team members for a plan whose position matches `position_filter`
    /// (case-insensitive substring), sorted by position.
    pub async fn list_team_members(
        &self,
        service_type_id: &str,
        plan_id: &str,
        position_filter: &str,
    ) -> Result<Vec<TeamMember>> {
        let path = format!("service_types/{service_type_id}/plans/{plan_id}/team_members");
        let json = self.get(&path).await?;
        parse_team_members(&json, position_filter)
    }
}

/// Extract the top-level `data` array from a PCO response
fn data_array(json: &Value) -> Result<&Vec<Value>> {
    json["data"]
        .as_array()
        .ok_or_else(|| Error::parse("Missing 'data' array in response"))
}

fn parse_service_types(json: &Value) -> Result<Vec<ServiceType>> {
    let data = data_array(json)?;
    Ok(data
        .iter()
        .filter_map(|s| {
            let id = s["id"].as_str()?.to_string();
            let name = s["attributes"]["name"]
                .as_str()
                .unwrap_or("Unknown")
                .to_string();
            Some(ServiceType { id, name })
        })
        .collect())
}

fn parse_plans(json: &Value, service_type_id: &str) -> Result<Vec<Plan>> {
    let data = data_array(json)?;
    Ok(data
        .iter()
        .filter_map(|plan_data| {
            let id = plan_data["id"].as_str()?.to_string();
            let attrs = &plan_data["attributes"];

            // A plan without dates cannot be placed on the schedule
            let dates = attrs["dates"].as_str()?.to_string();
            let title = attrs["title"].as_str().unwrap_or_default().to_string();

            Some(Plan {
                id,
                service_type_id: service_type_id.to_string(),
                dates,
                title,
            })
        })
        .collect())
}

fn parse_team_members(json: &Value, position_filter: &str) -> Result<Vec<TeamMember>> {
    let data = data_array(json)?;
    let filter = position_filter.to_lowercase();

    let mut members: Vec<TeamMember> = data
        .iter()
        .filter_map(|member_data| {
            let attrs = &member_data["attributes"];

            // Members without a position are never shown
            let position = attrs["team_position_name"].as_str().filter(|p| !p.is_empty())?;
            if !position.to_lowercase().contains(&filter) {
                return None;
            }

            let name = attrs["name"].as_str().unwrap_or("Unknown").to_string();
            let status = attrs["status"].as_str().unwrap_or_default().to_string();

            Some(TeamMember {
                name,
                position: position.to_string(),
                status,
            })
        })
        .collect();

    members.sort_by(|a, b| a.position.cmp(&b.position));
    Ok(members)
}
