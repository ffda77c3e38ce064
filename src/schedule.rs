//! Schedule aggregation.
//!
//! Combines service types, future plans, and filtered team members into the
//! flat list of upcoming services consumed by the template.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::{Error, Result};
use crate::planning_center::types::{Plan, TeamMember};
use crate::planning_center::PlanningCenterClient;

/// Date format used by Planning Center plan dates, e.g. "January 5, 2025"
const DATE_FORMAT: &str = "%B %d, %Y";

/// One upcoming service as consumed by the schedule template
#[derive(Debug, Clone)]
pub struct ServiceRecord {
    /// Human-readable plan date string, exactly as returned by the API
    pub date: String,
    /// Seconds since the Unix epoch at UTC midnight of the plan date
    pub epoch_seconds: i64,
    /// Plan title
    pub title: String,
    /// Name of the service type the plan belongs to
    pub service_type_name: String,
    /// Assigned team members, sorted by position
    pub members: Vec<TeamMember>,
}

/// Return epoch seconds for a `Planning Center` date string.
///
/// Multi-week plans carry several comma-separated dates; the first one
/// determines the sort key. The displayed string is left untouched.
pub fn epoch_seconds(dates: &str) -> Result<i64> {
    let first = first_date(dates);
    let day = NaiveDate::parse_from_str(first.trim(), DATE_FORMAT)
        .map_err(|e| Error::parse(format!("Unrecognized plan date {dates:?}: {e}")))?;
    Ok(day.and_time(NaiveTime::MIN).and_utc().timestamp())
}

/// Take the leading "Month Day, Year" out of a possibly multi-date string
fn first_date(dates: &str) -> String {
    let mut parts = dates.splitn(3, ',');
    match (parts.next(), parts.next()) {
        (Some(month_day), Some(year)) => format!("{month_day},{year}"),
        _ => dates.to_string(),
    }
}

/// Build the full upcoming schedule, one record per future plan, sorted
/// ascending by date.
///
/// Issues one request per service type plus one per plan, sequentially.
pub async fn build_schedule(
    client: &PlanningCenterClient,
    position_filter: &str,
) -> Result<Vec<ServiceRecord>> {
    let mut records = Vec::new();

    for service_type in client.list_service_types().await? {
        debug!("Fetching future plans for {}", service_type.name);
        for plan in client.list_plans(&service_type.id).await? {
            let members = client
                .list_team_members(&service_type.id, &plan.id, position_filter)
                .await?;
            records.push(assemble(&service_type.name, plan, members)?);
        }
    }

    records.sort_by_key(|r| r.epoch_seconds);
    debug!("Built {} service records", records.len());
    Ok(records)
}

/// Combine one plan and its filtered members into a record
fn assemble(
    service_type_name: &str,
    plan: Plan,
    members: Vec<TeamMember>,
) -> Result<ServiceRecord> {
    let epoch = epoch_seconds(&plan.dates)?;
    Ok(ServiceRecord {
        date: plan.dates,
        epoch_seconds: epoch,
        title: plan.title,
        service_type_name: service_type_name.to_string(),
        members,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn plan(id: &str, dates: &str, title: &str) -> Plan {
        Plan {
            id: id.to_string(),
            service_type_id: "1".to_string(),
            dates: dates.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn epoch_is_deterministic() {
        let a = epoch_seconds("January 5, 2025").unwrap();
        let b = epoch_seconds("January 5, 2025").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn epoch_is_monotonic_with_the_calendar() {
        let jan = epoch_seconds("January 5, 2025").unwrap();
        let feb = epoch_seconds("February 2, 2025").unwrap();
        let dec = epoch_seconds("December 28, 2025").unwrap();
        let next_year = epoch_seconds("January 4, 2026").unwrap();
        assert!(jan < feb);
        assert!(feb < dec);
        assert!(dec < next_year);
    }

    #[test]
    fn multi_date_strings_use_the_first_date() {
        let single = epoch_seconds("January 5, 2025").unwrap();
        let multi = epoch_seconds("January 5, 2025, January 12, 2025").unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn unparseable_dates_are_fatal() {
        assert!(epoch_seconds("next Sunday").is_err());
        assert!(epoch_seconds("").is_err());
    }

    #[test]
    fn assemble_combines_plan_and_members() {
        let members = vec![TeamMember {
            name: "Alice".to_string(),
            position: "Audio Tech".to_string(),
            status: "C".to_string(),
        }];

        let record = assemble(
            "Sunday Service",
            plan("10", "January 5, 2025", "Morning Worship"),
            members,
        )
        .unwrap();

        assert_eq!(record.date, "January 5, 2025");
        assert_eq!(record.title, "Morning Worship");
        assert_eq!(record.service_type_name, "Sunday Service");
        assert_eq!(record.epoch_seconds, epoch_seconds("January 5, 2025").unwrap());
        assert_eq!(record.members.len(), 1);
        assert_eq!(record.members[0].name, "Alice");
    }

    #[test]
    fn records_sort_ascending_by_epoch() {
        let mut records = [
            assemble("Sunday Service", plan("2", "January 12, 2025", "B"), Vec::new()).unwrap(),
            assemble("Sunday Service", plan("1", "January 5, 2025", "A"), Vec::new()).unwrap(),
            assemble("Youth Night", plan("3", "January 8, 2025", "C"), Vec::new()).unwrap(),
        ];
        records.sort_by_key(|r| r.epoch_seconds);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "C", "B"]);
    }
}
