//! HTML rendering of the aggregated schedule.
//!
//! A pure step: the same records and timestamp always produce the same
//! document. All interpolated values are HTML-escaped by the template
//! engine.

use askama::Template;

use crate::error::Result;
use crate::schedule::ServiceRecord;

/// Schedule table template, compiled from `templates/schedule.html`
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate<'a> {
    /// Upcoming services, sorted ascending by date
    pub services: &'a [ServiceRecord],
    /// "Generated at" timestamp shown under the table
    pub time: &'a str,
}

/// Render the schedule into a complete HTML document.
pub fn render_schedule(services: &[ServiceRecord], time: &str) -> Result<String> {
    let html = ScheduleTemplate { services, time }.render()?;
    Ok(html)
}
