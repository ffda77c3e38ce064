//! Planning Center data types.
//!
//! These types represent the data structures from the Planning Center API.

/// A named category of recurring services (e.g., "Sunday Service")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceType {
    /// Resource id
    pub id: String,
    /// Display name of the service type
    pub name: String,
}

/// One scheduled occurrence of a service type
#[derive(Debug, Clone)]
pub struct Plan {
    /// Resource id
    pub id: String,
    /// Id of the service type this plan belongs to
    pub service_type_id: String,
    /// Human-readable plan dates (e.g., "January 5, 2025")
    pub dates: String,
    /// Display title (may be empty for untitled plans)
    pub title: String,
}

/// A person assigned a position on a specific plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Person's display name
    pub name: String,
    /// Position name (e.g., "Audio Tech")
    pub position: String,
    /// Scheduling status reported by the API (e.g., "C" for confirmed).
    /// Pass-through data, never used for filtering or ordering.
    pub status: String,
}
