//! Business logic services
//!
//! The road status service owns the request/response translation:
//! URL construction, status-code branching, and payload parsing.

pub mod road_service;

pub use road_service::RoadStatusService;
