//! Per-page use-case facades.
//!
//! Each page of the dashboard owns one service; the service owns the page's
//! record store, wires in the configured fetch delay, and exposes the reads
//! the view renders from. Stores stay private so every mutation goes through
//! the validated entry points.

pub mod contribution_service;
pub mod event_service;
pub mod member_service;

pub use contribution_service::ContributionService;
pub use event_service::EventService;
pub use member_service::MemberService;
