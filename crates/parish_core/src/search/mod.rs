//! Listing-view helpers: text filtering and pagination.

pub mod filter;
