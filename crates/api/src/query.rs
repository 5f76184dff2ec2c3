//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Raw `key=value` pairs of a product search, in request order.
///
/// Keys are open-ended (`power_min`, `capacity_max`, `phase`, ...), so they are
/// collected verbatim and interpreted by
/// [`SpecQuery::from_params`](microgrid_core::filter::SpecQuery::from_params).
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(pub Vec<(String, String)>);
