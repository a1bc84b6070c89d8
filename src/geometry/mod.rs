//! Connection geometry: where links attach to shapes and how they are routed.
//!
//! Everything here is a pure function of positions, sizes and the current
//! connection list, except [`update_connection_points_on_move`] which writes
//! the computed routes back into a [`Diagram`](crate::model::Diagram).

mod edges;
mod reroute;
mod routing;

pub use edges::{attachment_point, best_available_edge, closest_edge};
pub use reroute::{
    Endpoint, Route, reroute_connection, route_connection, update_connection_points_on_move,
};
pub use routing::{DEGENERATE_SEGMENT, to_orthogonal_path};
