use egui::{Pos2, Rect, pos2};
use log::debug;

use super::{attachment_point, best_available_edge, closest_edge, to_orthogonal_path};
use crate::model::{Connection, ConnectionPoint, Diagram, ElementId, ElementKind, RoutingStyle};

/// The geometry of one end of a connection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub id: ElementId,
    pub kind: ElementKind,
    pub rect: Rect,
}

/// Attachment edges and rendered path computed for a connection
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub from_point: ConnectionPoint,
    pub to_point: ConnectionPoint,
    pub points: Vec<Pos2>,
    pub position: Pos2,
}

impl Route {
    pub fn apply_to(self, connection: &mut Connection) {
        connection.from_point = self.from_point;
        connection.to_point = self.to_point;
        connection.points = self.points;
        connection.position = self.position;
    }
}

/// Computes a fresh route for `connection` between `from` and `to`.
///
/// A relationship end spreads its links with [`best_available_edge`] over
/// `others` (every other connection in the diagram); an entity end takes
/// the [`closest_edge`] toward the opposite element's center.
pub fn route_connection<'a>(
    connection: &Connection,
    from: Endpoint,
    to: Endpoint,
    others: impl IntoIterator<Item = &'a Connection> + Clone,
) -> Route {
    let from_point = pick_edge(from, to.rect.center(), others.clone());
    let to_point = pick_edge(to, from.rect.center(), others);

    let start = attachment_point(from.rect, from_point);
    let end = attachment_point(to.rect, to_point);

    let mut points = Vec::with_capacity(connection.waypoints.len() + 2);
    points.push(start);
    points.extend(connection.waypoints.iter().copied());
    points.push(end);

    if connection.style == RoutingStyle::Orthogonal {
        points = to_orthogonal_path(&points, Some(from_point), Some(to_point));
    }

    Route {
        from_point,
        to_point,
        points,
        position: pos2(start.x.min(end.x), start.y.min(end.y)),
    }
}

fn pick_edge<'a>(
    end: Endpoint,
    toward: Pos2,
    others: impl IntoIterator<Item = &'a Connection>,
) -> ConnectionPoint {
    match end.kind {
        ElementKind::Relationship => best_available_edge(end.id, others, toward, end.rect),
        _ => closest_edge(toward, end.rect),
    }
}

/// Re-attaches and re-routes every connection touching `element_id`.
///
/// Must run in the same mutation that moved or resized the element so the
/// path endpoints never lag behind the shapes. Returns the number of
/// connections updated.
pub fn update_connection_points_on_move(diagram: &mut Diagram, element_id: ElementId) -> usize {
    let touching: Vec<ElementId> = diagram
        .connections()
        .filter(|c| c.touches(element_id))
        .map(|c| c.id)
        .collect();

    let mut updated = 0;
    for connection_id in touching {
        if reroute_connection(diagram, connection_id) {
            updated += 1;
        }
    }
    debug!("Rerouted {updated} connection(s) of {element_id}");
    updated
}

/// Recomputes one connection in place. Returns false if the connection or
/// one of its endpoints no longer resolves.
pub fn reroute_connection(diagram: &mut Diagram, connection_id: ElementId) -> bool {
    let Some(connection) = diagram.connection(connection_id) else {
        return false;
    };
    let (Some(from), Some(to)) = (
        diagram.endpoint(connection.from_id),
        diagram.endpoint(connection.to_id),
    ) else {
        debug!("Connection {connection_id} has a dangling endpoint, not rerouting");
        return false;
    };

    let others = diagram.connections().filter(|c| c.id != connection_id);
    let route = route_connection(connection, from, to, others);

    match diagram.connection_mut(connection_id) {
        Some(connection) => {
            route.apply_to(connection);
            true
        }
        None => false,
    }
}
