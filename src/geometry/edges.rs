use egui::{Pos2, Rect, pos2};
use std::collections::HashSet;

use crate::model::{Connection, ConnectionPoint, ElementId};

/// Coordinates of an attachment point on `rect`
pub fn attachment_point(rect: Rect, point: ConnectionPoint) -> Pos2 {
    let center = rect.center();
    match point {
        ConnectionPoint::Top => pos2(center.x, rect.min.y),
        ConnectionPoint::Right => pos2(rect.max.x, center.y),
        ConnectionPoint::Bottom => pos2(center.x, rect.max.y),
        ConnectionPoint::Left => pos2(rect.min.x, center.y),
        ConnectionPoint::Center => center,
    }
}

/// The edge of `rect` that faces `point`.
///
/// Compares the raw offsets from the center, so a tie (`|dx| == |dy|`)
/// resolves to a horizontal edge. The orthogonal router makes the same
/// choice for unhinted segments.
pub fn closest_edge(point: Pos2, rect: Rect) -> ConnectionPoint {
    let center = rect.center();
    let dx = point.x - center.x;
    let dy = point.y - center.y;

    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            ConnectionPoint::Right
        } else {
            ConnectionPoint::Left
        }
    } else if dy > 0.0 {
        ConnectionPoint::Bottom
    } else {
        ConnectionPoint::Top
    }
}

/// Picks an edge of `rect` for a new link toward `point`, spreading links
/// of `element_id` over edges that are still free.
///
/// Once all four edges carry a link this falls back to [`closest_edge`].
pub fn best_available_edge<'a>(
    element_id: ElementId,
    connections: impl IntoIterator<Item = &'a Connection>,
    point: Pos2,
    rect: Rect,
) -> ConnectionPoint {
    let used = used_edges(element_id, connections);
    let unused: Vec<ConnectionPoint> = ConnectionPoint::EDGES
        .into_iter()
        .filter(|edge| !used.contains(edge))
        .collect();

    if unused.is_empty() {
        return closest_edge(point, rect);
    }

    let preferred = facing_edge(point, rect);
    if unused.contains(&preferred) {
        return preferred;
    }

    let mut best = unused[0];
    let mut best_distance = f32::INFINITY;
    for edge in unused {
        let distance = attachment_point(rect, edge).distance(point);
        if distance < best_distance {
            best = edge;
            best_distance = distance;
        }
    }
    best
}

/// Edges already occupied by links of `element_id`
fn used_edges<'a>(
    element_id: ElementId,
    connections: impl IntoIterator<Item = &'a Connection>,
) -> HashSet<ConnectionPoint> {
    let mut used = HashSet::new();
    for connection in connections {
        if connection.from_id == element_id {
            used.insert(connection.from_point);
        }
        if connection.to_id == element_id {
            used.insert(connection.to_point);
        }
    }
    used.remove(&ConnectionPoint::Center);
    used
}

/// Like [`closest_edge`] but with offsets scaled by the element's size, so a
/// wide diamond still exposes its top edge to a point above its corner.
fn facing_edge(point: Pos2, rect: Rect) -> ConnectionPoint {
    let center = rect.center();
    let dx = (point.x - center.x) / rect.width().max(f32::EPSILON);
    let dy = (point.y - center.y) / rect.height().max(f32::EPSILON);

    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            ConnectionPoint::Right
        } else {
            ConnectionPoint::Left
        }
    } else if dy > 0.0 {
        ConnectionPoint::Bottom
    } else {
        ConnectionPoint::Top
    }
}
