use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ElementId, Position};

/// Where on an element a connection attaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionPoint {
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

impl ConnectionPoint {
    /// The four edges, in tie-break order
    pub const EDGES: [ConnectionPoint; 4] = [
        ConnectionPoint::Top,
        ConnectionPoint::Right,
        ConnectionPoint::Bottom,
        ConnectionPoint::Left,
    ];

    pub fn is_horizontal(&self) -> bool {
        matches!(self, ConnectionPoint::Left | ConnectionPoint::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, ConnectionPoint::Top | ConnectionPoint::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionPoint::Top => "top",
            ConnectionPoint::Right => "right",
            ConnectionPoint::Bottom => "bottom",
            ConnectionPoint::Left => "left",
            ConnectionPoint::Center => "center",
        }
    }
}

impl fmt::Display for ConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingStyle {
    #[default]
    Straight,
    Orthogonal,
}

/// A visual link between an entity and a relationship (or two of either).
///
/// `cardinality` and `participation` are kept as the raw strings the diagram
/// carried so that values imported from untyped sources can be reported by
/// validation instead of being rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ElementId,
    pub from_id: ElementId,
    pub to_id: ElementId,
    pub from_point: ConnectionPoint,
    pub to_point: ConnectionPoint,
    /// Rendered path, first and last points on the endpoint attachments
    #[serde(default)]
    pub points: Vec<Position>,
    #[serde(default)]
    pub waypoints: Vec<Position>,
    #[serde(default)]
    pub style: RoutingStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_position: Option<Position>,
    /// Top-left of the bounding box spanned by the two endpoints
    #[serde(default = "default_position")]
    pub position: Position,
}

fn default_position() -> Position {
    Position::ZERO
}

impl Connection {
    pub fn new(id: ElementId, from_id: ElementId, to_id: ElementId) -> Self {
        Self {
            id,
            from_id,
            to_id,
            from_point: ConnectionPoint::Center,
            to_point: ConnectionPoint::Center,
            points: Vec::new(),
            waypoints: Vec::new(),
            style: RoutingStyle::default(),
            cardinality: None,
            participation: None,
            label_position: None,
            position: Position::ZERO,
        }
    }

    pub fn touches(&self, id: ElementId) -> bool {
        self.from_id == id || self.to_id == id
    }

    /// True if this connection links `a` and `b`, in either direction
    pub fn links(&self, a: ElementId, b: ElementId) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }

    /// The attachment point this connection uses on `id`, if it touches it
    pub fn point_on(&self, id: ElementId) -> Option<ConnectionPoint> {
        if self.from_id == id {
            Some(self.from_point)
        } else if self.to_id == id {
            Some(self.to_point)
        } else {
            None
        }
    }

    /// The endpoint that is not `id`
    pub fn other_end(&self, id: ElementId) -> Option<ElementId> {
        if self.from_id == id {
            Some(self.to_id)
        } else if self.to_id == id {
            Some(self.from_id)
        } else {
            None
        }
    }
}

/// A partial update of a connection's user-editable properties.
///
/// `None` leaves a property untouched; the inner `Option` of nullable
/// properties clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionUpdate {
    pub cardinality: Option<Option<String>>,
    pub participation: Option<Option<String>>,
    pub style: Option<RoutingStyle>,
    pub waypoints: Option<Vec<Position>>,
    pub label_position: Option<Option<Position>>,
}

impl ConnectionUpdate {
    pub fn cardinality(mut self, value: impl Into<String>) -> Self {
        self.cardinality = Some(Some(value.into()));
        self
    }

    pub fn participation(mut self, value: impl Into<String>) -> Self {
        self.participation = Some(Some(value.into()));
        self
    }

    pub fn style(mut self, style: RoutingStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn waypoints(mut self, waypoints: Vec<Position>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    /// True if applying this update changes the rendered path
    pub fn reroutes(&self) -> bool {
        self.style.is_some() || self.waypoints.is_some()
    }
}
