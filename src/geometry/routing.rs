use egui::{Pos2, pos2};

use crate::model::ConnectionPoint;

/// Segments shorter than this on both axes are treated as a single point.
pub const DEGENERATE_SEGMENT: f32 = 0.1;

/// Converts a polyline into a path made only of horizontal and vertical
/// segments.
///
/// Each segment of `points` is replaced by a three-leg detour that turns at
/// the midpoint of one axis. The first segment follows the source edge
/// when both edge hints name a real edge: a horizontal source leaves
/// sideways, a vertical source leaves up or down. Every other segment goes
/// horizontal-first when `|dx| >= |dy|`, the same test [`closest_edge`]
/// uses, so edge choice and routing direction always agree.
///
/// The first and last points of `points` are kept exactly.
///
/// [`closest_edge`]: super::closest_edge
pub fn to_orthogonal_path(
    points: &[Pos2],
    from_edge: Option<ConnectionPoint>,
    to_edge: Option<ConnectionPoint>,
) -> Vec<Pos2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len() * 3);
    path.push(first);

    for (index, segment) in points.windows(2).enumerate() {
        let (start, end) = (segment[0], segment[1]);
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx.abs() < DEGENERATE_SEGMENT && dy.abs() < DEGENERATE_SEGMENT {
            path.push(end);
            continue;
        }

        let horizontal_first = match (index, edge_hint(from_edge), edge_hint(to_edge)) {
            (0, Some(from), Some(_)) => from.is_horizontal(),
            _ => dx.abs() >= dy.abs(),
        };

        if horizontal_first {
            let mid_x = start.x + dx / 2.0;
            path.push(pos2(mid_x, start.y));
            path.push(pos2(mid_x, end.y));
        } else {
            let mid_y = start.y + dy / 2.0;
            path.push(pos2(start.x, mid_y));
            path.push(pos2(end.x, mid_y));
        }
        path.push(end);
    }

    path
}

fn edge_hint(edge: Option<ConnectionPoint>) -> Option<ConnectionPoint> {
    edge.filter(|edge| *edge != ConnectionPoint::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn horizontal_dominant_segment_turns_at_mid_x() {
        let path = to_orthogonal_path(&[pos2(0.0, 0.0), pos2(100.0, 50.0)], None, None);
        assert_eq!(
            path,
            vec![pos2(0.0, 0.0), pos2(50.0, 0.0), pos2(50.0, 50.0), pos2(100.0, 50.0)]
        );
    }

    #[test]
    fn vertical_dominant_segment_turns_at_mid_y() {
        let path = to_orthogonal_path(&[pos2(0.0, 0.0), pos2(50.0, 100.0)], None, None);
        assert_eq!(
            path,
            vec![pos2(0.0, 0.0), pos2(0.0, 50.0), pos2(50.0, 50.0), pos2(50.0, 100.0)]
        );
    }

    #[test]
    fn horizontal_source_overrides_dominant_axis() {
        let path = to_orthogonal_path(
            &[pos2(0.0, 0.0), pos2(20.0, 100.0)],
            Some(ConnectionPoint::Right),
            Some(ConnectionPoint::Top),
        );
        assert_eq!(
            path,
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 100.0), pos2(20.0, 100.0)]
        );
    }

    #[test]
    fn vertical_source_overrides_dominant_axis() {
        let path = to_orthogonal_path(
            &[pos2(0.0, 0.0), pos2(100.0, 20.0)],
            Some(ConnectionPoint::Bottom),
            Some(ConnectionPoint::Left),
        );
        assert_eq!(
            path,
            vec![pos2(0.0, 0.0), pos2(0.0, 10.0), pos2(100.0, 10.0), pos2(100.0, 20.0)]
        );
    }

    #[test]
    fn hints_only_apply_to_the_first_segment() {
        let path = to_orthogonal_path(
            &[pos2(0.0, 0.0), pos2(20.0, 100.0), pos2(120.0, 110.0)],
            Some(ConnectionPoint::Right),
            Some(ConnectionPoint::Left),
        );
        assert_eq!(
            path,
            vec![
                pos2(0.0, 0.0),
                pos2(10.0, 0.0),
                pos2(10.0, 100.0),
                pos2(20.0, 100.0),
                pos2(70.0, 100.0),
                pos2(70.0, 110.0),
                pos2(120.0, 110.0),
            ]
        );
    }

    #[test]
    fn center_hint_is_ignored() {
        let hinted = to_orthogonal_path(
            &[pos2(0.0, 0.0), pos2(50.0, 100.0)],
            Some(ConnectionPoint::Center),
            Some(ConnectionPoint::Left),
        );
        let plain = to_orthogonal_path(&[pos2(0.0, 0.0), pos2(50.0, 100.0)], None, None);
        assert_eq!(hinted, plain);
    }

    #[test]
    fn degenerate_segment_collapses_to_its_end() {
        let path = to_orthogonal_path(&[pos2(5.0, 5.0), pos2(5.05, 5.05)], None, None);
        assert_eq!(path, vec![pos2(5.0, 5.0), pos2(5.05, 5.05)]);
    }

    #[test]
    fn short_inputs_pass_through() {
        assert!(to_orthogonal_path(&[], None, None).is_empty());
        assert_eq!(
            to_orthogonal_path(&[pos2(3.0, 4.0)], None, None),
            vec![pos2(3.0, 4.0)]
        );
    }
}
