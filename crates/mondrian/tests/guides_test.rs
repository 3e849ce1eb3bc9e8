use mondrian::guides::{GuideOptions, structural_guides};
use mondrian::{ColorClass, LineDir, LineSegment, Point, SegmentKind, StrokeMetrics, Tile};

fn tile(id: &str, tl: (f64, f64), br: (f64, f64)) -> Tile {
    Tile::new(
        Point::new(tl.0, tl.1),
        Point::new(br.0, br.1),
        0.0,
        ColorClass::Up,
        id,
        &StrokeMetrics::new(5.0),
    )
}

fn opts() -> GuideOptions {
    GuideOptions {
        extent: Point::new(1000.0, 1000.0),
        min_length: 40.0,
        stroke_width: 1.0,
    }
}

fn spans(
    guides: &[LineSegment],
    vertical_at: Option<f64>,
    horizontal_at: Option<f64>,
) -> Vec<(f64, f64)> {
    guides
        .iter()
        .filter_map(|g| match (g.direction, vertical_at, horizontal_at) {
            (Some(LineDir::Down), Some(x), _) if g.a.x == x => Some((g.a.y, g.b.y)),
            (Some(LineDir::Right), _, Some(y)) if g.a.y == y => Some((g.a.x, g.b.x)),
            _ => None,
        })
        .collect()
}

#[test]
fn guides_single_tile_splits_each_edge_line_around_the_tile() {
    let tiles = [tile("a", (100.0, 100.0), (200.0, 200.0))];
    let guides = structural_guides(&tiles, &opts());

    assert_eq!(guides.len(), 8);
    for x in [100.0, 200.0] {
        assert_eq!(
            spans(&guides, Some(x), None),
            vec![(0.0, 100.0), (200.0, 1000.0)]
        );
    }
    for y in [100.0, 200.0] {
        assert_eq!(
            spans(&guides, None, Some(y)),
            vec![(0.0, 100.0), (200.0, 1000.0)]
        );
    }
    for g in &guides {
        assert_eq!(g.kind, SegmentKind::Guide);
        assert_eq!(g.color, ColorClass::Neutral);
        assert_eq!(g.stroke_width, 1.0);
        assert!(g.length() > 40.0);
    }
}

#[test]
fn guides_vertical_lines_come_first_in_ascending_order() {
    let tiles = [
        tile("b", (600.0, 600.0), (700.0, 700.0)),
        tile("a", (100.0, 100.0), (200.0, 200.0)),
    ];
    let guides = structural_guides(&tiles, &opts());
    let first_horizontal = guides
        .iter()
        .position(|g| g.direction == Some(LineDir::Right))
        .expect("horizontal guides");
    assert!(
        guides[..first_horizontal]
            .iter()
            .all(|g| g.direction == Some(LineDir::Down))
    );
    assert!(
        guides[first_horizontal..]
            .iter()
            .all(|g| g.direction == Some(LineDir::Right))
    );
    let xs: Vec<f64> = guides[..first_horizontal].iter().map(|g| g.a.x).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{xs:?}");
}

#[test]
fn guides_drop_gaps_not_longer_than_the_minimum() {
    let tiles = [
        tile("a", (100.0, 100.0), (200.0, 200.0)),
        tile("b", (100.0, 230.0), (200.0, 300.0)),
    ];
    let guides = structural_guides(&tiles, &opts());
    assert_eq!(
        spans(&guides, Some(100.0), None),
        vec![(0.0, 100.0), (300.0, 1000.0)]
    );
}

#[test]
fn guides_skip_positions_on_the_canvas_boundary() {
    let tiles = [tile("a", (0.0, 0.0), (100.0, 100.0))];
    let guides = structural_guides(&tiles, &opts());
    assert!(spans(&guides, Some(0.0), None).is_empty());
    assert_eq!(spans(&guides, Some(100.0), None), vec![(100.0, 1000.0)]);
    assert_eq!(spans(&guides, None, Some(100.0)), vec![(100.0, 1000.0)]);
    assert_eq!(guides.len(), 2);
}

#[test]
fn guides_stop_at_tiles_the_line_crosses() {
    let tiles = [
        tile("wide", (100.0, 100.0), (300.0, 200.0)),
        tile("small", (200.0, 400.0), (260.0, 500.0)),
    ];
    let guides = structural_guides(&tiles, &opts());
    assert_eq!(
        spans(&guides, Some(200.0), None),
        vec![(0.0, 100.0), (200.0, 400.0), (500.0, 1000.0)]
    );
}

#[test]
fn guides_empty_tile_set_yields_nothing() {
    let tiles: [Tile; 0] = [];
    assert!(structural_guides(&tiles, &opts()).is_empty());
}

#[test]
fn guides_stacked_tiles_merge_into_one_occupied_stretch() {
    let tiles = [
        tile("top", (100.0, 100.0), (200.0, 200.0)),
        tile("bottom", (100.0, 200.0), (200.0, 300.0)),
    ];
    let guides = structural_guides(&tiles, &opts());

    assert_eq!(
        spans(&guides, Some(100.0), None),
        vec![(0.0, 100.0), (300.0, 1000.0)]
    );
    assert_eq!(
        spans(&guides, None, Some(200.0)),
        vec![(0.0, 100.0), (200.0, 1000.0)]
    );
    assert!(guides.iter().all(|g| g.length() > 0.0));
}
