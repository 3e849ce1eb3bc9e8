use mondrian::{
    CanvasConfig, ColorClass, CornerPos, Error, LayoutContext, LineDir, Point, SegmentKind,
    StrokeMetrics, Tile,
};

fn tile(tl: (f64, f64), br: (f64, f64), stroke: f64) -> Tile {
    Tile::new(
        Point::new(tl.0, tl.1),
        Point::new(br.0, br.1),
        0.0,
        ColorClass::Neutral,
        "t",
        &StrokeMetrics::new(stroke),
    )
}

#[test]
fn tile_corners_sit_half_a_stroke_outside_the_footprint() {
    let t = tile((100.0, 100.0), (200.0, 160.0), 5.0);
    assert_eq!(t.top_left(), Point::new(98.0, 98.0));
    assert_eq!(t.top_right(), Point::new(202.0, 98.0));
    assert_eq!(t.bottom_left(), Point::new(98.0, 162.0));
    assert_eq!(t.bottom_right(), Point::new(202.0, 162.0));
    for pos in CornerPos::ALL {
        assert_eq!(t.corner(pos).position, pos);
        assert_eq!(t.corner(pos).owning_line, None);
    }
}

#[test]
fn tile_center_is_the_midpoint_of_adjusted_corners() {
    let t = tile((100.0, 100.0), (200.0, 160.0), 5.0);
    assert_eq!(t.center, Point::new(150.0, 130.0));
}

#[test]
fn tile_width_and_height_include_both_stroke_offsets() {
    let t = tile((100.0, 100.0), (200.0, 160.0), 5.0);
    let half = StrokeMetrics::new(5.0).half;
    assert_eq!(t.width(), 100.0 + 2.0 * half);
    assert_eq!(t.height(), 60.0 + 2.0 * half);

    // With an even stroke the two half offsets add up to the full stroke width.
    let t = tile((100.0, 100.0), (200.0, 160.0), 4.0);
    assert_eq!(t.top_right().x - t.top_left().x, 100.0 + 4.0);
    assert_eq!(t.bottom_left().y - t.top_left().y, 60.0 + 4.0);
}

#[test]
fn tile_is_diagonal_to_points_outside_both_ranges_only() {
    let t = tile((100.0, 100.0), (200.0, 200.0), 5.0);
    assert!(t.is_diagonal_to(Point::new(300.0, 300.0)));
    assert!(t.is_diagonal_to(Point::new(50.0, 250.0)));
    assert!(!t.is_diagonal_to(Point::new(150.0, 300.0)));
    assert!(!t.is_diagonal_to(Point::new(300.0, 150.0)));
    assert!(!t.is_diagonal_to(Point::new(202.0, 300.0)));
}

#[test]
fn context_new_tile_appends_four_boundary_segments() {
    let mut ctx = LayoutContext::new(&CanvasConfig::default());
    let t = ctx
        .new_tile(
            Point::new(100.0, 100.0),
            Point::new(200.0, 160.0),
            6000.0,
            ColorClass::Up,
            "a",
        )
        .expect("tile");
    assert_eq!(t.id, "a");
    assert_eq!(t.color, ColorClass::Up);

    let segs = ctx.segments();
    assert_eq!(segs.len(), 4);
    let expected = [
        ((98.0, 100.0), (202.0, 100.0), LineDir::Right),
        ((200.0, 98.0), (200.0, 162.0), LineDir::Down),
        ((202.0, 160.0), (98.0, 160.0), LineDir::Left),
        ((100.0, 162.0), (100.0, 98.0), LineDir::Up),
    ];
    for (seg, (a, b, dir)) in segs.iter().zip(expected) {
        assert_eq!(seg.a, Point::new(a.0, a.1));
        assert_eq!(seg.b, Point::new(b.0, b.1));
        assert_eq!(seg.direction, Some(dir));
        assert_eq!(seg.kind, SegmentKind::Boundary);
        assert_eq!(seg.color, ColorClass::Neutral);
        assert_eq!(seg.stroke_width, 5.0);
    }
}

#[test]
fn context_rejects_duplicate_tile_ids() {
    let mut ctx = LayoutContext::default();
    ctx.new_tile(
        Point::new(20.0, 20.0),
        Point::new(40.0, 40.0),
        400.0,
        ColorClass::Up,
        "a",
    )
    .expect("first tile");
    let err = ctx
        .new_tile(
            Point::new(60.0, 60.0),
            Point::new(80.0, 80.0),
            400.0,
            ColorClass::Up,
            "a",
        )
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateEntity { id } if id == "a"));
    assert_eq!(ctx.tile_count(), 1);
    assert_eq!(ctx.segments().len(), 4);
}

#[test]
fn contexts_do_not_share_tiles_or_segments() {
    let mut first = LayoutContext::default();
    let second = LayoutContext::default();
    first
        .new_tile(
            Point::new(20.0, 20.0),
            Point::new(40.0, 40.0),
            400.0,
            ColorClass::Down,
            "a",
        )
        .expect("tile");
    assert_eq!(first.tile_count(), 1);
    assert_eq!(second.tile_count(), 0);
    assert!(second.segments().is_empty());
    assert!(second.tile("a").is_none());
}

#[test]
fn color_class_tags_fall_back_to_neutral() {
    assert_eq!(ColorClass::from_tag("red"), ColorClass::Up);
    assert_eq!(ColorClass::from_tag("up"), ColorClass::Up);
    assert_eq!(ColorClass::from_tag("BLUE"), ColorClass::Down);
    assert_eq!(ColorClass::from_tag("yellow"), ColorClass::Moderate);
    assert_eq!(ColorClass::from_tag("black"), ColorClass::Neutral);
    assert_eq!(ColorClass::from_tag("gray"), ColorClass::Neutral);
    assert_eq!(ColorClass::from_tag("purple"), ColorClass::Neutral);
    assert_eq!(ColorClass::from_tag(""), ColorClass::Neutral);
}

#[test]
fn color_class_serializes_as_snake_case_and_reads_any_tag() {
    let c: ColorClass = serde_json::from_str("\"red\"").expect("json");
    assert_eq!(c, ColorClass::Up);
    let c: ColorClass = serde_json::from_str("\"moderate\"").expect("json");
    assert_eq!(c, ColorClass::Moderate);
    let c: ColorClass = serde_json::from_str("\"teal\"").expect("json");
    assert_eq!(c, ColorClass::Neutral);
    assert_eq!(
        serde_json::to_string(&ColorClass::Down).expect("json"),
        "\"down\""
    );
}

#[test]
fn stroke_metrics_floor_half_the_width() {
    let s = StrokeMetrics::new(5.0);
    assert_eq!(s.half, 2.0);
    assert_eq!(s.reach, 3.0);
    assert_eq!(s.trim(), 1.0);
    assert_eq!(StrokeMetrics::new(1.0).half, 0.0);
}
