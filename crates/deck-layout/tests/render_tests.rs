use deck_layout::*;
use std::path::PathBuf;

/// 34x100 page, 5pt margin, 10x20 cards: a 2x4 grid with 4pt of horizontal slack
fn small_config() -> LayoutConfig {
    LayoutConfig {
        page_width: 34.0,
        page_height: 100.0,
        margin: 5.0,
        gap: 0.0,
        card_width: 10.0,
        card_height: 20.0,
        ..Default::default()
    }
}

/// 30x50 page where a 2x2 grid fills the printable area exactly
fn snug_config() -> LayoutConfig {
    LayoutConfig {
        page_width: 30.0,
        page_height: 50.0,
        margin: 5.0,
        gap: 0.0,
        card_width: 10.0,
        card_height: 20.0,
        ..Default::default()
    }
}

fn page_of(count: usize) -> Page {
    let cards = (0..count)
        .map(|i| {
            CardPair::new(
                format!("front-{i}.png"),
                Some(PathBuf::from(format!("back-{i}.png"))),
            )
        })
        .collect();
    Page::new(0, cards)
}

fn image_rects(ops: &[DrawCommand]) -> Vec<Rect> {
    ops.iter()
        .filter_map(|op| match op {
            DrawCommand::PlaceImage { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect()
}

fn line_count(ops: &[DrawCommand]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawCommand::Line { .. }))
        .count()
}

#[test]
fn test_back_offset_on_mirrored_columns() {
    let config = LayoutConfig {
        back_offset_x: 3.0,
        ..small_config()
    };
    assert_eq!(config.grid(), GridSize { columns: 2, rows: 4 });

    let ops = render_page(&page_of(2), &config, Surface::Back);
    let xs: Vec<f32> = image_rects(&ops).iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![22.0, 12.0]);
}

#[test]
fn test_back_images_come_from_back_paths() {
    let ops = render_page(&page_of(2), &small_config(), Surface::Back);
    let paths: Vec<PathBuf> = ops
        .iter()
        .filter_map(|op| match op {
            DrawCommand::PlaceImage { path, .. } => Some(path.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("back-0.png"), PathBuf::from("back-1.png")]
    );
}

#[test]
fn test_front_placement_row_by_row() {
    let ops = render_page(&page_of(3), &small_config(), Surface::Front);
    let rects = image_rects(&ops);
    assert_eq!(rects[0], Rect::new(7.0, 70.0, 10.0, 20.0));
    assert_eq!(rects[1], Rect::new(17.0, 70.0, 10.0, 20.0));
    assert_eq!(rects[2], Rect::new(7.0, 50.0, 10.0, 20.0));
}

#[test]
fn test_back_columns_mirror_front_columns() {
    let config = snug_config();
    let page = page_of(4);
    let fronts = image_rects(&render_page(&page, &config, Surface::Front));
    let backs = image_rects(&render_page(&page, &config, Surface::Back));

    // Logical column 0 on the back sits where column 1 sits on the front
    assert_eq!(backs[0].x, fronts[1].x);
    assert_eq!(backs[1].x, fronts[0].x);
    assert_eq!(backs[2].x, fronts[3].x);
    assert_eq!(backs[3].x, fronts[2].x);
    // Rows are not mirrored
    for (front, back) in fronts.iter().zip(&backs) {
        assert_eq!(front.y, back.y);
    }
}

#[test]
fn test_vertical_offset_shifts_backs_only() {
    let config = LayoutConfig {
        back_offset_y: -4.0,
        ..snug_config()
    };
    let page = page_of(1);
    let front = image_rects(&render_page(&page, &config, Surface::Front))[0];
    let back = image_rects(&render_page(&page, &config, Surface::Back))[0];
    assert_eq!(front.y, 25.0);
    assert_eq!(back.y, 21.0);
}

#[test]
fn test_back_oversize_keeps_center() {
    let config = LayoutConfig {
        page_width: 20.0,
        back_oversize: 4.0,
        ..snug_config()
    };
    assert_eq!(config.grid().columns, 1);

    let page = page_of(2);
    let fronts = image_rects(&render_page(&page, &config, Surface::Front));
    let backs = image_rects(&render_page(&page, &config, Surface::Back));

    for (front, back) in fronts.iter().zip(&backs) {
        assert_eq!(back.width, front.width + 4.0);
        assert_eq!(back.height, front.height + 4.0);
        assert_eq!(back.center_x(), front.center_x());
        assert_eq!(back.center_y(), front.center_y());
    }
}

#[test]
fn test_fronts_never_oversized() {
    let config = LayoutConfig {
        back_oversize: 6.0,
        ..small_config()
    };
    let fronts = image_rects(&render_page(&page_of(2), &config, Surface::Front));
    assert!(fronts.iter().all(|r| r.width == 10.0 && r.height == 20.0));
}

#[test]
fn test_blank_back_fills_rectangle() {
    let config = LayoutConfig {
        back_oversize: 2.0,
        ..small_config()
    };
    let page = Page::new(0, vec![CardPair::new("front.png", None)]);

    let back_ops = render_page(&page, &config, Surface::Back);
    assert_eq!(back_ops.len(), 1);
    assert!(!back_ops.iter().any(DrawCommand::is_image));
    match &back_ops[0] {
        DrawCommand::FillRect { rect, gray } => {
            assert_eq!(*gray, 1.0);
            assert_eq!(*rect, Rect::new(18.0, 69.0, 12.0, 22.0));
        }
        other => panic!("Expected FillRect, got {:?}", other),
    }

    // The front of the same card is still an image
    let front_ops = render_page(&page, &config, Surface::Front);
    assert!(front_ops[0].is_image());
}

#[test]
fn test_negative_rotation_is_normalized() {
    let config = LayoutConfig {
        rotation_deg: -30.0,
        ..small_config()
    };
    let ops = render_page(&page_of(1), &config, Surface::Back);
    assert_eq!(
        ops[0],
        DrawCommand::Rotate {
            degrees: 330.0,
            center_x: 17.0,
            center_y: 50.0,
        }
    );
}

#[test]
fn test_positive_rotation_unchanged() {
    let config = LayoutConfig {
        rotation_deg: 45.0,
        ..small_config()
    };
    let ops = render_page(&page_of(1), &config, Surface::Back);
    match ops[0] {
        DrawCommand::Rotate { degrees, .. } => assert_eq!(degrees, 45.0),
        ref other => panic!("Expected Rotate, got {:?}", other),
    }
}

#[test]
fn test_fronts_never_rotated() {
    for angle in [-30.0, 45.0, 90.0, 180.0] {
        let config = LayoutConfig {
            rotation_deg: angle,
            ..small_config()
        };
        let ops = render_page(&page_of(2), &config, Surface::Front);
        assert!(!ops.iter().any(DrawCommand::is_rotation));
    }
}

#[test]
fn test_zero_rotation_emits_nothing() {
    let ops = render_page(&page_of(1), &small_config(), Surface::Back);
    assert!(!ops.iter().any(DrawCommand::is_rotation));
}

#[test]
fn test_guide_lines_on_fronts_only() {
    let config = LayoutConfig {
        guide_lines: true,
        ..small_config()
    };
    let page = page_of(2);

    // 3 vertical edges and 5 horizontal edges on a gapless 2x4 grid
    let front = render_page(&page, &config, Surface::Front);
    assert_eq!(line_count(&front), 8);

    let back = render_page(&page, &config, Surface::Back);
    assert_eq!(line_count(&back), 0);
}

#[test]
fn test_guide_lines_span_page() {
    let config = LayoutConfig {
        guide_lines: true,
        ..small_config()
    };
    let ops = render_page(&page_of(0), &config, Surface::Front);
    for op in &ops {
        if let DrawCommand::Line { from, to, .. } = op {
            let vertical = from.0 == to.0;
            if vertical {
                assert_eq!((from.1, to.1), (0.0, 100.0));
            } else {
                assert_eq!((from.0, to.0), (0.0, 34.0));
            }
        }
    }
}

#[test]
fn test_crosshairs_on_both_surfaces() {
    let config = LayoutConfig {
        crosshairs: true,
        ..small_config()
    };
    let page = page_of(1);
    assert_eq!(line_count(&render_page(&page, &config, Surface::Front)), 8);
    assert_eq!(line_count(&render_page(&page, &config, Surface::Back)), 8);
}

#[test]
fn test_empty_page_renders_only_marks() {
    let config = LayoutConfig {
        crosshairs: true,
        guide_lines: true,
        ..small_config()
    };
    let ops = render_page(&page_of(0), &config, Surface::Front);
    assert_eq!(line_count(&ops), ops.len());
    assert_eq!(ops.len(), 16);

    let plain = render_page(&page_of(0), &small_config(), Surface::Back);
    assert!(plain.is_empty());
}

#[test]
fn test_rotation_precedes_cells() {
    let config = LayoutConfig {
        rotation_deg: 180.0,
        crosshairs: true,
        ..small_config()
    };
    let ops = render_page(&page_of(2), &config, Surface::Back);
    assert!(ops[0].is_rotation());
    assert_eq!(ops.iter().filter(|op| op.is_rotation()).count(), 1);
}

fn line_endpoints(ops: &[DrawCommand]) -> Vec<((f32, f32), (f32, f32))> {
    ops.iter()
        .filter_map(|op| match op {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_back_crosshairs_follow_back_offsets() {
    let config = LayoutConfig {
        crosshairs: true,
        back_offset_x: 3.0,
        back_offset_y: -2.0,
        ..small_config()
    };
    let page = page_of(1);
    let front = line_endpoints(&render_page(&page, &config, Surface::Front));
    let back = line_endpoints(&render_page(&page, &config, Surface::Back));
    assert_eq!(front.len(), 8);
    assert_eq!(back.len(), 8);

    let shifted = |a: (f32, f32), b: (f32, f32)| {
        (b.0 - a.0 - 3.0).abs() < 1e-3 && (b.1 - a.1 + 2.0).abs() < 1e-3
    };
    for ((front_from, front_to), (back_from, back_to)) in front.iter().zip(&back) {
        assert!(shifted(*front_from, *back_from));
        assert!(shifted(*front_to, *back_to));
    }
}
