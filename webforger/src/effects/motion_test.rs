use super::*;

#[test]
fn faster_speed_shortens_cycle() {
    assert_eq!(cycle_seconds(12.0, 1.0), Some(12.0));
    assert_eq!(cycle_seconds(12.0, 2.0), Some(6.0));
    assert_eq!(cycle_seconds(12.0, 0.0), None);
    assert_eq!(cycle_seconds(12.0, -1.0), None);
    assert_eq!(animation_css("spin", 10.0, 0.0, "normal"), "none");
    assert_eq!(animation_css("spin", 10.0, 4.0, "reverse"), "spin 2.50s linear infinite reverse");
}

#[test]
fn stops_are_evenly_spaced() {
    assert_eq!(gradient_stops(&["#54034d", "#B19EEF", "#5227FF"]), "#54034d 0%, #B19EEF 50%, #5227FF 100%");
    assert_eq!(gradient_stops(&["#fff"]), "#fff 0%, #fff 100%");
    assert_eq!(gradient_stops::<&str>(&[]), "transparent 0%, transparent 100%");
}

#[test]
fn blinds_respect_minimum_width() {
    assert_eq!(blind_count(1920.0, 16, 60.0), 16);
    assert_eq!(blind_count(600.0, 16, 60.0), 10);
    assert_eq!(blind_count(30.0, 16, 60.0), 1);
    assert_eq!(blind_count(0.0, 16, 60.0), 16);
    assert_eq!(blind_count(600.0, 0, 60.0), 1);
}

#[test]
fn hex_colors_convert() {
    assert_eq!(hex_to_rgba("#8b5cf6", 0.5).as_deref(), Some("rgba(139, 92, 246, 0.5)"));
    assert_eq!(hex_to_rgba("#fff", 2.0).as_deref(), Some("rgba(255, 255, 255, 1)"));
    assert_eq!(hex_to_rgba("#5d0011ff", 1.0).as_deref(), Some("rgba(93, 0, 17, 1)"));
    assert_eq!(hex_to_rgba("8b5cf6", 1.0), None);
    assert_eq!(hex_to_rgba("#zzzzzz", 1.0), None);
}

#[test]
fn grid_offsets_wrap_in_range() {
    let mut grid = GridScroll::new(35.0);
    grid.step(Direction::Right, 0.5);
    assert_eq!(grid.offset_x, 34.5);
    assert_eq!(grid.offset_y, 0.0);

    let mut grid = GridScroll::new(35.0);
    for _ in 0..200 {
        grid.step(Direction::Diagonal, 0.5);
        assert!((0.0..35.0).contains(&grid.offset_x));
        assert!((0.0..35.0).contains(&grid.offset_y));
    }

    let mut grid = GridScroll::new(10.0);
    grid.step(Direction::Left, 0.0);
    assert!((grid.offset_x - 0.1).abs() < 1e-9);
    grid.step(Direction::Up, 12.0);
    assert_eq!(grid.offset_y, 2.0);
}

#[test]
fn hovered_cell_matches_drawn_cell() {
    let mut grid = GridScroll::new(35.0);
    grid.offset_x = 10.0;
    let (col, row) = grid.cell_at(30.0, 40.0);
    assert_eq!((col, row), (1, 1));
    let (x, y) = grid.cell_origin(col, row);
    assert!(x <= 30.0 && 30.0 < x + 35.0);
    assert!(y <= 40.0 && 40.0 < y + 35.0);
    assert_eq!(grid.cell_at(0.0, 0.0), (0, 0));
}

#[test]
fn non_ascii_colors_are_rejected() {
    assert_eq!(hex_to_rgba("#aéaaa", 1.0), None);
    assert_eq!(hex_to_rgba("#ééé", 1.0), None);
}
