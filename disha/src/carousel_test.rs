use super::*;

#[test]
fn offset_stays_within_half_ring() {
    for total in 1..=12usize {
        for center in 0..total {
            for idx in 0..total {
                let offset = circular_offset(idx, center, total);
                let total = total as i64;
                assert!(
                    -total < 2 * offset && 2 * offset <= total,
                    "offset {offset} out of range for total {total}"
                );
            }
        }
    }
}

#[test]
fn offset_wraps_to_shortest_distance() {
    assert_eq!(circular_offset(5, 0, 6), -1);
    assert_eq!(circular_offset(1, 5, 6), 2);
    assert_eq!(circular_offset(3, 0, 6), 3);
    assert_eq!(circular_offset(0, 3, 6), 3);
    assert_eq!(circular_offset(4, 0, 5), -1);
}

#[test]
fn far_images_are_hidden() {
    let total = 6;
    for center in 0..total {
        for idx in 0..total {
            let offset = circular_offset(idx, center, total);
            assert_eq!(image_layout(idx, center, total).is_some(), offset.abs() <= 2);
        }
    }
}

#[test]
fn center_image_stacks_highest() {
    let total = 6;
    for center in 0..total {
        let visible: Vec<ImageLayout> = (0..total)
            .filter_map(|idx| image_layout(idx, center, total))
            .collect();
        let top = visible.iter().max_by_key(|l| l.z_index).unwrap();
        assert!(top.is_center());
        assert_eq!(visible.iter().filter(|l| l.z_index == top.z_index).count(), 1);
    }
}

#[test]
fn side_images_decay_and_mirror() {
    let left = image_layout(5, 0, 6).unwrap();
    let right = image_layout(1, 0, 6).unwrap();
    let far_right = image_layout(2, 0, 6).unwrap();

    assert_eq!(left.scale, right.scale);
    assert_eq!(left.opacity, right.opacity);
    assert_eq!(left.translate_x_vw, -right.translate_x_vw);
    assert_eq!(left.rotate_y_deg, -right.rotate_y_deg);

    assert!((right.scale - 0.85).abs() < 1e-9);
    assert!((right.opacity - 0.7).abs() < 1e-9);
    assert_eq!(right.translate_x_vw, 40.0);
    assert_eq!(right.rotate_y_deg, -32.0);
    assert_eq!(right.blur_px, 4.0);

    assert!(far_right.scale < right.scale);
    assert!(far_right.opacity < right.opacity);
    assert!(far_right.blur_px > right.blur_px);
    assert_eq!(far_right.z_index, 8);
}

#[test]
fn center_style_has_no_rotation_or_shift() {
    let center = image_layout(2, 2, 6).unwrap();
    let style = center.style();
    assert!(style.contains("scale(1) rotateY(0deg)"));
    assert!(!style.contains("translateX"));
    assert!(style.contains("z-index: 10;"));
}

#[test]
fn spring_settles_quickly() {
    let spring = Spring::default();
    assert!(spring.damping_ratio() > 1.0);
    assert_eq!(spring.settle_ms(), 400);
}

#[test]
fn advance_wraps_around_the_ring() {
    let state = Rc::new(CarouselState::new(3));
    let state = state.reduce(CarouselAction::Advance);
    assert_eq!(state.center, 1);
    let state = state.reduce(CarouselAction::Advance).reduce(CarouselAction::Advance);
    assert_eq!(state.center, 0);
    assert_eq!(advance(0, 0), 0);
}
