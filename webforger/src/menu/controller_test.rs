use super::*;

const DESKTOP: f64 = 1280.0;
const PHONE: f64 = 400.0;

fn controller() -> MenuController<&'static str> {
    MenuController::new(vec![-8.0, 8.0, 8.0, 8.0, -8.0], AnimationSettings::default())
}

fn opened() -> MenuController<&'static str> {
    let mut menu = controller();
    assert!(menu.apply(MenuCommand::Open { viewport_width: DESKTOP }));
    let generation = menu.generation();
    assert!(menu.apply(MenuCommand::AnimationFinished(generation)));
    menu
}

#[test]
fn starts_closed_and_hidden() {
    let menu = controller();
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.overlay_visible());
    assert!(menu.poses().iter().all(|pose| pose.scale == 0.0));
}

#[test]
fn open_staggers_entrance() {
    let mut menu = controller();
    assert!(menu.apply(MenuCommand::Open { viewport_width: DESKTOP }));
    assert_eq!(menu.phase(), MenuPhase::Opening);
    assert!(menu.overlay_visible());

    let settings = AnimationSettings::default();
    for (idx, pose) in menu.poses().iter().enumerate() {
        assert_eq!(pose.scale, 1.0);
        assert_eq!(pose.label_opacity, 1.0);
        let nominal = idx as f64 * settings.stagger_s;
        assert!(pose.delay_s >= 0.0);
        assert!((pose.delay_s - nominal).abs() <= settings.jitter_s + 1e-9);
    }
    assert!(menu.animation_ms() >= 500);
}

#[test]
fn open_while_open_is_noop() {
    let mut menu = opened();
    let before = menu.clone();
    assert!(!menu.apply(MenuCommand::Open { viewport_width: DESKTOP }));
    assert_eq!(menu, before);

    let mut opening = controller();
    opening.apply(MenuCommand::Open { viewport_width: DESKTOP });
    let generation = opening.generation();
    assert!(!opening.apply(MenuCommand::Open { viewport_width: DESKTOP }));
    assert_eq!(opening.generation(), generation);
}

#[test]
fn item_click_defers_navigation_until_exit_finishes() {
    let mut menu = opened();
    assert!(menu.apply(MenuCommand::ItemClicked("/about")));
    assert_eq!(menu.phase(), MenuPhase::Closing);
    assert_eq!(menu.pending(), Some(&"/about"));
    assert!(menu.navigation().is_none());
    assert!(menu.overlay_visible());

    let generation = menu.generation();
    assert!(menu.apply(MenuCommand::AnimationFinished(generation)));
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.overlay_visible());
    assert_eq!(
        menu.navigation(),
        Some(&Navigation { route: "/about", seq: generation })
    );
    assert!(menu.pending().is_none());
}

#[test]
fn escape_closes_without_navigation() {
    let mut menu = opened();
    assert!(menu.apply(MenuCommand::Escape));
    let generation = menu.generation();
    menu.apply(MenuCommand::AnimationFinished(generation));
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(menu.navigation().is_none());

    assert!(!menu.apply(MenuCommand::Escape));
}

#[test]
fn close_mid_open_hides_every_pill_before_unmount() {
    let mut menu = controller();
    menu.apply(MenuCommand::Open { viewport_width: DESKTOP });
    let entrance = menu.generation();

    assert!(menu.apply(MenuCommand::Close));
    assert_eq!(menu.phase(), MenuPhase::Closing);
    assert!(menu.overlay_visible());
    assert!(menu.poses().iter().all(|pose| pose.scale == 0.0 && pose.label_opacity == 0.0));

    // The superseded entrance completing must not reopen anything.
    assert!(!menu.apply(MenuCommand::AnimationFinished(entrance)));
    assert_eq!(menu.phase(), MenuPhase::Closing);

    let exit = menu.generation();
    menu.apply(MenuCommand::AnimationFinished(exit));
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.overlay_visible());
    assert!(menu.poses().iter().all(|pose| pose.scale == 0.0));
}

#[test]
fn toggle_during_close_reopens_and_drops_pending_route() {
    let mut menu = opened();
    menu.apply(MenuCommand::ItemClicked("/blog"));
    let exit = menu.generation();

    assert!(menu.apply(MenuCommand::Toggle { viewport_width: DESKTOP }));
    assert_eq!(menu.phase(), MenuPhase::Opening);
    assert!(menu.pending().is_none());

    assert!(!menu.apply(MenuCommand::AnimationFinished(exit)));
    assert!(menu.overlay_visible());
    assert!(menu.navigation().is_none());
}

#[test]
fn rotation_follows_viewport_width() {
    let mut menu = controller();
    menu.apply(MenuCommand::Open { viewport_width: PHONE });
    assert!(menu.poses().iter().all(|pose| pose.rotation == 0.0));

    assert!(menu.apply(MenuCommand::Resize { viewport_width: DESKTOP }));
    let rotations: Vec<f64> = menu.poses().iter().map(|pose| pose.rotation).collect();
    assert_eq!(rotations, vec![-8.0, 8.0, 8.0, 8.0, -8.0]);

    assert!(!menu.apply(MenuCommand::Resize { viewport_width: DESKTOP + 10.0 }));
}

#[test]
fn resize_while_closed_is_ignored() {
    let mut menu = controller();
    assert!(!menu.apply(MenuCommand::Resize { viewport_width: DESKTOP }));
}

#[test]
fn reducer_keeps_identity_for_ignored_commands() {
    let menu = Rc::new(controller());
    let same = menu.clone().reduce(MenuCommand::Close);
    assert!(Rc::ptr_eq(&menu, &same));

    let changed = menu.clone().reduce(MenuCommand::Toggle { viewport_width: DESKTOP });
    assert!(!Rc::ptr_eq(&menu, &changed));
    assert!(changed.is_open());
}

#[test]
fn entrance_lasts_until_last_label_lands() {
    let mut menu = controller();
    menu.apply(MenuCommand::Open { viewport_width: DESKTOP });
    let last_label_s = menu
        .poses()
        .iter()
        .map(|pose| pose.delay_s + pose.duration_s * LABEL_LAG + pose.duration_s)
        .fold(0.0, f64::max);
    assert!(f64::from(menu.animation_ms()) >= last_label_s * 1000.0);
}

#[test]
fn reopening_draws_fresh_jitter_per_item() {
    let mut menu = opened();
    let first: Vec<f64> = menu.poses().iter().map(|pose| pose.delay_s).collect();
    menu.apply(MenuCommand::Close);
    let generation = menu.generation();
    menu.apply(MenuCommand::AnimationFinished(generation));
    menu.apply(MenuCommand::Open { viewport_width: DESKTOP });
    let second: Vec<f64> = menu.poses().iter().map(|pose| pose.delay_s).collect();
    assert_eq!(second.len(), 5);
    assert_ne!(first, second);
}
