//! End-to-end runs of the playground through its host-facing entry points.
//!
//! Covered scenarios:
//! 1. A dot pushed into the left wall bounces once and flips direction.
//! 2. Press then three drags spawns one dot per drag, all in the selected color.
//! 3. With nothing selected, presses, timer ticks and drags spawn nothing.
//! 4. Dots are gone right after the frame that gives them their fourth bounce.
//! 5. Two playgrounds seeded alike evolve identically.

use std::time::Duration;

use dot_playground::{
    dot::Dot, store::DotStore, Bounds, DotColor, Playground, PlaygroundConfig,
};
use glam::Vec2;
use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

const FRAME: Duration = Duration::from_millis(16);

// ── Helpers ───────────────────────────────────────────────────────────────────

fn zero_playground() -> Playground<StepRng> {
    Playground::with_rng(PlaygroundConfig::default(), StepRng::new(0, 0))
        .expect("default config is valid")
}

fn seeded_playground(seed: u64) -> Playground<StdRng> {
    let config = PlaygroundConfig {
        seed: Some(seed),
        ..Default::default()
    };
    Playground::new(config).expect("default config is valid")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn straight_bounce_off_left_wall() {
    let mut store = DotStore::default();
    store.insert(Dot::new(
        Vec2::new(1.0, 50.0),
        Vec2::new(-1.0, 0.0),
        DotColor::White,
        5.0,
        5.0,
    ));

    let mut rng = StdRng::seed_from_u64(11);
    store.update_all(Bounds::new(100.0, 100.0), &mut rng);

    let dot = store.iter().next().expect("dot is still alive");
    assert_eq!(dot.position().x, -4.0);
    assert_eq!(dot.bounces(), 1);
    assert!(dot.direction().x > 0.0);
}

#[test]
fn press_then_drags_accumulate() {
    let mut playground = zero_playground();

    playground.on_press_start(Vec2::new(10.0, 10.0));
    let drags = [Vec2::new(20.0, 20.0), Vec2::new(30.0, 25.0), Vec2::new(40.0, 30.0)];
    for position in drags {
        playground.on_drag_update(position);
    }

    let snapshot = playground.snapshot();
    assert_eq!(snapshot.len(), 3);
    for (sprite, position) in snapshot.iter().zip(drags) {
        assert_eq!(sprite.position, position);
        assert_eq!(sprite.color, DotColor::White);
    }
}

#[test]
fn empty_selection_disables_spawning() {
    let mut playground = zero_playground();
    playground.toggle_color(DotColor::White);
    assert!(playground.selection().is_empty());

    playground.on_press_start(Vec2::new(10.0, 10.0));
    for _ in 0..5 {
        playground.on_timer(Duration::from_millis(50));
    }
    playground.on_drag_update(Vec2::new(15.0, 15.0));
    playground.on_press_end();

    assert!(playground.snapshot().is_empty());
}

#[test]
fn timed_spawns_follow_the_selection_at_spawn_time() {
    let mut playground = zero_playground();
    playground.on_press_start(Vec2::new(10.0, 10.0));

    playground.on_timer(Duration::from_millis(50));
    playground.toggle_color(DotColor::Red);
    playground.toggle_color(DotColor::White);
    playground.on_timer(Duration::from_millis(50));

    let colors: Vec<DotColor> = playground.snapshot().iter().map(|s| s.color).collect();
    assert_eq!(colors, vec![DotColor::White, DotColor::Red]);
}

#[test]
fn dots_expire_on_their_fourth_bounce() {
    // A 4x4 box with speed 5 forces a bounce on every frame.
    let mut playground = zero_playground();
    playground.on_drag_update(Vec2::new(2.0, 2.0));
    let bounds = Bounds::new(4.0, 4.0);

    let mut frames = 0;
    while !playground.snapshot().is_empty() {
        let before = playground.store().iter().map(Dot::bounces).max().unwrap_or(0);
        assert!(before < 4);

        playground.tick(FRAME, bounds);
        frames += 1;
        assert!(frames < 10, "dot never expired");
    }

    assert!(playground.store().is_empty());
}

#[test]
fn same_seed_same_simulation() {
    let mut a = seeded_playground(1234);
    let mut b = seeded_playground(1234);
    let bounds = Bounds::new(120.0, 80.0);

    for playground in [&mut a, &mut b] {
        playground.toggle_color(DotColor::Blue);
        playground.toggle_color(DotColor::Pink);
        playground.on_press_start(Vec2::new(60.0, 40.0));
        for i in 0..200 {
            playground.on_timer(FRAME);
            if i % 7 == 0 {
                playground.on_drag_update(Vec2::new(i as f32 % 120.0, 40.0));
            }
            playground.tick(FRAME, bounds);
        }
    }

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.stats(), b.stats());
}
