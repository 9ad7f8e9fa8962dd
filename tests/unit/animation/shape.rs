use super::*;
use crate::foundation::core::{Color, Dimensions, Position};

fn kf(tick: u64, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Keyframe {
    Keyframe::new(
        Tick(tick),
        Position::new(x, y),
        Dimensions::new(w, h).unwrap(),
        Color::new(r, g, b).unwrap(),
    )
}

fn at(tick: u64, x: i32) -> Keyframe {
    kf(tick, x, 0, 10, 10, 0, 0, 0)
}

fn ticks(shape: &Shape) -> Vec<u64> {
    shape.keyframes().iter().map(|k| k.tick().0).collect()
}

fn seeded() -> Shape {
    let mut s = Shape::rectangle("R");
    s.add_segment(Segment::new(at(0, 0), at(10, 100)).unwrap())
        .unwrap();
    s.add_segment(Segment::new(at(10, 100), at(20, 50)).unwrap())
        .unwrap();
    s
}

#[test]
fn kind_parses_only_known_names() {
    assert_eq!("rectangle".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
    assert_eq!("ellipse".parse::<ShapeKind>().unwrap(), ShapeKind::Ellipse);
    assert!(matches!(
        "triangle".parse::<ShapeKind>(),
        Err(KeymotionError::Validation(_))
    ));
    assert_eq!(ShapeKind::Ellipse.to_string(), "ellipse");
}

#[test]
fn first_segment_inserts_both_endpoints() {
    let s = seeded();
    assert_eq!(ticks(&s), vec![0, 10, 20]);
    assert_eq!(s.first_tick(), Some(Tick(0)));
    assert_eq!(s.last_tick(), Some(Tick(20)));
}

#[test]
fn segment_must_continue_from_last_keyframe() {
    let mut s = seeded();
    let before = s.clone();

    // wrong tick, position, dimensions and color each break continuity
    let starts = [
        at(19, 50),
        at(20, 51),
        kf(20, 50, 0, 11, 10, 0, 0, 0),
        kf(20, 50, 0, 10, 10, 0, 1, 0),
    ];
    for start in starts {
        let err = s
            .add_segment(Segment::new(start, at(30, 0)).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            KeymotionError::Continuity { ref shape, tick: Tick(20) } if shape == "R"
        ));
        assert_eq!(s, before);
    }
}

#[test]
fn zero_length_segment_replaces_pose_at_tick() {
    let mut s = seeded();
    s.add_segment(Segment::new(at(20, 50), at(20, 7)).unwrap())
        .unwrap();
    assert_eq!(ticks(&s), vec![0, 10, 20]);
    assert_eq!(s.keyframes()[2].position(), Position::new(7, 0));

    let mut empty = Shape::ellipse("E");
    empty
        .add_segment(Segment::new(at(4, 1), at(4, 2)).unwrap())
        .unwrap();
    assert_eq!(empty.keyframes(), &[at(4, 2)]);
}

#[test]
fn upsert_inserts_in_sorted_position() {
    let mut s = Shape::rectangle("R");
    for t in [50, 10, 30, 0, 60, 20] {
        s.upsert_keyframe(Tick(t), KeyframePatch::from(at(t, t as i32)))
            .unwrap();
    }
    assert_eq!(ticks(&s), vec![0, 10, 20, 30, 50, 60]);
}

#[test]
fn upsert_patches_existing_tick_partially() {
    let mut s = seeded();
    s.upsert_keyframe(
        Tick(10),
        KeyframePatch::default().color(Color::rgb(1, 2, 3)),
    )
    .unwrap();
    let k = s.keyframes()[1];
    assert_eq!(k.position(), Position::new(100, 0));
    assert_eq!(k.color(), Color::rgb(1, 2, 3));
    assert_eq!(ticks(&s), vec![0, 10, 20]);
}

#[test]
fn upsert_new_tick_requires_complete_patch() {
    let mut s = seeded();
    let before = s.clone();
    let err = s
        .upsert_keyframe(
            Tick(15),
            KeyframePatch::default().position(Position::new(1, 1)),
        )
        .unwrap_err();
    assert!(matches!(err, KeymotionError::IncompleteKeyframe { tick: Tick(15) }));
    assert_eq!(s, before);
}

#[test]
fn remove_keyframe_requires_exact_tick() {
    let mut s = seeded();
    let before = s.clone();
    assert!(matches!(
        s.remove_keyframe(Tick(11)),
        Err(KeymotionError::NotFound(_))
    ));
    assert_eq!(s, before);

    let removed = s.remove_keyframe(Tick(10)).unwrap();
    assert_eq!(removed, at(10, 100));
    assert_eq!(ticks(&s), vec![0, 20]);
}

#[test]
fn state_is_absent_outside_timeline() {
    let s = seeded();
    assert_eq!(Shape::rectangle("empty").state_at(Tick(0)), None);
    assert_eq!(s.state_at(Tick(21)), None);

    let mut late = Shape::rectangle("late");
    late.upsert_keyframe(Tick(5), KeyframePatch::from(at(5, 0)))
        .unwrap();
    assert_eq!(late.state_at(Tick(4)), None);
    assert_eq!(late.state_at(Tick(5)), Some(at(5, 0)));
}

#[test]
fn state_on_keyframe_returns_it_unchanged() {
    let s = seeded();
    for k in s.keyframes() {
        assert_eq!(s.state_at(k.tick()), Some(*k));
    }
}

#[test]
fn state_between_keyframes_interpolates_every_attribute() {
    let mut s = Shape::rectangle("R");
    s.add_segment(
        Segment::new(
            kf(0, 0, 100, 10, 40, 0, 255, 100),
            kf(4, 8, 0, 20, 20, 255, 0, 100),
        )
        .unwrap(),
    )
    .unwrap();

    let mid = s.state_at(Tick(1)).unwrap();
    assert_eq!(mid.tick(), Tick(1));
    assert_eq!(mid.position(), Position::new(2, 75));
    assert_eq!(mid.dimensions(), Dimensions::new(13, 35).unwrap());
    assert_eq!(mid.color(), Color::rgb(64, 191, 100));
}

#[test]
fn bracket_reports_floor_and_ceiling() {
    let s = seeded();
    assert_eq!(s.bracket(Tick(10)), Some(Bracket::Exact(at(10, 100))));
    let b = s.bracket(Tick(15)).unwrap();
    assert_eq!(b.floor(), &at(10, 100));
    assert_eq!(b.ceil(), &at(20, 50));
    assert_eq!(b.keyframes().len(), 2);
}

#[test]
fn between_bracket_never_has_equal_ticks() {
    // The interpolation divides by (ceil - floor); an equal pair would be an Exact bracket.
    let s = seeded();
    for t in 0..=20 {
        match s.bracket(Tick(t)).unwrap() {
            Bracket::Exact(k) => assert_eq!(k.tick(), Tick(t)),
            Bracket::Between { floor, ceil } => {
                assert!(floor.tick() < Tick(t) && Tick(t) < ceil.tick());
            }
        }
    }

    let single = {
        let mut s = Shape::ellipse("one");
        s.upsert_keyframe(Tick(3), KeyframePatch::from(at(3, 1)))
            .unwrap();
        s
    };
    assert_eq!(single.bracket(Tick(3)), Some(Bracket::Exact(at(3, 1))));
}

#[test]
fn at_tick_view_interpolates_like_state_at() {
    let s = seeded();
    let view = s.at_tick(Tick(5)).unwrap();
    assert_eq!(view.name, "R");
    assert_eq!(view.kind, ShapeKind::Rectangle);
    assert_eq!(view.state(), s.state_at(Tick(5)));
    assert_eq!(view.state().unwrap().position(), Position::new(50, 0));
    assert!(s.at_tick(Tick(99)).is_none());
}
