//! Property-based tests for the resampler, the ledger and the session.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use trajectory_capture::core::{cumulative_distances, resample, Point2D, State};
use trajectory_capture::ledger::{DatasetLedger, Sample};
use trajectory_capture::session::{CapturePhase, Command, InputEvent, SequenceRandom};
use trajectory_capture::SessionBuilder;

prop_compose! {
    fn arbitrary_point()(x in -1000.0..1000.0f64, y in -1000.0..1000.0f64) -> Point2D {
        Point2D::new(x, y)
    }
}

prop_compose! {
    fn arbitrary_path()(points in prop::collection::vec(arbitrary_point(), 2..40)) -> Vec<Point2D> {
        points
    }
}

prop_compose! {
    fn arbitrary_sample(points: usize)(
        displacement in arbitrary_point(),
        trajectory in prop::collection::vec(arbitrary_point(), points..=points),
    ) -> Sample {
        Sample::new(displacement, trajectory)
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..6u8, point in arbitrary_point()) -> InputEvent {
        match variant {
            0 | 1 => InputEvent::PointerMove(point),
            2 => InputEvent::PointerDown(point),
            3 => InputEvent::Command(Command::Undo),
            4 => InputEvent::Command(Command::Export),
            _ => InputEvent::pointer_down(400.0, 300.0),
        }
    }
}

fn total_length(path: &[Point2D]) -> f64 {
    cumulative_distances(path).last().copied().unwrap_or(0.0)
}

proptest! {
    #[test]
    fn resample_returns_exactly_n_points(path in arbitrary_path(), n in 1usize..32) {
        prop_assert_eq!(resample(&path, n, Point2D::ZERO).len(), n);
    }

    #[test]
    fn resample_preserves_endpoints(path in arbitrary_path(), n in 2usize..32) {
        prop_assume!(total_length(&path) > 0.0);
        let out = resample(&path, n, Point2D::ZERO);
        prop_assert_eq!(out[0], path[0]);
        prop_assert_eq!(out[n - 1], path[path.len() - 1]);
    }

    #[test]
    fn resample_is_origin_relative(path in arbitrary_path(), origin in arbitrary_point()) {
        prop_assume!(total_length(&path) > 0.0);
        let absolute = resample(&path, 10, Point2D::ZERO);
        let relative = resample(&path, 10, origin);
        for (a, r) in absolute.iter().zip(&relative) {
            prop_assert_eq!(*a - origin, *r);
        }
    }

    #[test]
    fn resampled_spacing_is_uniform(path in arbitrary_path(), n in 3usize..16) {
        let total = total_length(&path);
        prop_assume!(total > 1.0);
        let out = resample(&path, n, Point2D::ZERO);
        // Chords never exceed the arc length between consecutive targets.
        let step = total / (n - 1) as f64;
        for pair in out.windows(2) {
            prop_assert!(pair[0].distance_to(&pair[1]) <= step + 1e-6 * total.max(1.0));
        }
    }

    #[test]
    fn stationary_paths_resample_to_zero(
        point in arbitrary_point(),
        repeats in 0usize..20,
        origin in arbitrary_point(),
        n in 1usize..16,
    ) {
        let path = vec![point; repeats];
        prop_assert_eq!(resample(&path, n, origin), vec![Point2D::ZERO; n]);
    }

    #[test]
    fn resample_is_deterministic(path in arbitrary_path(), n in 1usize..16) {
        prop_assert_eq!(resample(&path, n, Point2D::ZERO), resample(&path, n, Point2D::ZERO));
    }

    #[test]
    fn undo_inverts_append(
        existing in prop::collection::vec(arbitrary_sample(4), 0..6),
        sample in arbitrary_sample(4),
    ) {
        let mut ledger = DatasetLedger::new(4);
        for s in existing {
            ledger.append(s).unwrap();
        }
        let before = ledger.len();

        ledger.append(sample.clone()).unwrap();
        prop_assert_eq!(ledger.undo(), Some(sample));
        prop_assert_eq!(ledger.len(), before);
    }

    #[test]
    fn export_never_contains_undone_samples(
        kept in arbitrary_sample(3),
        withdrawn in arbitrary_sample(3),
        replacement in arbitrary_sample(3),
    ) {
        prop_assume!(withdrawn.to_record() != kept.to_record());
        prop_assume!(withdrawn.to_record() != replacement.to_record());

        let mut ledger = DatasetLedger::new(3);
        ledger.append(kept).unwrap();
        ledger.append(withdrawn.clone()).unwrap();
        ledger.undo();
        ledger.append(replacement).unwrap();

        let mut out = Vec::new();
        prop_assert_eq!(ledger.export(&mut out).unwrap(), 2);
        let withdrawn_line = withdrawn.to_record().to_json_line().unwrap();
        let text = String::from_utf8(out).unwrap();
        prop_assert!(text.lines().all(|line| line != withdrawn_line));
        prop_assert!(ledger.undone().is_empty());
    }

    #[test]
    fn every_committed_sample_has_n_points(
        events in prop::collection::vec(arbitrary_event(), 0..80),
        seed in any::<u64>(),
    ) {
        let mut session = SessionBuilder::new().seed(seed).build().unwrap();
        for event in events {
            session.handle(event);
        }
        for sample in session.ledger().samples() {
            prop_assert_eq!(sample.trajectory().len(), 10);
        }
    }

    #[test]
    fn terminated_sessions_ignore_everything(
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let mut session = SessionBuilder::new()
            .random_source(SequenceRandom::new(vec![0.3, 0.6, 0.1, 0.9]))
            .build()
            .unwrap();
        session.handle(InputEvent::pointer_down(400.0, 300.0));
        session.handle(InputEvent::Command(Command::Terminate));
        let committed = session.ledger().len();

        for event in events {
            prop_assert!(session.handle(event).is_ignored());
        }
        prop_assert_eq!(session.phase(), CapturePhase::Terminated);
        prop_assert!(session.phase().is_final());
        prop_assert_eq!(session.ledger().len(), committed);
    }
}
