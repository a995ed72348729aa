//! End-to-end scenarios through the public API.

use std::time::Duration;

use algoviz::algorithms::{bfs, binary_search, bubble_sort};
use algoviz::engine::VizRng;
use algoviz::prelude::*;

fn drain(rx: &mut tokio::sync::mpsc::UnboundedReceiver<VizEvent>) -> Vec<VizEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn array_frames(events: &[VizEvent]) -> Vec<ArrayFrame> {
    events
        .iter()
        .filter_map(|e| match e {
            VizEvent::Frame {
                frame: Frame::Array(a),
            } => Some(a.clone()),
            _ => None,
        })
        .collect()
}

// Sort of ten random values ends sorted with an unhighlighted frame.
#[tokio::test]
async fn bubble_sort_of_ten_ends_sorted_and_unhighlighted() {
    let config = VizConfig::builder().seed(2024).size(10).build();
    let (viz, mut rx) = Visualizer::new(config, RecordingPacer::new()).unwrap();
    let initial = viz.snapshot().await;
    drain(&mut rx);

    viz.on_run(None).await.unwrap();
    let frames = array_frames(&drain(&mut rx));
    let last = frames.last().unwrap();

    assert!(!last.has_highlights());
    assert!(last.values.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = initial;
    expected.sort_unstable();
    assert_eq!(last.values, expected);
}

#[tokio::test]
async fn comparison_frames_highlight_adjacent_pairs() {
    let mut array = ArrayModel::from_values(vec![3, 1, 2]);
    let mut frames = Vec::new();
    let pacer = RecordingPacer::new();
    let report = bubble_sort(&mut array, &mut frames, &pacer, &SpeedControl::default())
        .await
        .unwrap();

    for frame in frames.iter().filter_map(Frame::as_array) {
        if let [a, b] = frame.active.as_slice() {
            assert_eq!(*b, a + 1);
        }
    }
    assert_eq!(report.comparisons, 3);
    assert_eq!(report.swaps, 2);
    assert_eq!(array.values(), &[1, 2, 3]);
}

#[tokio::test]
async fn search_finds_thirty_at_index_one() {
    let mut array = ArrayModel::from_values(vec![40, 10, 30]);
    let mut frames = Vec::new();
    let outcome = binary_search(
        &mut array,
        30.0,
        &mut frames,
        &RecordingPacer::new(),
        &SpeedControl::default(),
    )
    .await;

    assert_eq!(outcome.index(), Some(1));
    assert_eq!(array.values(), &[10, 30, 40]);
    let last = frames.last().and_then(Frame::as_array).unwrap();
    assert_eq!(last.found, Some(1));
}

#[tokio::test]
async fn search_for_missing_value_notifies() {
    let config = VizConfig::default();
    let (viz, mut rx) = Visualizer::new(config, RecordingPacer::new()).unwrap();
    viz.on_select(Algorithm::BinarySearch).await;
    drain(&mut rx);

    // Generated values never exceed 99.
    let report = viz.on_run(Some("100")).await.unwrap();
    assert!(matches!(
        report.outcome(),
        Some(RunOutcome::Searched {
            result: SearchOutcome::NotFound { .. },
            ..
        })
    ));
    let events = drain(&mut rx);
    assert!(events.contains(&VizEvent::Notice {
        notice: Notice::TargetNotFound { target: 100.0 }
    }));
    assert!(array_frames(&events).iter().all(|f| f.found.is_none()));
}

#[tokio::test]
async fn bfs_from_a_visits_every_node_in_level_order() {
    let graph = GraphModel::example();
    let pacer = RecordingPacer::new();
    let mut frames = Vec::new();
    let traversal = bfs(&graph, "A", &mut frames, &pacer, Duration::from_millis(600))
        .await
        .unwrap();

    assert_eq!(traversal.order, vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(
        traversal.queue_after("A"),
        Some(&["B".to_string(), "C".to_string()][..])
    );
    assert!(pacer
        .pauses()
        .iter()
        .all(|d| *d == Duration::from_millis(600)));

    let last = frames.last().and_then(Frame::as_graph).unwrap();
    assert_eq!(last, &GraphFrame::default());
}

#[test]
fn run_flag_admits_one_holder() {
    let state = RunState::new();
    assert!(state.try_begin());
    assert!(!state.try_begin());
    state.end();
    assert!(state.try_begin());
}

#[test]
fn generation_is_reproducible_per_seed() {
    let mut first = ArrayModel::new(5, 99);
    let mut second = ArrayModel::new(5, 99);
    first.generate(20, &mut VizRng::new(77));
    second.generate(20, &mut VizRng::new(77));

    assert_eq!(first.values(), second.values());
    assert_eq!(first.len(), 20);
    assert!(first.values().iter().all(|v| (5..=99).contains(v)));
}

#[tokio::test]
async fn generate_replaces_the_whole_array() {
    let config = VizConfig::builder().seed(5).size(15).build();
    let (viz, _rx) = Visualizer::new(config, RecordingPacer::new()).unwrap();
    for _ in 0..3 {
        assert_eq!(viz.on_generate().await, CommandStatus::Applied);
        let values = viz.snapshot().await;
        assert_eq!(values.len(), 15);
        assert!(values.iter().all(|v| (5..=99).contains(v)));
    }
}

#[tokio::test]
async fn yaml_config_drives_a_custom_graph() {
    let yaml = r"
seed: 1
bfs:
  start: X
graph:
  nodes:
    - { id: X, x: 10, y: 10, neighbors: [Y, Z] }
    - { id: Y, x: 60, y: 10, neighbors: [Z] }
    - { id: Z, x: 110, y: 10, neighbors: [] }
";
    let config = VizConfig::from_yaml(yaml).unwrap();
    let (viz, _rx) = Visualizer::new(config, RecordingPacer::new()).unwrap();
    viz.on_select(Algorithm::Bfs).await;
    let report = viz.on_run(None).await.unwrap();
    let Some(RunOutcome::Traversed { traversal }) = report.outcome() else {
        panic!("expected traversal, got {report:?}");
    };
    assert_eq!(traversal.order, vec!["X", "Y", "Z"]);
}
