//! Breadth-first traversal of the static graph.
//!
//! A node is enqueued at most once: only if it is neither visited nor
//! already waiting in the queue. With that rule the visit order is fully
//! determined by adjacency order.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::engine::{Frame, FrameSink, GraphFrame, Pacer};
use crate::error::{VizError, VizResult};
use crate::models::{GraphModel, NodeId};

/// Record of one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Traversal {
    /// Nodes in visitation order.
    pub order: Vec<NodeId>,
    /// Queue contents after each visit's enqueue step, parallel to `order`.
    pub queues: Vec<Vec<NodeId>>,
}

impl Traversal {
    /// Queue contents right after visiting `node`.
    #[must_use]
    pub fn queue_after(&self, node: &str) -> Option<&[NodeId]> {
        self.order
            .iter()
            .position(|n| n == node)
            .and_then(|i| self.queues.get(i))
            .map(Vec::as_slice)
    }
}

fn graph_frame(highlight: Option<&NodeId>, queue: &VecDeque<NodeId>) -> Frame {
    Frame::Graph(GraphFrame {
        highlight: highlight.cloned(),
        queue: queue.iter().cloned().collect(),
    })
}

/// Traverse `graph` from `start` in level order.
///
/// Emits the seeded queue, then per visit a frame highlighting the node,
/// a pause of `step`, and a frame with the updated queue. Ends with an
/// empty-queue frame without highlight.
///
/// # Errors
///
/// Returns `VizError::NodeNotFound` if `start` or any neighbor lookup
/// fails. A validated graph never produces the latter.
pub async fn bfs<S, P>(
    graph: &GraphModel,
    start: &str,
    sink: &mut S,
    pacer: &P,
    step: Duration,
) -> VizResult<Traversal>
where
    S: FrameSink,
    P: Pacer,
{
    if !graph.contains(start) {
        return Err(VizError::node_not_found(start));
    }

    let mut queue: VecDeque<NodeId> = VecDeque::from([start.to_string()]);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut traversal = Traversal::default();

    sink.emit(graph_frame(None, &queue));

    while let Some(current) = queue.pop_front() {
        sink.emit(graph_frame(Some(&current), &queue));
        pacer.pause(step).await;

        visited.insert(current.clone());

        let neighbors = graph.neighbors(&current).inspect_err(|e| {
            error!(node = %current, error = %e, "graph lookup failed during traversal");
        })?;
        for neighbor in neighbors {
            if !visited.contains(neighbor) && !queue.contains(neighbor) {
                queue.push_back(neighbor.clone());
            }
        }

        sink.emit(graph_frame(Some(&current), &queue));
        traversal.queues.push(queue.iter().cloned().collect());
        traversal.order.push(current);
    }

    sink.emit(graph_frame(None, &queue));
    Ok(traversal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingPacer;
    use crate::models::Position;

    async fn traverse(graph: &GraphModel, start: &str) -> VizResult<(Traversal, Vec<Frame>)> {
        let mut frames = Vec::new();
        let traversal = bfs(
            graph,
            start,
            &mut frames,
            &RecordingPacer::new(),
            Duration::from_millis(600),
        )
        .await?;
        Ok((traversal, frames))
    }

    fn names(list: &[NodeId]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[tokio::test]
    async fn test_level_order_from_a() {
        let (traversal, _) = traverse(&GraphModel::example(), "A")
            .await
            .expect("traversal");
        assert_eq!(names(&traversal.order), vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(
            names(traversal.queue_after("A").expect("A visited")),
            vec!["B", "C"]
        );
    }

    #[tokio::test]
    async fn test_f_enqueued_once() {
        let (traversal, _) = traverse(&GraphModel::example(), "A")
            .await
            .expect("traversal");
        // E also points at F, but F is already queued when E is visited.
        assert_eq!(names(traversal.queue_after("E").expect("E visited")), vec!["F"]);
        assert_eq!(traversal.order.iter().filter(|n| *n == "F").count(), 1);
    }

    #[tokio::test]
    async fn test_start_from_clicked_node() {
        let (traversal, _) = traverse(&GraphModel::example(), "B")
            .await
            .expect("traversal");
        assert_eq!(names(&traversal.order), vec!["B", "D", "E", "F"]);
    }

    #[tokio::test]
    async fn test_frame_sequence() {
        let (_, frames) = traverse(&GraphModel::example(), "C")
            .await
            .expect("traversal");
        let graph_frames: Vec<&GraphFrame> = frames.iter().filter_map(Frame::as_graph).collect();
        assert_eq!(graph_frames.len(), frames.len());

        // Seed, (visit + update) per node, final.
        assert_eq!(frames.len(), 1 + 2 * 2 + 1);
        assert_eq!(graph_frames[0].highlight, None);
        assert_eq!(names(&graph_frames[0].queue), vec!["C"]);
        assert_eq!(graph_frames[1].highlight.as_deref(), Some("C"));
        assert!(graph_frames[1].queue.is_empty());
        assert_eq!(names(&graph_frames[2].queue), vec!["F"]);

        let last = graph_frames.last().expect("final frame");
        assert_eq!(last.highlight, None);
        assert!(last.queue.is_empty());
    }

    #[tokio::test]
    async fn test_fixed_pause_per_visit() {
        let pacer = RecordingPacer::new();
        let mut frames = Vec::new();
        bfs(
            &GraphModel::example(),
            "A",
            &mut frames,
            &pacer,
            Duration::from_millis(600),
        )
        .await
        .expect("traversal");
        assert_eq!(pacer.pauses(), vec![Duration::from_millis(600); 6]);
    }

    #[tokio::test]
    async fn test_unknown_start_fails() {
        let result = traverse(&GraphModel::example(), "Z").await;
        assert!(matches!(result, Err(VizError::NodeNotFound { .. })));
    }

    #[tokio::test]
    async fn test_cycles_terminate() {
        let p = Position::new(0.0, 0.0);
        let graph = GraphModel::new([
            ("X".to_string(), p, vec!["Y".to_string(), "X".to_string()]),
            ("Y".to_string(), p, vec!["X".to_string()]),
        ])
        .expect("valid graph");
        let (traversal, _) = traverse(&graph, "X").await.expect("traversal");
        assert_eq!(names(&traversal.order), vec!["X", "Y"]);
    }
}
