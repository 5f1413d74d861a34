use std::collections::VecDeque;

use crate::topology::Graph;
use crate::trace::TraceSink;

/// Queue-based breadth-first traversal. Before each dequeue the full queue
/// contents are emitted front-to-back, so the trace shows the frontier
/// evolving step by step.
///
/// Returns the visit order. Only the component containing `start` is
/// explored; `start` is trusted to be a valid node index.
pub fn trace_bfs(graph: &Graph, start: usize, sink: &mut dyn TraceSink) -> Vec<usize> {
    sink.emit("");
    sink.emit("--- BFS Visualization ---");

    let mut visited = vec![false; graph.num_nodes()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);
    let mut step = 1;

    while !queue.is_empty() {
        let contents: Vec<String> = queue.iter().map(ToString::to_string).collect();
        sink.emit(&format!("Step {} | Queue: [ {} ]", step, contents.join(" ")));
        step += 1;

        if let Some(node) = queue.pop_front() {
            sink.emit(&format!("Visiting node {}", node));
            order.push(node);

            for &neighbor in graph.neighbors(node) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                    sink.emit(&format!("  -> Push {}", neighbor));
                }
            }
            sink.emit("");
        }
    }

    order
}

/// Recursive depth-first traversal rendering the recursion tree through
/// indentation: every line at depth `d` is indented by `2 * d` spaces.
///
/// Returns the visit order (pre-order). Same connectivity caveat as BFS.
pub fn trace_dfs(graph: &Graph, start: usize, sink: &mut dyn TraceSink) -> Vec<usize> {
    sink.emit("");
    sink.emit("--- DFS Visualization (Recursion Tree) ---");

    let mut visited = vec![false; graph.num_nodes()];
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, 0, sink, &mut order);
    order
}

fn dfs_visit(
    graph: &Graph,
    node: usize,
    visited: &mut [bool],
    depth: usize,
    sink: &mut dyn TraceSink,
    order: &mut Vec<usize>,
) {
    visited[node] = true;
    order.push(node);

    let indent = " ".repeat(depth * 2);
    sink.emit(&format!("{}Visiting node {}", indent, node));

    for &neighbor in graph.neighbors(node) {
        if !visited[neighbor] {
            sink.emit(&format!("{}Go deeper to {}", indent, neighbor));
            dfs_visit(graph, neighbor, visited, depth + 1, sink, order);
        }
    }
}
