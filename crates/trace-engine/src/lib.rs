pub mod topology {
    /// An undirected graph represented as an adjacency list.
    /// Neighbor lists preserve edge insertion order, which fixes the
    /// visit order of the traversal tracers.
    #[derive(Debug, Clone)]
    pub struct Graph {
        adj: Vec<Vec<usize>>,
    }

    impl Graph {
        pub fn new(num_nodes: usize) -> Self {
            Self {
                adj: vec![Vec::new(); num_nodes],
            }
        }

        pub fn num_nodes(&self) -> usize {
            self.adj.len()
        }

        pub fn num_edges(&self) -> usize {
            self.adj.iter().map(Vec::len).sum::<usize>() / 2
        }

        /// Adds an edge to both endpoints' lists. Endpoints are trusted
        /// to be in range (0..num_nodes).
        pub fn add_edge(&mut self, u: usize, v: usize) {
            self.adj[u].push(v);
            self.adj[v].push(u);
        }

        pub fn neighbors(&self, node: usize) -> &[usize] {
            &self.adj[node]
        }
    }

}

pub mod dp;
pub mod search;
pub mod session;
pub mod trace;
pub mod traversal;
