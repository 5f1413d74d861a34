use std::collections::VecDeque;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use crate::dp::trace_fibonacci;
use crate::search::trace_binary_search;
use crate::topology::Graph;
use crate::trace::TraceSink;
use crate::traversal::{trace_bfs, trace_dfs};

/// Failures of the input layer. Algorithm behavior itself never errors;
/// the only fallible surface is reading and parsing stdin tokens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected end of input")]
    Eof,
    #[error("expected an integer, got {0:?}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whitespace-separated integer tokens over buffered async input.
/// Tokens may be spread across lines or packed onto one, as console
/// input usually is.
pub struct TokenReader<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
        }
    }

    async fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            match self.lines.next_line().await? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Err(InputError::Eof),
            }
        }
    }

    pub async fn read_int(&mut self) -> Result<i64, InputError> {
        let token = self.next_token().await?;
        parse_token(token)
    }

    pub async fn read_index(&mut self) -> Result<usize, InputError> {
        let token = self.next_token().await?;
        parse_token(token)
    }
}

fn parse_token<T: FromStr>(token: String) -> Result<T, InputError> {
    match token.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            warn!(token = %token, "rejecting non-integer token");
            Err(InputError::Parse(token))
        }
    }
}

/// One interactive session: banner, menu, one algorithm run.
///
/// All user-facing text goes through `sink`; input comes from any buffered
/// async reader, so tests can drive the whole session from a byte slice.
/// An unrecognized menu choice reports "Invalid choice" and returns
/// normally.
pub async fn run_session<R>(input: R, sink: &mut dyn TraceSink) -> Result<(), InputError>
where
    R: AsyncBufRead + Unpin,
{
    let mut tokens = TokenReader::new(input);

    sink.emit("=====================================");
    sink.emit("        ALGOSCOPE STEP TRACER        ");
    sink.emit("=====================================");
    sink.emit("");
    sink.emit("Choose algorithm:");
    sink.emit("1. Binary Search");
    sink.emit("2. BFS");
    sink.emit("3. DFS");
    sink.emit("4. Dynamic Programming (Fibonacci)");
    sink.emit("Enter choice:");

    let choice = tokens.read_int().await?;
    debug!(choice, "menu selection");

    match choice {
        1 => {
            sink.emit("Enter size of array:");
            let n = tokens.read_index().await?;

            sink.emit(&format!("Enter {} sorted elements:", n));
            let mut a = Vec::with_capacity(n);
            for _ in 0..n {
                a.push(tokens.read_int().await?);
            }

            sink.emit("Enter target element:");
            let target = tokens.read_int().await?;

            let found = trace_binary_search(&a, target, sink);
            debug!(?found, "binary search finished");
        }
        2 | 3 => {
            sink.emit("Enter number of nodes:");
            let n = tokens.read_index().await?;
            sink.emit("Enter number of edges:");
            let m = tokens.read_index().await?;

            let mut graph = Graph::new(n);
            sink.emit("Enter edges (u v) [0-based indexing]:");
            for _ in 0..m {
                let u = tokens.read_index().await?;
                let v = tokens.read_index().await?;
                graph.add_edge(u, v);
            }

            sink.emit("Enter starting node:");
            let start = tokens.read_index().await?;

            let order = if choice == 2 {
                trace_bfs(&graph, start, sink)
            } else {
                trace_dfs(&graph, start, sink)
            };
            debug!(visited = order.len(), "traversal finished");
        }
        4 => {
            sink.emit("Enter n for Fibonacci DP:");
            let n = tokens.read_index().await?;

            let value = trace_fibonacci(n, sink);
            debug!(value, "dp table finished");
        }
        _ => {
            sink.emit("Invalid choice");
        }
    }

    Ok(())
}
