use crate::trace::TraceSink;

/// Bottom-up Fibonacci table fill, emitting each cell's derivation as it
/// is written. The table is fully materialized: index `i` holds F(i).
///
/// Returns F(n).
pub fn trace_fibonacci(n: usize, sink: &mut dyn TraceSink) -> u64 {
    sink.emit("");
    sink.emit("--- DP Visualization (Fibonacci) ---");

    let mut table = vec![0u64; n + 1];
    sink.emit("dp[0] = 0");
    if n >= 1 {
        table[1] = 1;
        sink.emit("dp[1] = 1");
    }

    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
        sink.emit(&format!(
            "dp[{}] = dp[{}] + dp[{}] = {}",
            i,
            i - 1,
            i - 2,
            table[i]
        ));
    }

    sink.emit(&format!("Fibonacci({}) = {}", n, table[n]));
    table[n]
}
