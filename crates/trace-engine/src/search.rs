use crate::trace::TraceSink;

/// Iterative binary search over a sorted slice, emitting the bracket state
/// (`l`, `r`, `mid`, `a[mid]`) at every step.
///
/// Returns the index found on the bisection path, if any. With duplicate
/// values this is the first index the bisection visits, not necessarily
/// the lowest match.
pub fn trace_binary_search(a: &[i64], target: i64, sink: &mut dyn TraceSink) -> Option<usize> {
    sink.emit("");
    sink.emit("--- Binary Search Visualization ---");

    // Signed bounds so `r` can drop below zero on an empty slice or after
    // a left move past index 0.
    let mut l: i64 = 0;
    let mut r: i64 = a.len() as i64 - 1;
    let mut step = 1;

    while l <= r {
        let mid = l + (r - l) / 2;
        let value = a[mid as usize];

        sink.emit(&format!("Step {}:", step));
        sink.emit(&format!("  l = {}, r = {}, mid = {}", l, r, mid));
        sink.emit(&format!("  a[mid] = {}", value));
        step += 1;

        if value == target {
            sink.emit(&format!("Target found at index {}", mid));
            return Some(mid as usize);
        } else if value < target {
            sink.emit("-> Move right");
            sink.emit("");
            l = mid + 1;
        } else {
            sink.emit("<- Move left");
            sink.emit("");
            r = mid - 1;
        }
    }

    sink.emit("Target not found");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::BufferSink;

    #[test]
    fn follows_the_expected_bisection_path() {
        let mut sink = BufferSink::default();
        let found = trace_binary_search(&[1, 3, 5, 7, 9, 11], 7, &mut sink);

        assert_eq!(found, Some(3));

        let brackets: Vec<&String> = sink
            .lines
            .iter()
            .filter(|l| l.starts_with("  l = "))
            .collect();
        assert_eq!(brackets[0], "  l = 0, r = 5, mid = 2");
        assert_eq!(brackets[1], "  l = 3, r = 5, mid = 4");
        assert_eq!(brackets[2], "  l = 3, r = 3, mid = 3");
        assert_eq!(sink.lines.last().map(String::as_str), Some("Target found at index 3"));
    }

    #[test]
    fn reports_not_found() {
        let mut sink = BufferSink::default();
        let found = trace_binary_search(&[1, 3, 5], 4, &mut sink);

        assert_eq!(found, None);
        assert_eq!(sink.lines.last().map(String::as_str), Some("Target not found"));
    }

    #[test]
    fn empty_slice_is_not_found_without_steps() {
        let mut sink = BufferSink::default();
        let found = trace_binary_search(&[], 42, &mut sink);

        assert_eq!(found, None);
        assert!(!sink.lines.iter().any(|l| l.starts_with("Step ")));
        assert_eq!(sink.lines.last().map(String::as_str), Some("Target not found"));
    }

    #[test]
    fn terminates_within_the_logarithmic_step_bound() {
        for len in 0..=64usize {
            let a: Vec<i64> = (0..len as i64).map(|i| i * 2).collect();
            let bound = ((len + 1) as f64).log2().ceil() as usize;

            // A target absent from the slice forces the longest path.
            let mut sink = BufferSink::default();
            trace_binary_search(&a, i64::MAX, &mut sink);
            let steps = sink.lines.iter().filter(|l| l.starts_with("Step ")).count();
            assert!(steps <= bound, "len {}: {} steps > bound {}", len, steps, bound);
        }
    }

    #[test]
    fn duplicates_return_the_first_index_on_the_path() {
        let mut sink = BufferSink::default();
        let found = trace_binary_search(&[5, 5, 5], 5, &mut sink);

        // mid of [0, 2] is 1; the bisection never looks further.
        assert_eq!(found, Some(1));
    }

    #[test]
    fn move_directions_match_the_comparison() {
        let mut sink = BufferSink::default();
        trace_binary_search(&[1, 3, 5, 7, 9, 11], 7, &mut sink);

        // 5 < 7 moves right, 9 > 7 moves left, then the match.
        assert!(sink.lines.contains(&"-> Move right".to_string()));
        assert!(sink.lines.contains(&"<- Move left".to_string()));
    }
}
