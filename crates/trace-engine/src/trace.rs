/// Destination for tracer output, one line at a time.
///
/// Tracers only ever append lines; keeping them behind this trait keeps the
/// algorithms free of any console coupling.
pub trait TraceSink {
    fn emit(&mut self, line: &str);
}

/// Writes every line to stdout. The production sink.
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects lines in memory so tests can assert on the exact trace.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl TraceSink for BufferSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
