//! Output Emitter
//!
//! Abstraction for output production during printing.

/// Trait for emitting printed output.
///
/// The printer copies source fragments into an emitter. Different
/// implementations support in-memory strings or other destinations.
pub trait Emitter {
    /// Emit a text fragment verbatim.
    fn emit(&mut self, text: &str);
}

/// String-based emitter for in-memory printing.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
