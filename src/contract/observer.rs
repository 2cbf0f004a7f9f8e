use crate::*;

/// Diagnostic sink for a contract. Purely presentational.
pub trait Observer {
    /// A weighing was made and recorded.
    fn weighed(&self, record: &Record);
    /// A final answer was submitted.
    fn submitted(&self, item: &Item);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    fn weighed(&self, _: &Record) {}
    fn submitted(&self, _: &Item) {}
}

/// Forwards to the `log` facade, tagged with the strategy being watched.
#[derive(Debug, Clone, Copy)]
pub struct Logger(&'static str);

impl Logger {
    pub fn tagged(tag: &'static str) -> Self {
        Self(tag)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self("strategy")
    }
}

impl Observer for Logger {
    fn weighed(&self, record: &Record) {
        log::info!("{:<10} {}", self.0, record);
    }
    fn submitted(&self, item: &Item) {
        log::info!("{:<10} submitting {}", self.0, item);
    }
}
