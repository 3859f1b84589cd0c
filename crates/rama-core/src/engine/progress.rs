/// Events emitted while a workflow runs, for display by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// A reporter without a callback is free to use, so library entry points that
/// do not care about progress pass [`ProgressReporter::new`].
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.callback.is_some()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        assert!(!reporter.is_enabled());
        reporter.report(Progress::TaskIncrement);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        reporter.report(Progress::PhaseStart { name: "Extraction" });
        reporter.report(Progress::TaskStart { total_steps: 2 });
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::PhaseStart { name: "Extraction" },
                Progress::TaskStart { total_steps: 2 },
                Progress::PhaseFinish,
            ]
        );
    }
}
