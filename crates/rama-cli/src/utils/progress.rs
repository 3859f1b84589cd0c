use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use ramakit::engine::progress::{Progress, ProgressReporter};

/// A per-frame bar for the scan workflow, labelled with the current phase.
///
/// The bar is cheap to clone; every clone drives the same terminal line.
#[derive(Clone)]
pub struct FrameProgressBar {
    bar: ProgressBar,
}

impl FrameProgressBar {
    /// Draws to stderr when `visible`, otherwise only tracks state.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(frame_style());
        Self { bar }
    }

    /// A library reporter that forwards workflow events to this bar.
    pub fn reporter(&self) -> ProgressReporter<'static> {
        let bar = self.bar.clone();
        ProgressReporter::with_callback(Box::new(move |event| apply(&bar, event)))
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => bar.set_message(name),
        Progress::TaskStart { total_steps } => {
            bar.set_length(total_steps);
            bar.set_position(0);
        }
        Progress::TaskIncrement => bar.inc(1),
        // Extraction may stop reporting early on error; the bar still ends full.
        Progress::TaskFinish => bar.set_position(bar.length().unwrap_or(0)),
        Progress::PhaseFinish => bar.tick(),
    }
}

fn frame_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn bar_follows_an_extraction_phase() {
        let progress = FrameProgressBar::new(false);
        let reporter = progress.reporter();

        reporter.report(Progress::PhaseStart { name: "Extraction" });
        reporter.report(Progress::TaskStart { total_steps: 12 });
        assert_eq!(progress.bar.message(), "Extraction");
        assert_eq!(progress.bar.length(), Some(12));
        assert_eq!(progress.bar.position(), 0);

        reporter.report(Progress::TaskIncrement);
        reporter.report(Progress::TaskIncrement);
        assert_eq!(progress.bar.position(), 2);

        reporter.report(Progress::TaskFinish);
        reporter.report(Progress::PhaseFinish);
        assert_eq!(progress.bar.position(), 12);
        assert!(!progress.bar.is_finished());

        reporter.report(Progress::PhaseStart {
            name: "Presentation",
        });
        assert_eq!(progress.bar.message(), "Presentation");

        progress.finish();
        assert!(progress.bar.is_finished());
    }

    #[test]
    fn reporter_can_be_driven_from_another_thread() {
        let progress = FrameProgressBar::new(false);
        let reporter = progress.reporter();

        thread::spawn(move || {
            reporter.report(Progress::TaskStart { total_steps: 3 });
            for _ in 0..3 {
                reporter.report(Progress::TaskIncrement);
            }
        })
        .join()
        .unwrap();

        assert_eq!(progress.bar.position(), 3);
    }
}
