//! Step recording
//!
//! The trace side of the engine: a [`Step`] couples one immutable state
//! snapshot with a human-readable description and its position in the run,
//! and a [`StepRecorder`] collects them in order.
//!
//! Pipeline:
//! ```text
//! algorithm core --emit--> StepSink --record--> StepRecorder --> Vec<Step>
//! ```
//!
//! Algorithm cores are written once against [`StepSink`]; an `execute` entry
//! point passes [`StepSink::Silent`] and a `trace` entry point passes
//! [`StepSink::Recording`]. Snapshot construction is wrapped in a closure so
//! the silent path never pays for cloning.

use tracing::trace;

/// One recorded step: a snapshot, what happened, and where in the run.
#[derive(Debug, Clone)]
pub struct Step<S> {
    /// Deep-copied state at the moment the step was recorded.
    pub state: S,
    /// Human-readable description of what the algorithm just did.
    pub description: String,
    /// Zero-based position in the trace, strictly increasing.
    pub sequence: usize,
}

/// Observer invoked after each step is appended.
///
/// Used for presentation pacing by callers; the recorder itself never sleeps
/// or performs I/O, and the observer cannot alter recorded steps.
pub type StepObserver<'a, S> = Box<dyn FnMut(&Step<S>) + 'a>;

/// Append-only collector of [`Step`]s with strictly increasing sequence
/// numbers starting at zero.
pub struct StepRecorder<'a, S> {
    steps: Vec<Step<S>>,
    observer: Option<StepObserver<'a, S>>,
}

impl<'a, S> StepRecorder<'a, S> {
    pub fn new() -> Self {
        StepRecorder {
            steps: Vec::new(),
            observer: None,
        }
    }

    /// Attach an observer called once per recorded step, in order.
    pub fn with_observer(observer: StepObserver<'a, S>) -> Self {
        StepRecorder {
            steps: Vec::new(),
            observer: Some(observer),
        }
    }

    /// Append a step, assigning it the next sequence number.
    pub fn record(&mut self, state: S, description: String) {
        let step = Step {
            state,
            description,
            sequence: self.steps.len(),
        };
        trace!(sequence = step.sequence, description = %step.description, "step recorded");
        if let Some(observer) = self.observer.as_mut() {
            observer(&step);
        }
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the recorder and yield the ordered trace.
    pub fn into_steps(self) -> Vec<Step<S>> {
        self.steps
    }
}

impl<S> Default for StepRecorder<'_, S> {
    fn default() -> Self {
        StepRecorder::new()
    }
}

/// Where an algorithm core sends its steps.
///
/// The closure passed to [`StepSink::emit`] builds the snapshot and
/// description; it only runs in the recording case, so running silently
/// costs nothing per step. Both entry points share one core, which is what
/// guarantees they agree on the terminal state.
pub enum StepSink<'r, 'a, S> {
    /// Record every emitted step.
    Recording(&'r mut StepRecorder<'a, S>),
    /// Discard every emitted step without building it.
    Silent,
}

impl<S> StepSink<'_, '_, S> {
    /// Emit a step; `build` is invoked only when recording.
    pub fn emit(&mut self, build: impl FnOnce() -> (S, String)) {
        if let StepSink::Recording(recorder) = self {
            let (state, description) = build();
            recorder.record(state, description);
        }
    }

    /// Whether emitted steps are being kept.
    pub fn is_recording(&self) -> bool {
        matches!(self, StepSink::Recording(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase_from_zero() {
        let mut recorder: StepRecorder<u32> = StepRecorder::new();
        recorder.record(10, "first".to_string());
        recorder.record(20, "second".to_string());
        recorder.record(30, "third".to_string());
        let steps = recorder.into_steps();
        let sequences: Vec<usize> = steps.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn silent_sink_never_builds_snapshots() {
        let mut sink: StepSink<u32> = StepSink::Silent;
        let mut built = false;
        sink.emit(|| {
            built = true;
            (0, String::new())
        });
        assert!(!built);
    }

    #[test]
    fn recording_sink_forwards_to_recorder() {
        let mut recorder: StepRecorder<u32> = StepRecorder::new();
        {
            let mut sink = StepSink::Recording(&mut recorder);
            sink.emit(|| (7, "seven".to_string()));
        }
        let steps = recorder.into_steps();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].state, 7);
        assert_eq!(steps[0].description, "seven");
    }

    #[test]
    fn observer_sees_steps_in_order() {
        let mut seen = Vec::new();
        {
            let mut recorder: StepRecorder<u32> =
                StepRecorder::with_observer(Box::new(|step: &Step<u32>| {
                    seen.push(step.sequence);
                }));
            recorder.record(1, "a".to_string());
            recorder.record(2, "b".to_string());
        }
        assert_eq!(seen, vec![0, 1]);
    }
}
