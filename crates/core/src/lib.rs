mod clock;
mod composition;
mod config;
mod error;
mod resource;
mod reveal;
mod sampler;
mod script;
mod timeline;
mod timing;
mod trace;
mod version;

pub use clock::{FrameClock, DEFAULT_FPS};
pub use composition::{CompositionMetadata, CompositionSettings};
pub use config::{ConfigError, TimelineConfig};
pub use error::{ChatError, ChatResult};
pub use resource::ScriptLimits;
pub use reveal::{prefix_chars, CharacterReveal, Progress, RevealStrategy, WordReveal};
pub use sampler::{
    sample, sample_with, PeerStatus, Reveal, SampleResult, ScrollState, TypingState,
};
pub use script::{Message, Script, ScriptRaw};
pub use timeline::{compile, TimedMessage, Timeline};
pub use timing::{
    ReadingDelayPolicy, ResolvedTiming, TimingPolicy, DEFAULT_READING_DELAY_POLICY,
};
pub use trace::{FrameTrace, FrameTraceStep, FrameView, TypingDigest};
pub use version::{SCRIPT_SCHEMA_VERSION, TRACE_FORMAT_VERSION};

#[cfg(any(feature = "python", feature = "python-embed"))]
use pyo3::prelude::*;

#[cfg(any(feature = "python", feature = "python-embed"))]
fn chat_error_to_py(err: ChatError) -> pyo3::PyErr {
    let report = miette::Report::new(err);
    pyo3::exceptions::PyValueError::new_err(report.to_string())
}

#[cfg(any(feature = "python", feature = "python-embed"))]
#[pymodule]
fn chat_timeline(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTimeline>()?;
    Ok(())
}

#[cfg(any(feature = "python", feature = "python-embed"))]
#[pyclass(name = "Timeline")]
#[derive(Debug)]
pub struct PyTimeline {
    inner: Timeline,
}

#[cfg(any(feature = "python", feature = "python-embed"))]
#[pymethods]
impl PyTimeline {
    #[new]
    pub fn new(script_json: &str) -> PyResult<Self> {
        Self::new_from_json(script_json).map_err(chat_error_to_py)
    }

    pub fn total_duration_frames(&self) -> u64 {
        self.inner.total_duration_frames()
    }

    pub fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(chat_error_to_py)
    }

    pub fn sample_json(&self, frame: i64) -> PyResult<String> {
        serde_json::to_string(&self.inner.sample(frame))
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }
}

#[cfg(any(feature = "python", feature = "python-embed"))]
impl PyTimeline {
    pub fn new_from_json(script_json: &str) -> ChatResult<Self> {
        let script = Script::from_json(script_json)?;
        Ok(Self {
            inner: Timeline::compile(&script),
        })
    }
}
