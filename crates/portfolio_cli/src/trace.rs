//! Scroll trace replay.
//!
//! # Responsibility
//! - Load a recorded layout plus event list from JSON.
//! - Replay it through `PageController` over `MemoryHost` and render one
//!   state line per step.
//!
//! # Invariants
//! - Every replay mounts and unmounts exactly one controller.
//! - Output is deterministic for a given trace.

use portfolio_core::host::memory::LaidOutSection;
use portfolio_core::{
    default_nav_items, ConfigError, HostEvent, MemoryHost, PageConfig, PageController, PageError,
    PageHost, SectionId,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const DEMO_VIEWPORT_HEIGHT: f64 = 800.0;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEvent {
    /// Window scrolled to an absolute offset.
    Scroll(f64),
    Resize,
    /// Nav click on a section id.
    ScrollTo(SectionId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: Option<PageConfig>,
    pub viewport_height: f64,
    pub sections: Vec<LaidOutSection>,
    pub events: Vec<TraceEvent>,
}

#[derive(Debug)]
pub enum TraceError {
    Io(std::io::Error),
    Parse(String),
    InvalidViewport(f64),
    Config(ConfigError),
    Page(PageError),
}

impl Display for TraceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read trace: {err}"),
            Self::Parse(message) => write!(f, "invalid trace: {message}"),
            Self::InvalidViewport(value) => {
                write!(f, "viewport_height must be finite and positive, got {value}")
            }
            Self::Config(err) => write!(f, "{err}"),
            Self::Page(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Page(err) => Some(err),
            Self::Parse(_) | Self::InvalidViewport(_) => None,
        }
    }
}

impl From<std::io::Error> for TraceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigError> for TraceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<PageError> for TraceError {
    fn from(value: PageError) -> Self {
        Self::Page(value)
    }
}

impl Trace {
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, TraceError> {
        serde_json::from_str(raw).map_err(|err| TraceError::Parse(err.to_string()))
    }

    /// The portfolio layout with a short reading session.
    pub fn demo() -> Self {
        let heights = [
            ("home", 800.0),
            ("about", 900.0),
            ("projects", 1_400.0),
            ("skills", 700.0),
            ("contact", 900.0),
        ];
        let mut top = 0.0;
        let mut sections = Vec::with_capacity(heights.len());
        for (id, height) in heights {
            if let Ok(id) = SectionId::parse(id) {
                sections.push(LaidOutSection { id, top, height });
            }
            top += height;
        }

        let mut events = vec![
            TraceEvent::Scroll(30.0),
            TraceEvent::Scroll(120.0),
            TraceEvent::Scroll(900.0),
            TraceEvent::Scroll(2_000.0),
        ];
        events.extend(
            ["contact", "blog", "home"]
                .into_iter()
                .filter_map(|id| SectionId::parse(id).ok())
                .map(TraceEvent::ScrollTo),
        );
        events.push(TraceEvent::Resize);

        Self {
            config: None,
            viewport_height: DEMO_VIEWPORT_HEIGHT,
            sections,
            events,
        }
    }
}

/// Replays `trace` and returns one rendered line per step, starting with mount.
pub fn replay(trace: &Trace) -> Result<Vec<String>, TraceError> {
    if !trace.viewport_height.is_finite() || trace.viewport_height <= 0.0 {
        return Err(TraceError::InvalidViewport(trace.viewport_height));
    }
    let config = trace.config.clone().unwrap_or_default();
    config.validate()?;

    let mut host = trace
        .sections
        .iter()
        .fold(MemoryHost::new(trace.viewport_height), |host, section| {
            host.with_section(section.id.clone(), section.top, section.height)
        });
    let mut controller = PageController::mount(&mut host, &config, default_nav_items())?;

    let mut lines = vec![render_line(0, "mount", &controller)];
    for (index, event) in trace.events.iter().enumerate() {
        let label = match event {
            TraceEvent::Scroll(offset) => {
                controller.host().set_offset(*offset);
                dispatch(&mut controller, HostEvent::Scroll);
                format!("scroll({offset})")
            }
            TraceEvent::Resize => {
                dispatch(&mut controller, HostEvent::Resize);
                "resize".to_string()
            }
            TraceEvent::ScrollTo(id) => {
                if controller.scroll_to_section(id) {
                    dispatch(&mut controller, HostEvent::Scroll);
                    format!("scroll_to({id})")
                } else {
                    format!("scroll_to({id}) missing")
                }
            }
        };
        lines.push(render_line(index + 1, &label, &controller));
    }

    controller.unmount();
    Ok(lines)
}

/// Applies one window event, then the visibility signals it produces.
fn dispatch(controller: &mut PageController<&mut MemoryHost>, event: HostEvent) {
    controller.handle_event(&event);
    for signal in controller.host().intersection_signals() {
        controller.handle_event(&HostEvent::Intersection(signal));
    }
}

fn render_line(step: usize, label: &str, controller: &PageController<&mut MemoryHost>) -> String {
    let state = controller.scroll_state();
    let active = state
        .active_section
        .as_ref()
        .map(SectionId::as_str)
        .unwrap_or("-");
    let revealed = controller
        .reveal_state()
        .iter()
        .filter(|(_, revealed)| *revealed)
        .map(|(id, _)| id.as_str())
        .collect::<Vec<_>>();
    let revealed = if revealed.is_empty() {
        "-".to_string()
    } else {
        revealed.join(",")
    };
    format!(
        "step={step} event={label} offset={} past_threshold={} active={active} revealed={revealed}",
        controller.host().scroll_offset(),
        state.is_past_threshold
    )
}

#[cfg(test)]
mod tests {
    use super::{replay, Trace, TraceError, TraceEvent};
    use portfolio_core::SectionId;
    use std::io::Write;

    #[test]
    fn demo_replay_walks_through_sections() {
        let lines = replay(&Trace::demo()).expect("demo trace should replay");
        assert_eq!(lines.len(), Trace::demo().events.len() + 1);
        assert!(lines[0].contains("past_threshold=false active=home revealed=-"));
        assert!(lines[1].contains("past_threshold=false"));
        assert!(lines[2].contains("past_threshold=true"));
        assert!(lines[3].contains("active=about"));
        assert!(lines[3].contains("revealed=about"));
        assert!(lines[6].contains("scroll_to(blog) missing"));
    }

    #[test]
    fn missing_scroll_target_leaves_state_untouched() {
        let lines = replay(&Trace::demo()).expect("demo trace should replay");
        let before = lines[5].split_once(" offset=").map(|(_, rest)| rest);
        let after = lines[6].split_once(" offset=").map(|(_, rest)| rest);
        assert_eq!(before, after);
    }

    #[test]
    fn loads_trace_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{
                "viewport_height": 500,
                "sections": [
                    {{"id": "home", "top": 0, "height": 500}},
                    {{"id": "about", "top": 500, "height": 500}}
                ],
                "events": [{{"scroll": 450}}, "resize", {{"scroll_to": "about"}}]
            }}"#
        )
        .expect("trace should be written");

        let trace = Trace::load(file.path()).expect("trace should load");
        assert_eq!(trace.events[1], TraceEvent::Resize);
        assert_eq!(
            trace.events[2],
            TraceEvent::ScrollTo(SectionId::parse("about").unwrap())
        );

        let lines = replay(&trace).expect("trace should replay");
        assert!(lines[1].contains("active=about revealed=about"));
        assert!(lines[3].contains("offset=500"));
    }

    #[test]
    fn rejects_invalid_viewport_and_config() {
        let mut trace = Trace::demo();
        trace.viewport_height = 0.0;
        assert!(matches!(replay(&trace), Err(TraceError::InvalidViewport(_))));

        let trace = Trace::from_json(
            r#"{"config":{"scroll":{"probe_px":-5}},"viewport_height":800,"sections":[],"events":[]}"#,
        )
        .expect("trace should parse");
        assert!(matches!(replay(&trace), Err(TraceError::Config(_))));
    }
}
