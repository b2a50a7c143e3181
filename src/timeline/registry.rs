use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::timeline::sequence::{SceneId, Timeline};

/// Frame rate of every registered composition.
pub const FPS: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum CompositionKind {
    /// All five scenes back to back.
    Full,
    /// A single scene on its own.
    Preview(SceneId),
    /// Static card with the first narration track.
    AudioCheck,
}

/// A renderable entry of the registry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompositionSpec {
    pub id: String,
    pub kind: CompositionKind,
    pub fps: Fps,
    pub canvas: Canvas,
    pub timeline: Timeline,
}

impl CompositionSpec {
    pub fn new(id: impl Into<String>, kind: CompositionKind, fps: Fps) -> OrreryResult<Self> {
        let scenes = match kind {
            CompositionKind::Full => SceneId::STORY.to_vec(),
            CompositionKind::Preview(scene) => vec![scene],
            CompositionKind::AudioCheck => vec![SceneId::AudioCheck],
        };
        Ok(Self {
            id: id.into(),
            kind,
            fps,
            canvas: Canvas::DESIGN,
            timeline: Timeline::from_scenes(fps, &scenes)?,
        })
    }

    pub fn duration(&self) -> u64 {
        self.timeline.duration()
    }

    /// Render at a different resolution; scenes are scaled from the 1920x1080 design space.
    pub fn with_canvas(mut self, canvas: Canvas) -> OrreryResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(OrreryError::validation(
                "composition canvas width/height must be non-zero",
            ));
        }
        if canvas.width > u32::from(u16::MAX) || canvas.height > u32::from(u16::MAX) {
            return Err(OrreryError::validation(
                "composition canvas width/height must fit in u16",
            ));
        }
        self.canvas = canvas;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CompositionRegistry {
    entries: Vec<CompositionSpec>,
}

impl CompositionRegistry {
    /// `SolarSystem`, `TestAudio` and one `SceneN-Preview` per scene.
    pub fn standard() -> OrreryResult<Self> {
        let fps = Fps::new(FPS, 1)?;
        let mut reg = Self::default();
        reg.register(CompositionSpec::new(
            "SolarSystem",
            CompositionKind::Full,
            fps,
        )?)?;
        reg.register(CompositionSpec::new(
            "TestAudio",
            CompositionKind::AudioCheck,
            fps,
        )?)?;
        for scene in SceneId::STORY {
            reg.register(CompositionSpec::new(
                format!("{scene}-Preview"),
                CompositionKind::Preview(scene),
                fps,
            )?)?;
        }
        Ok(reg)
    }

    pub fn register(&mut self, spec: CompositionSpec) -> OrreryResult<()> {
        if self.entries.iter().any(|e| e.id == spec.id) {
            return Err(OrreryError::validation(format!(
                "composition '{}' is already registered",
                spec.id
            )));
        }
        self.entries.push(spec);
        Ok(())
    }

    pub fn get(&self, id: &str) -> OrreryResult<&CompositionSpec> {
        self.entries.iter().find(|e| e.id == id).ok_or_else(|| {
            OrreryError::validation(format!(
                "unknown composition '{id}' (known: {})",
                self.ids().join(", ")
            ))
        })
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositionSpec> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/registry.rs"]
mod tests;
