use crate::config::GenerationMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    GeneratePrompt,
    GeneratePhysics,
}

/// One model call in the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStage {
    pub kind: StageKind,
    pub name: &'static str,
    pub description: &'static str,
    pub structured: bool,
}

impl PipelineStage {
    fn new(kind: StageKind, name: &'static str, description: &'static str) -> Self {
        Self {
            kind,
            name,
            description,
            structured: false,
        }
    }

    fn structured(mut self) -> Self {
        self.structured = true;
        self
    }
}

pub fn stages_for(mode: GenerationMode) -> Vec<PipelineStage> {
    match mode {
        GenerationMode::TwoStage => vec![
            generate_prompt_stage(),
            generate_physics_stage().structured(),
        ],
        GenerationMode::Structured => vec![generate_physics_stage().structured()],
        GenerationMode::Text => vec![generate_physics_stage()],
    }
}

fn generate_prompt_stage() -> PipelineStage {
    PipelineStage::new(
        StageKind::GeneratePrompt,
        "generate_prompt",
        "Restructure the raw question into a topic, concepts, formulas and an animation brief",
    )
    .structured()
}

fn generate_physics_stage() -> PipelineStage {
    PipelineStage::new(
        StageKind::GeneratePhysics,
        "generate_physics",
        "Produce the analysis, solution, concepts and the self-contained animation page",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stage_runs_prompt_generation_first() {
        let stages = stages_for(GenerationMode::TwoStage);

        let names: Vec<&str> = stages.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["generate_prompt", "generate_physics"]);
        assert!(stages.iter().all(|s| s.structured));
    }

    #[test]
    fn single_stage_modes_differ_only_in_structure() {
        let structured = stages_for(GenerationMode::Structured);
        let text = stages_for(GenerationMode::Text);

        assert_eq!(structured.len(), 1);
        assert_eq!(text.len(), 1);
        assert_eq!(structured[0].kind, StageKind::GeneratePhysics);
        assert!(structured[0].structured);
        assert!(!text[0].structured);
    }

    #[test]
    fn every_stage_is_described() {
        for mode in [
            GenerationMode::TwoStage,
            GenerationMode::Structured,
            GenerationMode::Text,
        ] {
            assert!(stages_for(mode).iter().all(|s| !s.description.is_empty()));
        }
    }
}
