use gamematch_matching::ConceptExtractor;

use super::{join_or_none, print_json};

#[derive(Debug, Clone)]
pub struct ConceptsInput {
    pub prompt: String,
    pub json: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ConceptsStrategy;

impl super::CommandStrategy for ConceptsStrategy {
    type Input = ConceptsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let concepts = ConceptExtractor::with_defaults().extract(&input.prompt);

        if input.json {
            return print_json(&concepts);
        }

        println!("Mechanics: {}", join_or_none(&concepts.mechanics));
        println!("Themes: {}", join_or_none(&concepts.themes));
        if let Some(difficulty) = concepts.difficulty {
            println!("Difficulty: {difficulty}");
        } else {
            println!("Difficulty: (none)");
        }
        println!("Style: {}", join_or_none(&concepts.style));
        Ok(())
    }
}
