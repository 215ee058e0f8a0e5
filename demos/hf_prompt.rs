//! Prompt a subscribed HuggingFace model.
//!
//! ```bash
//! export LLM_HUGGINGFACE_KEY=hf_...
//! cargo run -p llm-hf --example hf_prompt -- bigscience/bloom "The meaning of life is"
//! ```
//!
//! The model is added to `hf_models.txt` first if it is not already there.

use std::sync::Arc;

use llm_hf::{
    logging, EnvKeySource, GenerationOptions, HfCommand, HuggingFaceConfig, HuggingFacePlugin,
    InferenceResult, ModelCatalog,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let model_id = args.next().unwrap_or_else(|| "bigscience/bloom".to_string());
    let prompt = args.next().unwrap_or_else(|| "The meaning of life is".to_string());

    let config = HuggingFaceConfig::new().debug(std::env::var_os("LLM_HF_DEBUG").is_some());
    let plugin = HuggingFacePlugin::from_user_dir(Arc::new(EnvKeySource), config)?;
    plugin.run(
        &HfCommand::Add {
            model_id: model_id.clone(),
        },
        &mut std::io::sink(),
    )?;

    let mut catalog = ModelCatalog::new();
    plugin.register_models(&mut catalog)?;

    let model = catalog
        .get(&format!("huggingface/{model_id}"))
        .ok_or("model was not registered")?;
    println!("{model}");

    match model.prompt(&prompt, &GenerationOptions::new().length(50)).await? {
        InferenceResult::Text(text) => println!("{text}"),
        InferenceResult::NoResult(reason) => eprintln!("no output ({reason})"),
    }

    Ok(())
}
