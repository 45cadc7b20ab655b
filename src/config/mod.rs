use crate::adapters::llm::DEFAULT_GEMINI_ENDPOINT;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "errands")]
#[command(about = "Plans the next shopping run from a recurring-purchase catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "data.toml", help = "Catalog TOML file")]
    pub catalog: String,

    #[arg(long, help = "Reference date (YYYY-MM-DD); defaults to today")]
    pub today: Option<NaiveDate>,

    #[arg(long, help = "Fail fast if the store universe is larger than this")]
    pub max_stores: Option<usize>,

    #[arg(long, help = "Delegate the recommendation to the LLM service")]
    pub llm: bool,

    #[arg(long, default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub llm_endpoint: String,

    #[arg(long, env = "LLM_GEMINI_KEY", hide_env_values = true)]
    pub llm_api_key: Option<String>,

    #[arg(long, help = "Print the plan as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog", &self.catalog)?;

        if let Some(cap) = self.max_stores {
            validation::validate_positive_number("max_stores", cap, 1)?;
        }

        if self.llm {
            validation::validate_url("llm_endpoint", &self.llm_endpoint)?;
            validation::validate_required_field("llm_api_key", &self.llm_api_key)?;
        }

        Ok(())
    }
}
