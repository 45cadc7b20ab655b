use crate::domain::model::{Item, RunPlan, Snapshot};
use crate::domain::ports::Planner;
use crate::utils::error::{ErrandsError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use itertools::Itertools;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Alternative recommendation path: asks a Gemini-style text model for
/// the next run and parses its constrained output back into a [`RunPlan`],
/// so downstream consumers cannot tell it apart from the deterministic
/// engine's plans.
pub struct LlmPlanner {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl LlmPlanner {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

fn format_item(item: &Item) -> String {
    let mut line = format!(
        "'{}' that should be purchased every '{} weeks' from stores '{}'",
        item.name,
        item.interval_weeks,
        item.stores.join(", ")
    );
    if item.purchased.is_empty() {
        line.push_str(" and it was never purchased previously");
    } else {
        let dates = item.purchased.iter().map(|d| d.to_string()).join(", ");
        line.push_str(&format!(" and it was previously purchased on '{}'", dates));
    }
    line
}

pub fn build_prompt(snapshot: &Snapshot, today: NaiveDate) -> String {
    let items = snapshot.items.iter().map(format_item).join("\n");
    let preferred = snapshot
        .stores
        .iter()
        .filter(|s| s.preferred)
        .map(|s| s.name.as_str())
        .join(", ");

    format!(
        "I have the following items on my regular shopping list.\n\
         I'll provide how often I need to restock them and dates I previously purchased them, as well as the stores where I can buy them from.\n\
         I'll also tell you which stores are preferred.\n\
         Today is {today}. Let me know what items I should buy in the next 2 weeks and from what stores.\n\
         It's important to only output in the following format:\n\
         <store1>\n\
         - <item1>\n\
         - <item2>\n\
         <store2>\n\
         - <item3>\n\
         Below are the shopping list items:\n\
         {items}\n\
         And my preferred stores are:\n\
         {preferred}\n"
    )
}

/// Parses the model's `<store>` / `- <item>` lines into a Run Plan.
///
/// Stores and items the model invents are dropped with a warning instead
/// of poisoning the plan. Surviving groups are reordered to catalog item
/// order so the shape contract matches the deterministic path.
pub fn parse_plan(text: &str, snapshot: &Snapshot) -> Result<RunPlan> {
    let mut grouped: RunPlan = RunPlan::new();
    let mut current_store: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(item_name) = line.strip_prefix("- ") {
            let item_name = item_name.trim();
            let Some(store) = current_store.clone() else {
                // Item line before any store header, or under a dropped
                // store; nothing sane to do with it.
                tracing::warn!("dropping unattributed item line: {}", item_name);
                continue;
            };
            if snapshot.item(item_name).is_none() {
                tracing::warn!("dropping hallucinated item '{}'", item_name);
                continue;
            }
            let group = grouped.entry(store).or_insert_with(Vec::new);
            if !group.iter().any(|existing| existing == item_name) {
                group.push(item_name.to_string());
            }
        } else {
            let store_name = line.trim_start_matches(['*', '#']).trim();
            if snapshot.stores.iter().any(|s| s.name == store_name) {
                current_store = Some(store_name.to_string());
            } else {
                tracing::warn!("dropping hallucinated store '{}'", store_name);
                current_store = None;
            }
        }
    }

    if grouped.is_empty() && !snapshot.items.is_empty() {
        return Err(ErrandsError::LlmResponseError {
            message: "no recognizable store/item lines in model output".to_string(),
        });
    }

    // Items may be listed under several stores; keep the first mention
    // only, then restore catalog order within each group.
    let mut seen: Vec<String> = Vec::new();
    let mut plan = RunPlan::new();
    for (store, names) in &grouped {
        let mut kept: Vec<String> = Vec::new();
        for name in names {
            if !seen.contains(name) {
                seen.push(name.clone());
                kept.push(name.clone());
            }
        }
        if !kept.is_empty() {
            kept.sort_by_key(|name| {
                snapshot
                    .items
                    .iter()
                    .position(|i| &i.name == name)
                    .unwrap_or(usize::MAX)
            });
            plan.insert(store.clone(), kept);
        }
    }

    Ok(plan)
}

#[async_trait]
impl Planner for LlmPlanner {
    async fn plan(&self, snapshot: &Snapshot, today: NaiveDate) -> Result<RunPlan> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(snapshot, today),
                }],
            }],
        };

        tracing::debug!("requesting plan from {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).join(""))
            .ok_or_else(|| ErrandsError::LlmResponseError {
                message: "response contained no candidates".to_string(),
            })?;

        parse_plan(&text, snapshot)
    }
}
