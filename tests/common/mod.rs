//! Shared test helpers

#![allow(dead_code)]

use async_trait::async_trait;
use lunar_almanac_backend::gemini::{BackendError, GenerativeBackend, Schema};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Canned reply for prompts containing a marker
struct Rule {
    marker: String,
    reply: Option<String>,
    delay: Duration,
}

/// In-memory backend answering by prompt substring
///
/// Prompts matching no rule fail with a transport error.
#[derive(Default)]
pub struct ScriptedBackend {
    rules: Vec<Rule>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer prompts containing `marker` with `reply`
    pub fn reply(self, marker: &str, reply: &str) -> Self {
        self.reply_after(marker, reply, Duration::ZERO)
    }

    /// Answer prompts containing `marker` with `reply` after `delay`
    pub fn reply_after(mut self, marker: &str, reply: &str, delay: Duration) -> Self {
        self.rules.push(Rule {
            marker: marker.to_string(),
            reply: Some(reply.to_string()),
            delay,
        });
        self
    }

    /// Fail prompts containing `marker`
    pub fn fail(mut self, marker: &str) -> Self {
        self.rules.push(Rule {
            marker: marker.to_string(),
            reply: None,
            delay: Duration::ZERO,
        });
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        prompt: &str,
        _schema: Option<&Schema>,
    ) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let rule = self.rules.iter().find(|rule| prompt.contains(&rule.marker));
        match rule {
            Some(rule) => {
                if !rule.delay.is_zero() {
                    tokio::time::sleep(rule.delay).await;
                }
                rule.reply
                    .clone()
                    .ok_or_else(|| BackendError::Transport("scripted failure".to_string()))
            }
            None => Err(BackendError::Transport("no scripted reply".to_string())),
        }
    }
}

/// A complete lunar payload tagged with `lunar_date`
pub fn lunar_json(lunar_date: &str) -> String {
    serde_json::json!({
        "lunarDate": lunar_date,
        "lunarYear": "Giap Thin",
        "element": "Fire - Lamp Fire",
        "luckyHours": ["Ty (23-1)", "Dan (3-5)", "Mao (5-7)"],
        "badHours": ["Suu (1-3)", "Thin (7-9)"],
        "advice": format!("Advice for {}", lunar_date),
        "auspicious": ["pray", "visit family", "start a project"],
        "inauspicious": ["argue", "lend money", "travel far"]
    })
    .to_string()
}
