//! Work-site Entity
//!
//! A construction project ("obra") that exclusively owns an ordered list of tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSite {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "tarefas", default)]
    pub tasks: Vec<Task>,
}

impl WorkSite {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            start_date,
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// Case-insensitive substring match on name or description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

impl Entity for WorkSite {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> WorkSite {
        WorkSite::new(
            "1",
            "Residencial Jardim",
            "Edifício de 12 andares",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let s = site();
        assert!(s.matches_search("jardim"));
        assert!(s.matches_search("ANDARES"));
        assert!(s.matches_search(""));
        assert!(!s.matches_search("comercial"));
    }

    #[test]
    fn test_missing_tasks_key_defaults_to_empty() {
        let json = r#"{"id":"9","nome":"Galpão","descricao":"Logística","dataInicio":"2024-03-01"}"#;
        let parsed: WorkSite = serde_json::from_str(json).unwrap();
        assert!(parsed.tasks.is_empty());
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
