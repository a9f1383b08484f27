use serde::{Deserialize, Serialize};

use crate::Quantity;

// ---------------------------------------------------------------------------
// Status & priority
// ---------------------------------------------------------------------------

/// Lifecycle of a volunteer task: `available → accepted → in-progress → completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PickupStatus {
    Available,
    Accepted,
    InProgress,
    Completed,
}

impl PickupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Available => "available",
            PickupStatus::Accepted => "accepted",
            PickupStatus::InProgress => "in-progress",
            PickupStatus::Completed => "completed",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            PickupStatus::Available => 0,
            PickupStatus::Accepted => 1,
            PickupStatus::InProgress => 2,
            PickupStatus::Completed => 3,
        }
    }

    /// Accepted or in progress: shows under "My Tasks".
    pub fn is_claimed(&self) -> bool {
        matches!(self, PickupStatus::Accepted | PickupStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A pickup as the volunteer sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupTask {
    pub id: String,
    pub donor: String,
    pub food_type: String,
    pub quantity: Quantity,
    pub location: String,
    pub pickup_time: String,
    /// Display text such as `1.2 km`. Never computed.
    pub distance: String,
    pub status: PickupStatus,
    pub priority: Priority,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The volunteer dashboard's task list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VolunteerBoard {
    tasks: Vec<PickupTask>,
}

impl VolunteerBoard {
    pub fn new(tasks: Vec<PickupTask>) -> Self {
        Self { tasks }
    }

    pub fn all(&self) -> &[PickupTask] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&PickupTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn available(&self) -> Vec<&PickupTask> {
        self.with(|s| s == PickupStatus::Available)
    }

    pub fn my_tasks(&self) -> Vec<&PickupTask> {
        self.with(|s| s.is_claimed())
    }

    pub fn completed(&self) -> Vec<&PickupTask> {
        self.with(|s| s == PickupStatus::Completed)
    }

    fn with(&self, keep: impl Fn(PickupStatus) -> bool) -> Vec<&PickupTask> {
        self.tasks.iter().filter(|t| keep(t.status)).collect()
    }

    /// Mark task `id` accepted. Returns `false` and changes nothing for an unknown id.
    pub fn accept(&mut self, id: &str) -> bool {
        self.set_status(id, PickupStatus::Accepted)
    }

    /// Mark task `id` completed from whatever status it had.
    /// Returns `false` and changes nothing for an unknown id.
    pub fn complete(&mut self, id: &str) -> bool {
        self.set_status(id, PickupStatus::Completed)
    }

    fn set_status(&mut self, id: &str, status: PickupStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => {
                tracing::debug!(id, status = status.as_str(), "no task with this id");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, status: PickupStatus) -> PickupTask {
        PickupTask {
            id: id.into(),
            donor: format!("Donor {id}"),
            food_type: "Sandwiches".into(),
            quantity: Quantity::new(15, "servings"),
            location: "Indiranagar".into(),
            pickup_time: "2024-06-16 19:00".into(),
            distance: "0.8 km".into(),
            status,
            priority: Priority::High,
        }
    }

    fn ids(tasks: Vec<&PickupTask>) -> Vec<&str> {
        tasks.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn in_progress_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PickupStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(PickupStatus::InProgress.as_str(), "in-progress");
    }

    #[test]
    fn status_rank_follows_lifecycle() {
        let lifecycle = [
            PickupStatus::Available,
            PickupStatus::Accepted,
            PickupStatus::InProgress,
            PickupStatus::Completed,
        ];
        let ranks: Vec<u8> = lifecycle.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        let claimed: Vec<bool> = lifecycle.iter().map(|s| s.is_claimed()).collect();
        assert_eq!(claimed, vec![false, true, true, false]);
    }

    #[test]
    fn partitions_by_status() {
        let board = VolunteerBoard::new(vec![
            task("1", PickupStatus::Available),
            task("2", PickupStatus::InProgress),
            task("3", PickupStatus::Accepted),
            task("4", PickupStatus::Completed),
        ]);
        assert_eq!(ids(board.available()), vec!["1"]);
        assert_eq!(ids(board.my_tasks()), vec!["2", "3"]);
        assert_eq!(ids(board.completed()), vec!["4"]);
    }

    #[test]
    fn accept_changes_only_the_matched_status() {
        let mut board = VolunteerBoard::new(vec![
            task("1", PickupStatus::Available),
            task("2", PickupStatus::Available),
        ]);
        let before = board.clone();
        assert!(board.accept("1"));
        assert_eq!(board.get("1").unwrap().status, PickupStatus::Accepted);
        assert_eq!(board.get("2"), before.get("2"));
        let mut expected = before.get("1").unwrap().clone();
        expected.status = PickupStatus::Accepted;
        assert_eq!(board.get("1").unwrap(), &expected);
    }

    #[test]
    fn complete_applies_from_any_status() {
        let mut board = VolunteerBoard::new(vec![task("2", PickupStatus::Available)]);
        assert!(board.complete("2"));
        assert_eq!(board.get("2").unwrap().status, PickupStatus::Completed);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut board = VolunteerBoard::new(vec![task("1", PickupStatus::Available)]);
        let before = board.clone();
        assert!(!board.accept("99"));
        assert!(!board.complete("99"));
        assert_eq!(board, before);
    }
}
