use super::category::Category;
use super::error::TrackerError;
use super::goal::GoalEntry;
use super::progress::progress_percent;
use super::timetable::TimetableEntry;
use serde::Serialize;

/// The complete tracked state: four goal lists, the timetable and the budget
///
/// This is the single persisted root. It is written as a whole on every save
/// and read back as a whole on load; there is no incremental diffing.
///
/// Goal and timetable positions passed to the mutating methods are 0-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub(crate) academic: Vec<GoalEntry>,
    pub(crate) spiritual: Vec<GoalEntry>,
    pub(crate) financial: Vec<GoalEntry>,
    pub(crate) personal: Vec<GoalEntry>,

    /// Weekly class timetable rows, in insertion order
    #[serde(rename = "academicTimetable")]
    pub(crate) timetable: Vec<TimetableEntry>,

    /// Raw text of the last accepted weekly food budget ("" when never set)
    #[serde(rename = "weeklyFoodBudget")]
    pub(crate) budget: String,
}

// Deserialize is implemented in serde_impl.rs

impl AppState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Goals of a category, in list order
    pub fn goals(&self, category: Category) -> &[GoalEntry] {
        match category {
            Category::Academic => &self.academic,
            Category::Spiritual => &self.spiritual,
            Category::Financial => &self.financial,
            Category::Personal => &self.personal,
        }
    }

    fn goals_mut(&mut self, category: Category) -> &mut Vec<GoalEntry> {
        match category {
            Category::Academic => &mut self.academic,
            Category::Spiritual => &mut self.spiritual,
            Category::Financial => &mut self.financial,
            Category::Personal => &mut self.personal,
        }
    }

    fn goal_mut(&mut self, category: Category, index: usize) -> Result<&mut GoalEntry, TrackerError> {
        let goals = self.goals_mut(category);
        let len = goals.len();
        goals.get_mut(index).ok_or(TrackerError::GoalNotFound {
            category,
            position: index + 1,
            len,
        })
    }

    /// Total number of goals across all categories
    pub fn goal_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.goals(*c).len()).sum()
    }

    /// Append a new unchecked goal
    ///
    /// # Arguments
    /// * `category` - Target list
    /// * `text` - Raw input; trimmed before use and rejected when empty
    /// * `time` - Creation timestamp to display next to the goal
    pub fn add_goal(
        &mut self,
        category: Category,
        text: &str,
        time: impl Into<String>,
    ) -> Result<&GoalEntry, TrackerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyGoal);
        }
        let goals = self.goals_mut(category);
        goals.push(GoalEntry::new(text, time));
        Ok(&goals[goals.len() - 1])
    }

    /// Flip a goal's checkbox and return the new value
    pub fn toggle_goal(&mut self, category: Category, index: usize) -> Result<bool, TrackerError> {
        let goal = self.goal_mut(category, index)?;
        goal.done = !goal.done;
        Ok(goal.done)
    }

    /// Replace a goal's text
    ///
    /// The replacement is trimmed. An empty replacement is rejected and the
    /// goal keeps its old text. Timestamp, notes and checkbox are untouched.
    pub fn edit_goal(
        &mut self,
        category: Category,
        index: usize,
        text: &str,
    ) -> Result<&GoalEntry, TrackerError> {
        let text = text.trim();
        if text.is_empty() {
            // Still report a bad position first
            self.goal_mut(category, index)?;
            return Err(TrackerError::EmptyEdit);
        }
        let goal = self.goal_mut(category, index)?;
        goal.text = text.to_string();
        Ok(&*goal)
    }

    /// Overwrite a goal's notes verbatim
    pub fn update_notes(
        &mut self,
        category: Category,
        index: usize,
        notes: impl Into<String>,
    ) -> Result<(), TrackerError> {
        self.goal_mut(category, index)?.notes = notes.into();
        Ok(())
    }

    /// Remove a goal and return it
    pub fn delete_goal(&mut self, category: Category, index: usize) -> Result<GoalEntry, TrackerError> {
        let goals = self.goals_mut(category);
        if index >= goals.len() {
            return Err(TrackerError::GoalNotFound {
                category,
                position: index + 1,
                len: goals.len(),
            });
        }
        Ok(goals.remove(index))
    }

    /// Replace a whole category list with the given entries
    pub fn populate_goals(&mut self, category: Category, entries: Vec<GoalEntry>) {
        *self.goals_mut(category) = entries;
    }

    /// Percentage of checked goals in a category (0 when the list is empty)
    pub fn progress(&self, category: Category) -> u8 {
        progress_percent(self.goals(category))
    }

    /// Timetable rows, in insertion order
    pub fn timetable(&self) -> &[TimetableEntry] {
        &self.timetable
    }

    /// Append a timetable row built from raw form input
    pub fn add_timetable_entry(
        &mut self,
        day: &str,
        subject: &str,
        time: &str,
    ) -> Result<&TimetableEntry, TrackerError> {
        let entry = TimetableEntry::new(day, subject, time)?;
        self.timetable.push(entry);
        Ok(&self.timetable[self.timetable.len() - 1])
    }

    /// Remove a timetable row and return it
    pub fn delete_timetable_entry(&mut self, index: usize) -> Result<TimetableEntry, TrackerError> {
        if index >= self.timetable.len() {
            return Err(TrackerError::TimetableEntryNotFound {
                position: index + 1,
                len: self.timetable.len(),
            });
        }
        Ok(self.timetable.remove(index))
    }

    /// Replace all timetable rows
    pub fn populate_timetable(&mut self, entries: Vec<TimetableEntry>) {
        self.timetable = entries;
    }

    /// Raw text of the last accepted budget
    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = budget.into();
    }
}
