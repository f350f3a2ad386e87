//! The state of one survey being edited in the builder.

use crate::config::BuilderConfig;
use crate::delete::DeleteConfirmation;
use crate::drag::{DragController, DragPayload, DropOutcome, DropTarget, Point};
use crate::logic::LogicWarning;
use crate::preview::{SessionStore, write_preview};
use crate::{
    EditError, LogicRule, Question, QuestionId, QuestionList, QuestionPatch, QuestionType, Survey,
    SurveyError, SurveySettings, SurveyTheme, Visibility,
};

/// Which view of the builder is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Builder,
    Settings,
}

/// Settings as edited in the settings view, before they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub title: String,
    pub description: String,
    pub points_reward: u32,
    pub visibility: Visibility,
    pub include_in_datasets: bool,
}

impl SettingsDraft {
    /// Public surveys are always enrolled in the dataset marketplace.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.include_in_datasets = visibility.is_public();
    }

    pub fn set_include_in_datasets(&mut self, include: bool) {
        self.include_in_datasets = include || self.visibility.is_public();
    }
}

/// Result of asking to leave the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsExit {
    Closed,
    /// The draft has changes; apply or discard them first.
    NeedsConfirmation,
}

/// One survey being edited.
///
/// Every change to the questions or the settings marks the session dirty
/// (not saved) and flags unpublished changes.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    id: String,
    title: String,
    description: String,
    questions: QuestionList,
    theme: SurveyTheme,
    settings: SurveySettings,
    dirty: bool,
    unpublished_changes: bool,
    deletion: DeleteConfirmation,
    drag: DragController,
    view: ViewMode,
    settings_draft: Option<SettingsDraft>,
}

impl BuilderSession {
    /// Start an empty survey with the default configuration.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, &BuilderConfig::default())
    }

    pub fn with_config(id: impl Into<String>, config: &BuilderConfig) -> Self {
        Self {
            id: id.into(),
            title: "Untitled Survey".to_string(),
            description: String::new(),
            questions: QuestionList::with_config(config),
            theme: config.theme.clone(),
            settings: SurveySettings::default(),
            dirty: false,
            unpublished_changes: false,
            deletion: DeleteConfirmation::new(),
            drag: DragController::with_config(config),
            view: ViewMode::Builder,
            settings_draft: None,
        }
    }

    /// Reopen a stored survey.
    pub fn open(survey: Survey, config: &BuilderConfig) -> Result<Self, EditError> {
        let mut questions = QuestionList::from_questions(survey.questions)?;
        questions.configure(config);

        Ok(Self {
            title: survey.title,
            description: survey.description,
            questions,
            theme: survey.theme.unwrap_or_else(|| config.theme.clone()),
            settings: survey.settings,
            ..Self::with_config(survey.id, config)
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    pub fn theme(&self) -> &SurveyTheme {
        &self.theme
    }

    pub fn settings(&self) -> &SurveySettings {
        &self.settings
    }

    /// There are changes that have not been saved as a draft.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// There are changes that have not been published.
    pub fn has_unpublished_changes(&self) -> bool {
        self.unpublished_changes
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn deletion(&self) -> &DeleteConfirmation {
        &self.deletion
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Record that the survey changed.
    pub fn notify_change(&mut self) {
        self.dirty = true;
        self.unpublished_changes = true;
    }

    // === Editing ===

    /// Apply an arbitrary edit to the question list.
    ///
    /// The session only counts as changed when the list differs afterwards,
    /// so a rejected or empty edit leaves the flags alone.
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut QuestionList) -> R) -> R {
        let before = self.questions.clone();
        let result = edit(&mut self.questions);
        if self.questions != before {
            self.notify_change();
        }
        result
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.notify_change();
    }

    pub fn set_theme(&mut self, theme: SurveyTheme) {
        self.theme = theme;
        self.notify_change();
    }

    /// Toolbox click: append a question of the given type.
    pub fn add_question(&mut self, kind: QuestionType) -> QuestionId {
        self.edit(|list| list.append(kind))
    }

    pub fn add_page(&mut self) -> QuestionId {
        self.edit(QuestionList::add_page)
    }

    pub fn update_question(&mut self, id: &QuestionId, patch: QuestionPatch) -> bool {
        let updated = self.questions.update(id, patch);
        if updated {
            self.notify_change();
        }
        updated
    }

    pub fn save_logic(&mut self, id: &QuestionId, rules: Vec<LogicRule>) -> bool {
        let saved = self.questions.save_logic(id, rules);
        if saved {
            self.notify_change();
        }
        saved
    }

    pub fn duplicate_question(&mut self, id: &QuestionId) -> Result<QuestionId, EditError> {
        let copy = self.questions.duplicate(id)?;
        self.notify_change();
        Ok(copy)
    }

    /// First step of deleting an item: ask for confirmation.
    pub fn request_delete(&mut self, id: &QuestionId) -> Result<(), EditError> {
        self.deletion.request(&self.questions, id)
    }

    /// Second step of deleting an item. Returns what was removed.
    pub fn confirm_delete(&mut self) -> Result<Vec<Question>, EditError> {
        let removed = self.deletion.confirm(&mut self.questions)?;
        if !removed.is_empty() {
            self.notify_change();
        }
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    // === Drag and drop ===

    pub fn pointer_down(&mut self, payload: DragPayload, at: Point) -> bool {
        self.drag.pointer_down(payload, at)
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        self.drag.pointer_move(at)
    }

    pub fn hover(&mut self, target: Option<DropTarget>) {
        self.drag.hover(&self.questions, target);
    }

    /// Release the pointer. A click on a toolbox entry appends that type.
    pub fn release(&mut self) -> DropOutcome {
        let outcome = self.drag.release(&mut self.questions);
        match &outcome {
            DropOutcome::Click(DragPayload::Template(kind)) => {
                let id = self.add_question(*kind);
                return DropOutcome::Inserted(id);
            }
            DropOutcome::Inserted(_) | DropOutcome::Moved => self.notify_change(),
            DropOutcome::Rejected(err) => log::warn!("Drop rejected: {err}"),
            _ => {}
        }
        outcome
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // === Settings ===

    fn current_settings(&self) -> SettingsDraft {
        SettingsDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            points_reward: self.settings.points_reward,
            visibility: self.settings.visibility,
            include_in_datasets: self.settings.include_in_datasets,
        }
    }

    /// Switch to the settings view with a fresh draft.
    pub fn open_settings(&mut self) {
        self.settings_draft = Some(self.current_settings());
        self.view = ViewMode::Settings;
    }

    pub fn settings_draft(&self) -> Option<&SettingsDraft> {
        self.settings_draft.as_ref()
    }

    /// Change the draft. Does nothing outside the settings view.
    pub fn edit_settings(&mut self, edit: impl FnOnce(&mut SettingsDraft)) {
        if let Some(draft) = &mut self.settings_draft {
            edit(draft);
        }
    }

    /// The draft differs from the applied settings.
    pub fn has_unsaved_settings(&self) -> bool {
        self.settings_draft
            .as_ref()
            .is_some_and(|draft| *draft != self.current_settings())
    }

    /// Leave the settings view unless the draft has changes.
    pub fn close_settings(&mut self) -> SettingsExit {
        if self.has_unsaved_settings() {
            return SettingsExit::NeedsConfirmation;
        }
        self.discard_settings();
        SettingsExit::Closed
    }

    /// Apply the draft and return to the builder. Returns `false` and stays
    /// in the settings view when the draft has no changes.
    pub fn apply_settings(&mut self) -> bool {
        if !self.has_unsaved_settings() {
            return false;
        }
        let Some(draft) = self.settings_draft.take() else {
            return false;
        };

        self.title = draft.title;
        self.description = draft.description;
        self.settings.points_reward = draft.points_reward;
        self.settings.set_visibility(draft.visibility);
        self.settings.set_include_in_datasets(draft.include_in_datasets);
        self.notify_change();
        self.view = ViewMode::Builder;
        true
    }

    /// Drop the draft and return to the builder.
    pub fn discard_settings(&mut self) {
        self.settings_draft = None;
        self.view = ViewMode::Builder;
    }

    // === Saving ===

    /// The survey as it currently stands.
    pub fn snapshot(&self) -> Survey {
        Survey::new(
            self.id.clone(),
            self.title.clone(),
            self.questions.questions().to_vec(),
        )
        .with_description(self.description.clone())
        .with_theme(self.theme.clone())
        .with_settings(self.settings.clone())
    }

    /// Save a draft and return it as JSON.
    pub fn save_draft(&mut self) -> Result<String, SurveyError> {
        self.notify_change();
        let json = serde_json::to_string(&self.snapshot())?;
        self.dirty = false;
        log::info!("Saved draft of survey '{}' ({} items)", self.id, self.questions.len());
        Ok(json)
    }

    /// Publish the survey.
    pub fn publish(&mut self) {
        self.settings.is_published = true;
        self.settings.published_count += 1;
        self.dirty = false;
        self.unpublished_changes = false;
        log::info!(
            "Published survey '{}' (publication #{})",
            self.id,
            self.settings.published_count
        );
    }

    /// Hand the current state to the preview view.
    pub fn open_preview<S: SessionStore>(&self, store: &mut S) -> Result<(), SurveyError> {
        write_preview(store, &self.snapshot())
    }

    /// Every question whose logic has a problem, in list order.
    pub fn logic_warnings(&self) -> Vec<(&QuestionId, LogicWarning)> {
        self.questions
            .iter()
            .filter_map(|q| {
                self.questions
                    .logic_warning(q.id())
                    .map(|warning| (q.id(), warning))
            })
            .collect()
    }
}
