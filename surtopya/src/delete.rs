use crate::{EditError, Question, QuestionId, QuestionList};

/// Where a delete request stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Waiting for the user to confirm deleting this item.
    Pending(QuestionId),
}

/// Two-step delete: request, then confirm or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn pending(&self) -> Option<&QuestionId> {
        match &self.state {
            DeleteState::Idle => None,
            DeleteState::Pending(id) => Some(id),
        }
    }

    /// Ask to delete `id`. A newer request replaces a pending one.
    ///
    /// The first section is refused straight away so no confirmation is shown.
    pub fn request(&mut self, list: &QuestionList, id: &QuestionId) -> Result<(), EditError> {
        if !list.contains(id) {
            return Err(EditError::NotFound(id.clone()));
        }
        if list.is_first_section(id) {
            return Err(EditError::FirstSection);
        }
        self.state = DeleteState::Pending(id.clone());
        Ok(())
    }

    /// Perform the pending delete. Returns nothing when no delete is pending.
    pub fn confirm(&mut self, list: &mut QuestionList) -> Result<Vec<Question>, EditError> {
        match std::mem::take(&mut self.state) {
            DeleteState::Idle => Ok(Vec::new()),
            DeleteState::Pending(id) => list.delete(&id),
        }
    }

    pub fn cancel(&mut self) {
        self.state = DeleteState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionType;

    #[test]
    fn confirm_deletes_pending_item() {
        let mut list = QuestionList::new();
        let id = list.append(QuestionType::Text);
        let mut confirmation = DeleteConfirmation::new();

        confirmation.request(&list, &id).unwrap();
        assert_eq!(confirmation.pending(), Some(&id));
        assert!(list.contains(&id));

        let removed = confirmation.confirm(&mut list).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!list.contains(&id));
        assert_eq!(confirmation.state(), &DeleteState::Idle);
    }

    #[test]
    fn cancel_keeps_item() {
        let mut list = QuestionList::new();
        let id = list.append(QuestionType::Text);
        let mut confirmation = DeleteConfirmation::new();

        confirmation.request(&list, &id).unwrap();
        confirmation.cancel();
        assert!(confirmation.confirm(&mut list).unwrap().is_empty());
        assert!(list.contains(&id));
    }

    #[test]
    fn first_section_is_refused_up_front() {
        let list = QuestionList::new();
        let mut confirmation = DeleteConfirmation::new();
        assert_eq!(
            confirmation.request(&list, &"page-1".into()),
            Err(EditError::FirstSection)
        );
        assert_eq!(confirmation.pending(), None);
    }

    #[test]
    fn confirming_a_page_cascades() {
        let mut list = QuestionList::new();
        list.append(QuestionType::Text);
        let page = list.add_page();
        list.append(QuestionType::Rating);
        list.append(QuestionType::Date);

        let mut confirmation = DeleteConfirmation::new();
        confirmation.request(&list, &page).unwrap();
        assert_eq!(confirmation.confirm(&mut list).unwrap().len(), 3);
        assert_eq!(list.len(), 2);
    }
}
