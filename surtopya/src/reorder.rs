//! Reordering of questions and whole pages.
//!
//! A question moves on its own. A section moves together with every question
//! on its page, and only ever lands between two pages.

use crate::{EditError, QuestionId, QuestionList};

impl QuestionList {
    /// Move `active` to the position currently held by `over`.
    ///
    /// Sections carry their page along (see [`QuestionList::move_section`]);
    /// any other item is moved on its own (see [`QuestionList::move_item`]).
    /// Returns whether the order changed.
    pub fn reorder(&mut self, active: &QuestionId, over: &QuestionId) -> Result<bool, EditError> {
        if active == over {
            return Ok(false);
        }
        let item = self
            .get(active)
            .ok_or_else(|| EditError::NotFound(active.clone()))?;

        if item.is_section() {
            self.move_section(active, over)
        } else {
            self.move_item(active, over)
        }
    }

    /// Move a single item to the index of `over`, shifting the items in between.
    ///
    /// Refused with [`EditError::LeadingQuestion`] when the move would leave a
    /// question in front of the first section; the list is then unchanged.
    pub fn move_item(&mut self, active: &QuestionId, over: &QuestionId) -> Result<bool, EditError> {
        let from = self
            .position(active)
            .ok_or_else(|| EditError::NotFound(active.clone()))?;
        let to = self
            .position(over)
            .ok_or_else(|| EditError::NotFound(over.clone()))?;
        if from == to {
            return Ok(false);
        }

        let items = self.items_mut();
        let item = items.remove(from);
        items.insert(to, item);

        if !items[0].is_section() {
            let item = items.remove(to);
            items.insert(from, item);
            log::warn!("Refusing to move {active} in front of the first page");
            return Err(EditError::LeadingQuestion);
        }

        log::debug!("Moved {active} from {from} to {to}");
        Ok(true)
    }

    /// Move a section and every question on its page as one block.
    ///
    /// The block lands next to the page that `over` belongs to: after it when
    /// dragging towards the end of the list, before it when dragging towards
    /// the start. Dropping a section onto its own page changes nothing.
    pub fn move_section(
        &mut self,
        active: &QuestionId,
        over: &QuestionId,
    ) -> Result<bool, EditError> {
        let from = self
            .position(active)
            .ok_or_else(|| EditError::NotFound(active.clone()))?;
        let to = self
            .position(over)
            .ok_or_else(|| EditError::NotFound(over.clone()))?;

        let block = self.block_range(from);
        if block.contains(&to) {
            return Ok(false);
        }

        let items = self.items_mut();
        let moving: Vec<_> = items.drain(block.clone()).collect();

        // Index of `over` once the block is gone.
        let target = if to > from { to - block.len() } else { to };

        let page_start = items[..=target]
            .iter()
            .rposition(|q| q.is_section())
            .unwrap_or(0);
        let page_end = items[target + 1..]
            .iter()
            .position(|q| q.is_section())
            .map_or(items.len(), |offset| target + 1 + offset);

        let insert_at = if from < to { page_end } else { page_start };
        items.splice(insert_at..insert_at, moving);

        if insert_at == from {
            return Ok(false);
        }

        log::debug!(
            "Moved page {active} ({} items) from {from} to {insert_at}",
            block.len()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, QuestionType};

    fn ids(list: &QuestionList) -> Vec<&str> {
        list.iter().map(|q| q.id().as_str()).collect()
    }

    /// `[S1, a, b, S2, c, S3, d, e]`
    fn three_pages() -> QuestionList {
        QuestionList::from_questions(vec![
            Question::section("S1", "One"),
            Question::new("a", QuestionType::Text, "a"),
            Question::new("b", QuestionType::Text, "b"),
            Question::section("S2", "Two"),
            Question::new("c", QuestionType::Text, "c"),
            Question::section("S3", "Three"),
            Question::new("d", QuestionType::Text, "d"),
            Question::new("e", QuestionType::Text, "e"),
        ])
        .unwrap()
    }

    #[test]
    fn moves_question_within_list() {
        let mut list = three_pages();
        assert_eq!(list.move_item(&"a".into(), &"c".into()), Ok(true));
        assert_eq!(ids(&list), ["S1", "b", "S2", "c", "a", "S3", "d", "e"]);

        assert_eq!(list.move_item(&"e".into(), &"b".into()), Ok(true));
        assert_eq!(ids(&list), ["S1", "e", "b", "S2", "c", "a", "S3", "d"]);
    }

    #[test]
    fn refuses_question_before_first_section() {
        let mut list = three_pages();
        let before = list.clone();
        assert_eq!(
            list.move_item(&"c".into(), &"S1".into()),
            Err(EditError::LeadingQuestion)
        );
        assert_eq!(list, before);
    }

    #[test]
    fn refuses_moving_first_section_away_from_questions() {
        // Moving S1 on its own would leave `a` in front.
        let mut list = three_pages();
        let before = list.clone();
        assert_eq!(
            list.move_item(&"S1".into(), &"c".into()),
            Err(EditError::LeadingQuestion)
        );
        assert_eq!(list, before);
    }

    #[test]
    fn section_dragged_down_lands_after_target_page() {
        let mut list = three_pages();
        assert_eq!(list.reorder(&"S1".into(), &"S3".into()), Ok(true));
        assert_eq!(ids(&list), ["S2", "c", "S3", "d", "e", "S1", "a", "b"]);
    }

    #[test]
    fn section_dragged_up_lands_before_target_page() {
        let mut list = three_pages();
        assert_eq!(list.reorder(&"S3".into(), &"S2".into()), Ok(true));
        assert_eq!(ids(&list), ["S1", "a", "b", "S3", "d", "e", "S2", "c"]);

        assert_eq!(list.reorder(&"S2".into(), &"S1".into()), Ok(true));
        assert_eq!(ids(&list), ["S2", "c", "S1", "a", "b", "S3", "d", "e"]);
    }

    #[test]
    fn section_dropped_on_question_uses_its_page() {
        let mut list = three_pages();
        assert_eq!(list.reorder(&"S2".into(), &"e".into()), Ok(true));
        assert_eq!(ids(&list), ["S1", "a", "b", "S3", "d", "e", "S2", "c"]);
    }

    #[test]
    fn section_dropped_on_own_page_is_noop() {
        let mut list = three_pages();
        let before = list.clone();
        assert_eq!(list.reorder(&"S3".into(), &"d".into()), Ok(false));
        assert_eq!(list, before);
    }

    #[test]
    fn section_block_stays_whole() {
        let mut list = three_pages();
        let len = list.len();
        list.reorder(&"S3".into(), &"S1".into()).unwrap();

        assert_eq!(list.len(), len);
        assert_eq!(ids(&list), ["S3", "d", "e", "S1", "a", "b", "S2", "c"]);
        for id in ["a", "b", "c", "d", "e"] {
            assert_eq!(list.iter().filter(|q| q.id() == &id).count(), 1);
        }
    }

    #[test]
    fn adjacent_section_moves() {
        let mut list = three_pages();
        assert_eq!(list.reorder(&"S2".into(), &"S3".into()), Ok(true));
        assert_eq!(ids(&list), ["S1", "a", "b", "S3", "d", "e", "S2", "c"]);
    }

    #[test]
    fn unknown_ids() {
        let mut list = three_pages();
        assert_eq!(
            list.reorder(&"zzz".into(), &"a".into()),
            Err(EditError::NotFound("zzz".into()))
        );
        assert_eq!(
            list.reorder(&"a".into(), &"zzz".into()),
            Err(EditError::NotFound("zzz".into()))
        );
        assert_eq!(list.reorder(&"a".into(), &"a".into()), Ok(false));
    }
}
