//! Pointer-driven drag and drop on the builder canvas.
//!
//! [`DragController`] is a small state machine fed with pointer events. It
//! never touches the [`QuestionList`] while a drag is in flight: the position
//! a new question would land at is kept as an insertion slot and rendered by
//! [`DragController::preview`]. The list is only changed on release.

use crate::config::BuilderConfig;
use crate::{EditError, Question, QuestionId, QuestionList, QuestionType};

/// A pointer position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A question type picked up from the toolbox.
    Template(QuestionType),
    /// An item already on the canvas.
    Existing { id: QuestionId, kind: QuestionType },
}

impl DragPayload {
    /// Payload for picking up an item that is already on the canvas.
    pub fn existing(question: &Question) -> Self {
        Self::Existing {
            id: question.id().clone(),
            kind: question.kind(),
        }
    }

    pub fn kind(&self) -> QuestionType {
        match self {
            Self::Template(kind) | Self::Existing { kind, .. } => *kind,
        }
    }

    fn is_existing_section(&self) -> bool {
        matches!(self, Self::Existing { kind: QuestionType::Section, .. })
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// The canvas background, below or between items.
    Canvas,
    /// An item on the canvas.
    Item(QuestionId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to start a drag.
    Armed { payload: DragPayload, origin: Point },
    Dragging {
        payload: DragPayload,
        over: Option<DropTarget>,
        /// Where a template would be inserted. Unused for existing items.
        slot: Option<usize>,
    },
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// The pointer never moved far enough. Toolbox items treat this as
    /// "append", canvas items as "select".
    Click(DragPayload),
    /// Released outside any target, or nothing was being dragged.
    Cancelled,
    /// A template was dropped and became a new question.
    Inserted(QuestionId),
    /// An existing item changed position.
    Moved,
    /// Dropped where it already was.
    Unchanged,
    /// The move would break the list and was not applied.
    Rejected(EditError),
}

/// One entry of the canvas while something is dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasItem<'a> {
    Question(&'a Question),
    /// Where the dragged template would land.
    Placeholder(QuestionType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    activation_distance: f64,
    state: DragState,
}

impl DragController {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
            state: DragState::Idle,
        }
    }

    pub fn with_config(config: &BuilderConfig) -> Self {
        Self::new(config.drag.activation_distance)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The payload of the current press or drag, if any.
    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Idle => None,
            DragState::Armed { payload, .. } | DragState::Dragging { payload, .. } => Some(payload),
        }
    }

    /// Current insertion slot of a dragged template.
    pub fn insertion_slot(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging {
                payload: DragPayload::Template(_),
                slot,
                ..
            } => *slot,
            _ => None,
        }
    }

    /// Press on a toolbox entry or a canvas item. Ignored unless idle.
    pub fn pointer_down(&mut self, payload: DragPayload, at: Point) -> bool {
        if !matches!(self.state, DragState::Idle) {
            return false;
        }
        self.state = DragState::Armed {
            payload,
            origin: at,
        };
        true
    }

    /// Pointer moved. Returns `true` when this movement started the drag.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let DragState::Armed { payload, origin } = &self.state else {
            return false;
        };
        if origin.distance_to(at) <= self.activation_distance {
            return false;
        }

        log::debug!("Drag started: {payload:?}");
        self.state = DragState::Dragging {
            payload: payload.clone(),
            over: None,
            slot: None,
        };
        true
    }

    /// Whether `target` may receive the current drag.
    ///
    /// A dragged section only lands on other section headers.
    pub fn accepts(&self, list: &QuestionList, target: &DropTarget) -> bool {
        let Some(payload) = self.payload() else {
            return false;
        };
        match target {
            DropTarget::Canvas => !payload.is_existing_section(),
            DropTarget::Item(id) => match list.get(id) {
                None => false,
                Some(question) => !payload.is_existing_section() || question.is_section(),
            },
        }
    }

    /// Ids of the items the current drag may be dropped on.
    pub fn sortable_targets<'a>(&self, list: &'a QuestionList) -> Vec<&'a QuestionId> {
        list.iter()
            .map(Question::id)
            .filter(|id| self.accepts(list, &DropTarget::Item((*id).clone())))
            .collect()
    }

    /// Pointer entered `target`, or left every target when `None`.
    pub fn hover(&mut self, list: &QuestionList, target: Option<DropTarget>) {
        if !self.is_dragging() {
            return;
        }
        if let Some(target) = &target
            && !self.accepts(list, target)
        {
            return;
        }

        let DragState::Dragging { payload, over, slot } = &mut self.state else {
            return;
        };

        if let DragPayload::Template(_) = payload {
            match &target {
                // Leaving the canvas keeps the placeholder where it was.
                None => {}
                Some(DropTarget::Canvas) => {
                    if slot.is_none() {
                        *slot = Some(list.len());
                    }
                }
                Some(DropTarget::Item(id)) => {
                    if let Some(index) = list.position(id) {
                        let next = match *slot {
                            None => index,
                            Some(current) if index >= current => index + 1,
                            Some(_) => index,
                        };
                        *slot = Some(next.clamp(1, list.len()));
                    }
                }
            }
        }

        *over = target;
    }

    /// The canvas as it should be drawn right now.
    pub fn preview<'a>(&self, list: &'a QuestionList) -> Vec<CanvasItem<'a>> {
        let mut items: Vec<CanvasItem<'a>> = list.iter().map(CanvasItem::Question).collect();
        if let (Some(slot), Some(payload)) = (self.insertion_slot(), self.payload()) {
            let slot = slot.clamp(1, items.len());
            items.insert(slot, CanvasItem::Placeholder(payload.kind()));
        }
        items
    }

    /// Release the pointer and apply the drop to `list`.
    pub fn release(&mut self, list: &mut QuestionList) -> DropOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DropOutcome::Cancelled,
            DragState::Armed { payload, .. } => DropOutcome::Click(payload),
            DragState::Dragging { over: None, .. } => {
                log::debug!("Drag cancelled: released outside the canvas");
                DropOutcome::Cancelled
            }
            DragState::Dragging {
                payload: DragPayload::Template(kind),
                slot,
                ..
            } => {
                let index = slot.unwrap_or(list.len());
                DropOutcome::Inserted(list.insert_new(kind, index))
            }
            DragState::Dragging {
                payload: DragPayload::Existing { id, .. },
                over: Some(target),
                ..
            } => match target {
                DropTarget::Canvas => DropOutcome::Unchanged,
                DropTarget::Item(over) if over == id => DropOutcome::Unchanged,
                DropTarget::Item(over) => match list.reorder(&id, &over) {
                    Ok(true) => DropOutcome::Moved,
                    Ok(false) => DropOutcome::Unchanged,
                    Err(err) => DropOutcome::Rejected(err),
                },
            },
        }
    }

    /// Abort the current press or drag without touching the list.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::with_config(&BuilderConfig::default())
    }
}
