//! # surtopya
//!
//! The document model of the Surtopya survey builder.
//!
//! A survey is an ordered [`QuestionList`]. Section markers split it into
//! pages, choice questions carry logic rules that jump forward or end the
//! survey, and drag and drop moves single questions or whole pages.
//!
//! ## Usage
//!
//! ```rust
//! use surtopya::{LogicRule, LogicWarning, QuestionList, QuestionType};
//!
//! let mut list = QuestionList::new();
//! let q1 = list.append(QuestionType::Single);
//! let page = list.add_page();
//! let q2 = list.append(QuestionType::Text);
//!
//! list.save_logic(&q1, vec![LogicRule::jump_to("Option 2", q2.clone())]);
//! assert_eq!(list.logic_warning(&q1), None);
//!
//! // Moving the second page to the front turns the jump backwards.
//! assert_eq!(list.reorder(&page, &"page-1".into()), Ok(true));
//! assert_eq!(list.pages().len(), 2);
//! assert_eq!(list.logic_warning(&q1), Some(LogicWarning::BackwardJump));
//! ```
//!
//! ## Modules
//!
//! - [`QuestionList`] mutations: append, insert, update, delete, duplicate
//! - [`paginate`]: pages derived from section markers
//! - [`LogicGraph`] and [`logic_warning`]: forward-only jump validation
//! - [`DragController`] and [`QuestionList::reorder`]: drag and drop
//! - [`Runner`] and [`next_page`]: respondent navigation
//! - [`BuilderSession`]: dirty tracking, settings draft, save and publish

// Re-export all types from surtopya-types
pub use surtopya_types::*;

mod config;
mod delete;
mod drag;
mod error;
mod logic;
mod pages;
mod preview;
mod question_list;
mod reorder;
mod runner;
mod session;

// Scripted respondent for running surveys without user interaction
mod test_backend;

pub use config::{BuilderConfig, ConfigError, DragSettings, PageDefaults, QuestionDefaults, RatingDefaults};
pub use delete::{DeleteConfirmation, DeleteState};
pub use drag::{CanvasItem, DragController, DragPayload, DragState, DropOutcome, DropTarget, Point};
pub use error::EditError;
pub use logic::{
    DestinationOption, EdgeTarget, LogicEdge, LogicGraph, LogicIssue, LogicWarning,
    available_destinations, logic_warning,
};
pub use pages::{page_of, paginate};
pub use preview::{MemoryStore, PREVIEW_KEY, SessionStore, read_preview, write_preview};
pub use question_list::QuestionList;
pub use runner::{Navigation, Runner, next_page};
pub use session::{BuilderSession, SettingsDraft, SettingsExit, ViewMode};
pub use test_backend::{ScriptError, ScriptedRespondent};
