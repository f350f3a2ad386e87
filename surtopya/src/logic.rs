//! Logic jump validation.
//!
//! Logic rules form a directed graph over the question list: every rule is an
//! edge from a single-choice or dropdown question to a later question, or to
//! the terminal `end_survey` sink. Deleting or moving questions can break an
//! edge after it was created; edges are always resolved against the live list.

use std::collections::HashMap;
use std::fmt;

use crate::{Destination, LogicRule, Question, QuestionId, QuestionList};

/// Why a logic rule cannot be followed as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicWarning {
    /// The destination question no longer exists.
    DeletedDestination,

    /// The destination is the question itself or comes before it.
    BackwardJump,

    /// The trigger option is no longer one of the question's options.
    DanglingTrigger,
}

impl LogicWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::DeletedDestination => "Logic jump points to a deleted question",
            Self::BackwardJump => "Logic jump points to a question before or at current position",
            Self::DanglingTrigger => "Logic jump is triggered by an option that no longer exists",
        }
    }
}

impl fmt::Display for LogicWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A problem found on one rule of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicIssue {
    pub question: QuestionId,
    /// Position of the offending rule in the question's logic.
    pub rule_index: usize,
    pub warning: LogicWarning,
}

/// Where an edge of the logic graph lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget {
    /// Ends the survey.
    End,
    /// Index of the destination in the question list.
    Index(usize),
    /// The destination id does not resolve.
    Missing,
}

/// One logic rule, resolved against the question list.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicEdge<'a> {
    pub source: &'a Question,
    pub source_index: usize,
    pub rule_index: usize,
    pub rule: &'a LogicRule,
    pub target: EdgeTarget,
}

impl LogicEdge<'_> {
    /// The destination problem on this edge, if any. Trigger options are
    /// not considered.
    pub fn destination_warning(&self) -> Option<LogicWarning> {
        match self.target {
            EdgeTarget::End => None,
            EdgeTarget::Missing => Some(LogicWarning::DeletedDestination),
            EdgeTarget::Index(target) if target <= self.source_index => {
                Some(LogicWarning::BackwardJump)
            }
            EdgeTarget::Index(_) => None,
        }
    }

    /// Check if the trigger is still one of the source's options.
    pub fn trigger_exists(&self) -> bool {
        self.source
            .options()
            .iter()
            .any(|option| *option == self.rule.trigger_option)
    }
}

/// All logic rules of a question list as resolved edges.
#[derive(Debug, Clone)]
pub struct LogicGraph<'a> {
    edges: Vec<LogicEdge<'a>>,
}

impl<'a> LogicGraph<'a> {
    /// Resolve every rule on every question that supports logic.
    pub fn build(questions: &'a [Question]) -> Self {
        let positions: HashMap<&QuestionId, usize> = questions
            .iter()
            .enumerate()
            .map(|(index, q)| (q.id(), index))
            .collect();

        let edges = questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.kind().supports_logic())
            .flat_map(|(source_index, source)| {
                let positions = &positions;
                source
                    .logic()
                    .iter()
                    .enumerate()
                    .map(move |(rule_index, rule)| LogicEdge {
                        source,
                        source_index,
                        rule_index,
                        rule,
                        target: resolve(&rule.destination, positions),
                    })
            })
            .collect();

        Self { edges }
    }

    pub fn edges(&self) -> &[LogicEdge<'a>] {
        &self.edges
    }

    /// Edges leaving the given question, in rule order.
    pub fn edges_from<'g>(&'g self, id: &'g QuestionId) -> impl Iterator<Item = &'g LogicEdge<'a>> {
        self.edges.iter().filter(move |edge| edge.source.id() == id)
    }

    /// Check every edge and report all problems, in list and rule order.
    ///
    /// Dangling triggers are reported here but never repaired.
    pub fn validate(&self) -> Vec<LogicIssue> {
        let mut issues = Vec::new();
        for edge in &self.edges {
            let issue = |warning| LogicIssue {
                question: edge.source.id().clone(),
                rule_index: edge.rule_index,
                warning,
            };
            if let Some(warning) = edge.destination_warning() {
                issues.push(issue(warning));
            }
            if !edge.trigger_exists() {
                issues.push(issue(LogicWarning::DanglingTrigger));
            }
        }
        issues
    }

    /// The first destination problem of the given question.
    pub fn warning_for(&self, id: &QuestionId) -> Option<LogicWarning> {
        self.edges_from(id).find_map(|edge| edge.destination_warning())
    }
}

fn resolve(destination: &Destination, positions: &HashMap<&QuestionId, usize>) -> EdgeTarget {
    match destination {
        Destination::EndSurvey => EdgeTarget::End,
        Destination::Question(id) => positions
            .get(id)
            .map_or(EdgeTarget::Missing, |&index| EdgeTarget::Index(index)),
    }
}

/// Check the logic of one question against the current list.
///
/// Returns the warning of the first rule that points to a deleted question or
/// does not jump forward. Unknown ids and questions that cannot carry logic
/// have no warning.
pub fn logic_warning(questions: &[Question], id: &QuestionId) -> Option<LogicWarning> {
    let source_index = questions.iter().position(|q| q.id() == id)?;
    let source = &questions[source_index];
    if !source.kind().supports_logic() {
        return None;
    }

    for rule in source.logic() {
        let Destination::Question(target) = &rule.destination else {
            continue;
        };
        match questions.iter().position(|q| q.id() == target) {
            None => return Some(LogicWarning::DeletedDestination),
            Some(target_index) if target_index <= source_index => {
                return Some(LogicWarning::BackwardJump);
            }
            Some(_) => {}
        }
    }

    None
}

/// A destination offered when adding a new rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DestinationOption<'a> {
    /// Submit the survey.
    EndSurvey,
    /// A later question on the same page.
    Question(&'a Question),
    /// A later page, by its section header.
    Page(&'a Question),
}

impl DestinationOption<'_> {
    pub fn destination(&self) -> Destination {
        match self {
            Self::EndSurvey => Destination::EndSurvey,
            Self::Question(q) | Self::Page(q) => Destination::Question(q.id().clone()),
        }
    }

    /// Text shown in the destination picker.
    pub fn label(&self) -> String {
        match self {
            Self::EndSurvey => "Submit Survey (End)".to_string(),
            Self::Question(q) if q.title().is_empty() => "Untitled Question".to_string(),
            Self::Question(q) => q.title().to_string(),
            Self::Page(q) => format!("Go to page: {}", q.title()),
        }
    }
}

/// Destinations a new rule on the given question may point to: the end of
/// the survey, later questions on the same page, and later pages.
///
/// Empty for unknown ids and questions that cannot carry logic.
pub fn available_destinations<'a>(
    questions: &'a [Question],
    id: &QuestionId,
) -> Vec<DestinationOption<'a>> {
    let Some(index) = questions.iter().position(|q| q.id() == id) else {
        return Vec::new();
    };
    if !questions[index].kind().supports_logic() {
        return Vec::new();
    }

    let mut options = vec![DestinationOption::EndSurvey];
    let mut same_page = true;
    for question in &questions[index + 1..] {
        if question.is_section() {
            same_page = false;
            options.push(DestinationOption::Page(question));
        } else if same_page {
            options.push(DestinationOption::Question(question));
        }
    }
    options
}

impl QuestionList {
    /// Check the logic of one question. See [`logic_warning`].
    pub fn logic_warning(&self, id: &QuestionId) -> Option<LogicWarning> {
        logic_warning(self.questions(), id)
    }

    /// Resolve all logic rules of the list.
    pub fn logic_graph(&self) -> LogicGraph<'_> {
        LogicGraph::build(self.questions())
    }

    /// Destinations a new rule on the given question may point to.
    pub fn available_destinations(&self, id: &QuestionId) -> Vec<DestinationOption<'_>> {
        available_destinations(self.questions(), id)
    }
}
