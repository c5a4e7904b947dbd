use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use super::blueprint::standard_categories;
use super::domain::{Category, CategorySummary};
use super::error::CatalogError;

/// Read-only set of categories, validated once when built.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Built-in categories. Their structure is pinned by tests rather than re-validated.
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
        }
    }

    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// Load a JSON array of categories and validate it with the same rules as `new`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw =
            fs::read_to_string(path.as_ref()).map_err(|err| CatalogError::Io(err.to_string()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(categories)
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories.iter().map(Category::summary).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn validate(categories: &[Category]) -> Result<(), CatalogError> {
    if categories.is_empty() {
        return Err(CatalogError::NoCategories);
    }

    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
        validate_category(category)?;
    }

    Ok(())
}

fn validate_category(category: &Category) -> Result<(), CatalogError> {
    if category.questions.is_empty() {
        return Err(CatalogError::EmptyCategory(category.id.clone()));
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    for (position, question) in category.questions.iter().enumerate() {
        if index.insert(question.id.as_str(), position).is_some() {
            return Err(CatalogError::DuplicateQuestion {
                category_id: category.id.clone(),
                question_id: question.id.clone(),
            });
        }
        if question.options.is_empty() {
            return Err(CatalogError::QuestionWithoutOptions {
                category_id: category.id.clone(),
                question_id: question.id.clone(),
            });
        }
    }

    let mut edges: Vec<Vec<usize>> = Vec::with_capacity(category.questions.len());
    let mut preset_edges = Vec::with_capacity(category.questions.len());
    for question in &category.questions {
        let mut targets = Vec::new();
        let mut preset_targets = Vec::new();
        for option in &question.options {
            let Some(next) = option.next_question.as_deref() else {
                continue;
            };
            let target = index
                .get(next)
                .copied()
                .ok_or_else(|| CatalogError::DanglingReference {
                    category_id: category.id.clone(),
                    question_id: question.id.clone(),
                    target: next.to_string(),
                })?;
            if !targets.contains(&target) {
                targets.push(target);
            }
            if !option.is_custom && !preset_targets.contains(&target) {
                preset_targets.push(target);
            }
        }
        edges.push(targets);
        preset_edges.push(preset_targets);
    }

    if let Some(position) = find_cycle(&edges) {
        return Err(CatalogError::Cycle {
            category_id: category.id.clone(),
            question_id: category.questions[position].id.clone(),
        });
    }

    if !terminal_reachable(category, &preset_edges) {
        return Err(CatalogError::NoReachableTerminal(category.id.clone()));
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Returns a node that closes a cycle, if any.
fn find_cycle(edges: &[Vec<usize>]) -> Option<usize> {
    let mut marks = vec![Mark::Unvisited; edges.len()];

    for root in 0..edges.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        let mut stack = vec![(root, 0usize)];
        marks[root] = Mark::InProgress;

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            if let Some(&next) = edges[node].get(cursor) {
                frame.1 += 1;
                match marks[next] {
                    Mark::InProgress => return Some(next),
                    Mark::Unvisited => {
                        marks[next] = Mark::InProgress;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[node] = Mark::Done;
                stack.pop();
            }
        }
    }

    None
}

fn terminal_reachable(category: &Category, edges: &[Vec<usize>]) -> bool {
    let mut visited = vec![false; edges.len()];
    let mut queue = VecDeque::from([0usize]);
    visited[0] = true;

    while let Some(node) = queue.pop_front() {
        if category.questions[node].is_terminal() {
            return true;
        }
        for &next in &edges[node] {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    false
}
