//! Operator keywords and the precedence engine.
//!
//! Operators are resolved one kind at a time in registration order, so
//! earlier kinds bind tighter. Each kind scans its level left to right when
//! left-associative and right to left otherwise.

use sift_core::{Arity, Assoc, Group, GroupKind, Operator, SyntaxNode};

use super::map_nested;
use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::pipeline::{Filter, FilterContext, Plugin, Recognizers, entry};
use crate::recognize::{Guard, RegexRecognizer, term_start};

/// One operator keyword.
#[derive(Debug, Clone)]
pub struct OperatorSpec {
    pub group: GroupKind,
    pub pattern: String,
    pub arity: Arity,
    pub assoc: Assoc,
    /// Recognizer priority.
    pub priority: i32,
    pub guard: Option<Guard>,
}

impl OperatorSpec {
    /// Left-associative infix operator.
    pub fn infix(group: GroupKind, pattern: impl Into<String>) -> Self {
        Self {
            group,
            pattern: pattern.into(),
            arity: Arity::Infix,
            assoc: Assoc::Left,
            priority: 0,
            guard: None,
        }
    }

    /// Right-associative prefix operator, recognized only at term start.
    pub fn prefix(group: GroupKind, pattern: impl Into<String>) -> Self {
        Self {
            group,
            pattern: pattern.into(),
            arity: Arity::Prefix,
            assoc: Assoc::Right,
            priority: 0,
            guard: Some(term_start),
        }
    }

    pub fn assoc(mut self, assoc: Assoc) -> Self {
        self.assoc = assoc;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn guard(mut self, guard: Option<Guard>) -> Self {
        self.guard = guard;
        self
    }

    fn rule(&self) -> Rule {
        Rule {
            group: self.group,
            arity: self.arity,
            assoc: self.assoc,
        }
    }
}

/// `NOT`, `AND`, `OR`, `ANDNOT`, `ANDMAYBE` and `REQUIRE`.
#[derive(Debug, Clone)]
pub struct OperatorsPlugin {
    specs: Vec<OperatorSpec>,
}

impl OperatorsPlugin {
    pub const NAME: &'static str = "operators";

    pub fn new() -> Self {
        Self {
            specs: vec![
                OperatorSpec::prefix(GroupKind::Not, r"NOT\s+"),
                OperatorSpec::infix(GroupKind::And, r"\s+AND\s+"),
                OperatorSpec::infix(GroupKind::Or, r"\s+OR\s+"),
                OperatorSpec::infix(GroupKind::AndNot, r"\s+ANDNOT\s+").priority(-5),
                OperatorSpec::infix(GroupKind::AndMaybe, r"\s+ANDMAYBE\s+").priority(-5),
                OperatorSpec::infix(GroupKind::Require, r"\s+REQUIRE\s+"),
            ],
        }
    }

    /// No operators at all; add them with [`Self::operator`].
    pub fn clean() -> Self {
        Self { specs: Vec::new() }
    }

    /// Adds an operator with the lowest precedence so far, or replaces the
    /// one with the same group kind in place.
    pub fn operator(mut self, spec: OperatorSpec) -> Self {
        match self.specs.iter().position(|s| s.group == spec.group) {
            Some(i) => self.specs[i] = spec,
            None => self.specs.push(spec),
        }
        self
    }

    /// Changes the pattern of an operator. `None` removes it.
    ///
    /// An operator that is not registered is added with the lowest
    /// precedence: prefix for `Not`, left-associative infix otherwise.
    pub fn set_pattern(mut self, group: GroupKind, pattern: Option<&str>) -> Self {
        match pattern {
            Some(pattern) => match self.specs.iter_mut().find(|s| s.group == group) {
                Some(spec) => spec.pattern = pattern.to_owned(),
                None => self.specs.push(match group {
                    GroupKind::Not => OperatorSpec::prefix(group, pattern),
                    _ => OperatorSpec::infix(group, pattern),
                }),
            },
            None => self.specs.retain(|s| s.group != group),
        }
        self
    }

    pub fn specs(&self) -> &[OperatorSpec] {
        &self.specs
    }
}

impl Default for OperatorsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for OperatorsPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        self.specs
            .iter()
            .map(|spec| -> Result<_> {
                let (group, arity, assoc) = (spec.group, spec.arity, spec.assoc);
                let name = format!("operator_{}", group.name().to_ascii_lowercase());
                let mut recognizer = RegexRecognizer::new(name, &spec.pattern, move |m| {
                    Some(SyntaxNode::Operator(Operator {
                        group,
                        assoc,
                        arity,
                        text: m.text().to_owned(),
                        span: m.span(),
                    }))
                })?;
                if let Some(guard) = spec.guard {
                    recognizer = recognizer.with_guard(guard);
                }
                Ok(entry(recognizer, spec.priority))
            })
            .collect()
    }

    fn filters(&self) -> Vec<Filter> {
        let rules: Vec<Rule> = self.specs.iter().map(OperatorSpec::rule).collect();
        vec![Filter::new("operators", 600, move |cx, group| {
            resolve(cx, &rules, group)
        })]
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    group: GroupKind,
    arity: Arity,
    assoc: Assoc,
}

impl Rule {
    fn matches(&self, node: &SyntaxNode) -> bool {
        matches!(node, SyntaxNode::Operator(op) if op.group == self.group && op.arity == self.arity)
    }
}

fn resolve(cx: &mut FilterContext<'_>, rules: &[Rule], group: Group) -> Group {
    let mut group = map_nested(group, &mut |g| resolve(cx, rules, g));
    let mut nodes = std::mem::take(&mut group.children);
    for rule in rules {
        nodes = match rule.assoc {
            Assoc::Left => fold_left(nodes, rule),
            Assoc::Right => fold_right(nodes, rule),
        };
    }

    for node in &nodes {
        if let SyntaxNode::Operator(op) = node {
            cx.report(DiagnosticKind::DanglingOperator, op.span)
                .message(op.text.trim())
                .emit();
        }
    }
    group.children = nodes;
    group
}

fn fold_left(mut nodes: Vec<SyntaxNode>, rule: &Rule) -> Vec<SyntaxNode> {
    let mut i = 0;
    while i < nodes.len() {
        if rule.matches(&nodes[i])
            && let Some(at) = reduce(&mut nodes, i, rule)
        {
            i = at + 1;
        } else {
            i += 1;
        }
    }
    nodes
}

fn fold_right(mut nodes: Vec<SyntaxNode>, rule: &Rule) -> Vec<SyntaxNode> {
    let mut i = nodes.len();
    while i > 0 {
        i -= 1;
        if rule.matches(&nodes[i])
            && let Some(at) = reduce(&mut nodes, i, rule)
        {
            i = at;
        }
    }
    nodes
}

fn is_content(node: &SyntaxNode) -> bool {
    matches!(node, SyntaxNode::Text(_) | SyntaxNode::Group(_))
}

/// Start of the operand that ends right before `end`. An operand is a
/// content node followed by any boost markers.
fn operand_before(nodes: &[SyntaxNode], end: usize) -> Option<usize> {
    let mut i = end;
    while i > 0 && nodes[i - 1].is_boost_marker() {
        i -= 1;
    }
    (i > 0 && is_content(&nodes[i - 1])).then(|| i - 1)
}

/// Exclusive end of the operand starting at `start`.
fn operand_after(nodes: &[SyntaxNode], start: usize) -> Option<usize> {
    if !nodes.get(start).is_some_and(is_content) {
        return None;
    }
    let mut end = start + 1;
    while nodes.get(end).is_some_and(SyntaxNode::is_boost_marker) {
        end += 1;
    }
    Some(end)
}

/// Replaces the operator at `pos` and its operands with one group.
/// Returns the index of that group, or `None` when an operand is missing.
fn reduce(nodes: &mut Vec<SyntaxNode>, pos: usize, rule: &Rule) -> Option<usize> {
    let end = operand_after(nodes, pos + 1)?;
    let start = match rule.arity {
        Arity::Prefix => pos,
        Arity::Infix => operand_before(nodes, pos)?,
    };

    let mut left: Vec<SyntaxNode> = nodes.drain(start..end).collect();
    let right = left.split_off(pos - start + 1);
    left.pop();
    nodes.insert(start, combine(rule, left, right));
    Some(start)
}

fn combine(rule: &Rule, mut left: Vec<SyntaxNode>, mut right: Vec<SyntaxNode>) -> SyntaxNode {
    if rule.group.is_merging() {
        match rule.assoc {
            Assoc::Left => {
                if is_single_group(&left, rule.group)
                    && let Some(SyntaxNode::Group(mut group)) = left.pop()
                {
                    group.children.extend(right);
                    return group.into();
                }
            }
            Assoc::Right => {
                if is_single_group(&right, rule.group)
                    && let Some(SyntaxNode::Group(mut group)) = right.pop()
                {
                    left.append(&mut group.children);
                    group.children = left;
                    return group.into();
                }
            }
        }
    }
    left.extend(right);
    Group::with_children(rule.group, left).into()
}

fn is_single_group(operand: &[SyntaxNode], kind: GroupKind) -> bool {
    matches!(operand, [SyntaxNode::Group(g)] if g.kind == kind)
}
