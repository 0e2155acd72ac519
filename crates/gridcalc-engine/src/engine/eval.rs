//! Formula evaluation with cycle and depth guards.

use std::collections::HashSet;

use regex::{Captures, Regex};

use super::cell::Sheet;
use super::cell_ref::CellRef;
use super::deps::DepGraph;
use super::expr::{display_value, eval_flat_expr};

/// Longest reference chain the evaluator follows before giving up with
/// `#DEPTH!`. Keeps pathological chains well inside default thread stacks.
pub const MAX_EVAL_DEPTH: usize = 256;

/// Evaluate one cell to its display string.
///
/// `visiting` holds the cells on the active evaluation chain; a cell seen
/// twice is a cycle and yields `#CIRCULAR!`. Every cell reference in the
/// formula is resolved recursively and substituted by its numeric value
/// (a value that does not parse as a number substitutes 0), and the cell's
/// forward/reverse edges are refreshed from the references actually seen.
///
/// The sheet is read-only here. The only side effect is the edge refresh in
/// `graph`, so repeated evaluation against a working copy never corrupts the
/// committed store.
pub fn evaluate(
    target: &CellRef,
    sheet: &Sheet,
    graph: &mut DepGraph,
    visiting: &mut HashSet<CellRef>,
) -> String {
    if visiting.contains(target) {
        return "#CIRCULAR!".to_string();
    }
    if visiting.len() >= MAX_EVAL_DEPTH {
        return "#DEPTH!".to_string();
    }
    visiting.insert(target.clone());

    let formula = match sheet.get(target) {
        Some(cell) => match &cell.formula {
            Some(formula) => formula.clone(),
            None => {
                let literal = cell.raw.clone();
                visiting.remove(target);
                return literal;
            }
        },
        None => {
            visiting.remove(target);
            return String::new();
        }
    };

    let reference_re = Regex::new(r"[A-Z]+[0-9]+").unwrap();
    let mut current_deps: HashSet<CellRef> = HashSet::new();
    let mut blocked: Option<&str> = None;

    let substituted = reference_re.replace_all(&formula, |caps: &Captures<'_>| {
        let matched = &caps[0];
        let Some(referenced) = CellRef::from_str(matched) else {
            return matched.to_string();
        };
        current_deps.insert(referenced.clone());

        let value = evaluate(&referenced, sheet, graph, visiting);
        if value == "#CIRCULAR!" || value == "#DEPTH!" {
            // A traversal guard fired somewhere below; the whole formula is
            // poisoned, not just this operand.
            blocked = Some(if value == "#CIRCULAR!" {
                "#CIRCULAR!"
            } else {
                "#DEPTH!"
            });
            return "0".to_string();
        }
        // "NaN" parses as a float but is not a usable operand.
        match value.trim().parse::<f64>() {
            Ok(num) if !num.is_nan() => num.to_string(),
            _ => "0".to_string(),
        }
    });

    // Refresh edges even when a guard fired: the recalculation walk relies
    // on reverse edges staying accurate for every cell in the cycle.
    graph.replace_edges(target, current_deps);

    visiting.remove(target);
    if let Some(sentinel) = blocked {
        return sentinel.to_string();
    }
    display_value(eval_flat_expr(&substituted))
}
