use std::collections::BTreeMap;

use log::debug;

use crate::element::element_model::{ElementId, RuleResult, ScanStatus};
use crate::element::tree::ElementTree;
use crate::rules::library::RuleLibrary;

/// Counts produced by one [`RuleRunner::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub elements: usize,
    pub results: usize,
    pub by_status: BTreeMap<ScanStatus, usize>,
}

impl RunSummary {
    pub fn count(&self, status: ScanStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

pub struct RuleRunner;

impl RuleRunner {
    /// Evaluate every rule against every element and attach the results,
    /// replacing whatever results the elements carried before.
    pub fn run(tree: &mut ElementTree, library: &RuleLibrary) -> RunSummary {
        let evaluated: Vec<(ElementId, Vec<RuleResult>)> = tree
            .elements()
            .map(|element| {
                let results = library
                    .rules()
                    .iter()
                    .filter_map(|rule| {
                        rule.evaluate(element)
                            .map(|status| RuleResult { rule: rule.id, status })
                    })
                    .collect();
                (element.id(), results)
            })
            .collect();

        let mut summary = RunSummary {
            elements: evaluated.len(),
            ..Default::default()
        };

        for (id, results) in evaluated {
            summary.results += results.len();
            for r in &results {
                *summary.by_status.entry(r.status).or_default() += 1;
            }
            tree.set_scan_results(id, results);
        }

        debug!(
            "ran {} rules over {} elements: {} results, {} failed, {} uncertain",
            library.len(),
            summary.elements,
            summary.results,
            summary.count(ScanStatus::Fail),
            summary.count(ScanStatus::Uncertain)
        );

        summary
    }
}
