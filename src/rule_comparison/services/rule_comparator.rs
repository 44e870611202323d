use crate::rule_comparison::domain::{
    ComparisonReport, ComparisonResult, ConditionRecord, MatchStatus,
};
use std::collections::HashSet;

/// Joins two extractions by component identity and classifies each pair.
///
/// The join universe is the deduplicated union of component names from
/// both sides, iterated in first-seen order (development side first).
/// When a side holds duplicate records for one component, the first
/// record wins and the rest are silently ignored; this mirrors the
/// reference behavior and is intentional, if surprising.
///
/// Classification precedence: a component absent from either side is
/// `Missing` regardless of the present side's condition; otherwise the
/// condition strings are compared literally (case- and whitespace-
/// sensitive, no reordering of AND/OR terms), so semantically equal but
/// differently ordered expressions count as `Different`.
pub fn compare(dev: &[ConditionRecord], prod: &[ConditionRecord]) -> ComparisonReport {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut results = Vec::new();

    for record in dev.iter().chain(prod.iter()) {
        if !seen.insert(record.component.as_str()) {
            continue;
        }

        let dev_record = first_for_component(dev, &record.component);
        let prod_record = first_for_component(prod, &record.component);
        results.push(classify(record.component.clone(), dev_record, prod_record));
    }

    ComparisonReport::new(results)
}

fn first_for_component<'a>(
    records: &'a [ConditionRecord],
    component: &str,
) -> Option<&'a ConditionRecord> {
    records.iter().find(|r| r.component == component)
}

fn classify(
    component: String,
    dev_record: Option<&ConditionRecord>,
    prod_record: Option<&ConditionRecord>,
) -> ComparisonResult {
    let dev_condition = condition_or_sentinel(dev_record);
    let prod_condition = condition_or_sentinel(prod_record);

    let status = if dev_record.is_none() || prod_record.is_none() {
        MatchStatus::Missing
    } else if dev_condition != prod_condition {
        MatchStatus::Different
    } else {
        MatchStatus::Matching
    };

    ComparisonResult {
        component,
        dev_condition,
        prod_condition,
        dev_description: description_or_empty(dev_record),
        prod_description: description_or_empty(prod_record),
        status,
    }
}

fn condition_or_sentinel(record: Option<&ConditionRecord>) -> String {
    record
        .map(|r| r.condition.clone())
        .unwrap_or_else(|| ComparisonResult::NOT_CONFIGURED.to_string())
}

fn description_or_empty(record: Option<&ConditionRecord>) -> String {
    record.map(|r| r.description.clone()).unwrap_or_default()
}
