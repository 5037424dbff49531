//! Selection repair
//!
//! After any mutation (and at seeding time) the selection must satisfy
//! the consistency rules listed in the module docs. Repair walks the
//! triple top-down, keeps every part that still resolves, and falls back
//! to the first available option for every part that does not. Running
//! repair on an already consistent selection changes nothing.

use crate::catalog::Catalog;

use super::state::Selection;

/// Re-validate `selection` against `catalog`, fixing what no longer
/// resolves. Returns true if anything was changed.
pub(crate) fn repair(catalog: &Catalog, selection: &mut Selection) -> bool {
    let before = selection.clone();

    // Country must resolve; fall back to the first country in display
    // order, or to the empty selection when there is none.
    let country = match selection
        .country_code
        .as_deref()
        .and_then(|code| catalog.get(code))
    {
        Some(c) => c,
        None => match catalog.first() {
            Some(c) => {
                selection.country_code = Some(c.code.clone());
                c
            }
            None => {
                selection.country_code = None;
                selection.size_label = None;
                selection.plan_index = 0;
                return *selection != before;
            }
        },
    };

    // Size must be one the country offers; fall back to its first tier.
    // A fallback always restarts the plan position.
    let keep_label = selection
        .size_label
        .as_deref()
        .map_or(false, |label| country.tier(label).is_some());
    if !keep_label {
        selection.size_label = country.first_tier_label().map(str::to_string);
        selection.plan_index = 0;
    }

    // Plan index must land inside the tier's plan list. An empty list
    // pins the index at 0 with nothing selected.
    let plan_len = selection
        .size_label
        .as_deref()
        .and_then(|label| country.tier(label))
        .map_or(0, <[_]>::len);
    if selection.plan_index >= plan_len {
        selection.plan_index = 0;
    }

    *selection != before
}
