use super::prelude::*;

/// Distinct categorical values offered by the filter chips.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub dish_types: Vec<String>,
    pub areas: Vec<String>,
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<_> = values
        .filter_map(|v| match v.trim() {
            v if v.is_empty() => None,
            v => Some(v.to_string()),
        })
        .collect();
    values.sort_unstable_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    values.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    values
}

pub fn filter_options<R: StallRepo>(repo: &R) -> Result<FilterOptions> {
    let stalls = repo.all_stalls()?;
    Ok(FilterOptions {
        dish_types: distinct_sorted(stalls.iter().map(|s| s.dish_type.as_str())),
        areas: distinct_sorted(stalls.iter().map(|s| s.area())),
    })
}
