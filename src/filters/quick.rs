//! Quick-filter chips summarizing the currently displayed results.
//!
//! Chips are derived fresh from every result set and never persisted;
//! clicking one re-enters the regular cascade path with that value
//! pre-selected, it is not a shortcut around it.

use crate::api::Factory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilterKind {
    Category,
    Country,
}

/// One chip: a grouping value with the number of displayed results
/// sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilter {
    pub kind: QuickFilterKind,
    pub id: u32,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickFilters {
    pub categories: Vec<QuickFilter>,
    pub countries: Vec<QuickFilter>,
}

fn tally<'a>(
    kind: QuickFilterKind,
    values: impl Iterator<Item = &'a str>,
) -> Vec<QuickFilter> {
    // Insertion order of first occurrence, not sorted by count.
    let mut chips: Vec<QuickFilter> = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        match chips.iter_mut().find(|chip| chip.name == value) {
            Some(chip) => chip.count += 1,
            None => chips.push(QuickFilter {
                kind,
                id: chips.len() as u32 + 1,
                name: value.to_string(),
                count: 1,
            }),
        }
    }
    chips
}

/// Build the category and country frequency tables for `results`.
/// Records with an empty value for a field are left out of that table.
pub fn derive(results: &[Factory]) -> QuickFilters {
    QuickFilters {
        categories: tally(
            QuickFilterKind::Category,
            results.iter().map(|f| f.category.as_str()),
        ),
        countries: tally(
            QuickFilterKind::Country,
            results.iter().map(|f| f.country.as_str()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(category: &str, country: &str) -> Factory {
        Factory {
            category: category.to_string(),
            country: country.to_string(),
            ..Factory::default()
        }
    }

    #[test]
    fn test_counts_group_by_exact_value() {
        let results = vec![
            factory("Electronics", "Egypt"),
            factory("Electronics", "Jordan"),
            factory("Textiles", "Egypt"),
        ];
        let chips = derive(&results);
        assert_eq!(chips.categories.len(), 2);
        assert_eq!(chips.categories[0].name, "Electronics");
        assert_eq!(chips.categories[0].count, 2);
        assert_eq!(chips.categories[1].name, "Textiles");
        assert_eq!(chips.categories[1].count, 1);
        assert_eq!(chips.countries[0].name, "Egypt");
        assert_eq!(chips.countries[0].count, 2);
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let results = vec![
            factory("Textiles", ""),
            factory("Electronics", ""),
            factory("Electronics", ""),
            factory("Textiles", ""),
        ];
        let chips = derive(&results);
        let names: Vec<&str> = chips.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Textiles", "Electronics"]);
    }

    #[test]
    fn test_empty_values_excluded_per_table() {
        let results = vec![factory("", "Egypt"), factory("Food", "")];
        let chips = derive(&results);
        assert_eq!(chips.categories.len(), 1);
        assert_eq!(chips.categories[0].name, "Food");
        assert_eq!(chips.countries.len(), 1);
        assert_eq!(chips.countries[0].name, "Egypt");
    }

    #[test]
    fn test_empty_results_yield_no_chips() {
        assert_eq!(derive(&[]), QuickFilters::default());
    }

    #[test]
    fn test_chip_ids_are_stable_positions() {
        let results = vec![factory("A", ""), factory("B", ""), factory("A", "")];
        let chips = derive(&results);
        assert_eq!(chips.categories[0].id, 1);
        assert_eq!(chips.categories[1].id, 2);
    }
}
