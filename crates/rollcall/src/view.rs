//! # View Transformer
//!
//! Maps the canonical roster plus the current [`ViewParameters`] to the sequence the
//! operator sees. Pure: same inputs, same output, nothing cached.
//!
//! Rules, applied in this order:
//!
//! 1. No sort field: records stay in roster order. Otherwise a stable sort on the
//!    chosen name, compared by code point (no locale collation).
//! 2. Descending is the exact reverse of the ascending result. Any order other than
//!    descending, including `none`, sorts ascending.
//! 3. A non-empty search keeps records whose first or last name contains the text,
//!    ignoring case. Filtering never reorders survivors.
//!
//! Records are borrowed, not cloned; callers clone when they need ownership.

use crate::model::{Person, SortField, SortOrder, ViewParameters};

pub fn transform<'a>(records: &'a [Person], view: &ViewParameters) -> Vec<&'a Person> {
    let mut out: Vec<&Person> = records.iter().collect();
    if view.is_identity() {
        return out;
    }

    if view.sort_field != SortField::None {
        let field = view.sort_field;
        // Vec::sort_by is stable
        out.sort_by(|a, b| a.sort_key(field).cmp(&b.sort_key(field)));
        if view.sort_order == SortOrder::Descending {
            out.reverse();
        }
    }

    if !view.search_text.is_empty() {
        let needle = view.search_text.to_lowercase();
        out.retain(|p| matches_search(p, &needle));
    }

    out
}

/// `needle` must already be lowercase.
fn matches_search(person: &Person, needle: &str) -> bool {
    person.first_name.to_lowercase().contains(needle)
        || person.last_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn person(id: u64, first: &str, last: &str) -> Person {
        Person::new(id, first, last)
    }

    fn ids(people: &[&Person]) -> Vec<u64> {
        people.iter().map(|p| p.id).collect()
    }

    fn view(field: SortField, order: SortOrder, search: &str) -> ViewParameters {
        ViewParameters {
            sort_field: field,
            sort_order: order,
            search_text: search.to_string(),
        }
    }

    #[test]
    fn default_view_keeps_roster_order() {
        let records = vec![person(3, "C", "c"), person(1, "A", "a"), person(2, "B", "b")];
        let out = transform(&records, &ViewParameters::default());
        assert_eq!(ids(&out), vec![3, 1, 2]);
    }

    #[test]
    fn sorts_by_first_name() {
        let records = vec![person(1, "Bob", "Zed"), person(2, "Amy", "Young")];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::Ascending, ""));
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn sorts_by_last_name_descending() {
        let records = vec![
            person(1, "Bob", "Adams"),
            person(2, "Amy", "Young"),
            person(3, "Cal", "Moss"),
        ];
        let out = transform(&records, &view(SortField::LastName, SortOrder::Descending, ""));
        assert_eq!(ids(&out), vec![2, 3, 1]);
    }

    #[test]
    fn field_without_order_sorts_ascending() {
        let records = vec![person(1, "Bob", "x"), person(2, "Amy", "y")];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::None, ""));
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn order_without_field_is_ignored() {
        let records = vec![person(1, "Bob", "x"), person(2, "Amy", "y")];
        let out = transform(&records, &view(SortField::None, SortOrder::Descending, ""));
        assert_eq!(ids(&out), vec![1, 2]);
    }

    #[test]
    fn comparison_is_ordinal() {
        // uppercase sorts before lowercase by code point
        let records = vec![person(1, "amy", "x"), person(2, "Zoe", "y")];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::Ascending, ""));
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn ties_keep_roster_order() {
        let records = vec![
            person(1, "Sam", "Cole"),
            person(2, "Ann", "Cole"),
            person(3, "Sam", "Abel"),
        ];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::Ascending, ""));
        assert_eq!(ids(&out), vec![2, 1, 3]);
    }

    #[test]
    fn descending_ties_mirror_ascending() {
        let records = vec![person(1, "Sam", "a"), person(2, "Sam", "b"), person(3, "Ann", "c")];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::Descending, ""));
        assert_eq!(ids(&out), vec![2, 1, 3]);
    }

    #[test]
    fn search_matches_either_name_case_insensitively() {
        let records = vec![
            person(1, "Bob", "Zed"),
            person(2, "Amy", "Young"),
            person(3, "Pam", "Lee"),
            person(4, "Tim", "Hamm"),
        ];
        let out = transform(&records, &view(SortField::None, SortOrder::None, "AM"));
        assert_eq!(ids(&out), vec![2, 3, 4]);
    }

    #[test]
    fn search_after_sort_keeps_sorted_order() {
        let records = vec![
            person(1, "Pam", "Lee"),
            person(2, "Bob", "Zed"),
            person(3, "Amy", "Young"),
        ];
        let out = transform(&records, &view(SortField::FirstName, SortOrder::Ascending, "am"));
        assert_eq!(ids(&out), vec![3, 1]);
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        let records = vec![person(1, "Bob", "Zed")];
        let out = transform(&records, &view(SortField::None, SortOrder::None, "qq"));
        assert!(out.is_empty());
    }

    #[test]
    fn whitespace_search_is_literal() {
        let records = vec![person(1, "Mary Ann", "Fox"), person(2, "Bob", "Zed")];
        let out = transform(&records, &view(SortField::None, SortOrder::None, " "));
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn empty_roster() {
        let out = transform(&[], &view(SortField::LastName, SortOrder::Descending, "x"));
        assert!(out.is_empty());
    }

    fn roster_strategy() -> impl Strategy<Value = Vec<Person>> {
        // small alphabet so duplicate names are common
        prop::collection::vec(("[ABab]{1,2}", "[CDcd]{1,2}"), 0..24).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, (first, last))| Person::new(i as u64, first, last))
                .collect()
        })
    }

    fn field_strategy() -> impl Strategy<Value = SortField> {
        prop_oneof![Just(SortField::FirstName), Just(SortField::LastName)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_ascending_is_stable(records in roster_strategy(), field in field_strategy()) {
            let out = transform(&records, &view(field, SortOrder::Ascending, ""));
            prop_assert_eq!(out.len(), records.len());
            for pair in out.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.sort_key(field) <= b.sort_key(field));
                if a.sort_key(field) == b.sort_key(field) {
                    // ids are roster positions, so equal keys keep ascending ids
                    prop_assert!(a.id < b.id);
                }
            }
        }

        #[test]
        fn prop_descending_mirrors_ascending(records in roster_strategy(), field in field_strategy()) {
            let asc = ids(&transform(&records, &view(field, SortOrder::Ascending, "")));
            let mut desc = ids(&transform(&records, &view(field, SortOrder::Descending, "")));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn prop_default_view_is_identity(records in roster_strategy()) {
            let out = transform(&records, &ViewParameters::default());
            prop_assert_eq!(ids(&out), records.iter().map(|p| p.id).collect::<Vec<_>>());
        }

        #[test]
        fn prop_search_results_contain_text(records in roster_strategy(), needle in "[abcd]{1,2}") {
            let out = transform(&records, &view(SortField::None, SortOrder::None, &needle));
            for p in &out {
                prop_assert!(
                    p.first_name.to_lowercase().contains(&needle)
                        || p.last_name.to_lowercase().contains(&needle)
                );
            }
            let expected = records
                .iter()
                .filter(|p| matches_search(p, &needle))
                .count();
            prop_assert_eq!(out.len(), expected);
            // survivors keep roster order
            for pair in out.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
