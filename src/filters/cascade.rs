use super::state::FilterItem;

/// Ticket dispenser for dependent-dropdown fetches.
///
/// Every issued request gets a fresh ticket; only the response holding the
/// most recently issued ticket may write its option list back. Responses
/// that arrive after a newer request was issued are dropped, so a slow
/// city-list fetch for a country the visitor has already moved away from
/// can never overwrite the current options.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Keep a child selection only if its id is present in the freshly fetched
/// option list; a stale selection (city from another country, specialty
/// from another category) is cleared.
pub fn reconcile_selection(
    selected: Option<FilterItem>,
    options: &[FilterItem],
) -> Option<FilterItem> {
    let selected = selected?;
    options
        .iter()
        .any(|option| option.id == selected.id)
        .then_some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> FilterItem {
        FilterItem {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let mut seq = FetchSequencer::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_arrival_keeps_latest_request() {
        // Select country A, then country B; A's response arrives last.
        let mut seq = FetchSequencer::default();
        let ticket_a = seq.begin();
        let ticket_b = seq.begin();

        // B's response lands first and is applied.
        assert!(seq.is_current(ticket_b));
        // A's late response must be discarded.
        assert!(!seq.is_current(ticket_a));
    }

    #[test]
    fn test_selection_kept_when_present_in_new_options() {
        let options = vec![item(1, "Cairo"), item(2, "Alexandria")];
        let kept = reconcile_selection(Some(item(2, "Alexandria")), &options);
        assert_eq!(kept, Some(item(2, "Alexandria")));
    }

    #[test]
    fn test_selection_cleared_when_absent_from_new_options() {
        let options = vec![item(1, "Riyadh"), item(2, "Jeddah")];
        assert_eq!(reconcile_selection(Some(item(7, "Cairo")), &options), None);
    }

    #[test]
    fn test_no_selection_stays_empty() {
        assert_eq!(reconcile_selection(None, &[item(1, "Cairo")]), None);
    }
}
