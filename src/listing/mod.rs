//! Client-side search and pagination for the listing endpoints.
//!
//! The travel API returns bookings and travel packages as whole
//! collections with no native search or pagination, so the gateway fetches
//! everything once, filters here, and slices the requested page. The user
//! listing is the exception (the API paginates it) and never goes through
//! this module.

use crate::models::{Booking, TravelPackage};

/// One page of a filtered collection. `total_count` is always the filtered
/// length, not the raw collection length.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

/// Slice `[skip, skip + take)`, clamped to the collection. A `skip` past
/// the end yields an empty page, never an error.
pub fn paginate<T: Clone>(items: &[T], skip: usize, take: usize) -> Vec<T> {
    if skip >= items.len() {
        return Vec::new();
    }
    let end = skip.saturating_add(take).min(items.len());
    items[skip..end].to_vec()
}

/// A booking matches when the whole term appears, case-insensitively, in
/// at least one of: full name, email, CPF, phone, boarding location.
pub fn booking_matches(booking: &Booking, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        booking.full_name.as_str(),
        booking.email.as_str(),
        booking.cpf.as_str(),
        booking.phone.as_str(),
        booking.boarding_location.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

/// A package matches when every whitespace-separated token of the term
/// appears in at least one of: name, description, travel month.
pub fn package_matches(package: &TravelPackage, term: &str) -> bool {
    let term = term.to_lowercase();
    term.split_whitespace().all(|token| {
        package.name.to_lowercase().contains(token)
            || package.description.to_lowercase().contains(token)
            || package.travel_month.to_lowercase().contains(token)
    })
}

/// Blank search terms disable filtering and return the collection as-is.
pub fn filter_bookings(all: Vec<Booking>, search: &str) -> Vec<Booking> {
    if search.trim().is_empty() {
        return all;
    }
    all.into_iter().filter(|b| booking_matches(b, search)).collect()
}

/// Search filter and month filter compose with logical AND. The month
/// filter is a case-insensitive substring match against `travelMonth`.
pub fn filter_packages(
    all: Vec<TravelPackage>,
    search: &str,
    month: Option<&str>,
) -> Vec<TravelPackage> {
    let mut filtered = if search.trim().is_empty() {
        all
    } else {
        all.into_iter().filter(|p| package_matches(p, search)).collect()
    };

    if let Some(month) = month.filter(|m| !m.trim().is_empty()) {
        let month = month.to_lowercase();
        filtered.retain(|p| p.travel_month.to_lowercase().contains(&month));
    }

    filtered
}

pub fn page_of<T: Clone>(filtered: Vec<T>, skip: usize, take: usize) -> Page<T> {
    let total_count = filtered.len();
    Page {
        items: paginate(&filtered, skip, take),
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(name: &str, email: &str, location: &str) -> Booking {
        Booking {
            id: format!("b-{name}"),
            travel_package_id: "pkg-1".to_string(),
            user_id: None,
            full_name: name.to_string(),
            rg: "12.345.678-9".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: "1990-05-12".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: email.to_string(),
            boarding_location: location.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn package(name: &str, description: &str, month: &str) -> TravelPackage {
        TravelPackage {
            id: format!("p-{name}"),
            name: name.to_string(),
            price: 100.0,
            description: description.to_string(),
            pdf_url: "https://example.com/roteiro.pdf".to_string(),
            max_people: 40,
            boarding_locations: vec!["Terminal Tietê".to_string()],
            travel_month: month.to_string(),
            travel_date: None,
            return_date: None,
            travel_time: None,
            created_at: None,
            updated_at: None,
            image_url: None,
        }
    }

    #[test]
    fn empty_term_returns_collection_unchanged() {
        let all = vec![booking("Ana", "ana@x.com", "Tietê"), booking("Bia", "bia@x.com", "Lapa")];
        let filtered = filter_bookings(all.clone(), "   ");
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn filtered_bookings_all_match_some_field() {
        let all = vec![
            booking("Ana Souza", "ana@x.com", "Tietê"),
            booking("Bia Lima", "bia@x.com", "Lapa"),
            booking("Carlos", "carlos@x.com", "lapa sul"),
        ];
        let filtered = filter_bookings(all, "LAPA");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|b| booking_matches(b, "LAPA")));
    }

    #[test]
    fn package_search_requires_every_token() {
        let p = package("Praia de Maresias", "Fim de semana na praia", "Janeiro/2025");
        assert!(package_matches(&p, "praia janeiro"));
        assert!(package_matches(&p, "semana maresias"));
        assert!(!package_matches(&p, "praia fevereiro"));
    }

    #[test]
    fn month_and_search_filters_compose_with_and() {
        let all = vec![
            package("Praia de Maresias", "desc desc desc", "Janeiro/2025"),
            package("Praia do Rosa", "desc desc desc", "Fevereiro/2025"),
            package("Serra Gaúcha", "desc desc desc", "Janeiro/2025"),
        ];
        let filtered = filter_packages(all, "praia", Some("janeiro"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Praia de Maresias");
    }

    #[test]
    fn pagination_length_law_holds() {
        let items: Vec<i32> = (0..25).collect();
        for (skip, take) in [(0usize, 10usize), (20, 10), (25, 10), (30, 5), (0, 0)] {
            let page = paginate(&items, skip, take);
            let expected = take.min(items.len().saturating_sub(skip));
            assert_eq!(page.len(), expected, "skip={skip} take={take}");
        }
    }

    #[test]
    fn skip_past_end_yields_empty_page() {
        let items = vec![1, 2, 3];
        assert!(paginate(&items, 10, 10).is_empty());
    }

    #[test]
    fn praia_search_paginates_ten_then_one() {
        // 25 packages, "Praia" in 10 of the names
        let mut all = Vec::new();
        for i in 0..10 {
            all.push(package(&format!("Praia {i}"), "desc desc desc", "Janeiro/2025"));
        }
        for i in 0..15 {
            all.push(package(&format!("Serra {i}"), "desc desc desc", "Janeiro/2025"));
        }
        // one extra match so page 1 has a remainder
        all.push(package("Praia Extra", "desc desc desc", "Março/2025"));

        let filtered = filter_packages(all, "praia", None);
        assert_eq!(filtered.len(), 11);

        let first = page_of(filtered.clone(), 0, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_count, 11);

        let second = page_of(filtered, 10, 10);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.total_count, 11);
    }

    #[test]
    fn total_count_reflects_filtered_length() {
        let all = vec![
            booking("Ana", "ana@x.com", "Tietê"),
            booking("Bia", "bia@x.com", "Lapa"),
        ];
        let page = page_of(filter_bookings(all, "ana"), 0, 10);
        assert_eq!(page.total_count, 1);
    }
}
