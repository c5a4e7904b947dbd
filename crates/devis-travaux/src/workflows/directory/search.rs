use std::cmp::Ordering;

use super::domain::{
    Broker, BrokerPage, BrokerQuery, BrokerSortField, Professional, SortOrder, BROKERS_PER_PAGE,
};

/// Professionals whose département or region contains the query, ignoring case.
pub fn search_professionals(professionals: &[Professional], query: &str) -> Vec<Professional> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return professionals.to_vec();
    }

    professionals
        .iter()
        .filter(|pro| {
            pro.department.to_lowercase().contains(&needle)
                || pro.region.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Filter, sort and paginate brokers.
pub fn search_brokers(brokers: &[Broker], query: &BrokerQuery) -> BrokerPage {
    let terms: Vec<String> = query
        .query
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let mut matches: Vec<&Broker> = brokers
        .iter()
        .filter(|broker| terms.is_empty() || address_matches(broker, &terms))
        .collect();

    matches.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total_results = matches.len();
    let total_pages = total_results.div_ceil(BROKERS_PER_PAGE);
    let page = query.page.unwrap_or(1).max(1);
    let brokers = matches
        .into_iter()
        .skip((page - 1).saturating_mul(BROKERS_PER_PAGE))
        .take(BROKERS_PER_PAGE)
        .cloned()
        .collect();

    BrokerPage {
        brokers,
        page,
        total_pages,
        total_results,
    }
}

fn address_matches(broker: &Broker, terms: &[String]) -> bool {
    let Some(address) = &broker.address else {
        return false;
    };

    let fields = [
        address.city.to_lowercase(),
        address.postal_code.to_lowercase(),
        address.street_name.to_lowercase(),
    ];

    terms
        .iter()
        .any(|term| fields.iter().any(|field| field.contains(term.as_str())))
}

fn compare(a: &Broker, b: &Broker, field: BrokerSortField) -> Ordering {
    match field {
        BrokerSortField::Experience => a.experience_years.cmp(&b.experience_years),
        BrokerSortField::Name => a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()),
    }
}
