use crate::data_models::{SearchCriteria, SearchResult};

/// In-memory listing store behind `/api/search`.
pub struct ListingCatalog {
    listings: Vec<SearchResult>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<SearchResult>) -> Self {
        Self { listings }
    }

    /// Catalog seeded with the launch listings.
    pub fn seeded() -> Self {
        Self::new(vec![
            SearchResult::new(
                1,
                "Pawfect Groomers - Central",
                "Grooming",
                "Central (District 1-2)",
                "From $35",
                "Award-winning groomers with gentle handling.",
            ),
            SearchResult::new(
                2,
                "Happy Paws Sitters",
                "Sitter",
                "East (District 14-18)",
                "From $25/day",
                "Experienced sitters for all small animals.",
            ),
            SearchResult::new(
                3,
                "Lux Pet Hotel",
                "Pet Hotel",
                "West (District 5-8, 22-23)",
                "From $40/night",
                "Round-the-clock care and cuddles.",
            ),
        ])
    }

    /// Listings matching `criteria`, in catalog order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<SearchResult> {
        self.listings
            .iter()
            .filter(|listing| matches(listing, criteria))
            .cloned()
            .collect()
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

// pet type and date range are accepted but don't narrow results yet.
fn matches(listing: &SearchResult, criteria: &SearchCriteria) -> bool {
    if !criteria.location.is_empty() && listing.location != criteria.location {
        return false;
    }
    if !criteria.pet_service.is_empty() && listing.service != criteria.pet_service {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_returns_everything() {
        let catalog = ListingCatalog::seeded();
        let results = catalog.search(&SearchCriteria::default());
        let ids: Vec<Option<u64>> = results.iter().map(|r| r.id.as_u64()).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_filters_by_location_and_service() {
        let catalog = ListingCatalog::seeded();

        let by_location = catalog.search(&SearchCriteria::new("", "East (District 14-18)", "", ""));
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].title, "Happy Paws Sitters");

        let by_service = catalog.search(&SearchCriteria::new("", "", "Pet Hotel", ""));
        assert_eq!(by_service.len(), 1);
        assert_eq!(by_service[0].id, 3);

        let mismatch = catalog.search(&SearchCriteria::new("", "Central (District 1-2)", "Sitter", ""));
        assert!(mismatch.is_empty());
    }

    #[test]
    fn test_pet_type_and_dates_do_not_filter() {
        let catalog = ListingCatalog::seeded();
        let results = catalog.search(&SearchCriteria::new(
            "Iguanas",
            "",
            "",
            "2030-01-01 to 2030-01-05",
        ));
        assert_eq!(results.len(), 3);
    }
}
