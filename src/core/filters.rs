use crate::models::{UserProfile, Venue};

/// Check if a venue's cuisine text matches any of the profile's cuisine terms
///
/// Matching is a case-insensitive substring check on the venue side; OSM
/// cuisine values are free text like "taiwanese;noodle".
#[inline]
pub fn matches_cuisine(profile: &UserProfile, venue: &Venue) -> bool {
    let cuisine = venue.cuisine.to_lowercase();
    profile
        .cuisines
        .iter()
        .any(|term| cuisine.contains(term.as_str()))
}

/// Check if a venue carries a usable position
#[inline]
pub fn has_coordinates(venue: &Venue) -> bool {
    venue.coordinate().is_some()
}

/// Narrow candidates to the profile's cuisines
///
/// A profile without cuisine preferences keeps the whole list. The result
/// may be empty; the ranking engine applies the fallback rule in that case.
pub fn filter_by_cuisine(profile: &UserProfile, venues: &[Venue]) -> Vec<Venue> {
    if !profile.has_cuisines() {
        return venues.to_vec();
    }

    venues
        .iter()
        .filter(|venue| matches_cuisine(profile, venue))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_venue(id: i64, cuisine: &str) -> Venue {
        Venue {
            osm_id: id,
            name: format!("Venue {}", id),
            category: "restaurant".to_string(),
            cuisine: cuisine.to_string(),
            latitude: Some(25.0173),
            longitude: Some(121.5397),
            tags: HashMap::new(),
        }
    }

    fn create_profile(cuisines: &[&str]) -> UserProfile {
        UserProfile {
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            health_goals: vec![],
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_matches_cuisine_is_case_insensitive_substring() {
        let profile = create_profile(&["taiwanese"]);
        let venue = create_venue(1, "Taiwanese;noodle");

        assert!(matches_cuisine(&profile, &venue));
    }

    #[test]
    fn test_matches_cuisine_rejects_unrelated_text() {
        let profile = create_profile(&["taiwanese"]);
        let venue = create_venue(1, "italian");

        assert!(!matches_cuisine(&profile, &venue));
    }

    #[test]
    fn test_filter_keeps_all_without_cuisine_preference() {
        let profile = create_profile(&[]);
        let venues = vec![create_venue(1, "italian"), create_venue(2, "")];

        let filtered = filter_by_cuisine(&profile, &venues);

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_narrows_to_matching_cuisines() {
        let profile = create_profile(&["japanese"]);
        let venues = vec![
            create_venue(1, "japanese"),
            create_venue(2, "italian"),
            create_venue(3, "japanese;sushi"),
        ];

        let filtered = filter_by_cuisine(&profile, &venues);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|v| v.cuisine.contains("japanese")));
    }

    #[test]
    fn test_filter_may_come_up_empty() {
        let profile = create_profile(&["korean"]);
        let venues = vec![create_venue(1, "italian")];

        let filtered = filter_by_cuisine(&profile, &venues);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_venue_without_position_fails_coordinate_check() {
        let mut venue = create_venue(1, "thai");
        venue.longitude = None;

        assert!(!has_coordinates(&venue));
    }
}
