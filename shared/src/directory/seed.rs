//! Demo farmers present at startup

use rust_decimal::Decimal;

use crate::models::{average_rating, Farmer, Review};

/// The two farmers every fresh directory starts with.
///
/// Ratings are derived from the seed reviews.
pub fn seed_farmers() -> Vec<Farmer> {
    vec![
        seed_farmer(SeedFarmer {
            id: 1,
            name: "Green Valley Farms",
            location: "Downtown",
            phone: "+91 9876543210",
            description: "Organic vegetables and fruits grown with love.",
            produce: &["Vegetables", "Fruits"],
            delivery_radius_km: 10,
            reviews: vec![
                Review::new("Amit", "Fresh and tasty!", 5),
                Review::new("Priya", "Quick delivery.", 4),
            ],
            availability: "Mon-Sat",
            calendar: "Available all week",
        }),
        seed_farmer(SeedFarmer {
            id: 2,
            name: "Sunrise Orchards",
            location: "Suburbs",
            phone: "+91 9123456780",
            description: "Seasonal fruits and homemade jams.",
            produce: &["Fruits", "Herbs"],
            delivery_radius_km: 15,
            reviews: vec![Review::new("Rahul", "Loved the mangoes!", 5)],
            availability: "Tue-Sun",
            calendar: "Closed Mondays",
        }),
    ]
}

struct SeedFarmer {
    id: u32,
    name: &'static str,
    location: &'static str,
    phone: &'static str,
    description: &'static str,
    produce: &'static [&'static str],
    delivery_radius_km: u32,
    reviews: Vec<Review>,
    availability: &'static str,
    calendar: &'static str,
}

fn seed_farmer(seed: SeedFarmer) -> Farmer {
    Farmer {
        id: seed.id,
        name: seed.name.to_string(),
        location: seed.location.to_string(),
        phone: seed.phone.to_string(),
        description: seed.description.to_string(),
        produce: seed.produce.iter().map(|p| p.to_string()).collect(),
        delivery_radius: Decimal::from(seed.delivery_radius_km),
        rating: average_rating(&seed.reviews),
        reviews: seed.reviews,
        availability: seed.availability.to_string(),
        calendar: seed.calendar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ratings_match_reviews() {
        let farmers = seed_farmers();
        assert_eq!(farmers[0].rating, Decimal::new(45, 1));
        assert_eq!(farmers[1].rating, Decimal::from(5));
    }

    #[test]
    fn test_seed_schedules() {
        let farmers = seed_farmers();
        assert_eq!(farmers[1].availability, "Tue-Sun");
        assert_eq!(farmers[1].calendar, "Closed Mondays");
        assert_eq!(farmers[0].produce, vec!["Vegetables", "Fruits"]);
    }
}
