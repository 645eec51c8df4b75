use super::{BedAvailability, BedType, Hospital};

/// Fixed reference hospitals. Ids are stable so concurrent seeders collide on
/// insert instead of duplicating the set.
pub fn reference_hospitals() -> Vec<Hospital> {
    [
        (
            "city-general-hospital",
            "City General Hospital",
            "Downtown",
            "+1-555-0101",
            "123 Main Street, Downtown",
            BedAvailability::new(5, 25, 8),
            4.7,
            "1.2 km",
            true,
        ),
        (
            "metro-medical-center",
            "Metro Medical Center",
            "Midtown",
            "+1-555-0102",
            "456 Health Ave, Midtown",
            BedAvailability::new(12, 45, 15),
            4.8,
            "2.1 km",
            true,
        ),
        (
            "st-marys-hospital",
            "St. Mary's Hospital",
            "Westside",
            "+1-555-0103",
            "789 Care Blvd, Westside",
            BedAvailability::new(8, 30, 10),
            4.6,
            "3.5 km",
            true,
        ),
        (
            "riverside-emergency-hospital",
            "Riverside Emergency Hospital",
            "Eastside",
            "+1-555-0104",
            "321 River Road, Eastside",
            BedAvailability::new(3, 18, 5),
            4.4,
            "4.2 km",
            true,
        ),
        (
            "north-hills-medical",
            "North Hills Medical",
            "Northside",
            "+1-555-0105",
            "654 Hill Top Dr, Northside",
            BedAvailability::new(15, 60, 20),
            4.9,
            "5.8 km",
            true,
        ),
        (
            "sunset-community-hospital",
            "Sunset Community Hospital",
            "Southside",
            "+1-555-0106",
            "987 Sunset Blvd, Southside",
            BedAvailability::new(0, 12, 3),
            4.3,
            "6.1 km",
            false,
        ),
        (
            "central-heart-institute",
            "Central Heart Institute",
            "Medical District",
            "+1-555-0107",
            "147 Medical Plaza, Medical District",
            BedAvailability::new(20, 35, 25),
            4.8,
            "3.2 km",
            true,
        ),
    ]
    .into_iter()
    .map(
        |(id, name, location, phone, address, beds, rating, distance, emergency)| Hospital {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            bed_types: BedType::ALL.to_vec(),
            available_beds: beds,
            rating,
            distance: distance.to_string(),
            emergency,
        },
    )
    .collect()
}
