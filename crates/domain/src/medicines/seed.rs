use chrono::{DateTime, Duration, Utc};

use super::{DispensingType, Medicine, MedicineCategory};

struct Entry {
    id: &'static str,
    name: &'static str,
    category: MedicineCategory,
    dispensing: DispensingType,
    description: &'static str,
    price: f64,
    dosage: &'static str,
    side_effects: &'static [&'static str],
    active_ingredients: &'static [&'static str],
    manufacturer: &'static str,
    shelf_life_days: i64,
    stock: u32,
    min_age: Option<u32>,
    warnings: &'static [&'static str],
    usage: &'static str,
}

use DispensingType::{OverTheCounter as Otc, Prescription as Rx};
use MedicineCategory as C;

const ENTRIES: [Entry; 14] = [
    Entry {
        id: "paracetamol-500",
        name: "Paracetamol 500mg",
        category: C::PainRelief,
        dispensing: Otc,
        description: "Relieves mild to moderate pain and reduces fever.",
        price: 4.99,
        dosage: "1-2 tablets every 4-6 hours, max 8 per day",
        side_effects: &["Nausea", "Rash"],
        active_ingredients: &["Paracetamol"],
        manufacturer: "Medline Pharma",
        shelf_life_days: 720,
        stock: 200,
        min_age: Some(12),
        warnings: &["Do not combine with other paracetamol products"],
        usage: "Swallow whole with water",
    },
    Entry {
        id: "amoxicillin-500",
        name: "Amoxicillin 500mg",
        category: C::Antibiotics,
        dispensing: Rx,
        description: "Broad-spectrum penicillin antibiotic for bacterial infections.",
        price: 12.50,
        dosage: "1 capsule three times daily",
        side_effects: &["Diarrhoea", "Nausea", "Skin rash"],
        active_ingredients: &["Amoxicillin trihydrate"],
        manufacturer: "Helix Biotech",
        shelf_life_days: 540,
        stock: 80,
        min_age: None,
        warnings: &["Tell your doctor about any penicillin allergy"],
        usage: "Complete the full course even if you feel better",
    },
    Entry {
        id: "atorvastatin-20",
        name: "Atorvastatin 20mg",
        category: C::Cardiovascular,
        dispensing: Rx,
        description: "Lowers LDL cholesterol and reduces cardiovascular risk.",
        price: 18.75,
        dosage: "1 tablet once daily",
        side_effects: &["Muscle pain", "Headache"],
        active_ingredients: &["Atorvastatin calcium"],
        manufacturer: "CardioGen Labs",
        shelf_life_days: 900,
        stock: 60,
        min_age: Some(18),
        warnings: &["Avoid large amounts of grapefruit juice"],
        usage: "Take at the same time each day",
    },
    Entry {
        id: "metformin-500",
        name: "Metformin 500mg",
        category: C::Diabetes,
        dispensing: Rx,
        description: "First-line oral treatment for type 2 diabetes.",
        price: 9.99,
        dosage: "1 tablet twice daily with meals",
        side_effects: &["Stomach upset", "Metallic taste"],
        active_ingredients: &["Metformin hydrochloride"],
        manufacturer: "Glyco Pharmaceuticals",
        shelf_life_days: 800,
        stock: 120,
        min_age: Some(10),
        warnings: &["Stop before contrast imaging procedures"],
        usage: "Take with food to reduce stomach upset",
    },
    Entry {
        id: "salbutamol-inhaler",
        name: "Salbutamol Inhaler",
        category: C::Respiratory,
        dispensing: Rx,
        description: "Fast relief of wheezing and breathlessness in asthma.",
        price: 15.00,
        dosage: "1-2 puffs as needed",
        side_effects: &["Tremor", "Palpitations"],
        active_ingredients: &["Salbutamol sulfate"],
        manufacturer: "AirWay Medical",
        shelf_life_days: 600,
        stock: 40,
        min_age: Some(4),
        warnings: &["Seek help if you need it more than usual"],
        usage: "Shake well before each puff",
    },
    Entry {
        id: "omeprazole-20",
        name: "Omeprazole 20mg",
        category: C::Digestive,
        dispensing: Otc,
        description: "Reduces stomach acid for heartburn and indigestion relief.",
        price: 7.49,
        dosage: "1 capsule daily before breakfast",
        side_effects: &["Headache", "Bloating"],
        active_ingredients: &["Omeprazole"],
        manufacturer: "Medline Pharma",
        shelf_life_days: 730,
        stock: 150,
        min_age: Some(18),
        warnings: &["Do not use for more than 14 days without advice"],
        usage: "Swallow whole, do not crush",
    },
    Entry {
        id: "vitamin-d3-1000",
        name: "Vitamin D3 1000 IU",
        category: C::VitaminsSupplements,
        dispensing: Otc,
        description: "Supports bone health and immune function.",
        price: 8.99,
        dosage: "1 softgel daily",
        side_effects: &[],
        active_ingredients: &["Cholecalciferol"],
        manufacturer: "SunWell Nutrition",
        shelf_life_days: 1000,
        stock: 300,
        min_age: None,
        warnings: &[],
        usage: "Take with a meal",
    },
    Entry {
        id: "hydrocortisone-cream-1",
        name: "Hydrocortisone Cream 1%",
        category: C::SkinCare,
        dispensing: Otc,
        description: "Mild steroid cream for eczema, rashes and insect bites.",
        price: 6.25,
        dosage: "Apply thinly 1-2 times daily",
        side_effects: &["Skin thinning with prolonged use"],
        active_ingredients: &["Hydrocortisone"],
        manufacturer: "DermaCare",
        shelf_life_days: 640,
        stock: 90,
        min_age: Some(10),
        warnings: &["Not for use on the face or broken skin"],
        usage: "Wash hands after applying",
    },
    Entry {
        id: "cold-flu-relief",
        name: "Cold & Flu Relief",
        category: C::ColdFlu,
        dispensing: Otc,
        description: "Multi-symptom capsules for colds and flu.",
        price: 5.99,
        dosage: "2 capsules every 4 hours, max 8 per day",
        side_effects: &["Drowsiness", "Dry mouth"],
        active_ingredients: &["Paracetamol", "Phenylephrine"],
        manufacturer: "Medline Pharma",
        shelf_life_days: 500,
        stock: 0,
        min_age: Some(16),
        warnings: &["Contains paracetamol"],
        usage: "Do not exceed the stated dose",
    },
    Entry {
        id: "cetirizine-10",
        name: "Cetirizine 10mg",
        category: C::Allergy,
        dispensing: Otc,
        description: "Non-drowsy antihistamine for hay fever relief.",
        price: 4.49,
        dosage: "1 tablet daily",
        side_effects: &["Fatigue", "Dry mouth"],
        active_ingredients: &["Cetirizine hydrochloride"],
        manufacturer: "ClearAir Health",
        shelf_life_days: 900,
        stock: 180,
        min_age: Some(6),
        warnings: &["May impair driving in some people"],
        usage: "Take in the evening if it makes you drowsy",
    },
    Entry {
        id: "sertraline-50",
        name: "Sertraline 50mg",
        category: C::MentalHealth,
        dispensing: Rx,
        description: "SSRI antidepressant for depression and anxiety disorders.",
        price: 14.20,
        dosage: "1 tablet once daily",
        side_effects: &["Insomnia", "Nausea", "Dizziness"],
        active_ingredients: &["Sertraline hydrochloride"],
        manufacturer: "NeuroPath Pharma",
        shelf_life_days: 760,
        stock: 50,
        min_age: Some(18),
        warnings: &["Do not stop abruptly"],
        usage: "Take at the same time every day",
    },
    Entry {
        id: "folic-acid-400",
        name: "Folic Acid 400mcg",
        category: C::WomensHealth,
        dispensing: Otc,
        description: "Supplement recommended before and during pregnancy.",
        price: 3.99,
        dosage: "1 tablet daily",
        side_effects: &[],
        active_ingredients: &["Folic acid"],
        manufacturer: "SunWell Nutrition",
        shelf_life_days: 1000,
        stock: 220,
        min_age: None,
        warnings: &[],
        usage: "Start before conception where possible",
    },
    Entry {
        id: "lubricating-eye-drops",
        name: "Lubricating Eye Drops",
        category: C::EyeCare,
        dispensing: Otc,
        description: "Soothes dry and irritated eyes.",
        price: 5.49,
        dosage: "1-2 drops per eye as needed",
        side_effects: &["Brief blurred vision"],
        active_ingredients: &["Hypromellose"],
        manufacturer: "OptiClear",
        shelf_life_days: 450,
        stock: 75,
        min_age: None,
        warnings: &["Discard 28 days after opening"],
        usage: "Do not touch the dropper tip",
    },
    Entry {
        id: "antiseptic-solution",
        name: "Antiseptic Solution",
        category: C::FirstAid,
        dispensing: Otc,
        description: "Cleans minor cuts, grazes and burns.",
        price: 3.49,
        dosage: "Dilute as directed",
        side_effects: &["Skin irritation"],
        active_ingredients: &["Chlorhexidine gluconate"],
        manufacturer: "SafeGuard Health",
        shelf_life_days: 1100,
        stock: 140,
        min_age: None,
        warnings: &["For external use only"],
        usage: "Apply with clean cotton wool",
    },
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Fixed reference catalog, one medicine per category, stamped with `now`.
pub fn reference_medicines(now: DateTime<Utc>) -> Vec<Medicine> {
    ENTRIES
        .iter()
        .map(|entry| Medicine {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            category: entry.category,
            dispensing: entry.dispensing,
            description: entry.description.to_string(),
            price: entry.price,
            dosage: entry.dosage.to_string(),
            side_effects: strings(entry.side_effects),
            active_ingredients: strings(entry.active_ingredients),
            manufacturer: entry.manufacturer.to_string(),
            expiry_date: now.date_naive() + Duration::days(entry.shelf_life_days),
            stock: entry.stock,
            image_url: None,
            prescription_required: entry.dispensing == Rx,
            min_age: entry.min_age,
            max_age: None,
            warnings: strings(entry.warnings),
            usage: entry.usage.to_string(),
            created_at: now,
        })
        .collect()
}
