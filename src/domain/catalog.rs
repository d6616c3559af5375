//! Disease catalog shown on every dashboard.
//!
//! Fixed at compile time; order is significant and preserved verbatim.

/// Condition names, in display order.
pub const DISEASES: &[&str] = &[
    "Diabetes", "Hypertension", "Asthma", "Tuberculosis", "Malaria", "Dengue", "COVID-19",
    "Influenza", "Pneumonia", "Bronchitis", "Hepatitis A", "Hepatitis B", "Hepatitis C",
    "Typhoid", "Cholera", "Anemia", "Migraine", "Epilepsy", "Arthritis", "Osteoporosis",
    "Heart Disease", "Stroke", "Kidney Stones", "UTI", "Gallstones", "Peptic Ulcer",
    "GERD", "IBS", "Crohn’s Disease", "Ulcerative Colitis", "Eczema", "Psoriasis", "Acne",
    "Conjunctivitis", "Cataract", "Glaucoma", "Sinusitis", "Tonsillitis",
    "Thyroid Disorder", "PCOS", "Endometriosis", "Depression", "Anxiety",
    "Bipolar Disorder", "Schizophrenia", "ADHD", "Autism", "Alzheimer’s", "Parkinson’s",
    "Leukemia", "Lymphoma", "Breast Cancer", "Lung Cancer", "Colon Cancer",
    "Cervical Cancer", "Ovarian Cancer", "Brain Tumor", "HIV/AIDS", "Rabies", "Tetanus",
    "Measles", "Mumps", "Rubella", "Chickenpox", "Polio", "Leprosy", "Sickle Cell Anemia",
    "Thalassemia", "Gout", "Rheumatoid Arthritis", "Obesity", "Sleep Apnea",
    "Varicose Veins", "Hemorrhoids", "Pancreatitis", "Appendicitis", "Hernia", "Back Pain",
    "Sciatica", "Frozen Shoulder", "Carpal Tunnel Syndrome",
];

/// Ordered, read-only view of the catalog.
pub fn list() -> &'static [&'static str] {
    DISEASES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(list().len(), 81);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = list();
        assert_eq!(catalog.first(), Some(&"Diabetes"));
        assert_eq!(catalog[6], "COVID-19");
        assert_eq!(catalog.last(), Some(&"Carpal Tunnel Syndrome"));
    }

    #[test]
    fn test_catalog_entries_unique_and_non_empty() {
        let unique: HashSet<_> = list().iter().collect();
        assert_eq!(unique.len(), list().len());
        assert!(list().iter().all(|name| !name.trim().is_empty()));
    }
}
