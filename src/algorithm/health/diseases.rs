//! Disease parameter table
//!
//! Annual baseline incidence (`p0`) and the relative risk reduction (`rrr`)
//! associated with meeting ~150 minutes of moderate activity per week, for
//! Australian adults, plus the burden terms used to convert prevented cases
//! into QALYs and DALYs. The table is fixed at compile time.

use crate::models::disease::DiseaseParameter;

/// All diseases, in report order
pub static DISEASES: [DiseaseParameter; 8] = [
    DiseaseParameter::new("t2d", "Type 2 Diabetes", 0.0040, 0.30).with_burden(0.049, 10.0, 0.01, 8.0),
    DiseaseParameter::new("chd", "Coronary Heart Disease", 0.0035, 0.25).with_burden(0.073, 1.0, 0.12, 10.0),
    DiseaseParameter::new("stroke", "Cerebrovascular disease (Stroke)", 0.0013, 0.20)
        .with_burden(0.070, 5.0, 0.20, 8.0),
    DiseaseParameter::new("hipfx", "Hip fracture", 0.0050, 0.15).with_burden(0.128, 1.0, 0.22, 5.0),
    // ~78 per 100,000 persons
    DiseaseParameter::new("breast", "Breast Cancer", 0.00078, 0.20).with_burden(0.288, 1.0, 0.10, 15.0),
    // ~57 per 100,000; HR ~0.71 at higher recreational activity
    DiseaseParameter::new("crc", "Colorectal Cancer", 0.00057, 0.29).with_burden(0.288, 1.0, 0.35, 12.0),
    // ~16.8 per 1,000 person-years among those 65+
    DiseaseParameter::new("dementia", "Dementia (65+)", 0.0168, 0.20).with_burden(0.377, 5.0, 0.30, 4.0),
    // 12-month prevalence used as a proxy for incidence
    DiseaseParameter::new("depress", "Depression (Depressive Episode)", 0.049, 0.25)
        .with_burden(0.145, 0.5, 0.0, 0.0),
];

/// Every disease in the table
#[must_use]
pub fn all_diseases() -> &'static [DiseaseParameter] {
    &DISEASES
}

/// Look up a disease by key
#[must_use]
pub fn disease_by_key(key: &str) -> Option<&'static DiseaseParameter> {
    DISEASES.iter().find(|d| d.key == key)
}
