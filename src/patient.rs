// Hardcoded emergency record for the simulated patient. Display strings are
// German, matching the rest of the mock-up's UI text.

#[derive(Debug, Clone, Copy)]
pub struct Medication {
    pub name: &'static str,
    pub schedule: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PatientRecord {
    pub full_name: &'static str,
    pub short_name: &'static str,
    pub triage: &'static str,
    pub allergies: &'static str,
    pub blood_group: &'static str,
    pub medication: &'static [Medication],
    pub diagnoses: &'static [&'static str],
}

pub const PATIENT: PatientRecord = PatientRecord {
    full_name: "Max Mustermann",
    short_name: "M. Mustermann",
    triage: "KRITISCH",
    allergies: "Penicillin, Nüsse (Anaphylaxie)",
    blood_group: "A Rhesus-",
    medication: &[
        Medication { name: "Bisoprolol", schedule: "5mg (Morgens)" },
        Medication { name: "Insulin", schedule: "Bei Bedarf" },
    ],
    diagnoses: &["Hypertonie", "Diabetes Typ 2"],
};
