//! Built-in reference knowledge base: common adult psychiatric diagnoses,
//! their first-line treatments, and psychotropic medication references.
//!
//! Content is illustrative reference data, not a validated clinical source.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use mentis_core::models::knowledge::{
    DiagnosisDefinition, DiagnosisGuidance, EvidenceLevel, MedicationReference,
    TreatmentDefinition,
};

use super::KnowledgeBase;

pub const MAJOR_DEPRESSIVE_DISORDER: &str = "Major Depressive Disorder";
pub const GENERALIZED_ANXIETY_DISORDER: &str = "Generalized Anxiety Disorder";
pub const POSTTRAUMATIC_STRESS_DISORDER: &str = "Posttraumatic Stress Disorder";
pub const BIPOLAR_I_DISORDER: &str = "Bipolar I Disorder";
pub const ADHD: &str = "Attention-Deficit/Hyperactivity Disorder";
pub const PANIC_DISORDER: &str = "Panic Disorder";
pub const OBSESSIVE_COMPULSIVE_DISORDER: &str = "Obsessive-Compulsive Disorder";

// Built from compile-time data; a validation failure is a bug in this file.
static REFERENCE: LazyLock<KnowledgeBase> = LazyLock::new(|| KnowledgeBase {
    diagnoses: super::DiagnosisCatalog::new(diagnoses(), guidance())
        .unwrap_or_else(|e| panic!("reference knowledge base is invalid: {e}")),
    treatments: treatments(),
    medications: medications(),
});

/// A copy of the reference knowledge base.
pub fn knowledge_base() -> KnowledgeBase {
    REFERENCE.clone()
}

pub fn diagnoses() -> Vec<DiagnosisDefinition> {
    vec![
        diagnosis(
            "296.20",
            MAJOR_DEPRESSIVE_DISORDER,
            &[
                "Depressed mood most of the day, nearly every day",
                "Markedly diminished interest or pleasure in activities",
                "Insomnia or hypersomnia nearly every day",
                "Fatigue or loss of energy",
                "Feelings of worthlessness or excessive guilt",
                "Symptoms persist for at least 2 weeks",
            ],
            &[
                "depression",
                "loss of interest",
                "sleep problems",
                "appetite changes",
                "fatigue",
                "worthlessness",
            ],
        ),
        diagnosis(
            "300.02",
            GENERALIZED_ANXIETY_DISORDER,
            &[
                "Excessive anxiety and worry occurring more days than not for at least 6 months",
                "Difficulty controlling the worry",
                "At least 3 associated symptoms (restlessness, fatigue, poor concentration, irritability, muscle tension, sleep disturbance)",
                "Clinically significant distress or impairment",
            ],
            &[
                "anxiety",
                "worry",
                "restlessness",
                "fatigue",
                "concentration problems",
                "irritability",
                "tension",
                "sleep disturbance",
            ],
        ),
        diagnosis(
            "309.81",
            POSTTRAUMATIC_STRESS_DISORDER,
            &[
                "Exposure to actual or threatened death, serious injury, or sexual violence",
                "Intrusion symptoms associated with the traumatic event",
                "Persistent avoidance of trauma-related stimuli",
                "Marked alterations in arousal and reactivity",
                "Duration of disturbance more than 1 month",
            ],
            &[
                "trauma",
                "flashbacks",
                "nightmares",
                "avoidance",
                "hypervigilance",
                "startle response",
                "emotional numbness",
            ],
        ),
        diagnosis(
            "296.40",
            BIPOLAR_I_DISORDER,
            &[
                "At least one manic episode lasting at least 1 week",
                "Abnormally elevated, expansive, or irritable mood with increased energy",
                "Inflated self-esteem, decreased need for sleep, or racing thoughts during the episode",
                "Not attributable to a substance or another medical condition",
            ],
            &[
                "mania",
                "elevated mood",
                "grandiosity",
                "decreased need for sleep",
                "racing thoughts",
                "impulsivity",
                "depression",
            ],
        ),
        diagnosis(
            "314.01",
            ADHD,
            &[
                "Persistent pattern of inattention and/or hyperactivity-impulsivity",
                "Several symptoms present before age 12",
                "Symptoms present in two or more settings",
                "Clear evidence of interference with functioning",
            ],
            &[
                "inattention",
                "hyperactivity",
                "impulsivity",
                "distractibility",
                "forgetfulness",
                "disorganization",
            ],
        ),
        diagnosis(
            "300.01",
            PANIC_DISORDER,
            &[
                "Recurrent unexpected panic attacks",
                "At least 1 month of persistent concern about additional attacks",
                "Significant maladaptive change in behavior related to the attacks",
            ],
            &[
                "panic attacks",
                "palpitations",
                "shortness of breath",
                "chest pain",
                "fear of dying",
                "dizziness",
                "anticipatory anxiety",
            ],
        ),
        diagnosis(
            "300.3",
            OBSESSIVE_COMPULSIVE_DISORDER,
            &[
                "Presence of obsessions, compulsions, or both",
                "Obsessions or compulsions are time-consuming (more than 1 hour per day)",
                "Clinically significant distress or impairment",
            ],
            &[
                "obsessions",
                "compulsions",
                "intrusive thoughts",
                "checking",
                "contamination fears",
                "repetitive behaviors",
            ],
        ),
    ]
}

/// Differentials and follow-up assessments. Panic disorder deliberately has
/// no entry.
pub fn guidance() -> HashMap<String, DiagnosisGuidance> {
    [
        (
            "296.20",
            &[
                "Persistent Depressive Disorder",
                "Bipolar II Disorder",
                "Adjustment Disorder with Depressed Mood",
            ][..],
            &[
                "PHQ-9",
                "Beck Depression Inventory-II",
                "Columbia Suicide Severity Rating Scale",
            ][..],
        ),
        (
            "300.02",
            &[PANIC_DISORDER, "Social Anxiety Disorder", MAJOR_DEPRESSIVE_DISORDER][..],
            &["GAD-7", "Beck Anxiety Inventory"][..],
        ),
        (
            "309.81",
            &["Acute Stress Disorder", "Adjustment Disorder", MAJOR_DEPRESSIVE_DISORDER][..],
            &["PCL-5", "CAPS-5"][..],
        ),
        (
            "296.40",
            &[
                MAJOR_DEPRESSIVE_DISORDER,
                "Cyclothymic Disorder",
                "Borderline Personality Disorder",
            ][..],
            &["Mood Disorder Questionnaire", "Young Mania Rating Scale"][..],
        ),
        (
            "314.01",
            &[GENERALIZED_ANXIETY_DISORDER, "Specific Learning Disorder"][..],
            &["ASRS v1.1", "Conners Adult ADHD Rating Scales"][..],
        ),
        (
            "300.3",
            &[GENERALIZED_ANXIETY_DISORDER, "Body Dysmorphic Disorder", "Tic Disorder"][..],
            &["Y-BOCS"][..],
        ),
    ]
    .into_iter()
    .map(|(code, differentials, assessments)| {
        (
            code.to_string(),
            DiagnosisGuidance {
                differential_diagnoses: strings(differentials),
                recommended_assessments: strings(assessments),
            },
        )
    })
    .collect()
}

pub fn treatments() -> Vec<TreatmentDefinition> {
    use EvidenceLevel::{A, B, C};

    vec![
        // Major depressive disorder
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Cognitive Behavioral Therapy (CBT)",
            A,
            85,
            &["Temporary emotional discomfort"],
            &[],
            &["PHQ-9 every 2-4 weeks"],
        ),
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Selective Serotonin Reuptake Inhibitors (SSRIs)",
            A,
            80,
            &["Nausea", "Sexual dysfunction", "Insomnia"],
            &["MAOI use", "Linezolid"],
            &["Suicidal ideation during first weeks", "Side effect review at 2 weeks"],
        ),
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Electroconvulsive Therapy (ECT)",
            B,
            82,
            &["Transient memory loss", "Headache"],
            &["Recent myocardial infarction", "Increased intracranial pressure"],
            &["Cognitive function", "Cardiac monitoring during sessions"],
        ),
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Serotonin-Norepinephrine Reuptake Inhibitors (SNRIs)",
            A,
            78,
            &["Nausea", "Elevated blood pressure", "Sweating"],
            &["MAOI use", "Uncontrolled hypertension"],
            &["Blood pressure", "Suicidal ideation during first weeks"],
        ),
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Interpersonal Therapy (IPT)",
            A,
            75,
            &[],
            &[],
            &["PHQ-9 every 4 weeks"],
        ),
        treatment(
            MAJOR_DEPRESSIVE_DISORDER,
            "Bupropion",
            B,
            70,
            &["Insomnia", "Dry mouth", "Lowered seizure threshold"],
            &["Seizure disorder", "Eating disorder", "MAOI use"],
            &["Seizure risk", "Blood pressure"],
        ),
        // Generalized anxiety disorder
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Cognitive Behavioral Therapy (CBT)",
            A,
            80,
            &["Temporary increase in anxiety during exposure"],
            &[],
            &["GAD-7 every 2-4 weeks"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Selective Serotonin Reuptake Inhibitors (SSRIs)",
            A,
            75,
            &["Nausea", "Sexual dysfunction", "Initial jitteriness"],
            &["MAOI use"],
            &["Side effect review at 2 weeks"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Serotonin-Norepinephrine Reuptake Inhibitors (SNRIs)",
            A,
            73,
            &["Nausea", "Elevated blood pressure"],
            &["MAOI use", "Uncontrolled hypertension"],
            &["Blood pressure"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Benzodiazepines (short-term)",
            C,
            70,
            &["Sedation", "Dependence", "Cognitive impairment"],
            &["Substance use disorder", "Opioid use", "Sleep apnea"],
            &["Dependence and tolerance", "Taper plan"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Buspirone",
            B,
            65,
            &["Dizziness", "Headache"],
            &["MAOI use"],
            &["Response at 4-6 weeks"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Mindfulness-Based Stress Reduction",
            B,
            60,
            &[],
            &[],
            &["GAD-7 every 4 weeks"],
        ),
        treatment(
            GENERALIZED_ANXIETY_DISORDER,
            "Applied Relaxation",
            B,
            60,
            &[],
            &[],
            &["GAD-7 every 4 weeks"],
        ),
        // Posttraumatic stress disorder
        treatment(
            POSTTRAUMATIC_STRESS_DISORDER,
            "Prolonged Exposure Therapy",
            A,
            82,
            &["Temporary symptom exacerbation"],
            &["Active psychosis"],
            &["PCL-5 every session block"],
        ),
        treatment(
            POSTTRAUMATIC_STRESS_DISORDER,
            "Cognitive Processing Therapy",
            A,
            80,
            &["Temporary emotional distress"],
            &[],
            &["PCL-5 every session block"],
        ),
        treatment(
            POSTTRAUMATIC_STRESS_DISORDER,
            "Eye Movement Desensitization and Reprocessing (EMDR)",
            A,
            77,
            &["Vivid dreams", "Temporary distress"],
            &["Dissociative disorder"],
            &["Dissociation during sessions"],
        ),
        treatment(
            POSTTRAUMATIC_STRESS_DISORDER,
            "Selective Serotonin Reuptake Inhibitors (SSRIs)",
            B,
            65,
            &["Nausea", "Sexual dysfunction"],
            &["MAOI use"],
            &["Suicidal ideation during first weeks"],
        ),
        treatment(
            POSTTRAUMATIC_STRESS_DISORDER,
            "Prazosin (trauma-related nightmares)",
            C,
            50,
            &["Orthostatic hypotension", "Dizziness"],
            &["Hypotension"],
            &["Blood pressure"],
        ),
        // Bipolar I disorder
        treatment(
            BIPOLAR_I_DISORDER,
            "Lithium",
            A,
            80,
            &["Tremor", "Polyuria", "Weight gain", "Hypothyroidism"],
            &["Severe renal impairment", "Dehydration"],
            &["Serum lithium levels", "Renal function", "Thyroid function"],
        ),
        treatment(
            BIPOLAR_I_DISORDER,
            "Valproate",
            A,
            72,
            &["Weight gain", "Tremor", "Hepatotoxicity"],
            &["Pregnancy", "Liver disease"],
            &["Liver function", "Serum valproate levels", "Platelet count"],
        ),
        treatment(
            BIPOLAR_I_DISORDER,
            "Quetiapine",
            A,
            70,
            &["Sedation", "Weight gain", "Metabolic syndrome"],
            &["QT prolongation"],
            &["Weight and BMI", "Fasting glucose", "Lipid panel"],
        ),
        treatment(
            BIPOLAR_I_DISORDER,
            "Psychoeducation and Family-Focused Therapy",
            B,
            60,
            &[],
            &[],
            &["Relapse warning signs"],
        ),
        // ADHD
        treatment(
            ADHD,
            "Stimulant Medication (methylphenidate)",
            A,
            78,
            &["Decreased appetite", "Insomnia", "Elevated heart rate"],
            &["MAOI use", "Glaucoma", "Cardiac arrhythmia"],
            &["Blood pressure and heart rate", "Weight", "Misuse or diversion"],
        ),
        treatment(
            ADHD,
            "Atomoxetine",
            B,
            65,
            &["Nausea", "Decreased appetite"],
            &["MAOI use", "Narrow-angle glaucoma"],
            &["Suicidal ideation", "Liver function"],
        ),
        treatment(
            ADHD,
            "Behavioral Therapy and Skills Training",
            B,
            60,
            &[],
            &[],
            &["Functional goals review"],
        ),
        // Panic disorder
        treatment(
            PANIC_DISORDER,
            "CBT with Interoceptive Exposure",
            A,
            80,
            &["Temporary increase in panic symptoms"],
            &[],
            &["Panic attack frequency"],
        ),
        treatment(
            PANIC_DISORDER,
            "Selective Serotonin Reuptake Inhibitors (SSRIs)",
            A,
            72,
            &["Initial jitteriness", "Nausea"],
            &["MAOI use"],
            &["Side effect review at 2 weeks"],
        ),
        // Obsessive-compulsive disorder
        treatment(
            OBSESSIVE_COMPULSIVE_DISORDER,
            "Exposure and Response Prevention (ERP)",
            A,
            82,
            &["Temporary anxiety increase"],
            &[],
            &["Y-BOCS every 4 weeks"],
        ),
        treatment(
            OBSESSIVE_COMPULSIVE_DISORDER,
            "High-dose SSRIs",
            A,
            70,
            &["Nausea", "Sexual dysfunction"],
            &["MAOI use"],
            &["Y-BOCS every 4 weeks", "Side effect review"],
        ),
        treatment(
            OBSESSIVE_COMPULSIVE_DISORDER,
            "Clomipramine",
            B,
            65,
            &["Anticholinergic effects", "Sedation", "Weight gain"],
            &["MAOI use", "Recent myocardial infarction"],
            &["ECG", "Serum levels"],
        ),
    ]
}

pub fn medications() -> Vec<MedicationReference> {
    vec![
        medication(
            "sertraline",
            "Sertraline",
            "SSRI",
            &["MAOI", "phenelzine", "tranylcypromine", "tramadol", "linezolid", "warfarin"],
            &["Nausea", "Sexual dysfunction", "Insomnia"],
            &["MAOI use"],
        ),
        medication(
            "fluoxetine",
            "Fluoxetine",
            "SSRI",
            &["MAOI", "phenelzine", "tramadol", "thioridazine", "warfarin"],
            &["Nausea", "Anxiety", "Insomnia"],
            &["MAOI use", "Thioridazine use"],
        ),
        medication(
            "escitalopram",
            "Escitalopram",
            "SSRI",
            &["MAOI", "phenelzine", "pimozide", "tramadol"],
            &["Nausea", "Sexual dysfunction"],
            &["MAOI use", "Pimozide use"],
        ),
        medication(
            "venlafaxine",
            "Venlafaxine",
            "SNRI",
            &["MAOI", "phenelzine", "tramadol", "linezolid"],
            &["Nausea", "Elevated blood pressure", "Sweating"],
            &["MAOI use", "Uncontrolled hypertension"],
        ),
        medication(
            "phenelzine",
            "Phenelzine",
            "MAOI",
            &[
                "sertraline",
                "fluoxetine",
                "escitalopram",
                "venlafaxine",
                "bupropion",
                "tramadol",
                "pseudoephedrine",
            ],
            &["Orthostatic hypotension", "Weight gain"],
            &["Pheochromocytoma", "Tyramine-rich diet"],
        ),
        medication(
            "lithium",
            "Lithium",
            "Mood stabilizer",
            &["ibuprofen", "naproxen", "lisinopril", "hydrochlorothiazide"],
            &["Tremor", "Polyuria", "Hypothyroidism"],
            &["Severe renal impairment", "Dehydration"],
        ),
        medication(
            "alprazolam",
            "Alprazolam",
            "Benzodiazepine",
            &["opioid", "oxycodone", "hydrocodone", "alcohol", "ketoconazole"],
            &["Sedation", "Dependence"],
            &["Sleep apnea", "Substance use disorder"],
        ),
        medication(
            "bupropion",
            "Bupropion",
            "NDRI",
            &["MAOI", "phenelzine", "tamoxifen"],
            &["Insomnia", "Dry mouth"],
            &["Seizure disorder", "Eating disorder"],
        ),
        medication(
            "quetiapine",
            "Quetiapine",
            "Atypical antipsychotic",
            &["ketoconazole", "carbamazepine"],
            &["Sedation", "Weight gain"],
            &["QT prolongation"],
        ),
        medication(
            "tramadol",
            "Tramadol",
            "Opioid analgesic",
            &["sertraline", "fluoxetine", "escitalopram", "venlafaxine", "phenelzine"],
            &["Nausea", "Dizziness", "Seizures"],
            &["Seizure disorder"],
        ),
    ]
}

fn diagnosis(code: &str, name: &str, criteria: &[&str], keywords: &[&str]) -> DiagnosisDefinition {
    DiagnosisDefinition {
        code: code.to_string(),
        name: name.to_string(),
        criteria: strings(criteria),
        symptom_keywords: strings(keywords),
    }
}

fn treatment(
    diagnosis_name: &str,
    name: &str,
    evidence_level: EvidenceLevel,
    effectiveness: u8,
    side_effects: &[&str],
    contraindications: &[&str],
    monitoring: &[&str],
) -> TreatmentDefinition {
    TreatmentDefinition {
        diagnosis_name: diagnosis_name.to_string(),
        treatment: name.to_string(),
        evidence_level,
        effectiveness,
        side_effects: set(side_effects),
        contraindications: set(contraindications),
        monitoring: set(monitoring),
    }
}

fn medication(
    key: &str,
    display_name: &str,
    drug_class: &str,
    interactions: &[&str],
    side_effects: &[&str],
    contraindications: &[&str],
) -> MedicationReference {
    MedicationReference {
        key: key.to_string(),
        display_name: display_name.to_string(),
        drug_class: drug_class.to_string(),
        known_interactions: set(interactions),
        side_effects: set(side_effects),
        contraindications: set(contraindications),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
