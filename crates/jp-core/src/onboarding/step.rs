//! The fixed, ordered onboarding step list.
//!
//! One declarative table drives the whole wizard: step → prompt copy →
//! requirement. Rendering reads the table; validation reads the same
//! table. Adding a step means adding a row, nowhere else.

use serde::{Deserialize, Serialize};

use crate::onboarding::flow::StepRequirement;

/// A single step of the onboarding wizard, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Location,
    ContractType,
    Profession,
    SalaryRange,
    AccountLinking,
    ProfileAnalysis,
    AccountCreation,
}

impl OnboardingStep {
    /// Canonical step order; the flow cursor indexes into this slice.
    pub const ALL: &'static [OnboardingStep] = &[
        OnboardingStep::Location,
        OnboardingStep::ContractType,
        OnboardingStep::Profession,
        OnboardingStep::SalaryRange,
        OnboardingStep::AccountLinking,
        OnboardingStep::ProfileAnalysis,
        OnboardingStep::AccountCreation,
    ];

    pub fn definition(self) -> &'static StepDefinition {
        &STEP_DEFINITIONS[self as usize]
    }
}

/// Declarative per-step record: prompt copy and the requirement gating
/// forward navigation out of the step (None = unconditionally passable).
#[derive(Debug, Clone, Serialize)]
pub struct StepDefinition {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(skip)]
    pub requirement: Option<StepRequirement>,
}

const STEP_DEFINITIONS: &[StepDefinition] = &[
    StepDefinition {
        step: OnboardingStep::Location,
        title: "👋 Salut ! On commence ?",
        subtitle: "🏠 Tu cherches du boulot dans quelle zone ?",
        requirement: Some(StepRequirement::LocationMissing),
    },
    StepDefinition {
        step: OnboardingStep::ContractType,
        title: "💼 Quel style de job tu veux ?",
        subtitle: "Choisis le type de contrat qui te convient",
        requirement: Some(StepRequirement::JobTypeMissing),
    },
    StepDefinition {
        step: OnboardingStep::Profession,
        title: "🎯 Alors, c'est quoi ton métier ?",
        subtitle: "Dis-nous ce que tu recherches",
        requirement: Some(StepRequirement::ProfessionMissing),
    },
    StepDefinition {
        step: OnboardingStep::SalaryRange,
        title: "💰 Parlons salaire ! Tes attentes ?",
        subtitle: "Aide-nous à cibler les bonnes offres",
        requirement: Some(StepRequirement::SalaryNotPositive),
    },
    StepDefinition {
        step: OnboardingStep::AccountLinking,
        title: "🔗 Allez, on connecte tes comptes job ?",
        subtitle: "Pour automatiser tes candidatures",
        requirement: Some(StepRequirement::CvMissing),
    },
    StepDefinition {
        step: OnboardingStep::ProfileAnalysis,
        title: "🤖 Notre IA analyse tes profils...",
        subtitle: "On bosse pour toi !",
        requirement: None,
    },
    StepDefinition {
        step: OnboardingStep::AccountCreation,
        title: "🎉 Dernière étape ! Ton profil est au top",
        subtitle: "Crée ton compte pour commencer",
        requirement: None,
    },
];
