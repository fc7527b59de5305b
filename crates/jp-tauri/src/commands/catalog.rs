//! Market catalog command.

use jp_core::catalog::{
    CityOption, ContractOption, JobBoard, ProfessionSuggestion, BUSINESS_PROFESSIONS, CITIES,
    CONTRACTS, JOB_BOARDS, TECH_PROFESSIONS,
};

/// The option lists the wizard steps render.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OnboardingCatalogDto {
    pub cities: &'static [CityOption],
    pub contracts: &'static [ContractOption],
    pub tech_professions: &'static [ProfessionSuggestion],
    pub business_professions: &'static [ProfessionSuggestion],
    pub job_boards: &'static [JobBoard],
}

/// Static data: no runtime lookup, no failure path.
#[tauri::command]
pub fn get_onboarding_catalog() -> OnboardingCatalogDto {
    OnboardingCatalogDto {
        cities: CITIES,
        contracts: CONTRACTS,
        tech_professions: TECH_PROFESSIONS,
        business_professions: BUSINESS_PROFESSIONS,
        job_boards: JOB_BOARDS,
    }
}
