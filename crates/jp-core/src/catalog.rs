//! Market catalog: the option lists the onboarding wizard offers.
//!
//! Literal records standing in for a future offers API. Never mutated.

use serde::Serialize;

/// A selectable search zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityOption {
    pub emoji: &'static str,
    pub city: &'static str,
    /// None for the catch-all "other" entry.
    pub open_jobs: Option<u32>,
}

/// A selectable contract style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractOption {
    pub label: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
    pub badge: &'static str,
}

/// A suggested profession with market numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfessionSuggestion {
    pub role: &'static str,
    pub open_jobs: u32,
    /// e.g. "48K€"; None for the business roles the source does not price.
    pub average_salary: Option<&'static str>,
}

/// A job board the product can automate applications through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobBoard {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

pub const CITIES: &[CityOption] = &[
    CityOption { emoji: "🔥", city: "Paris", open_jobs: Some(1247) },
    CityOption { emoji: "🦁", city: "Lyon", open_jobs: Some(456) },
    CityOption { emoji: "☀️", city: "Marseille", open_jobs: Some(334) },
    CityOption { emoji: "🍺", city: "Lille", open_jobs: Some(189) },
    CityOption { emoji: "🌸", city: "Toulouse", open_jobs: Some(267) },
    CityOption { emoji: "🏰", city: "Nantes", open_jobs: Some(156) },
    CityOption { emoji: "🍷", city: "Bordeaux", open_jobs: Some(198) },
    CityOption { emoji: "📍", city: "Autre région", open_jobs: None },
];

pub const CONTRACTS: &[ContractOption] = &[
    ContractOption {
        label: "CDI",
        description: "La sécurité avant tout",
        stats: "987 postes à Paris",
        badge: "🏆 Notre recommandation",
    },
    ContractOption {
        label: "CDI + missions longues",
        description: "Plus de choix",
        stats: "+234 opportunités",
        badge: "Flexibilité garantie",
    },
    ContractOption {
        label: "Tout prendre",
        description: "Mode opportuniste",
        stats: "+123 missions courtes",
        badge: "Maximum d'options",
    },
    ContractOption {
        label: "Freelance",
        description: "Je gère ma vie",
        stats: "89 missions actives",
        badge: "Liberté totale",
    },
];

pub const TECH_PROFESSIONS: &[ProfessionSuggestion] = &[
    ProfessionSuggestion { role: "Dev Frontend", open_jobs: 89, average_salary: Some("48K€") },
    ProfessionSuggestion { role: "Dev Backend", open_jobs: 76, average_salary: Some("52K€") },
    ProfessionSuggestion { role: "Full Stack", open_jobs: 54, average_salary: Some("50K€") },
    ProfessionSuggestion { role: "DevOps", open_jobs: 43, average_salary: Some("55K€") },
    ProfessionSuggestion { role: "Data Scientist", open_jobs: 31, average_salary: Some("58K€") },
];

pub const BUSINESS_PROFESSIONS: &[ProfessionSuggestion] = &[
    ProfessionSuggestion { role: "Commercial", open_jobs: 198, average_salary: None },
    ProfessionSuggestion { role: "Chef de projet", open_jobs: 76, average_salary: None },
    ProfessionSuggestion { role: "Marketing", open_jobs: 87, average_salary: None },
    ProfessionSuggestion { role: "RH", open_jobs: 45, average_salary: None },
];

pub const JOB_BOARDS: &[JobBoard] = &[
    JobBoard {
        name: "PÔLE EMPLOI",
        icon: "🏛️",
        description: "On en a besoin !",
        stats: "78% des offres passent par là",
    },
    JobBoard {
        name: "APEC",
        icon: "💼",
        description: "Pour les postes de cadre",
        stats: "+15% d'opportunités",
    },
    JobBoard {
        name: "HELLOWORK",
        icon: "👋",
        description: "Startups et PME sympa",
        stats: "+12% de jobs cools",
    },
];
