//! Target file list.
//!
//! The page files that rendered the component themselves before it moved into
//! the global layout, relative to the project root.

use std::path::{Path, PathBuf};

/// Files processed when no explicit list is given, in processing order.
pub const DEFAULT_TARGETS: &[&str] = &[
    "app/pret-etudiant/page.tsx",
    "app/taux-horaire/page.tsx",
    "app/taxe-de-bienvenue/page.tsx",
    "app/paie-vacances/page.tsx",
    "app/tps-tvq-quebec/page.tsx",
    "app/pret-auto/page.tsx",
    "app/louer-ou-acheter/page.tsx",
    "app/salaire-net-quebec/page.tsx",
    "app/frais-de-garde/page.tsx",
    "app/interets-composes/page.tsx",
    "app/declaration-simplifiee/DeclarationSimplifieeClient.tsx",
    "app/dettes-credit/page.tsx",
    "app/epargne-retraite/page.tsx",
    "app/confidentialite/page.tsx",
    "app/capacite-emprunt/page.tsx",
    "app/assurance-emploi/page.tsx",
    "app/augmentation-loyer-2026/page.tsx",
    "app/calcul-hypotheque/page.tsx",
    "app/allocations-familiales/page.tsx",
    "app/auto-electrique-vs-essence/page.tsx",
    "app/a-propos/page.tsx",
    "app/salaire-net-quebec/[salary]/page.tsx",
];

/// Resolves the target list against `root`.
///
/// Uses `files` when non-empty, otherwise [`DEFAULT_TARGETS`]. Order is kept.
/// Absolute entries in `files` are left as they are.
pub fn resolve(root: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    if files.is_empty() {
        DEFAULT_TARGETS.iter().map(|p| root.join(p)).collect()
    } else {
        files.iter().map(|p| root.join(p)).collect()
    }
}
