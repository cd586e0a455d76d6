use super::dto::BlueprintDetail;
use super::generator::{detail_from_build, detail_from_spec};
use super::hand_authored::hand_authored_details;
use crate::domain::a001_solution_spec::{solution_specs, SolutionSpec};
use crate::domain::a002_solution_build::{solution_builds, SolutionBuild};
use crate::shared::catalog::find_by_id;

/// Поиск детальной карточки в статических каталогах приложения
pub fn get_blueprint_detail(id: &str) -> Option<BlueprintDetail> {
    resolve_blueprint_detail(id, hand_authored_details(), solution_specs(), solution_builds())
}

/// Разрешение по явно переданным каталогам: ручная запись → spec → build → `None`
pub fn resolve_blueprint_detail(
    id: &str,
    hand_authored: &[BlueprintDetail],
    specs: &[SolutionSpec],
    builds: &[SolutionBuild],
) -> Option<BlueprintDetail> {
    if let Some(detail) = hand_authored.iter().find(|d| d.id == id) {
        return Some(detail.clone());
    }
    if let Some(spec) = find_by_id(specs, id) {
        return Some(detail_from_spec(spec));
    }
    find_by_id(builds, id).map(detail_from_build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p100_blueprint_detail::DetailSource;

    #[test]
    fn test_hand_authored_wins_over_generated() {
        assert!(solution_specs().iter().any(|s| s.id == "ss-001"));
        let detail = get_blueprint_detail("ss-001").unwrap();
        assert_eq!(detail.source, DetailSource::HandAuthored);
    }

    #[test]
    fn test_falls_back_to_spec_then_build() {
        assert_eq!(
            get_blueprint_detail("ss-002").map(|d| d.source),
            Some(DetailSource::GeneratedFromSpec)
        );
        assert_eq!(
            get_blueprint_detail("sb-003").map(|d| d.source),
            Some(DetailSource::GeneratedFromBuild)
        );
    }

    #[test]
    fn test_spec_checked_before_build() {
        let spec = solution_specs()[2].clone();
        let mut build = solution_builds()[0].clone();
        let id = spec.id.clone();
        build.id = id.clone();
        let detail = resolve_blueprint_detail(&id, &[], &[spec], &[build]).unwrap();
        assert_eq!(detail.source, DetailSource::GeneratedFromSpec);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(get_blueprint_detail("does-not-exist").is_none());
        assert!(resolve_blueprint_detail("ss-001", &[], &[], &[]).is_none());
    }
}
