use serde::{Deserialize, Serialize};

/// Модель развертывания готовой сборки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentModel {
    Cloud,
    Hybrid,
    OnPremise,
}

impl DeploymentModel {
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentModel::Cloud => "Cloud",
            DeploymentModel::Hybrid => "Hybrid",
            DeploymentModel::OnPremise => "On-Premise",
        }
    }

    pub fn all() -> Vec<DeploymentModel> {
        vec![
            DeploymentModel::Cloud,
            DeploymentModel::Hybrid,
            DeploymentModel::OnPremise,
        ]
    }
}

impl std::fmt::Display for DeploymentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
