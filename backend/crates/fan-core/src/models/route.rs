//! Navigation targets of the fan portal.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Registration,
    Dashboard,
    About,
    Profile,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Registration => "/registro",
            Self::Dashboard => "/painel",
            Self::About => "/sobre",
            Self::Profile => "/perfil",
            Self::NotFound => "/404",
        }
    }

    /// Pages that read the stored record and send the visitor back to the
    /// wizard when there is none.
    pub fn requires_record(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Profile)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
