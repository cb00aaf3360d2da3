//! Route table.
//!
//! Declarative module/routing glue: which page is reachable at which path
//! and whether it sits behind the authenticated admin shell.

/// Pages the front-end can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Admin,
    PerfilUsuario,
    AcidentesTransito,
    CadastroAcidenteTransito,
    Graficos,
}

/// One routing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
    pub auth_required: bool,
}

/// Full routing table of the admin front-end.
pub const ROUTES: &[Route] = &[
    Route {
        path: "admin",
        page: PageId::Admin,
        auth_required: true,
    },
    Route {
        path: "admin/perfil",
        page: PageId::PerfilUsuario,
        auth_required: true,
    },
    Route {
        path: "admin/acidentes-de-transito",
        page: PageId::AcidentesTransito,
        auth_required: true,
    },
    Route {
        path: "admin/acidentes-de-transito/cadastro",
        page: PageId::CadastroAcidenteTransito,
        auth_required: true,
    },
    Route {
        path: "graficos",
        page: PageId::Graficos,
        auth_required: false,
    },
];

/// Resolve a path (leading/trailing slashes ignored) to its route.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = path.trim_matches('/');
    ROUTES.iter().find(|route| route.path == path)
}
