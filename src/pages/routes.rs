//! Route table
//!
//! Maps navigable paths to pages. The TUI navigates by route string
//! ("/git_repo?name=repo&clusterName=prod") so every detail page goes
//! through parameter resolution, exactly like a browser router would.

use crate::models::ResourceKind;

/// All navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Automations,
    Sources,
    GitRepo,
    HelmRepo,
    Bucket,
    HelmChart,
    HelmRelease,
    Kustomization,
    OciRepo,
    FluxRuntime,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Automations => "/applications",
            Route::Sources => "/sources",
            Route::GitRepo => "/git_repo",
            Route::HelmRepo => "/helm_repo",
            Route::Bucket => "/bucket",
            Route::HelmChart => "/helm_chart",
            Route::HelmRelease => "/helm_release",
            Route::Kustomization => "/kustomization",
            Route::OciRepo => "/oci_repo",
            Route::FluxRuntime => "/flux_runtime",
            Route::NotFound => "/not_found",
        }
    }

    /// Resolve a path (query string allowed and ignored) to a route.
    /// "/" redirects to the automations page; anything unknown lands on
    /// the not-found page rather than failing.
    pub fn parse(path: &str) -> Route {
        let path = path.split('?').next().unwrap_or(path);
        match path {
            "/" | "/applications" => Route::Automations,
            "/sources" => Route::Sources,
            "/git_repo" => Route::GitRepo,
            "/helm_repo" => Route::HelmRepo,
            "/bucket" => Route::Bucket,
            "/helm_chart" => Route::HelmChart,
            "/helm_release" => Route::HelmRelease,
            "/kustomization" => Route::Kustomization,
            "/oci_repo" => Route::OciRepo,
            "/flux_runtime" => Route::FluxRuntime,
            _ => Route::NotFound,
        }
    }

    /// The resource kind behind a detail route, if this is one.
    pub fn detail_kind(&self) -> Option<ResourceKind> {
        match self {
            Route::GitRepo => Some(ResourceKind::GitRepository),
            Route::HelmRepo => Some(ResourceKind::HelmRepository),
            Route::Bucket => Some(ResourceKind::Bucket),
            Route::HelmChart => Some(ResourceKind::HelmChart),
            Route::HelmRelease => Some(ResourceKind::HelmRelease),
            Route::Kustomization => Some(ResourceKind::Kustomization),
            Route::OciRepo => Some(ResourceKind::OCIRepository),
            _ => None,
        }
    }

    /// The list page that owns a kind's detail page. Esc from a detail
    /// opened by deep link returns here.
    pub fn list_for_kind(kind: ResourceKind) -> Route {
        if ResourceKind::automations().contains(&kind) {
            Route::Automations
        } else {
            Route::Sources
        }
    }

    /// The detail route for a resource kind.
    pub fn for_kind(kind: ResourceKind) -> Route {
        match kind {
            ResourceKind::GitRepository => Route::GitRepo,
            ResourceKind::HelmRepository => Route::HelmRepo,
            ResourceKind::Bucket => Route::Bucket,
            ResourceKind::HelmChart => Route::HelmChart,
            ResourceKind::HelmRelease => Route::HelmRelease,
            ResourceKind::Kustomization => Route::Kustomization,
            ResourceKind::OCIRepository => Route::OciRepo,
        }
    }
}
