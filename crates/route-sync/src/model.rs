//! Platform-side route records
//!
//! Read-only snapshots handed to the reconciler by the platform. The
//! reconciler never mutates or persists these; they exist only to compute
//! desired cluster state.

/// Port presented for mappings created without an explicit one
pub const DEFAULT_APP_PORT: u32 = 8080;

/// A platform route: host + path on a domain, owned by a space
#[derive(Debug, Clone)]
pub struct Route {
    pub guid: String,
    pub host: String,
    /// Empty string when the route has no path
    pub path: String,
    pub domain: Domain,
    pub space: Space,
    /// Mappings in platform order; drives destination order
    pub mappings: Vec<RouteMapping>,
}

impl Route {
    /// Fully-qualified domain name. Hostless routes resolve to the bare
    /// domain, with no leading dot.
    pub fn fqdn(&self) -> String {
        if self.host.is_empty() {
            self.domain.name.clone()
        } else {
            format!("{}.{}", self.host, self.domain.name)
        }
    }

    /// The route's URL: fqdn followed by the path
    pub fn url(&self) -> String {
        format!("{}{}", self.fqdn(), self.path)
    }
}

#[derive(Debug, Clone)]
pub struct Domain {
    pub guid: String,
    pub name: String,
    pub internal: bool,
}

#[derive(Debug, Clone)]
pub struct Space {
    pub guid: String,
    pub organization_guid: String,
}

/// Binds a route to one process of one application
#[derive(Debug, Clone)]
pub struct RouteMapping {
    pub guid: String,
    pub app_guid: String,
    pub process_type: String,
    /// Explicitly exposed port, if the mapping set one
    pub app_port: Option<u32>,
    /// Traffic weight; absent and zero are distinct states
    pub weight: Option<u32>,
}

impl RouteMapping {
    /// The port the destination presents: the explicit port when set,
    /// otherwise the platform default.
    pub fn presented_port(&self) -> u32 {
        self.app_port.unwrap_or(DEFAULT_APP_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_with_host(host: &str, path: &str) -> Route {
        Route {
            guid: "route-guid".to_string(),
            host: host.to_string(),
            path: path.to_string(),
            domain: Domain {
                guid: "domain-guid".to_string(),
                name: "example.com".to_string(),
                internal: false,
            },
            space: Space {
                guid: "space-guid".to_string(),
                organization_guid: "org-guid".to_string(),
            },
            mappings: vec![],
        }
    }

    #[test]
    fn test_fqdn_with_host() {
        let route = route_with_host("myapp", "/api");
        assert_eq!(route.fqdn(), "myapp.example.com");
    }

    #[test]
    fn test_fqdn_without_host() {
        let route = route_with_host("", "");
        assert_eq!(route.fqdn(), "example.com");
    }

    #[test]
    fn test_url_concatenates_fqdn_and_path() {
        let route = route_with_host("myapp", "/api");
        assert_eq!(route.url(), "myapp.example.com/api");
    }

    #[test]
    fn test_url_without_path() {
        let route = route_with_host("myapp", "");
        assert_eq!(route.url(), "myapp.example.com");
    }

    #[test]
    fn test_presented_port_explicit() {
        let mapping = RouteMapping {
            guid: "mapping-guid".to_string(),
            app_guid: "app-guid".to_string(),
            process_type: "web".to_string(),
            app_port: Some(9000),
            weight: None,
        };
        assert_eq!(mapping.presented_port(), 9000);
    }

    #[test]
    fn test_presented_port_default() {
        let mapping = RouteMapping {
            guid: "mapping-guid".to_string(),
            app_guid: "app-guid".to_string(),
            process_type: "web".to_string(),
            app_port: None,
            weight: None,
        };
        assert_eq!(mapping.presented_port(), DEFAULT_APP_PORT);
    }
}
