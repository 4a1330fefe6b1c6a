/// Fixed description of one health service: what it is called and where it
/// listens. Ports are baked in at build time; nothing is read from the
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Binary / log name, e.g. `catalog-service`.
    pub name: &'static str,
    /// Human label used in the startup line.
    pub title: &'static str,
    /// `[::]` listens on every interface, IPv6 and (dual-stack) IPv4.
    pub host: &'static str,
    pub port: u16,
}

impl ServiceConfig {
    pub const CATALOG: Self = Self {
        name: "catalog-service",
        title: "Catalog",
        host: "[::]",
        port: 8006,
    };

    pub const INVENTORY: Self = Self {
        name: "inventory-service",
        title: "Inventory",
        host: "[::]",
        port: 8004,
    };

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
